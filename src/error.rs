//! Error types for the knowledge engine and the board.

use crate::Cell;

/// Errors surfaced by [`crate::KnowledgeEngine`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    #[error("cell {cell:?} is outside the {height}x{width} board")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("cell {cell:?} cannot have {count} neighbouring mines")]
    CountTooLarge { cell: Cell, count: usize },

    #[error("knowledge base is inconsistent: no mine layout satisfies every sentence")]
    Inconsistent,

    #[error("SAT solver failed: {0}")]
    Solver(String),
}

/// Errors surfaced while building a [`crate::Board`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cannot place {mines} mines on a board with {cells} cells")]
    TooManyMines { mines: usize, cells: usize },

    #[error("a {height}x{width} board has more cells than can be addressed")]
    TooLarge { height: usize, width: usize },

    #[error("invalid square label: {0}")]
    InvalidSquare(String),

    #[error("row {row} has {found} squares, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("board layout is empty")]
    Empty,
}
