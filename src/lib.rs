//! An automated Minesweeper player that reasons with propositional sentences.
//!
//! The [`KnowledgeEngine`] never looks at the mine layout. It is fed one
//! observation per revealed cell, "`count` of my neighbours are mines", and
//! deduces from those which cells are certainly safe and which are certainly
//! mines.

pub mod board;
pub mod config;
mod consistency;
pub mod error;
pub mod game;
pub mod knowledge;
pub mod sentence;

#[cfg(test)]
mod test;

pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardError, KnowledgeError};
pub use game::{Game, MoveKind, Outcome, Turn};
pub use knowledge::KnowledgeEngine;
pub use sentence::Sentence;

pub type Row = usize;
pub type Col = usize;

/// A board position.
pub type Cell = (Row, Col);

/// Largest number of neighbours a cell can have.
pub const MAX_NEIGHBOURS: usize = 8;

/// Cells within one row and column of `cell` that lie on a `height` x `width`
/// board, not including `cell` itself.
pub fn neighbours(cell: Cell, height: usize, width: usize) -> impl Iterator<Item = Cell> {
    let (row, col) = cell;
    let rows = row.saturating_sub(1)..=(row + 1).min(height.saturating_sub(1));
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(width.saturating_sub(1));
        cols.map(move |c| (r, c))
    })
    .filter(move |&candidate| candidate != cell && candidate.0 < height && candidate.1 < width)
}
