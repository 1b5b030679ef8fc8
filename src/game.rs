//! The loop that lets a [`KnowledgeEngine`] play against a [`Board`].

use rand::Rng;

use crate::board::Board;
use crate::error::KnowledgeError;
use crate::knowledge::KnowledgeEngine;
use crate::Cell;

/// How the player picked a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// The cell was proven safe.
    Safe,

    /// Nothing was proven safe, so the cell was a guess.
    Random,
}

/// What happened during one turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub cell: Cell,
    pub kind: MoveKind,
    /// Neighbouring mine count, `None` if the cell was a mine.
    pub nearby_mines: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost(Cell),
    /// Every cell left is a known mine or has been played, yet the board is
    /// not won.
    Stuck,
}

pub struct Game<R> {
    board: Board,
    engine: KnowledgeEngine,
    rng: R,
    verify: bool,
    lost: Option<Cell>,
}

impl<R: Rng> Game<R> {
    pub fn new(board: Board, rng: R) -> Game<R> {
        let engine = KnowledgeEngine::new(board.height(), board.width());
        Game {
            board,
            engine,
            rng,
            verify: false,
            lost: None,
        }
    }

    /// Check the knowledge base with the SAT solver after every observation.
    pub fn with_verification(mut self, verify: bool) -> Game<R> {
        self.verify = verify;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &KnowledgeEngine {
        &self.engine
    }

    /// The outcome, once the game is over.
    ///
    /// A board without mines is won before the first move: there is nothing
    /// left to flag.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(cell) = self.lost {
            Some(Outcome::Lost(cell))
        } else if self.board.won(self.engine.mines())
            || self.board.is_cleared(self.engine.moves_made())
        {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    /// Plays one move: a safe one if the engine knows any, a random one
    /// otherwise. Returns `None` when there is nothing left to play.
    pub fn step(&mut self) -> Result<Option<Turn>, KnowledgeError> {
        if self.outcome().is_some() {
            return Ok(None);
        }

        let (cell, kind) = match self.engine.query_safe_move(&mut self.rng) {
            Some(cell) => (cell, MoveKind::Safe),
            None => match self.engine.query_random_move(&mut self.rng) {
                Some(cell) => (cell, MoveKind::Random),
                None => return Ok(None),
            },
        };
        tracing::debug!("{:?} move at {:?}", kind, cell);

        if self.board.is_mine(cell) {
            tracing::info!("hit a mine at {:?}", cell);
            self.lost = Some(cell);
            return Ok(Some(Turn {
                cell,
                kind,
                nearby_mines: None,
            }));
        }

        let count = self.board.nearby_mines(cell);
        self.engine.observe(cell, count)?;
        if self.verify {
            self.engine.check_consistency()?;
        }

        Ok(Some(Turn {
            cell,
            kind,
            nearby_mines: Some(count),
        }))
    }

    /// Plays until the game is won, lost, or no move is left.
    pub fn play(&mut self) -> Result<Outcome, KnowledgeError> {
        while self.step()?.is_some() {}

        let outcome = self.outcome().unwrap_or(Outcome::Stuck);
        tracing::info!(
            "game over: {:?} after {} moves, {} mines flagged",
            outcome,
            self.engine.moves_made().len(),
            self.engine.mines().len()
        );
        Ok(outcome)
    }
}
