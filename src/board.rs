//! The world the player reasons about: where the mines actually are.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::BoardError;
use crate::{neighbours, Cell};

/// A square of a board layout written as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Square {
    /// Mine cell
    Mine,

    /// Mine-free cell
    Clear,
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Square, BoardError> {
        match s {
            "*" => Ok(Square::Mine),
            "_" => Ok(Square::Clear),
            _ => Err(BoardError::InvalidSquare(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    mines: BTreeSet<Cell>,
}

impl Board {
    /// Places `mines` mines uniformly at random.
    pub fn generate<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Board, BoardError> {
        let cells = height
            .checked_mul(width)
            .ok_or(BoardError::TooLarge { height, width })?;
        if mines > cells {
            return Err(BoardError::TooManyMines { mines, cells });
        }

        let mines = (0..cells)
            .choose_multiple(rng, mines)
            .into_iter()
            .map(|index| (index / width, index % width))
            .collect();

        Ok(Board {
            height,
            width,
            mines,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Number of mines within one row and column of `cell`, not including
    /// the cell itself.
    pub fn nearby_mines(&self, cell: Cell) -> usize {
        neighbours(cell, self.height, self.width)
            .filter(|neighbour| self.is_mine(*neighbour))
            .count()
    }

    /// All mines have been flagged, and nothing else.
    pub fn won(&self, flagged: &BTreeSet<Cell>) -> bool {
        *flagged == self.mines
    }

    /// Every mine-free cell has been revealed.
    pub fn is_cleared(&self, revealed: &BTreeSet<Cell>) -> bool {
        let safe_cells = self.height * self.width - self.mines.len();
        revealed.iter().filter(|cell| !self.is_mine(**cell)).count() == safe_cells
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses whitespace-separated rows of `*` (mine) and `_` (clear).
    fn from_str(raw: &str) -> Result<Board, BoardError> {
        let rows = raw
            .trim()
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|square| square.parse::<Square>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(BoardError::Empty),
        };

        let mut mines = BTreeSet::new();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected: width,
                });
            }
            for (j, square) in row.iter().enumerate() {
                if *square == Square::Mine {
                    mines.insert((i, j));
                }
            }
        }

        Ok(Board {
            height: rows.len(),
            width,
            mines,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "--".repeat(self.width) + "-";
        for i in 0..self.height {
            writeln!(f, "{}", separator)?;
            for j in 0..self.width {
                if self.is_mine((i, j)) {
                    write!(f, "|X")?;
                } else {
                    write!(f, "| ")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", separator)
    }
}
