use std::collections::BTreeSet;
use std::fmt;

use crate::Cell;

/// Logical statement about a Minesweeper game: exactly `count` of `cells` are
/// mines.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Sentence {
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Sentence {
        Sentence {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every cell is a mine when the count covers the whole set.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.count == self.cells.len() {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Every cell is safe when the count is zero.
    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Accounts for `cell` being a mine: it leaves the set and takes one mine
    /// of the count with it.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = match self.count.checked_sub(1) {
                Some(count) => count,
                None => {
                    tracing::warn!("{:?} marked as a mine in a sentence with no mines left", cell);
                    0
                }
            };
        }
    }

    /// Accounts for `cell` being safe. The count is unchanged.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Subset resolution: if `other` covers a strict subset of our cells, the
    /// cells only we cover hold exactly the difference of the two counts.
    pub fn subtract(&self, other: &Sentence) -> Option<Sentence> {
        if other.cells.len() >= self.cells.len() || !other.cells.is_subset(&self.cells) {
            return None;
        }

        match self.count.checked_sub(other.count) {
            Some(count) => Some(Sentence {
                cells: self.cells.difference(&other.cells).copied().collect(),
                count,
            }),
            None => {
                tracing::warn!("cannot resolve {} against {}: negative count", self, other);
                None
            }
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} = {}", self.cells, self.count)
    }
}
