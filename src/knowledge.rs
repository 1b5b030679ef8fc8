use std::collections::BTreeSet;

use datafrog::Iteration;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::consistency;
use crate::error::KnowledgeError;
use crate::sentence::Sentence;
use crate::{neighbours, Cell, MAX_NEIGHBOURS};

/// A proven fact about a single cell.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, PartialEq, Eq)]
enum Verdict {
    Safe,
    Mine,
}

/// The automated player's reasoning core.
///
/// Knowledge only ever grows: a cell that made it into `safes` or `mines`
/// stays there for the rest of the game, and the two sets never overlap.
#[derive(Clone, Debug)]
pub struct KnowledgeEngine {
    height: usize,
    width: usize,
    moves_made: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    mines: BTreeSet<Cell>,
    knowledge: Vec<Sentence>,
}

impl KnowledgeEngine {
    pub fn new(height: usize, width: usize) -> KnowledgeEngine {
        KnowledgeEngine {
            height,
            width,
            moves_made: BTreeSet::new(),
            safes: BTreeSet::new(),
            mines: BTreeSet::new(),
            knowledge: vec![],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    pub fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.height && cell.1 < self.width
    }

    /// Records `cell` as a mine and removes it from every sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.safes.contains(&cell) {
            tracing::warn!("{:?} is already known to be safe, refusing to mark it as a mine", cell);
            return;
        }
        if self.mines.insert(cell) {
            tracing::debug!("mine found at {:?}", cell);
        }
        for sentence in self.knowledge.iter_mut() {
            sentence.mark_mine(cell);
        }
    }

    /// Records `cell` as safe and removes it from every sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        if self.mines.contains(&cell) {
            tracing::warn!("{:?} is already known to be a mine, refusing to mark it as safe", cell);
            return;
        }
        if self.safes.insert(cell) {
            tracing::debug!("safe cell found at {:?}", cell);
        }
        for sentence in self.knowledge.iter_mut() {
            sentence.mark_safe(cell);
        }
    }

    /// Called when the board reveals `cell` and reports that `count` of its
    /// neighbours are mines.
    ///
    /// Records the move, adds a sentence over the neighbours that have not
    /// been played yet, and then runs the same inference as [`add_sentence`].
    ///
    /// [`add_sentence`]: KnowledgeEngine::add_sentence
    pub fn observe(&mut self, cell: Cell, count: usize) -> Result<(), KnowledgeError> {
        if !self.contains(cell) {
            return Err(KnowledgeError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        if count > MAX_NEIGHBOURS {
            return Err(KnowledgeError::CountTooLarge { cell, count });
        }

        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let moves_made = &self.moves_made;
        let unplayed = neighbours(cell, self.height, self.width).filter(|n| !moves_made.contains(n));
        let sentence = Sentence::new(unplayed, count);
        tracing::debug!("observed {:?} with {} nearby mines: {}", cell, count, sentence);

        self.add_sentence(sentence);
        Ok(())
    }

    /// Adds a sentence to the knowledge base, marks every cell that can now
    /// be concluded safe or mine, and infers new sentences from subsets.
    ///
    /// Inference runs a single resolution pass: sentences derived here are
    /// not saturated until the next call.
    pub fn add_sentence(&mut self, mut sentence: Sentence) {
        let resolved: Vec<(Cell, Verdict)> = sentence
            .cells()
            .iter()
            .filter_map(|cell| self.verdict(*cell).map(|verdict| (*cell, verdict)))
            .collect();
        for (cell, verdict) in resolved {
            match verdict {
                Verdict::Safe => sentence.mark_safe(cell),
                Verdict::Mine => sentence.mark_mine(cell),
            }
        }

        self.knowledge.push(sentence);
        self.saturate();
        self.resolve();
    }

    fn verdict(&self, cell: Cell) -> Option<Verdict> {
        if self.safes.contains(&cell) {
            Some(Verdict::Safe)
        } else if self.mines.contains(&cell) {
            Some(Verdict::Mine)
        } else {
            None
        }
    }

    fn known_facts(&self) -> Vec<(Cell, Verdict)> {
        let mut facts = vec![];
        for sentence in self.knowledge.iter() {
            facts.extend(sentence.known_safes().into_iter().map(|cell| (cell, Verdict::Safe)));
            facts.extend(sentence.known_mines().into_iter().map(|cell| (cell, Verdict::Mine)));
        }
        facts
    }

    /// Marks cells until no sentence yields a new safe cell or mine, then
    /// drops the sentences that ran out of cells.
    fn saturate(&mut self) {
        let mut iteration = Iteration::new();
        let facts = iteration.variable::<(Cell, Verdict)>("facts");
        facts.extend(self.known_facts());

        while iteration.changed() {
            let recent = facts.recent.borrow().elements.clone();
            for (cell, verdict) in recent {
                match verdict {
                    Verdict::Safe => self.mark_safe(cell),
                    Verdict::Mine => self.mark_mine(cell),
                }
            }
            facts.extend(self.known_facts());
        }

        facts.complete();
        self.knowledge.retain(|sentence| !sentence.is_empty());
    }

    /// For every pair where one sentence's cells are a subset of another's,
    /// adds the sentence over the difference unless an equal one is known.
    fn resolve(&mut self) {
        let mut inferred: Vec<Sentence> = vec![];

        for superset in self.knowledge.iter() {
            for subset in self.knowledge.iter() {
                if superset == subset {
                    continue;
                }
                if let Some(sentence) = superset.subtract(subset) {
                    if !self.knowledge.contains(&sentence) && !inferred.contains(&sentence) {
                        tracing::debug!("inferred {} from {} and {}", sentence, superset, subset);
                        inferred.push(sentence);
                    }
                }
            }
        }

        self.knowledge.extend(inferred);
    }

    /// A cell known to be safe that has not been played yet.
    pub fn query_safe_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        self.safes.difference(&self.moves_made).copied().choose(rng)
    }

    /// Any cell that has not been played and is not known to be a mine.
    pub fn query_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let width = self.width;
        (0..self.height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .choose(rng)
    }

    /// Asks a SAT solver whether some mine layout agrees with every sentence
    /// and every known cell. Meant for debugging: a consistent sequence of
    /// observations never fails this check.
    pub fn check_consistency(&self) -> Result<(), KnowledgeError> {
        if consistency::is_satisfiable(&self.knowledge, &self.safes, &self.mines)? {
            Ok(())
        } else {
            Err(KnowledgeError::Inconsistent)
        }
    }
}
