//! SAT encoding of a knowledge base.
//!
//! Every sentence "exactly k of these n cells are mines" is turned into two
//! families of clauses:
//!
//! * at most k: every (k + 1)-subset of the cells contains a safe cell,
//! * at least k: every (n - k + 1)-subset of the cells contains a mine.
//!
//! The number of clauses grows with the binomial coefficients, which is fine
//! for neighbourhood-sized sentences (at most 8 cells).

use std::collections::{BTreeMap, BTreeSet};

use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

use crate::error::KnowledgeError;
use crate::sentence::Sentence;
use crate::Cell;

/// Maps board cells to DIMACS variables, allocating them on first use.
#[derive(Default)]
struct Variables {
    numbering: BTreeMap<Cell, isize>,
}

impl Variables {
    fn literal(&mut self, cell: Cell, is_mine: bool) -> Lit {
        let next = self.numbering.len() as isize + 1;
        let var = *self.numbering.entry(cell).or_insert(next);
        match is_mine {
            true => Lit::from_dimacs(var),
            false => Lit::from_dimacs(-var),
        }
    }
}

fn combinations(cells: &[Cell], size: usize) -> Vec<Vec<Cell>> {
    if size == 0 {
        return vec![vec![]];
    }
    let (first, rest) = match cells.split_first() {
        Some(split) if cells.len() >= size => split,
        _ => return vec![],
    };

    let mut result = combinations(rest, size - 1);
    for combination in result.iter_mut() {
        combination.push(*first);
    }
    result.extend(combinations(rest, size));
    result
}

pub(crate) fn is_satisfiable(
    knowledge: &[Sentence],
    safes: &BTreeSet<Cell>,
    mines: &BTreeSet<Cell>,
) -> Result<bool, KnowledgeError> {
    let mut variables = Variables::default();
    let mut formula = CnfFormula::new();

    for cell in mines.iter() {
        formula.add_clause(&[variables.literal(*cell, true)]);
    }
    for cell in safes.iter() {
        formula.add_clause(&[variables.literal(*cell, false)]);
    }

    for sentence in knowledge {
        let cells: Vec<Cell> = sentence.cells().iter().copied().collect();
        let count = sentence.count();
        if count > cells.len() {
            tracing::debug!("unsatisfiable sentence {}", sentence);
            return Ok(false);
        }

        for subset in combinations(&cells, count + 1) {
            let clause: Vec<Lit> = subset.iter().map(|cell| variables.literal(*cell, false)).collect();
            formula.add_clause(&clause[..]);
        }
        if count > 0 {
            for subset in combinations(&cells, cells.len() - count + 1) {
                let clause: Vec<Lit> = subset.iter().map(|cell| variables.literal(*cell, true)).collect();
                formula.add_clause(&clause[..]);
            }
        }
    }

    let mut solver = Solver::new();
    solver.add_formula(&formula);
    solver
        .solve()
        .map_err(|err| KnowledgeError::Solver(err.to_string()))
}
