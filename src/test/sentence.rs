use std::collections::BTreeSet;

use crate::{Cell, Sentence};

const A: Cell = (0, 0);
const B: Cell = (0, 1);
const C: Cell = (0, 2);
const D: Cell = (1, 0);

fn set(cells: &[Cell]) -> BTreeSet<Cell> {
    cells.iter().copied().collect()
}

#[test]
fn full_count_means_all_mines() {
    let sentence = Sentence::new(vec![A, B, C], 3);
    assert_eq!(sentence.known_mines(), set(&[A, B, C]));
    assert_eq!(sentence.known_safes(), set(&[]));
}

#[test]
fn zero_count_means_all_safe() {
    let sentence = Sentence::new(vec![A, B, C], 0);
    assert_eq!(sentence.known_safes(), set(&[A, B, C]));
    assert_eq!(sentence.known_mines(), set(&[]));
}

#[test]
fn partial_count_proves_nothing() {
    let sentence = Sentence::new(vec![A, B, C], 2);
    assert!(sentence.known_mines().is_empty());
    assert!(sentence.known_safes().is_empty());
}

#[test]
fn mark_mine_reduces_count() {
    let mut sentence = Sentence::new(vec![A, B], 1);
    sentence.mark_mine(A);
    assert_eq!(sentence, Sentence::new(vec![B], 0));
    assert_eq!(sentence.known_safes(), set(&[B]));
}

#[test]
fn mark_safe_preserves_count() {
    let mut sentence = Sentence::new(vec![A, B], 1);
    sentence.mark_safe(A);
    assert_eq!(sentence, Sentence::new(vec![B], 1));
    assert_eq!(sentence.known_mines(), set(&[B]));
}

#[test]
fn marking_foreign_cell_is_noop() {
    let mut sentence = Sentence::new(vec![A, B], 1);
    sentence.mark_mine(D);
    sentence.mark_safe(D);
    assert_eq!(sentence, Sentence::new(vec![A, B], 1));
}

#[test]
fn equality_is_structural() {
    assert_eq!(Sentence::new(vec![A, B], 1), Sentence::new(vec![B, A, B], 1));
    assert_ne!(Sentence::new(vec![A, B], 1), Sentence::new(vec![A, B], 2));
    assert_ne!(Sentence::new(vec![A, B], 1), Sentence::new(vec![A, C], 1));
}

#[test]
fn subtract_subset() {
    let big = Sentence::new(vec![A, B, C], 1);
    let small = Sentence::new(vec![A, B], 1);
    assert_eq!(big.subtract(&small), Some(Sentence::new(vec![C], 0)));
    assert_eq!(small.subtract(&big), None);
}

#[test]
fn subtract_requires_strict_subset() {
    let sentence = Sentence::new(vec![A, B], 1);
    assert_eq!(sentence.subtract(&sentence.clone()), None);
    assert_eq!(sentence.subtract(&Sentence::new(vec![C], 0)), None);
}

#[test]
fn subtract_rejects_negative_count() {
    let big = Sentence::new(vec![A, B, C], 0);
    let small = Sentence::new(vec![A], 1);
    assert_eq!(big.subtract(&small), None);
}

#[test]
fn display() {
    let sentence = Sentence::new(vec![B, A], 1);
    assert_eq!(sentence.to_string(), "{(0, 0), (0, 1)} = 1");
}
