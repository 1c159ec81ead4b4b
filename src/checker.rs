//! Constraint checking: single-placement legality and whole-grid conflict scans.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::grid::{peers_of, Digit, Grid, Pos};

/// Coordinates currently violating the one-digit-per-unit rule. Recomputed
/// from a grid snapshot on every call, never maintained incrementally.
pub type ConflictSet = BTreeSet<Pos>;

/// True if placing `digit` at (`r`, `c`) collides with no peer. The cell
/// itself is excluded from the scan, so re-placing a digit over itself is
/// legal.
pub fn is_legal_placement(grid: &Grid, r: usize, c: usize, digit: Digit) -> bool {
    debug_assert!((1..=9).contains(&digit), "candidate digit {digit} out of range");
    peers_of(Pos { r, c })
        .iter()
        .all(|&q| grid.get(q / 9, q % 9) != digit)
}

/// Digits 1..=9 that are legal at (`r`, `c`) given the rest of the grid.
pub fn candidate_digits(grid: &Grid, r: usize, c: usize) -> Vec<Digit> {
    (1..=9)
        .filter(|&d| is_legal_placement(grid, r, c, d))
        .collect_vec()
}

/// Every occupied cell whose digit occurs more than once in its row, column,
/// or box. Duplicates are found by counting digits per unit, so the result is
/// symmetric by construction: if A collides with B, both are flagged.
pub fn find_all_conflicts(grid: &Grid) -> ConflictSet {
    let mut out = ConflictSet::new();
    for r in 0..9 {
        flag_duplicates(grid.row_values(r), |i| Pos { r, c: i }, &mut out);
    }
    for c in 0..9 {
        flag_duplicates(grid.col_values(c), |i| Pos { r: i, c }, &mut out);
    }
    for b in 0..9 {
        let (br, bc) = ((b / 3) * 3, (b % 3) * 3);
        flag_duplicates(
            grid.box_values(b),
            |i| Pos {
                r: br + i / 3,
                c: bc + i % 3,
            },
            &mut out,
        );
    }
    out
}

fn flag_duplicates(vals: [u8; 9], pos_of: impl Fn(usize) -> Pos, out: &mut ConflictSet) {
    let mut counts = [0u8; 10];
    for &v in &vals {
        counts[v as usize] += 1;
    }
    for (i, &v) in vals.iter().enumerate() {
        if v != 0 && counts[v as usize] > 1 {
            out.insert(pos_of(i));
        }
    }
}

/// Full and conflict-free.
pub fn is_solved(grid: &Grid) -> bool {
    grid.is_full() && find_all_conflicts(grid).is_empty()
}
