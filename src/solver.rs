//! Backtracking search over grids: solving, randomized solving, and capped
//! solution counting share one recursive core.

use rand::{rngs::StdRng, seq::SliceRandom};

use crate::checker::is_legal_placement;
use crate::grid::{Digit, Grid};

/// First empty cell in row-major order.
fn find_empty(grid: &Grid) -> Option<(usize, usize)> {
    for r in 0..9 {
        for c in 0..9 {
            if grid.get(r, c) == 0 {
                return Some((r, c));
            }
        }
    }
    None
}

// Depth-first with chronological backtracking; at most 81 frames. With `rng`
// present the candidate digits are shuffled per cell, which is what gives
// generated grids their variety.
fn search(grid: &mut Grid, mut rng: Option<&mut StdRng>) -> bool {
    let Some((r, c)) = find_empty(grid) else {
        return true;
    };
    let mut digits: [Digit; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    if let Some(rng) = rng.as_deref_mut() {
        digits.shuffle(rng);
    }
    for d in digits {
        if is_legal_placement(grid, r, c, d) {
            grid.set(r, c, d);
            if search(grid, rng.as_deref_mut()) {
                return true;
            }
            grid.set(r, c, 0);
        }
    }
    false
}

fn count(grid: &mut Grid, cap: usize, found: &mut usize) {
    if *found >= cap {
        return;
    }
    let Some((r, c)) = find_empty(grid) else {
        // Every placement on the way down was legal, so a full grid is a
        // solution without a separate validity pass.
        *found += 1;
        return;
    };
    for d in 1..=9 {
        if is_legal_placement(grid, r, c, d) {
            grid.set(r, c, d);
            count(grid, cap, found);
            grid.set(r, c, 0);
            if *found >= cap {
                return;
            }
        }
    }
}

/// First solution found with candidates tried in ascending order, or `None`
/// if the grid is unsatisfiable. The input grid is untouched.
pub fn solve(grid: &Grid) -> Option<Grid> {
    let mut work = *grid;
    search(&mut work, None).then_some(work)
}

/// Like [`solve`] but with candidate digits shuffled per cell. Used for
/// full-grid generation, where the starting grid is empty and variety matters.
pub fn solve_random(grid: &Grid, rng: &mut StdRng) -> Option<Grid> {
    let mut work = *grid;
    search(&mut work, Some(rng)).then_some(work)
}

/// Number of distinct solutions, pruned as soon as `cap` are found. Carving
/// calls this once per candidate removal with `cap = 2`, so the early cutoff
/// is what keeps generation tractable. An unsatisfiable grid reports 0; that
/// is an ordinary value, not an error.
pub fn count_solutions(grid: &Grid, cap: usize) -> usize {
    let mut work = *grid;
    let mut found = 0;
    count(&mut work, cap, &mut found);
    found
}
