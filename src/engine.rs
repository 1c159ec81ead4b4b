//! String-level engine surface for external callers. Grids cross this
//! boundary as 81-character digit strings, row-major, '0' for empty; nothing
//! here touches persistence, sessions, or presentation.

use crate::checker::{self, ConflictSet};
use crate::generator::{DifficultyTier, Puzzle, PuzzleGenerator};
use crate::grid::{FormatError, Grid};
use crate::hint::{Hint, HintAdvisor};

/// Generates a puzzle with fresh entropy. For reproducible output use
/// [`PuzzleGenerator::new`] with a seed instead.
pub fn generate_puzzle(tier: DifficultyTier) -> Puzzle {
    PuzzleGenerator::new(None).generate(tier)
}

/// All currently conflicting cells of `board`. Empty set means the board is
/// consistent so far (not necessarily complete).
pub fn validate_board(board: &str) -> Result<ConflictSet, FormatError> {
    let grid = Grid::from_compact(board)?;
    Ok(checker::find_all_conflicts(&grid))
}

pub fn is_complete_and_valid(board: &str) -> Result<bool, FormatError> {
    let grid = Grid::from_compact(board)?;
    Ok(checker::is_solved(&grid))
}

/// Next pedagogically-ordered hint, or `Ok(None)` when `current` has no empty
/// cell. Both strings must parse; a malformed board or solution is the
/// caller's bug to surface, never coerced.
pub fn request_hint(current: &str, solution: &str) -> Result<Option<Hint>, FormatError> {
    let current = Grid::from_compact(current)?;
    let solution = Grid::from_compact(solution)?;
    Ok(HintAdvisor::new(None).next_hint(&current, &solution))
}
