pub mod checker;
pub mod engine;
pub mod generator;
pub mod grid;
pub mod hint;
pub mod solver;

pub use checker::ConflictSet;
pub use engine::{generate_puzzle, is_complete_and_valid, request_hint, validate_board};
pub use generator::{classify_difficulty, DifficultyTier, Puzzle, PuzzleGenerator};
pub use grid::{Digit, FormatError, Grid, Pos};
pub use hint::{Hint, HintAdvisor};
