//! Puzzle generation: fill a grid with randomized backtracking, then carve
//! cells while `count_solutions` proves the remainder stays unique.

use std::ops::RangeInclusive;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Pos};
use crate::solver;

/// Attempts at hitting the requested tier's clue range before settling for
/// the closest result. Deep tiers stall well before their removal target on
/// unlucky shuffles, so generation re-runs both phases with fresh randomness.
const TIER_RETRY_BUDGET: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 5] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Expert,
        DifficultyTier::Master,
    ];

    /// How many of the 81 cells get blanked when carving for this tier.
    pub fn removal_range(self) -> RangeInclusive<u8> {
        match self {
            DifficultyTier::Easy => 40..=45,
            DifficultyTier::Medium => 46..=51,
            DifficultyTier::Hard => 52..=56,
            DifficultyTier::Expert => 57..=61,
            DifficultyTier::Master => 62..=66,
        }
    }

    /// Clue counts this tier's puzzles land in, the inverse of
    /// [`removal_range`](Self::removal_range) against 81 cells.
    pub fn clue_range(self) -> RangeInclusive<u8> {
        let k = self.removal_range();
        (81 - k.end())..=(81 - k.start())
    }
}

/// The single source of truth for difficulty. A tier is never stored or
/// derived any other way than from the clue count through these thresholds.
pub fn classify_difficulty(clue_count: u8) -> DifficultyTier {
    match clue_count {
        36.. => DifficultyTier::Easy,
        30..=35 => DifficultyTier::Medium,
        25..=29 => DifficultyTier::Hard,
        20..=24 => DifficultyTier::Expert,
        _ => DifficultyTier::Master,
    }
}

/// An immutable clues/solution pair. Built once by [`PuzzleGenerator`];
/// storage and further lifecycle belong to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    clues: Grid,
    solution: Grid,
    clue_count: u8,
    difficulty: DifficultyTier,
}

impl Puzzle {
    pub(crate) fn new(clues: Grid, solution: Grid) -> Self {
        debug_assert!(solution.is_full(), "puzzle solution must be fully filled");
        debug_assert!(
            Grid::positions().all(|p| clues.at(p) == 0 || clues.at(p) == solution.at(p)),
            "clues must be a subset of the solution"
        );
        let clue_count = clues.filled_count();
        Self {
            clues,
            solution,
            clue_count,
            difficulty: classify_difficulty(clue_count),
        }
    }

    pub fn clues(&self) -> &Grid {
        &self.clues
    }

    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    pub fn clue_count(&self) -> u8 {
        self.clue_count
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }
}

pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// A fixed seed reproduces the full generation sequence; `None` draws
    /// fresh entropy per generator.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Phase 1: a complete, conflict-free grid from scratch. Randomized
    /// backtracking from an empty grid cannot run out of solutions, so a
    /// failure here is a solver defect and panics.
    pub fn generate_full_grid(&mut self) -> Grid {
        let grid = solver::solve_random(&Grid::empty(), &mut self.rng)
            .expect("an empty grid always admits a solution");
        trace!("generated full grid\n{grid}");
        grid
    }

    /// Generates a puzzle for `tier`, retrying with fresh randomness until the
    /// clue count lands in the tier's published range. If the retry budget
    /// runs out the closest attempt is returned, labeled by its actual clue
    /// count so a missed target is never disguised as the requested tier.
    pub fn generate(&mut self, tier: DifficultyTier) -> Puzzle {
        let clue_range = tier.clue_range();
        let mut best: Option<Puzzle> = None;
        for attempt in 1..=TIER_RETRY_BUDGET {
            let solution = self.generate_full_grid();
            let k = self.rng.gen_range(tier.removal_range());
            let clues = self.carve(solution, k);
            let puzzle = Puzzle::new(clues, solution);
            if clue_range.contains(&puzzle.clue_count()) {
                debug!(
                    "generated {:?} puzzle with {} clues on attempt {attempt}",
                    tier,
                    puzzle.clue_count()
                );
                return puzzle;
            }
            trace!(
                "attempt {attempt}: {} clues outside {:?} target {:?}",
                puzzle.clue_count(),
                tier,
                clue_range
            );
            let better = match &best {
                None => true,
                Some(b) => puzzle.clue_count() < b.clue_count(),
            };
            if better {
                best = Some(puzzle);
            }
        }
        let puzzle = best.expect("at least one carve attempt ran");
        debug!(
            "retry budget exhausted for {:?}; returning {} clues classified {:?}",
            tier,
            puzzle.clue_count(),
            puzzle.difficulty()
        );
        puzzle
    }

    /// Phase 2: blank up to `k` cells of `solution` one at a time, keeping a
    /// removal only if the grid still has exactly one solution. Passes over
    /// the remaining filled cells repeat (reshuffled) until `k` is reached or
    /// a whole pass removes nothing, since a cell pinned early can become
    /// removable after later removals.
    fn carve(&mut self, solution: Grid, k: u8) -> Grid {
        let mut grid = solution;
        let mut removed = 0u8;
        while removed < k {
            let mut filled: Vec<Pos> = Grid::positions().filter(|&p| grid.at(p) != 0).collect();
            filled.shuffle(&mut self.rng);
            let before = removed;
            for p in filled {
                if removed == k {
                    break;
                }
                let old = grid.at(p);
                grid.set(p.r, p.c, 0);
                if solver::count_solutions(&grid, 2) == 1 {
                    removed += 1;
                } else {
                    grid.set(p.r, p.c, old);
                }
            }
            if removed == before {
                trace!("carve stalled at {removed} of {k} removals");
                break;
            }
        }
        grid
    }
}
