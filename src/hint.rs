//! Next-hint selection: minimum-remaining-values over the empty cells, with a
//! random fallback when the board has been driven into contradiction.

use itertools::Itertools;
use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::checker::candidate_digits;
use crate::grid::{Digit, Grid, Pos};

/// One revealed cell. The digit always comes from the stored solution, so it
/// is consistent with the puzzle even when the rationale is the weak fallback
/// one. Stateless between requests; any hints-remaining budget is the
/// caller's bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub pos: Pos,
    pub digit: Digit,
    pub rationale: String,
}

pub struct HintAdvisor {
    rng: StdRng,
}

impl HintAdvisor {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Picks the empty cell with the fewest legal candidates (ties broken at
    /// random) and reveals the solution digit there. Candidate counts come
    /// from the constraint checker against `current`, not from peeking at the
    /// solution, so the choice reflects genuine solving difficulty. Returns
    /// `None` only when the board has no empty cell left.
    pub fn next_hint(&mut self, current: &Grid, solution: &Grid) -> Option<Hint> {
        let empties = Grid::positions()
            .filter(|&p| current.at(p) == 0)
            .collect_vec();
        if empties.is_empty() {
            return None;
        }

        let open = empties
            .iter()
            .map(|&p| (p, candidate_digits(current, p.r, p.c).len()))
            .filter(|&(_, n)| n > 0)
            .collect_vec();

        if open.is_empty() {
            // Contradictory board: the player has conflicting entries
            // somewhere. Still reveal a correct digit, just without a
            // forcing argument.
            trace!("no empty cell has a legal candidate; falling back to random choice");
            let &p = empties.choose(&mut self.rng)?;
            let digit = solution.at(p);
            return Some(Hint {
                pos: p,
                digit,
                rationale: format!(
                    "Row {}, column {} holds {} in the solution. Check your other entries, \
                     the board currently has no room for it.",
                    p.r + 1,
                    p.c + 1,
                    digit
                ),
            });
        }

        let minimal = open.iter().min_set_by_key(|&&(_, n)| n);
        let &&(p, n) = minimal.choose(&mut self.rng)?;
        let digit = solution.at(p);
        let rationale = if n == 1 {
            format!(
                "Row {}, column {} has a single legal candidate: {}.",
                p.r + 1,
                p.c + 1,
                digit
            )
        } else {
            format!(
                "Row {}, column {} is down to {} candidates; the solution puts {} there.",
                p.r + 1,
                p.c + 1,
                n,
                digit
            )
        };
        Some(Hint {
            pos: p,
            digit,
            rationale,
        })
    }
}
