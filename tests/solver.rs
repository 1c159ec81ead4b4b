use rand::rngs::StdRng;
use rand::SeedableRng;
use sudoku_engine::checker::is_solved;
use sudoku_engine::solver::{count_solutions, solve, solve_random};
use sudoku_engine::Grid;

const CLUES: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// (0, 0) ends up with no legal digit: 1..=8 fill the rest of its row and 9
/// sits below it in its column.
fn unsatisfiable() -> Grid {
    let mut g = Grid::empty();
    for c in 1..9 {
        g.set(0, c, c as u8);
    }
    g.set(1, 0, 9);
    g
}

#[test]
fn solves_known_puzzle_to_its_unique_solution() {
    let clues = Grid::from_compact(CLUES).unwrap();
    let solved = solve(&clues).expect("puzzle is solvable");
    assert_eq!(solved.to_compact(), SOLUTION);
}

#[test]
fn empty_grid_solves_to_a_full_valid_grid() {
    let solved = solve(&Grid::empty()).expect("empty grid is always solvable");
    assert!(solved.is_full());
    assert!(is_solved(&solved));
}

#[test]
fn ascending_order_is_deterministic() {
    assert_eq!(solve(&Grid::empty()), solve(&Grid::empty()));
}

#[test]
fn randomized_solve_is_seed_reproducible() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    let ga = solve_random(&Grid::empty(), &mut a).unwrap();
    let gb = solve_random(&Grid::empty(), &mut b).unwrap();
    assert_eq!(ga, gb);
    assert!(is_solved(&ga));
}

#[test]
fn caller_grid_is_left_untouched() {
    let clues = Grid::from_compact(CLUES).unwrap();
    let before = clues;
    let _ = solve(&clues);
    let _ = count_solutions(&clues, 2);
    assert_eq!(clues, before);
}

#[test]
fn unique_puzzle_counts_exactly_one() {
    let clues = Grid::from_compact(CLUES).unwrap();
    assert_eq!(count_solutions(&clues, 2), 1);
}

#[test]
fn empty_grid_hits_the_cap() {
    // Many solutions exist; the count must stop at the cap, never report 0 or 1.
    assert_eq!(count_solutions(&Grid::empty(), 2), 2);
    assert_eq!(count_solutions(&Grid::empty(), 5), 5);
}

#[test]
fn solved_grid_counts_itself() {
    let solution = Grid::from_compact(SOLUTION).unwrap();
    assert_eq!(count_solutions(&solution, 2), 1);
    assert_eq!(solve(&solution), Some(solution));
}

#[test]
fn unsatisfiable_grid_is_a_value_not_an_error() {
    let g = unsatisfiable();
    assert_eq!(solve(&g), None);
    assert_eq!(count_solutions(&g, 2), 0);
}
