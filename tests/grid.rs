use pretty_assertions::assert_eq;
use sudoku_engine::{FormatError, Grid, Pos};

const CLUES: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

#[test]
fn compact_round_trip() {
    let g = Grid::from_compact(CLUES).unwrap();
    assert_eq!(g.to_compact(), CLUES);
    assert_eq!(Grid::from_compact(&g.to_compact()).unwrap(), g);
}

#[test]
fn rejects_wrong_length() {
    let short = &CLUES[..80];
    assert_eq!(
        Grid::from_compact(short),
        Err(FormatError::WrongLength { len: 80 })
    );
    let long = format!("{CLUES}0");
    assert_eq!(
        Grid::from_compact(&long),
        Err(FormatError::WrongLength { len: 82 })
    );
    assert_eq!(
        Grid::from_compact(""),
        Err(FormatError::WrongLength { len: 0 })
    );
}

#[test]
fn rejects_non_digit_characters() {
    // Dot placeholders are common elsewhere but the wire contract is digits only.
    let dotted = CLUES.replace('0', ".");
    match Grid::from_compact(&dotted) {
        Err(FormatError::BadCharacter { ch: '.', index: 2 }) => {}
        other => panic!("expected BadCharacter at index 2, got {other:?}"),
    }
}

#[test]
fn unit_queries() {
    let g = Grid::from_compact(CLUES).unwrap();
    assert_eq!(g.row_values(0), [5, 3, 0, 0, 7, 0, 0, 0, 0]);
    assert_eq!(g.col_values(0), [5, 6, 0, 8, 4, 7, 0, 0, 0]);
    assert_eq!(g.box_values(0), [5, 3, 0, 6, 0, 0, 0, 9, 8]);
    assert_eq!(g.box_values(8), [2, 8, 0, 0, 0, 5, 0, 7, 9]);
}

#[test]
fn box_index_derivation() {
    assert_eq!(Pos { r: 0, c: 0 }.box_index(), 0);
    assert_eq!(Pos { r: 4, c: 5 }.box_index(), 4);
    assert_eq!(Pos { r: 8, c: 8 }.box_index(), 8);
    assert_eq!(Pos { r: 2, c: 6 }.box_index(), 2);
    assert_eq!(Pos { r: 6, c: 2 }.box_index(), 6);
}

#[test]
fn fullness_and_counts() {
    let clues = Grid::from_compact(CLUES).unwrap();
    let solution = Grid::from_compact(SOLUTION).unwrap();
    assert!(!clues.is_full());
    assert!(solution.is_full());
    assert!(Grid::empty().to_compact().chars().all(|c| c == '0'));
    assert_eq!(clues.filled_count(), 30);
    assert_eq!(solution.filled_count(), 81);
    assert_eq!(Grid::empty().filled_count(), 0);
}

#[test]
fn get_set_round_trip() {
    let mut g = Grid::empty();
    g.set(3, 7, 9);
    assert_eq!(g.get(3, 7), 9);
    g.set(3, 7, 0);
    assert_eq!(g.get(3, 7), 0);
}

#[test]
fn serde_round_trip() {
    let g = Grid::from_compact(CLUES).unwrap();
    let json = serde_json::to_string(&g).unwrap();
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
}
