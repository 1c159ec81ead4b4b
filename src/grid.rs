use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A placement candidate, always in 1..=9. Cell storage additionally uses 0 for empty.
pub type Digit = u8;

/// Rejection of a board string that does not match `^[0-9]{81}$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("board string must be exactly 81 characters, got {len}")]
    WrongLength { len: usize },
    #[error("invalid character {ch:?} at index {index}, expected '0'..='9'")]
    BadCharacter { ch: char, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn idx(self) -> usize {
        self.r * 9 + self.c
    }

    pub fn from_idx(i: usize) -> Self {
        Pos { r: i / 9, c: i % 9 }
    }

    /// Index of the 3x3 box containing this cell, 0..9 row-major.
    pub fn box_index(self) -> usize {
        (self.r / 3) * 3 + self.c / 3
    }
}

// The 20 peers (same row, column, or box, excluding the cell itself) of every
// cell, by flat index. Built once; every legality scan reads from here.
static PEERS: Lazy<[[usize; 20]; 81]> = Lazy::new(|| {
    let mut table = [[0usize; 20]; 81];
    for (idx, entry) in table.iter_mut().enumerate() {
        let (r, c) = (idx / 9, idx % 9);
        let (br, bc) = ((r / 3) * 3, (c / 3) * 3);
        let mut v = Vec::with_capacity(20);
        for i in 0..9 {
            if i != c {
                v.push(r * 9 + i);
            }
            if i != r {
                v.push(i * 9 + c);
            }
        }
        for rr in br..br + 3 {
            for cc in bc..bc + 3 {
                if rr != r || cc != c {
                    v.push(rr * 9 + cc);
                }
            }
        }
        v.sort_unstable();
        v.dedup();
        entry.copy_from_slice(&v);
    }
    table
});

pub fn peers_of(p: Pos) -> &'static [usize; 20] {
    &PEERS[p.idx()]
}

/// A 9x9 value grid; 0 = empty, 1..=9 placed digits. Plain value type with no
/// identity of its own, freely copied by everything above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Out-of-range coordinates are a programming error and panic.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.cells[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, v: u8) {
        debug_assert!(v <= 9, "cell value {v} out of range");
        self.cells[r][c] = v;
    }

    pub fn at(&self, p: Pos) -> u8 {
        self.cells[p.r][p.c]
    }

    pub fn row_values(&self, r: usize) -> [u8; 9] {
        self.cells[r]
    }

    pub fn col_values(&self, c: usize) -> [u8; 9] {
        let mut a = [0; 9];
        for r in 0..9 {
            a[r] = self.cells[r][c];
        }
        a
    }

    /// Values of box `b` (0..9 row-major), in row-major order within the box.
    pub fn box_values(&self, b: usize) -> [u8; 9] {
        let (br, bc) = ((b / 3) * 3, (b % 3) * 3);
        let mut a = [0; 9];
        let mut i = 0;
        for r in br..br + 3 {
            for c in bc..bc + 3 {
                a[i] = self.cells[r][c];
                i += 1;
            }
        }
        a
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&v| v != 0))
    }

    pub fn filled_count(&self) -> u8 {
        self.cells.iter().flatten().filter(|&&v| v != 0).count() as u8
    }

    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..81).map(Pos::from_idx)
    }

    /// Parses the 81-character wire form. Strict: exactly 81 chars, digits
    /// only, '0' meaning empty. No dot/underscore placeholders, no whitespace.
    pub fn from_compact(s: &str) -> Result<Self, FormatError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(FormatError::WrongLength { len });
        }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            match ch {
                '0'..='9' => g.set(i / 9, i % 9, ch as u8 - b'0'),
                _ => return Err(FormatError::BadCharacter { ch, index: i }),
            }
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| (b'0' + v) as char)
            .collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    write!(f, "| ")?;
                }
                let v = self.cells[r][c];
                let ch = if v == 0 { '.' } else { (b'0' + v) as char };
                write!(f, "{ch} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}
