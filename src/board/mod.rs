pub mod lines;

pub use lines::{Line, LINES};

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Always moves first.
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self { Mark::X => Mark::O, Mark::O => Mark::X }
    }

    pub fn to_char(self) -> char {
        match self { Mark::X => 'X', Mark::O => 'O' }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.to_char()) }
}

/// Nine cells in row-major order. Cheap to copy; search works on private copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    pub fn new() -> Self { Self::default() }

    pub fn from_cells(cells: [Option<Mark>; 9]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Option<Mark>; 9] { &self.cells }

    /// Out-of-range indices read as empty.
    pub fn get(&self, idx: usize) -> Option<Mark> {
        self.cells.get(idx).copied().flatten()
    }

    /// Panics if `idx >= 9`.
    pub fn set(&mut self, idx: usize, mark: Mark) { self.cells[idx] = Some(mark); }

    /// Panics if `idx >= 9`.
    pub fn clear(&mut self, idx: usize) { self.cells[idx] = None; }

    /// Places `mark` only if `idx` is on the board and empty.
    pub fn try_place(&mut self, idx: usize, mark: Mark) -> Result<(), Error> {
        match self.cells.get(idx) {
            Some(None) => { self.cells[idx] = Some(mark); Ok(()) }
            _ => Err(Error::IllegalMove { index: idx }),
        }
    }

    pub fn is_cell_empty(&self, idx: usize) -> bool { matches!(self.cells.get(idx), Some(None)) }

    /// Empty cell indices in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_none()).map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|c| c.is_some()) }

    pub fn is_empty(&self) -> bool { self.cells.iter().all(|c| c.is_none()) }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Whose turn it is under the X-first convention.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) { Mark::O } else { Mark::X }
    }

    /// Single-line form, rows joined by `|`: `XX.|.O.|..O`.
    pub fn to_compact(&self) -> String {
        let mut s = String::with_capacity(11);
        for (i, &c) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 { s.push('|'); }
            s.push(c.map_or('.', Mark::to_char));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = self.cells[row * 3 + col];
                write!(f, "{}", c.map_or('.', Mark::to_char))?;
            }
            if row < 2 { writeln!(f)?; }
        }
        Ok(())
    }
}

/// Accepts `X`/`x`, `O`/`o` and `.`/`-`/`_` for empty. Whitespace, `|` and `/`
/// are separators and ignored.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 9];
        let mut n = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '|' || ch == '/' { continue; }
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => return Err(Error::BoardChar { ch, position: n }),
            };
            if n < 9 { cells[n] = cell; }
            n += 1;
        }
        if n != 9 { return Err(Error::BoardLength { got: n }); }
        Ok(Self { cells })
    }
}
