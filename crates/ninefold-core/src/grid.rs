//! The 9×9 cell container.
//!
//! [`Grid`] stores 81 cells of `Option<Digit>` in row-major order. It is the
//! value exchanged with collaborators: the serde representation is the wire
//! shape from the engine contract (a 9×9 row-major array of integers
//! `0..=9`, `0` meaning empty), and a compact text form is provided for
//! tests and tooling.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::{Digit, DigitError, Position};

/// Error returned when parsing a grid from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The text contains a character that is not a digit, `.`, `_`, or
    /// whitespace.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

/// A 9×9 Sudoku grid.
///
/// Cells are `Option<Digit>`, with `None` for empty. The same type is used
/// for puzzle boards (partially filled) and solutions (fully filled); which
/// one a given value is follows from how it was produced.
///
/// # Wire shape
///
/// Serializes to and from a 9-element array of 9-element arrays of integers
/// `0..=9` in row-major order, `0` meaning empty. Deserialization rejects
/// out-of-range values, so an illegal cell value can never be stored.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert!(grid[Position::new(4, 4)].is_none());
///
/// grid.set(Position::new(4, 4), Digit::new(7));
/// assert_eq!(grid[Position::new(4, 4)], Digit::new(7));
/// assert_eq!(grid.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 9]; 9]", into = "[[u8; 9]; 9]")]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell content at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`, `None` clearing it.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// This is the scan order required of the backtracking solver.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Number of filled (nonempty) cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the raw row-major rows, `0` meaning empty.
    ///
    /// This is the same shape as the serde representation.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[usize::from(pos.row())][usize::from(pos.col())] =
                self.get(pos).map_or(0, Digit::value);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = DigitError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let raw = rows[usize::from(pos.row())][usize::from(pos.col())];
            let cell = match raw {
                0 => None,
                _ => Some(Digit::try_from(raw)?),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

impl From<Grid> for [[u8; 9]; 9] {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses a grid from 81 cell characters.
    ///
    /// Digits `1`-`9` fill a cell; `.`, `_`, and `0` leave it empty; all
    /// whitespace is ignored. The cell count must come out to exactly 81.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for ch in s.chars() {
            match ch {
                '1'..='9' => {
                    let value = ch.to_digit(10).and_then(|v| u8::try_from(v).ok());
                    cells.push(value.and_then(Digit::new));
                }
                '.' | '_' | '0' => cells.push(None),
                ch if ch.is_whitespace() => {}
                ch => return Err(GridParseError::UnexpectedCharacter(ch)),
            }
        }
        if cells.len() != 81 {
            return Err(GridParseError::WrongCellCount(cells.len()));
        }
        let mut grid = Self::new();
        for (i, cell) in cells.into_iter().enumerate() {
            grid.set(Position::from_index(i), cell);
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Renders nine rows of nine cell characters, `.` for empty, with a
    /// space between box columns. The output parses back via [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            if row < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
