//! Validated move input.

use derive_more::{Display, Error};
use ninefold_core::{Digit, Position};

/// Error returned when a raw move component is outside its contract range.
///
/// These are input contract violations, rejected before any grid is
/// touched, and are distinct from gameplay rejections (which are verdicts,
/// not errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The row index is not in 0-8.
    #[display("row {_0} is out of range (expected 0-8)")]
    RowOutOfRange(#[error(not(source))] u8),
    /// The column index is not in 0-8.
    #[display("column {_0} is out of range (expected 0-8)")]
    ColumnOutOfRange(#[error(not(source))] u8),
    /// The value is not in 0-9.
    #[display("value {_0} is out of range (expected 0-9)")]
    ValueOutOfRange(#[error(not(source))] u8),
}

/// A single validated player edit: set or clear one cell.
///
/// Built from the raw `(row, col, value)` triple of the external contract,
/// where `value` 0 means "clear". Construction validates ranges, so a
/// `Move` that exists is always structurally well-formed.
///
/// # Examples
///
/// ```
/// use ninefold_game::{Move, MoveError};
///
/// let set = Move::new(0, 1, 5).unwrap();
/// assert_eq!(set.entry().unwrap().value(), 5);
///
/// let clear = Move::new(0, 1, 0).unwrap();
/// assert!(clear.entry().is_none());
///
/// assert_eq!(Move::new(9, 0, 1), Err(MoveError::RowOutOfRange(9)));
/// assert_eq!(Move::new(0, 0, 10), Err(MoveError::ValueOutOfRange(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    position: Position,
    entry: Option<Digit>,
}

impl Move {
    /// Validates a raw `(row, col, value)` triple into a move.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`MoveError`] if `row` or `col` is not in
    /// 0-8 or `value` is not in 0-9.
    pub fn new(row: u8, col: u8, value: u8) -> Result<Self, MoveError> {
        if row > 8 {
            return Err(MoveError::RowOutOfRange(row));
        }
        if col > 8 {
            return Err(MoveError::ColumnOutOfRange(col));
        }
        let entry = match value {
            0 => None,
            1..=9 => Digit::new(value),
            _ => return Err(MoveError::ValueOutOfRange(value)),
        };
        Ok(Self {
            position: Position::new(row, col),
            entry,
        })
    }

    /// A move that sets `digit` at `pos`.
    #[must_use]
    pub const fn set(pos: Position, digit: Digit) -> Self {
        Self {
            position: pos,
            entry: Some(digit),
        }
    }

    /// A move that clears the cell at `pos`.
    #[must_use]
    pub const fn clear(pos: Position) -> Self {
        Self {
            position: pos,
            entry: None,
        }
    }

    /// The targeted cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The digit to place, or `None` for a clear.
    #[must_use]
    pub const fn entry(&self) -> Option<Digit> {
        self.entry
    }
}
