//! Type-safe Sudoku digit representation.

use std::{fmt, num::NonZeroU8};

use derive_more::{Display, Error};

/// Error returned when a raw value is outside the digit range 1-9.
///
/// Raw cell values arrive from the outside world as integers `0..=9` with
/// `0` meaning "empty". The empty case is represented as [`Option::None`]
/// at the boundary; everything else must be a valid [`Digit`] or is
/// rejected with this error before it can reach a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("value {_0} is not a Sudoku digit (expected 1-9)")]
pub struct DigitError(#[error(not(source))] pub u8);

/// A Sudoku digit in the range 1-9.
///
/// Backed by [`NonZeroU8`], so `Option<Digit>` is a single byte and maps
/// directly onto the wire representation where `0` means "empty".
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit.value(), 5);
///
/// // 0 is "empty", not a digit.
/// assert_eq!(Digit::new(0), None);
/// assert_eq!(Digit::new(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// All nine digits in ascending order.
    ///
    /// This is the canonical candidate order used by deterministic solving.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(NonZeroU8::MIN); 9];
        let mut value = 1_u8;
        while value <= 9 {
            all[(value - 1) as usize] = match NonZeroU8::new(value) {
                Some(n) => Self(n),
                None => unreachable!(),
            };
            value += 1;
        }
        all
    };

    /// Creates a digit from a raw value, returning `None` unless it is 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::new(1).unwrap().value(), 1);
    /// assert_eq!(Digit::new(9).unwrap().value(), 9);
    /// assert_eq!(Digit::new(0), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value == 0 || value > 9 {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DigitError(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}
