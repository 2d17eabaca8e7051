//! The immutable record of given (pre-filled) cells.

use serde::{Deserialize, Serialize};

use crate::{Grid, Position};

/// An 81-bit set recording which cells were given when a puzzle was
/// generated.
///
/// Given cells are never editable. Tracking them in a mask fixed at
/// generation time, rather than inferring "given" from "currently
/// nonempty", keeps a cleared cell distinguishable from a never-given one.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, GivenMask, Grid, Position};
///
/// let mut puzzle = Grid::new();
/// puzzle.set(Position::new(0, 0), Digit::new(5));
///
/// let givens = GivenMask::from_grid(&puzzle);
/// assert!(givens.is_given(Position::new(0, 0)));
/// assert!(!givens.is_given(Position::new(0, 1)));
/// assert_eq!(givens.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivenMask(u128);

impl GivenMask {
    /// The mask with no given cells.
    pub const EMPTY: Self = Self(0);

    /// Builds the mask from a puzzle grid: every currently filled cell is a
    /// given.
    ///
    /// Call this once, on the freshly masked puzzle, before any player
    /// edits.
    #[must_use]
    pub fn from_grid(puzzle: &Grid) -> Self {
        let mut bits = 0_u128;
        for pos in Position::ALL {
            if puzzle[pos].is_some() {
                bits |= 1 << pos.index();
            }
        }
        Self(bits)
    }

    /// Returns `true` if the cell at `pos` was given.
    #[must_use]
    pub const fn is_given(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Number of given cells.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}
