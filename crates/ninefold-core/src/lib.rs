//! Core data model and rule predicates for the Ninefold Sudoku engine.
//!
//! This crate holds the grid representation and the stateless Sudoku rules
//! that every other Ninefold crate builds on. It knows nothing about
//! solving strategies, puzzle generation, or game sessions.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9; raw `0` ("empty") only exists at the
//!   boundary as [`Option::None`]
//! - [`position`]: row/column board coordinates with row-major ordering
//! - [`house`]: the 27 houses (rows, columns, and 3×3 boxes) of a board
//! - [`grid`]: the 9×9 cell container, including its serde wire shape and a
//!   text form for tests and tooling
//! - [`given_mask`]: the immutable record of which cells were given when a
//!   puzzle was generated
//! - [`rules`]: pure predicates for placement legality, house validity, and
//!   grid completeness/validity
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position, rules};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Digit::new(5));
//!
//! // 5 already appears in row 0, so it cannot be placed again there.
//! assert!(!rules::placement_is_legal(&grid, Position::new(0, 1), Digit::new(5).unwrap()));
//! assert!(rules::placement_is_legal(&grid, Position::new(0, 1), Digit::new(3).unwrap()));
//! ```

pub mod digit;
pub mod given_mask;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

pub use self::{
    digit::{Digit, DigitError},
    given_mask::GivenMask,
    grid::{Grid, GridParseError},
    house::House,
    position::Position,
};
