//! Stateless Sudoku rule predicates.
//!
//! These are the constraint checks everything else is built from: the
//! solver prunes candidates with [`placement_is_legal`], the game session
//! gates moves with it, and [`grid_is_valid`] re-derives full-solution
//! correctness from the rules alone, independent of any stored answer key.
//!
//! All functions here are pure and take the grid by shared reference.

use crate::{Digit, Grid, House, Position};

/// Returns `true` if placing `digit` at `pos` would not duplicate a digit
/// already present in the cell's row, column, or box.
///
/// The cell's own current content is ignored: the check treats `pos` as
/// logically empty, so it can be used both for empty cells and for "would
/// this value be legal here" queries on filled ones. Clearing a cell is
/// never illegal and is represented upstream as `Option::None`, which is
/// why this predicate takes a [`Digit`] rather than a raw value.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position, rules};
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Digit::new(5));
///
/// let five = Digit::new(5).unwrap();
/// let three = Digit::new(3).unwrap();
/// assert!(!rules::placement_is_legal(&grid, Position::new(0, 1), five));
/// assert!(rules::placement_is_legal(&grid, Position::new(0, 1), three));
/// ```
#[must_use]
pub fn placement_is_legal(grid: &Grid, pos: Position, digit: Digit) -> bool {
    for house in House::of(pos) {
        for cell in house.cells() {
            if cell != pos && grid[cell] == Some(digit) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if the nine cells of `house` are a permutation of the
/// digits 1-9 (no empty cell, no duplicate).
#[must_use]
pub fn house_is_solved(grid: &Grid, house: House) -> bool {
    let mut seen = [false; 9];
    for cell in house.cells() {
        let Some(digit) = grid[cell] else {
            return false;
        };
        let i = usize::from(digit.value()) - 1;
        if seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Returns `true` if the grid has no empty cell.
#[must_use]
pub fn grid_is_complete(grid: &Grid) -> bool {
    grid.first_empty().is_none()
}

/// Returns `true` if every row, column, and box is a permutation of 1-9.
///
/// This is the full-solution verifier: it re-derives correctness from the
/// Sudoku constraints rather than comparing against a stored solution, so
/// it accepts any valid completion.
#[must_use]
pub fn grid_is_valid(grid: &Grid) -> bool {
    House::ALL.into_iter().all(|house| house_is_solved(grid, house))
}
