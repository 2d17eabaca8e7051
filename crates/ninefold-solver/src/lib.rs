//! Backtracking Sudoku solver.
//!
//! The solver fills a caller-owned [`Grid`] in place by depth-first search:
//! find the first empty cell in row-major order, try each legal candidate,
//! recurse, and undo on failure. Candidate ordering is the only difference
//! between the two entry points:
//!
//! - [`solve_canonical`] tries candidates in ascending order and is fully
//!   deterministic for a given input, which makes it suitable for deriving
//!   a canonical solution from a puzzle.
//! - [`solve_randomized`] shuffles the candidate order per cell per call
//!   with a caller-supplied RNG, which is how the generator produces fresh
//!   full solutions from a blank grid.
//!
//! The search stops at the first full solution; it never enumerates
//! alternatives, and in particular it makes no uniqueness claim about the
//! puzzle it was given. Worst-case cost is exponential in the number of
//! empty cells, but legality pruning keeps 9×9 boards far from that bound
//! in practice.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Grid, rules};
//! use ninefold_solver::solve_canonical;
//!
//! let mut grid = Grid::new();
//! assert!(solve_canonical(&mut grid));
//! assert!(rules::grid_is_valid(&grid));
//! ```

use ninefold_core::{Digit, Grid, rules};
use rand::{Rng, seq::SliceRandom};

/// Solves `grid` in place with candidates tried in ascending order.
///
/// Returns `true` and leaves the grid fully filled if a solution exists;
/// returns `false` and leaves the grid as it was if none does. The search
/// is deterministic: the same input always yields the same solution.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Grid, rules};
/// use ninefold_solver::solve_canonical;
///
/// let mut a = Grid::new();
/// let mut b = Grid::new();
/// assert!(solve_canonical(&mut a));
/// assert!(solve_canonical(&mut b));
/// assert_eq!(a, b);
/// ```
pub fn solve_canonical(grid: &mut Grid) -> bool {
    backtrack(grid, &mut || Digit::ALL)
}

/// Solves `grid` in place with candidates shuffled per cell.
///
/// Repeated calls on a blank grid yield different full solutions with high
/// probability; the result is deterministic for a given RNG state, which is
/// what makes seeded puzzle generation reproducible.
pub fn solve_randomized<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    backtrack(grid, &mut || {
        let mut candidates = Digit::ALL;
        candidates.shuffle(rng);
        candidates
    })
}

/// Depth-first search over the first empty cell, in the candidate order
/// produced by `order`. On failure the cell is reset before unwinding.
fn backtrack(grid: &mut Grid, order: &mut impl FnMut() -> [Digit; 9]) -> bool {
    let Some(pos) = grid.first_empty() else {
        // No empty cell: the grid is already a complete assignment.
        return true;
    };
    for digit in order() {
        if rules::placement_is_legal(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if backtrack(grid, order) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use ninefold_core::{House, Position};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_canonical_solve_of_blank_grid_is_valid() {
        let mut grid = Grid::new();
        assert!(solve_canonical(&mut grid));
        assert!(rules::grid_is_complete(&grid));
        assert!(rules::grid_is_valid(&grid));
    }

    #[test]
    fn test_canonical_solve_is_deterministic() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        assert!(solve_canonical(&mut a));
        assert!(solve_canonical(&mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_canonical_solve_recovers_forced_cells() {
        let solved: Grid = SOLVED.parse().unwrap();
        let mut puzzle = solved.clone();
        // Clearing one full box leaves every cleared cell forced by its row
        // and column, so the solver must reconstruct the original grid.
        for pos in (House::Box { index: 0 }).cells() {
            puzzle.set(pos, None);
        }
        assert!(solve_canonical(&mut puzzle));
        assert_eq!(puzzle, solved);
    }

    #[test]
    fn test_already_full_grid_reports_success() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        let before = grid.clone();
        assert!(solve_canonical(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_unsolvable_grid_is_left_unchanged() {
        let mut grid = Grid::new();
        // Row 0 holds 1-8; a 9 in the same box blocks the last cell.
        for (col, value) in (0..8).zip(1..=8) {
            grid.set(Position::new(0, col), Digit::new(value));
        }
        grid.set(Position::new(1, 8), Digit::new(9));
        let before = grid.clone();

        assert!(!solve_canonical(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_randomized_solve_is_valid_and_seed_deterministic() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let mut grid = Grid::new();
        assert!(solve_randomized(&mut grid, &mut rng));
        assert!(rules::grid_is_valid(&grid));

        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let mut again = Grid::new();
        assert!(solve_randomized(&mut again, &mut rng));
        assert_eq!(grid, again);
    }

    #[test]
    fn test_randomized_solves_differ_across_seeds() {
        let mut first = Grid::new();
        let mut second = Grid::new();
        assert!(solve_randomized(&mut first, &mut Pcg64Mcg::seed_from_u64(1)));
        assert!(solve_randomized(&mut second, &mut Pcg64Mcg::seed_from_u64(2)));
        // Two independent random solutions out of ~6.7e21 valid grids.
        assert_ne!(first, second);
    }

    #[test]
    fn test_solve_respects_existing_givens() {
        let solved: Grid = SOLVED.parse().unwrap();
        let mut puzzle = solved.clone();
        for pos in Position::ALL.into_iter().skip(40) {
            puzzle.set(pos, None);
        }
        let givens = puzzle.clone();

        assert!(solve_canonical(&mut puzzle));
        assert!(rules::grid_is_valid(&puzzle));
        for pos in Position::ALL {
            if let Some(digit) = givens[pos] {
                assert_eq!(puzzle[pos], Some(digit));
            }
        }
    }
}
