//! Sudoku puzzle generation.
//!
//! A puzzle is produced in two steps: solve a blank grid with the
//! randomized backtracking solver to obtain a full solution, then mask a
//! fixed number of cells to leave the playable board. The masked positions
//! are sampled without replacement from all 81 cells, so masking always
//! terminates and clears exactly [`BLANK_CELLS`] cells.
//!
//! Generation is reproducible: every puzzle carries the [`PuzzleSeed`] it
//! was generated from, and [`PuzzleGenerator::generate_with_seed`] yields
//! an identical [`GeneratedPuzzle`] for an identical seed.
//!
//! The generator makes no uniqueness claim: the masked board may admit
//! valid completions other than the stored solution. Move acceptance
//! against the stored solution is the game session's concern.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::rules;
//! use ninefold_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate();
//! assert!(rules::grid_is_valid(&puzzle.solution));
//! assert_eq!(puzzle.givens.count(), 41);
//! ```

mod seed;

use ninefold_core::{GivenMask, Grid, Position};
use rand::seq::SliceRandom as _;

pub use self::seed::{PuzzleSeed, SeedParseError};

/// Number of cells cleared from the solution to form the puzzle.
pub const BLANK_CELLS: usize = 40;

/// Number of given cells on a fresh puzzle (`81 - BLANK_CELLS`).
pub const GIVEN_CELLS: usize = 81 - BLANK_CELLS;

/// A generated board/solution pair, ready for the caller to persist.
///
/// All fields are fixed at generation time. In particular `givens` is the
/// authoritative record of which cells are editable; it must be stored
/// alongside the board rather than re-derived from it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board: the solution with [`BLANK_CELLS`] cells masked.
    pub puzzle: Grid,
    /// The complete, valid solution the puzzle was masked from.
    pub solution: Grid,
    /// Which cells of `puzzle` are given (pre-filled, never editable).
    pub givens: GivenMask,
    /// The seed this puzzle was generated from.
    pub seed: PuzzleSeed,
}

/// Generates playable Sudoku puzzles.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let first = generator.generate_with_seed(
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///         .parse()
///         .unwrap(),
/// );
/// let second = generator.generate_with_seed(first.seed);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is reported in the returned [`GeneratedPuzzle`] so the
    /// exact board can be regenerated later.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// Equal seeds produce identical puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut solution = Grid::new();
        let solved = ninefold_solver::solve_randomized(&mut solution, &mut rng);
        assert!(solved, "a blank grid always has a solution");

        // Mask by sampling positions without replacement: shuffle all 81
        // and clear the first BLANK_CELLS. Unlike retrying random picks,
        // this cannot stall when most cells are already cleared.
        let mut positions = Position::ALL;
        positions.shuffle(&mut rng);
        let mut puzzle = solution.clone();
        for &pos in &positions[..BLANK_CELLS] {
            puzzle.set(pos, None);
        }

        let givens = GivenMask::from_grid(&puzzle);
        GeneratedPuzzle {
            puzzle,
            solution,
            givens,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::rules;
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn check_invariants(generated: &GeneratedPuzzle) {
        // The solution is a complete valid grid.
        assert!(rules::grid_is_complete(&generated.solution));
        assert!(rules::grid_is_valid(&generated.solution));

        // Exactly GIVEN_CELLS cells survive masking, and every survivor
        // agrees with the co-located solution cell.
        assert_eq!(generated.puzzle.filled_count(), GIVEN_CELLS);
        for pos in Position::ALL {
            match generated.puzzle[pos] {
                Some(digit) => {
                    assert_eq!(generated.solution[pos], Some(digit));
                    assert!(generated.givens.is_given(pos));
                }
                None => assert!(!generated.givens.is_given(pos)),
            }
        }
        assert_eq!(generated.givens.count(), u32::try_from(GIVEN_CELLS).unwrap());
    }

    #[test]
    fn test_generated_puzzle_invariants() {
        let generated = PuzzleGenerator::new().generate();
        check_invariants(&generated);
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let generator = PuzzleGenerator::new();
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let first = generator.generate_with_seed(seed);
        let second = generator.generate_with_seed(seed);
        assert_eq!(first, second);
        assert_eq!(first.seed, seed);
    }

    #[test]
    fn test_different_seeds_give_different_puzzles() {
        let generator = PuzzleGenerator::new();
        let first = generator.generate_with_seed(SEED.parse().unwrap());
        let second = generator.generate_with_seed(PuzzleSeed::from_bytes([0x5a; 32]));
        assert_ne!(first.puzzle, second.puzzle);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// The generation invariants hold for arbitrary seeds.
        #[test]
        fn prop_invariants_hold_for_any_seed(bytes in any::<[u8; 32]>()) {
            let generated =
                PuzzleGenerator::new().generate_with_seed(PuzzleSeed::from_bytes(bytes));
            check_invariants(&generated);
        }
    }
}
