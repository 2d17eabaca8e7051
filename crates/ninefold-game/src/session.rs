//! The game session state machine.

use derive_more::{Display, Error, IsVariant};
use ninefold_core::{Digit, GivenMask, Grid, Position, rules};
use ninefold_generator::GeneratedPuzzle;
use serde::{Deserialize, Serialize};

use crate::Move;

/// Lifecycle status of a game session.
///
/// `Completed` is terminal for move processing: once reached, every further
/// move is rejected with [`RejectReason::NotInProgress`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IsVariant, Serialize, Deserialize,
)]
pub enum GameStatus {
    /// The puzzle is still being played.
    InProgress,
    /// The board has been fully and correctly filled.
    Completed,
}

/// Why a move was not committed.
///
/// These are normal gameplay verdicts, not errors: the board and status are
/// left untouched, and the `Display` form is the machine-readable reason
/// reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// The session is already completed.
    #[display("Game is not in progress")]
    NotInProgress,
    /// The cell was given at generation time and is never editable.
    #[display("Cell is fixed")]
    GivenCell,
    /// The cell already holds a digit; it must be cleared before being
    /// rewritten.
    #[display("Cell is not empty")]
    CellOccupied,
    /// The digit already occurs in the cell's row, column, or box.
    #[display("Move violates Sudoku rules")]
    RuleViolation,
    /// The digit is locally legal but differs from the stored solution.
    ///
    /// The stored solution is the answer key fixed at generation time; a
    /// placement from some alternate valid completion is still rejected.
    #[display("Value does not match solution")]
    SolutionMismatch,
}

/// Verdict of [`GameSession::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// The move was committed; the game continues.
    Committed,
    /// The move was committed and filled the last empty cell; the session
    /// is now [`GameStatus::Completed`].
    Completed,
    /// The move was rejected; board and status are unchanged.
    Rejected(RejectReason),
}

/// Result of [`GameSession::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// `true` if the board has no empty cell.
    pub complete: bool,
    /// `true` if the board satisfies all Sudoku constraints. Only
    /// meaningful when `complete` is `true`; reported as `false` otherwise.
    pub valid: bool,
}

/// Error returned when rehydrating a session from persisted parts fails.
///
/// Unlike gameplay rejections, this indicates a broken collaborator: the
/// persisted state violates invariants the engine itself always maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The stored solution has empty cells.
    #[display("stored solution is incomplete")]
    IncompleteSolution,
    /// The stored solution violates Sudoku constraints.
    #[display("stored solution is not a valid Sudoku grid")]
    InvalidSolution,
    /// A given cell is empty or disagrees with the solution on the board.
    #[display("given cell at {_0} does not match the stored solution")]
    GivenMismatch(#[error(not(source))] Position),
}

/// A single player's game: board, solution, given mask, and status.
///
/// Created from a [`GeneratedPuzzle`] for new games, or rehydrated from
/// persisted parts with [`GameSession::from_parts`]. All rule enforcement
/// for player edits lives in [`GameSession::apply_move`];
/// [`GameSession::verify`] independently re-derives the status from the
/// board alone.
///
/// # Examples
///
/// ```
/// use ninefold_game::GameSession;
/// use ninefold_generator::PuzzleGenerator;
///
/// let session = GameSession::new(PuzzleGenerator::new().generate());
/// assert!(session.status().is_in_progress());
/// assert_eq!(session.givens().count(), 41);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Grid,
    solution: Grid,
    givens: GivenMask,
    status: GameStatus,
}

impl GameSession {
    /// Starts a new session from a freshly generated puzzle.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            solution,
            givens,
            seed: _,
        } = generated;
        Self {
            board: puzzle,
            solution,
            givens,
            status: GameStatus::InProgress,
        }
    }

    /// Rehydrates a session from persisted parts.
    ///
    /// Structural invariants are re-checked before play resumes: the
    /// solution must be a complete valid grid, and every given cell must be
    /// present on the board with its solution value. Free cells are
    /// deliberately not checked against the solution here; [`Self::verify`]
    /// is the place that detects boards mutated outside the engine.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] describing the first violated invariant.
    pub fn from_parts(
        board: Grid,
        solution: Grid,
        givens: GivenMask,
        status: GameStatus,
    ) -> Result<Self, SessionError> {
        if !rules::grid_is_complete(&solution) {
            return Err(SessionError::IncompleteSolution);
        }
        if !rules::grid_is_valid(&solution) {
            return Err(SessionError::InvalidSolution);
        }
        for pos in Position::ALL {
            if givens.is_given(pos) && board[pos] != solution[pos] {
                return Err(SessionError::GivenMismatch(pos));
            }
        }
        Ok(Self {
            board,
            solution,
            givens,
            status,
        })
    }

    /// The current player-visible board.
    #[must_use]
    pub const fn board(&self) -> &Grid {
        &self.board
    }

    /// The answer key fixed at generation time.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The immutable mask of given cells.
    #[must_use]
    pub const fn givens(&self) -> GivenMask {
        self.givens
    }

    /// The current session status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies one player edit and reports the verdict.
    ///
    /// A clear (`entry` of `None`) on an editable cell always commits and
    /// never completes the game. A set must pass, in order: the session is
    /// in progress, the cell is not given, the cell is empty, the digit is
    /// legal on the current board, and the digit matches the stored
    /// solution. A committed set that fills the last empty cell flips the
    /// session to [`GameStatus::Completed`].
    ///
    /// Rejections leave board and status exactly as they were.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        if !self.status.is_in_progress() {
            return MoveOutcome::Rejected(RejectReason::NotInProgress);
        }
        let pos = mv.position();
        if self.givens.is_given(pos) {
            return MoveOutcome::Rejected(RejectReason::GivenCell);
        }

        let Some(digit) = mv.entry() else {
            // Clearing is always legal, and a board with an empty cell is
            // by definition incomplete.
            self.board.set(pos, None);
            return MoveOutcome::Committed;
        };

        if self.board[pos].is_some() {
            return MoveOutcome::Rejected(RejectReason::CellOccupied);
        }
        if !rules::placement_is_legal(&self.board, pos, digit) {
            return MoveOutcome::Rejected(RejectReason::RuleViolation);
        }
        if self.solution[pos] != Some(digit) {
            return MoveOutcome::Rejected(RejectReason::SolutionMismatch);
        }

        self.board.set(pos, Some(digit));
        if rules::grid_is_complete(&self.board) {
            self.status = GameStatus::Completed;
            return MoveOutcome::Completed;
        }
        MoveOutcome::Committed
    }

    /// Re-derives the session status from the board alone.
    ///
    /// This is idempotent and does not trust prior move bookkeeping: an
    /// incomplete board means the game is in progress, a complete valid
    /// board means it is completed. A complete but invalid board is an
    /// invariant failure -- [`Self::apply_move`] only ever commits
    /// solution-matching digits, so this state can only be reached by
    /// mutating the board elsewhere. It is logged and reported as still in
    /// progress.
    pub fn verify(&mut self) -> Verification {
        let complete = rules::grid_is_complete(&self.board);
        if !complete {
            self.status = GameStatus::InProgress;
            return Verification {
                complete: false,
                valid: false,
            };
        }

        let valid = rules::grid_is_valid(&self.board);
        if valid {
            self.status = GameStatus::Completed;
        } else {
            self.status = GameStatus::InProgress;
            log::warn!(
                "board is complete but violates Sudoku constraints; \
                 it was mutated outside the move processor"
            );
        }
        Verification { complete, valid }
    }
}
