//! Game sessions: move processing and completion verification.
//!
//! A [`GameSession`] owns one board, the solution it was generated from,
//! the immutable mask of given cells, and the game status. It is the
//! engine's move processor: collaborators (an HTTP layer, a UI) hand it a
//! validated [`Move`] and receive a [`MoveOutcome`] verdict. Rejected moves
//! are normal negative verdicts carrying a [`RejectReason`], never errors;
//! errors are reserved for malformed input ([`MoveError`]) and broken
//! persisted state ([`SessionError`]).
//!
//! The session is pure in-memory computation with no interior
//! synchronization. If two moves for the same session can arrive
//! concurrently, the caller owning persistence must serialize the
//! read-modify-write per session, because move legality is checked against
//! the board state the session currently holds.
//!
//! # Examples
//!
//! ```
//! use ninefold_game::{GameSession, Move, MoveOutcome};
//! use ninefold_generator::PuzzleGenerator;
//!
//! let mut session = GameSession::new(PuzzleGenerator::new().generate());
//! assert!(session.status().is_in_progress());
//!
//! // Clearing an empty, editable cell is always a legal no-op commit.
//! let pos = *ninefold_core::Position::ALL
//!     .iter()
//!     .find(|&&pos| !session.givens().is_given(pos))
//!     .unwrap();
//! let mv = Move::new(pos.row(), pos.col(), 0).unwrap();
//! assert_eq!(session.apply_move(mv), MoveOutcome::Committed);
//! ```

mod move_input;
mod session;

pub use self::{
    move_input::{Move, MoveError},
    session::{GameSession, GameStatus, MoveOutcome, RejectReason, SessionError, Verification},
};
