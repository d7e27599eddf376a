//! Falling-block puzzle engine core.
//!
//! A reactive, caller-driven engine for the classic falling-block game: a
//! fixed 20x10 board, a falling piece, a one-piece lookahead, line clearing,
//! and level/speed progression. The engine owns no clock and no I/O - the
//! host invokes it once per discrete input event and once per elapsed-time
//! tick, then reads the board, active piece, and progress back out for
//! rendering.
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is drawn uniformly from the 7 kinds
//!   through an injected, seedable RNG
//! - **Matrix rotation**: a clockwise quarter turn on the piece's boolean
//!   matrix; a rotation that collides is rejected as-is (no wall kicks)
//! - **Gravity lock**: a downward move that collides settles the piece into
//!   the board and spawns the lookahead
//! - **Scoring**: `n` lines cleared in one lock award `n * 100 * level`;
//!   level is `lines / 10 + 1`; the gravity interval shrinks 50ms per level
//!   from 1000ms down to a 50ms floor
//! - **Game over**: a spawn that collides with the committed board is
//!   terminal; every later call reports it until a full reset
//!
//! # Example
//!
//! ```
//! use blockfall::core::GameState;
//! use blockfall::types::{GameAction, Outcome};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! let outcome = game.apply_action(GameAction::HardDrop);
//! assert!(matches!(outcome, Outcome::Locked(_)));
//!
//! // Read model for the host's renderer
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.board.len(), 20);
//! ```

pub mod core;
pub mod types;
