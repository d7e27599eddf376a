//! Core game logic - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, input devices, timers, or I/O,
//! making it:
//!
//! - **Deterministic**: the same seed produces the identical piece sequence
//! - **Reactive**: the host drives every input event and gravity tick
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 committed grid with the collision primitive, lock
//!   writes, and full-row clearing
//! - [`pieces`]: the piece catalog - boolean-matrix shapes for the 7 kinds,
//!   clockwise matrix rotation, spawn placement, uniform random selection
//! - [`rng`]: seedable LCG injected into the engine for piece draws
//! - [`scoring`]: line-clear points, level derivation, gravity interval
//! - [`game_state`]: the engine state machine (spawn, move, rotate, hard
//!   drop, lock, tick)
//! - [`snapshot`]: serializable read model for rendering and persistence

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{random_kind, template, Shape};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
