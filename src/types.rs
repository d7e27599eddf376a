//! Core types shared across the engine
//! This module contains pure data types with no behavior beyond small accessors

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (in milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_STEP_MS: u32 = 50;
pub const DROP_FLOOR_MS: u32 = 50;

/// Scoring constants
pub const LINE_SCORE_BASE: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;

/// An RGB color identifier for rendering a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Compact cell marker (1-7); 0 is reserved for empty cells
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Display color for this kind
    pub const fn color(self) -> Color {
        match self {
            PieceKind::I => Color { r: 0, g: 255, b: 255 },
            PieceKind::O => Color { r: 255, g: 255, b: 0 },
            PieceKind::T => Color { r: 128, g: 0, b: 128 },
            PieceKind::S => Color { r: 0, g: 255, b: 0 },
            PieceKind::Z => Color { r: 255, g: 0, b: 0 },
            PieceKind::J => Color { r: 0, g: 0, b: 255 },
            PieceKind::L => Color { r: 255, g: 165, b: 0 },
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Engine lifecycle phase
///
/// `Spawning` covers the window before the first piece is placed; once a game
/// starts, lock and respawn happen in one step, so external callers only ever
/// observe `Falling` or `GameOver` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Spawning,
    Falling,
    GameOver,
}

/// Host-facing input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    /// Full reset, reseeding from the current RNG state
    Restart,
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockSummary {
    /// Full rows removed by this lock (0-4)
    pub lines_cleared: u32,
    /// True when the follow-up spawn was blocked and the game ended
    pub topped_out: bool,
}

/// Result of a single engine operation
///
/// Blocked moves, blocked rotations, and game over are ordinary values here,
/// not errors; the engine has no failure mode beyond these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The piece moved to the candidate position
    Moved,
    /// The piece now has the rotated shape
    Rotated,
    /// The candidate placement collided; nothing changed
    Blocked,
    /// A downward move or hard drop settled the piece
    Locked(LockSummary),
    /// The engine is terminal; the operation was a no-op
    GameOver,
    /// Out-of-contract call (non-unit delta, or no piece has spawned yet)
    InvalidOperation,
}

/// Lock/line-clear event consumed by observers
///
/// Hosts poll this after driving the engine to trigger effects or, when
/// `topped_out` is set, to hand the final score to their high-score store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_awarded: u32,
    pub topped_out: bool,
}

/// Progress counters exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}
