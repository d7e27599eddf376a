//! Read-model snapshot for hosts
//!
//! A `GameSnapshot` is a flat, serde-serializable copy of everything a host
//! needs to render or persist a frame: the committed grid as compact u8
//! markers, the falling piece, the lookahead, and the progress counters.
//! `snapshot_into` refills a host-owned snapshot without allocating.

use serde::{Deserialize, Serialize};

use crate::core::game_state::{ActivePiece, GameState};
use crate::core::pieces::Shape;
use crate::core::scoring::drop_interval_ms;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Grid markers: 0 = empty, 1-7 = piece kind code
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    /// RNG state at capture time (usable as a seed to resume the sequence)
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            phase: Phase::Spawning,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: drop_interval_ms(1),
            seed: 0,
        }
    }
}

impl GameState {
    /// Fill a host-owned snapshot with the current read model
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board().write_u8_grid(&mut out.board);
        out.active = self.active().map(ActiveSnapshot::from);
        out.next = self.next();
        out.phase = self.phase();
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.drop_interval_ms = self.drop_interval_ms();
        out.seed = self.rng_state();
    }

    /// Capture a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
