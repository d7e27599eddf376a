//! Game state module - the grid engine state machine
//!
//! Ties together board, piece catalog, RNG, and scoring. The engine is purely
//! reactive: the host calls it once per input event and once per elapsed-time
//! tick, and it never drives its own clock. The gravity interval exposed by
//! [`GameState::drop_interval_ms`] is advisory state for the host's scheduler.
//!
//! Lifecycle is an explicit tagged phase (`Spawning -> Falling -> GameOver`)
//! rather than a set of booleans: operations in the wrong phase are rejected
//! with an [`Outcome`] value, never by convention.

use crate::core::pieces::{random_kind, spawn_x, template, Shape};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::core::Board;
use crate::types::{GameAction, LockEvent, LockSummary, Outcome, Phase, PieceKind, Progress};

/// The currently falling piece: an owned shape snapshot plus the board-relative
/// origin (top-left of the shape's bounding box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at its spawn position
    fn at_spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        Self {
            kind,
            x: spawn_x(&shape),
            y: 0,
            shape,
        }
    }

    /// Iterate the piece's occupied cells as absolute board coordinates
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx as i8, self.y + dy as i8))
    }
}

/// Complete engine state: committed board, falling piece, lookahead, progress
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<PieceKind>,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    /// Elapsed-time accumulator consumed by [`tick`](GameState::tick)
    drop_timer_ms: u32,
    /// Last lock/line-clear event (consumed by observers)
    last_event: Option<LockEvent>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game over a pre-filled board.
    ///
    /// Host restore path; also the way seeded-board scenarios are set up in
    /// tests. The board is adopted as-is and the first spawn collides against
    /// whatever it contains.
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            next: None,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer_ms: 0,
            last_event: None,
            rng: SimpleRng::new(seed),
        }
    }

    /// Start the game: spawn the first piece (and the first lookahead)
    pub fn start(&mut self) {
        if self.phase != Phase::Spawning {
            return;
        }
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece, or `None` before start and after game over
    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// The queued lookahead kind (its shape is the catalog template)
    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval; derived from level, consumed by the host's
    /// scheduler rather than by any internal timer
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Progress counters as one read-model value
    pub fn progress(&self) -> Progress {
        Progress {
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_interval_ms: self.drop_interval_ms(),
        }
    }

    /// Take and clear the last lock/line-clear event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn the next piece.
    ///
    /// Promotes the lookahead (drawing one first if unset), places it centered
    /// at the top, and draws a fresh lookahead. A spawn that collides with the
    /// committed board is the terminal condition: the engine transitions to
    /// `GameOver` and returns false. Normally invoked internally at start and
    /// after each lock; public for reset and test drivers.
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if self.active.is_some() {
            // A piece is already falling; nothing to do
            return true;
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => random_kind(&mut self.rng),
        };
        self.next = Some(random_kind(&mut self.rng));

        self.place_spawned(ActivePiece::at_spawn(kind))
    }

    /// Spawn a piece of a chosen kind instead of drawing from the RNG.
    ///
    /// Deterministic entry point for scripted drivers and tests; the lookahead
    /// is drawn as usual if it was unset.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if self.active.is_some() {
            return true;
        }
        if self.next.is_none() {
            self.next = Some(random_kind(&mut self.rng));
        }
        self.place_spawned(ActivePiece::at_spawn(kind))
    }

    fn place_spawned(&mut self, piece: ActivePiece) -> bool {
        if !self.board.fits(&piece.shape, piece.x, piece.y) {
            self.phase = Phase::GameOver;
            return false;
        }
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Move the falling piece by a unit delta.
    ///
    /// Valid deltas are left, right, and down. A blocked lateral move reports
    /// `Blocked` and changes nothing; a blocked downward move means the piece
    /// has reached the floor or the stack and triggers the lock instead.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> Outcome {
        if self.phase == Phase::GameOver {
            return Outcome::GameOver;
        }
        if !matches!((dx, dy), (-1, 0) | (1, 0) | (0, 1)) {
            return Outcome::InvalidOperation;
        }
        let Some(piece) = self.active else {
            return Outcome::InvalidOperation;
        };

        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if self.board.fits(&piece.shape, nx, ny) {
            self.active = Some(ActivePiece { x: nx, y: ny, ..piece });
            Outcome::Moved
        } else if dy > 0 {
            Outcome::Locked(self.lock_active())
        } else {
            Outcome::Blocked
        }
    }

    /// Rotate the falling piece a clockwise quarter turn.
    ///
    /// The rotated shape is tested at the current origin only; if it collides,
    /// the shape is left unchanged and `Blocked` is reported. No offset search
    /// is attempted, and a blocked rotation never locks the piece.
    pub fn rotate(&mut self) -> Outcome {
        if self.phase == Phase::GameOver {
            return Outcome::GameOver;
        }
        let Some(piece) = self.active else {
            return Outcome::InvalidOperation;
        };

        let rotated = piece.shape.rotated_cw();
        if self.board.fits(&rotated, piece.x, piece.y) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..piece
            });
            Outcome::Rotated
        } else {
            Outcome::Blocked
        }
    }

    /// Drop the falling piece to its resting position and lock it.
    ///
    /// Equivalent to repeated downward moves until blocked, compressed into
    /// one atomic step.
    pub fn hard_drop(&mut self) -> Outcome {
        if self.phase == Phase::GameOver {
            return Outcome::GameOver;
        }
        let Some(piece) = self.active else {
            return Outcome::InvalidOperation;
        };

        let mut y = piece.y;
        while self.board.fits(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        self.active = Some(ActivePiece { y, ..piece });
        Outcome::Locked(self.lock_active())
    }

    /// Gravity tick: accumulate elapsed time and take one downward step once
    /// the accumulator reaches the current drop interval.
    ///
    /// Returns `None` when no gravity step fired (including before `start`);
    /// `Some(Outcome::GameOver)` once the engine is terminal.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Outcome> {
        if self.phase == Phase::GameOver {
            return Some(Outcome::GameOver);
        }
        if self.active.is_none() {
            return None;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            return Some(self.move_piece(0, 1));
        }
        None
    }

    /// Apply a host input action.
    ///
    /// `Restart` works in any phase, including `GameOver`; the new game is
    /// seeded from the current RNG state so the piece sequence continues
    /// rather than repeating.
    pub fn apply_action(&mut self, action: GameAction) -> Outcome {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.reset(self.rng_state());
                Outcome::Moved
            }
        }
    }

    /// Full reset: destroy and reconstruct board, progress, and pieces, then
    /// start the new game. The only recovery path out of `GameOver`.
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
        self.start();
    }

    /// Write the active piece into the board, clear lines, update progress,
    /// and spawn the follow-up piece
    fn lock_active(&mut self) -> LockSummary {
        let Some(piece) = self.active.take() else {
            return LockSummary {
                lines_cleared: 0,
                topped_out: false,
            };
        };

        self.board
            .lock_shape(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;

        // Score with the level in effect before this clear is counted
        let score_awarded = line_clear_score(lines_cleared, self.level);
        self.score = self.score.saturating_add(score_awarded);
        self.lines += lines_cleared;
        self.level = level_for_lines(self.lines);

        let topped_out = !self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_awarded,
            topped_out,
        });

        LockSummary {
            lines_cleared,
            topped_out,
        }
    }

    /// Seed view of the RNG state, usable to resume the piece sequence
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
