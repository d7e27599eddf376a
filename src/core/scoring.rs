//! Scoring module - line-clear points and level/speed progression
//!
//! Rules:
//! - Clearing `n` lines in one lock awards `n * 100 * level`, where `level` is
//!   the level in effect before the clear is counted.
//! - Level is derived from total lines: `lines / 10 + 1` (level starts at 1).
//! - The gravity interval shrinks 50ms per level from a 1000ms base, with a
//!   50ms floor so it never reaches zero.

use crate::types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORE_BASE,
};

/// Points for clearing `lines` rows at the given (pre-clear) level
/// lines: number of lines cleared in one lock (1-4)
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    lines * LINE_SCORE_BASE * level
}

/// Level derived from total lines cleared (1-based)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds), clamped at the floor
pub fn drop_interval_ms(level: u32) -> u32 {
    let decay = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(decay).max(DROP_FLOOR_MS)
}
