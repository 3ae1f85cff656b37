//! Scoring module - line-clear points, level thresholds and gravity speed-up
//!
//! Points: `lines * 10` plus a flat bonus for multi-line clears
//! (2 → +5, 3 → +15, 4 → +30), so 1..4 lines score 10, 25, 45, 70.
//!
//! Leveling is recomputed once per score change and advances by at most one
//! level per recomputation, even if the score already qualifies for more.

use crate::types::{
    DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LEVEL_SCORE, LINE_BASE_SCORE, LINE_CLEAR_BONUS,
};

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: u32) -> u32 {
    let bonus = LINE_CLEAR_BONUS
        .get(lines as usize)
        .copied()
        .unwrap_or(0);
    lines.saturating_mul(LINE_BASE_SCORE).saturating_add(bonus)
}

/// Level the score qualifies for: `score / 50 + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE + 1
}

/// Gravity interval after one level up, floored at 100ms
pub fn next_drop_interval(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(DROP_INTERVAL_STEP_MS)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Level and gravity after a score change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStep {
    pub level: u32,
    pub drop_interval_ms: u32,
    pub leveled_up: bool,
}

/// Recompute the level once after the score changed.
///
/// If the score qualifies for a higher level, the level rises by exactly one
/// and gravity speeds up by one step. Otherwise nothing changes.
pub fn advance_level(score: u32, level: u32, drop_interval_ms: u32) -> LevelStep {
    if level_for_score(score) > level {
        LevelStep {
            level: level + 1,
            drop_interval_ms: next_drop_interval(drop_interval_ms),
            leveled_up: true,
        }
    } else {
        LevelStep {
            level,
            drop_interval_ms,
            leveled_up: false,
        }
    }
}
