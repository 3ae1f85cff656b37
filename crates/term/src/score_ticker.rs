//! Score count-up animation for the side panel.
//!
//! The displayed score climbs toward the real score one point per step. A
//! target below the displayed value (a restart) is shown immediately.

use crate::types::SCORE_COUNTUP_STEP_MS;

#[derive(Debug, Clone)]
pub struct ScoreTicker {
    displayed: u32,
    target: u32,
    step_ms: u32,
    elapsed_ms: u32,
}

impl ScoreTicker {
    pub fn new() -> Self {
        Self::with_step_ms(SCORE_COUNTUP_STEP_MS)
    }

    /// `step_ms` of 0 is treated as 1.
    pub fn with_step_ms(step_ms: u32) -> Self {
        Self {
            displayed: 0,
            target: 0,
            step_ms: step_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_counting(&self) -> bool {
        self.displayed < self.target
    }

    pub fn set_target(&mut self, target: u32) {
        if target == self.target {
            return;
        }
        if target < self.displayed {
            self.displayed = target;
            self.elapsed_ms = 0;
        }
        self.target = target;
    }

    /// Advance the animation. Returns true if the displayed value changed.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_counting() {
            self.elapsed_ms = 0;
            return false;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let steps = (self.elapsed_ms / self.step_ms).min(self.target - self.displayed);
        if steps == 0 {
            return false;
        }

        self.displayed += steps;
        self.elapsed_ms -= steps * self.step_ms;
        if !self.is_counting() {
            self.elapsed_ms = 0;
        }
        true
    }
}

impl Default for ScoreTicker {
    fn default() -> Self {
        Self::new()
    }
}
