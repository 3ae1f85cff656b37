//! Press-and-hold repeater for terminal environments.
//!
//! Every repeatable button (left, right, down, rotate) fires once on press and
//! then once per repeat period while held. Buttons repeat independently.
//!
//! Terminals that never report key release are handled with a timeout: if no
//! press for a held key arrives within `key_release_timeout_ms`, it is treated
//! as released. The default timeout sits just under the repeat period, so a
//! single tap never repeats there; OS key-repeat presses keep a held key alive.
//! Terminals that do report release should disable the timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{GameAction, HOLD_REPEAT_MS};

/// Repeatable buttons, in channel order
const BUTTONS: [GameAction; 4] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::Rotate,
];

/// Most actions one `update` can emit
pub const MAX_REPEATS_PER_UPDATE: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
struct Channel {
    held: bool,
    last_press: Option<Instant>,
    elapsed_ms: u32,
}

impl Channel {
    fn release(&mut self) {
        self.held = false;
        self.last_press = None;
        self.elapsed_ms = 0;
    }
}

/// Which repeat channel a key drives, if any.
pub fn repeat_button(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K' | 'x' | 'X') => Some(GameAction::Rotate),
        _ => None,
    }
}

fn channel_index(action: GameAction) -> Option<usize> {
    BUTTONS.iter().position(|&b| b == action)
}

/// Tracks held buttons and emits repeated actions.
#[derive(Debug, Clone)]
pub struct HoldRepeater {
    channels: [Channel; 4],
    repeat_ms: u32,
    key_release_timeout_ms: u32,
}

impl HoldRepeater {
    pub fn new() -> Self {
        Self::with_repeat_ms(HOLD_REPEAT_MS)
    }

    /// `repeat_ms` of 0 is treated as 1.
    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        let repeat_ms = repeat_ms.max(1);
        Self {
            channels: [Channel::default(); 4],
            repeat_ms,
            key_release_timeout_ms: repeat_ms.saturating_sub(1).max(1),
        }
    }

    /// Never auto-release; rely on key release events.
    pub fn without_key_release_timeout(self) -> Self {
        self.with_key_release_timeout_ms(u32::MAX)
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn repeat_ms(&self) -> u32 {
        self.repeat_ms
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Whether the button for `action` is currently held.
    pub fn is_held(&self, action: GameAction) -> bool {
        channel_index(action).is_some_and(|i| self.channels[i].held)
    }

    /// Handle a key press.
    ///
    /// Returns the action to apply right away on a fresh press. A press for a
    /// button that is already held (terminal auto-repeat) only refreshes the
    /// release timeout.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = repeat_button(code)?;
        let idx = channel_index(action)?;
        let ch = &mut self.channels[idx];

        ch.last_press = Some(Instant::now());
        if ch.held {
            return None;
        }
        ch.held = true;
        ch.elapsed_ms = 0;
        Some(action)
    }

    /// Terminal auto-repeat for a held key: keep it alive, emit nothing.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(idx) = repeat_button(code).and_then(channel_index) {
            let ch = &mut self.channels[idx];
            if ch.held {
                ch.last_press = Some(Instant::now());
            }
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(idx) = repeat_button(code).and_then(channel_index) {
            self.channels[idx].release();
        }
    }

    /// Stop every repeat (focus loss, game over, restart).
    pub fn cancel_all(&mut self) {
        for ch in &mut self.channels {
            ch.release();
        }
    }

    /// Advance repeat timers and return the actions due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS_PER_UPDATE> {
        self.release_stale(Instant::now());

        let mut actions = ArrayVec::new();
        for (ch, &action) in self.channels.iter_mut().zip(BUTTONS.iter()) {
            if !ch.held {
                continue;
            }
            ch.elapsed_ms = ch.elapsed_ms.saturating_add(elapsed_ms);
            while ch.elapsed_ms >= self.repeat_ms {
                ch.elapsed_ms -= self.repeat_ms;
                if actions.try_push(action).is_err() {
                    break;
                }
            }
        }
        actions
    }

    /// Auto-release when the terminal does not emit release events.
    fn release_stale(&mut self, now: Instant) {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        for ch in &mut self.channels {
            let stale = ch
                .last_press
                .is_some_and(|t| now.saturating_duration_since(t) > timeout);
            if ch.held && stale {
                ch.release();
            }
        }
    }
}

impl Default for HoldRepeater {
    fn default() -> Self {
        Self::new()
    }
}
