//! Game session module - owns the complete state of one game
//!
//! This ties together the board, the active and next pieces, the piece source
//! and scoring. It handles gravity timing, input-driven moves and rotations,
//! line clears, leveling and the game lifecycle.
//!
//! Time is passed in by the caller (`tick(elapsed_ms)`), so the session never
//! reads a clock and runs identically under tests.

use crate::catalog::{Piece, PieceSource};
use crate::piece::PieceState;
use crate::scoring::{advance_level, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked and the next piece spawned
    Locked { lines: u32 },
    /// The piece locked and the replacement collided at spawn
    ToppedOut { lines: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: Option<PieceState>,
    next: Option<Piece>,
    source: PieceSource,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time accumulated since the last gravity drop
    drop_timer_ms: u32,
    phase: Phase,
    /// Last lock event (consumed by the front-end)
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create a session whose pieces come from a seeded source
    pub fn new(seed: u64) -> Self {
        Self::with_source(PieceSource::new(seed))
    }

    /// Create a session from a fresh random seed
    pub fn from_entropy() -> Self {
        Self::with_source(PieceSource::from_entropy())
    }

    pub fn with_source(source: PieceSource) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            source,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            phase: Phase::NotStarted,
            last_event: None,
        }
    }

    /// Start a fresh game. Valid from any phase.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.last_event = None;

        let current = PieceState::spawn(self.source.random_piece());
        self.next = Some(self.source.random_piece());
        self.current = Some(current);

        self.phase = if self.board.collides(&current) {
            Phase::GameOver
        } else {
            Phase::Running
        };
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<PieceState> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.current = self.current;
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Drops the piece once the time since the last drop reaches the current
    /// interval, then restarts the clock. Returns `None` when no drop happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if self.phase != Phase::Running {
            return None;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return None;
        }

        self.drop_timer_ms = 0;
        self.gravity_drop()
    }

    /// Drop the piece one row right now (down input).
    ///
    /// Leaves the gravity clock alone.
    pub fn soft_drop(&mut self) -> Option<DropOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        self.gravity_drop()
    }

    /// Shift the piece one column. Rejected moves leave the piece unchanged.
    pub fn apply_move(&mut self, direction: MoveDirection) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let moved = current.shifted(direction.dx(), 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.current = Some(moved);
        true
    }

    /// Rotate the piece clockwise in place. No kicks: a colliding rotation is
    /// discarded and the previous shape kept.
    pub fn apply_rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let rotated = current.rotated();
        if self.board.collides(&rotated) {
            return false;
        }
        self.current = Some(rotated);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.apply_move(MoveDirection::Left),
            GameAction::MoveRight => self.apply_move(MoveDirection::Right),
            GameAction::SoftDrop => self.soft_drop().is_some(),
            GameAction::Rotate => self.apply_rotate(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// One row of gravity: fall, or lock and bring in the next piece.
    fn gravity_drop(&mut self) -> Option<DropOutcome> {
        let current = self.current?;

        let fallen = current.shifted(0, 1);
        if !self.board.collides(&fallen) {
            self.current = Some(fallen);
            return Some(DropOutcome::Fell);
        }

        self.board.merge(&current);
        let lines = self.board.clear_lines();
        let (score_delta, level_up) = self.award_lines(lines);

        let next = self
            .next
            .take()
            .unwrap_or_else(|| self.source.random_piece());
        let spawned = PieceState::spawn(next);
        self.next = Some(self.source.random_piece());
        self.current = Some(spawned);

        let game_over = self.board.collides(&spawned);
        if game_over {
            self.phase = Phase::GameOver;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines,
            score_delta,
            score: self.score,
            level: self.level,
            level_up,
            game_over,
        });

        Some(if game_over {
            DropOutcome::ToppedOut { lines }
        } else {
            DropOutcome::Locked { lines }
        })
    }

    /// Add line-clear points and recompute the level once.
    /// Returns (points added, leveled up).
    fn award_lines(&mut self, lines: u32) -> (u32, bool) {
        if lines == 0 {
            return (0, false);
        }

        let delta = line_clear_score(lines);
        self.score = self.score.saturating_add(delta);
        self.lines = self.lines.saturating_add(lines);

        let step = advance_level(self.score, self.level, self.drop_interval_ms);
        self.level = step.level;
        self.drop_interval_ms = step.drop_interval_ms;

        (delta, step.leveled_up)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
