//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 1`, 0)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default frame period (~60 FPS) |
//! | `BASE_DROP_MS` | 700 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 20 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity interval floor |
//! | `HOLD_REPEAT_MS` | 100 | Press-and-hold repeat period |
//! | `SCORE_COUNTUP_STEP_MS` | 20 | Score display count-up step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.color(), Color::Purple);
//! assert!(Cell::Vacant.is_vacant());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of a freshly spawned piece's top-left matrix cell
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Row of a freshly spawned piece's top-left matrix cell
pub const SPAWN_Y: i8 = 0;

/// Default frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at the start of a game
pub const BASE_DROP_MS: u32 = 700;

/// Gravity interval reduction applied on every level up
pub const DROP_INTERVAL_STEP_MS: u32 = 20;

/// Gravity interval never drops below this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Score needed per level
pub const LEVEL_SCORE: u32 = 50;

/// Points per cleared line before bonuses
pub const LINE_BASE_SCORE: u32 = 10;

/// Bonus on top of the base score, indexed by lines cleared in one lock.
///
/// Clears of more than four lines get no bonus.
pub const LINE_CLEAR_BONUS: [u32; 5] = [0, 0, 5, 15, 30];

/// Period of press-and-hold repeated actions
pub const HOLD_REPEAT_MS: u32 = 100;

/// Period of the score display count-up animation
pub const SCORE_COUNTUP_STEP_MS: u32 = 20;

/// The seven piece kinds
///
/// Each kind has one fixed color:
/// - **I**: Cyan, straight bar
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Canonical color of this kind
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Block colors. The renderer decides the actual RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A cell on the game board
///
/// `Vacant` is the empty sentinel; a filled cell holds exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Vacant,
    Filled(Color),
}

impl Cell {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Cell::Vacant)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_vacant()
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Vacant => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Column delta for this direction
    pub fn dx(self) -> i8 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

/// Game actions that can be applied to a session
///
/// These are produced by the input layer and dispatched by
/// `GameSession::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Immediate one-row gravity drop
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a new game (from any state)
    Start,
}

/// Session lifecycle
///
/// `NotStarted` → `Running` on start; `Running` → `GameOver` when a fresh
/// piece collides at spawn. `GameOver` is terminal until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

/// Event emitted by the engine after a piece locks.
///
/// Consumed by the front-end for logging and score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub score: u32,
    pub level: u32,
    pub level_up: bool,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_DROP_MS, 700);
        assert_eq!(DROP_INTERVAL_STEP_MS, 20);
        assert_eq!(DROP_INTERVAL_MIN_MS, 100);
        assert_eq!(HOLD_REPEAT_MS, 100);
        assert_eq!(SCORE_COUNTUP_STEP_MS, 20);
    }

    #[test]
    fn spawn_is_left_of_center() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn cell_helpers() {
        assert!(Cell::Vacant.is_vacant());
        assert!(!Cell::Filled(Color::Red).is_vacant());
        assert_eq!(Cell::Filled(Color::Red).color(), Some(Color::Red));
        assert_eq!(Cell::default(), Cell::Vacant);
    }
}
