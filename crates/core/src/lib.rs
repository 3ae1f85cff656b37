//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the game rules and state. It never touches the terminal,
//! a clock or the filesystem: time comes in through [`GameSession::tick`] and
//! the front-end reads state back through getters or a [`GameSnapshot`].
//!
//! - **Deterministic**: a seeded session replays the same pieces
//! - **Testable**: every rule is covered by unit tests
//! - **Allocation-free**: the board is a flat array and piece cells live in
//!   `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision, merge and line clearing
//! - [`catalog`]: the seven shape matrices, clockwise rotation and the uniform
//!   piece source
//! - [`piece`]: the active piece (matrix plus position)
//! - [`scoring`]: line-clear points, levels and gravity speed-up
//! - [`session`]: game lifecycle, gravity timing and input actions
//! - [`snapshot`]: read-only copy for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn with their matrix's top-left cell at column 4, row 0
//! - Rotation is clockwise only and has no wall kicks
//! - A piece locks the moment it cannot fall further (no lock delay)
//! - Clearing 1-4 lines scores 10, 25, 45 or 70 points
//! - Every 50 points is a level; each level up cuts 20ms off the gravity
//!   interval, down to 100ms
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(700);
//!
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod catalog;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{entropy_seed, shape, Piece, PieceSource, ShapeMatrix};
pub use piece::PieceState;
pub use scoring::{advance_level, level_for_score, line_clear_score, LevelStep};
pub use session::{DropOutcome, GameSession};
pub use snapshot::{BoardRows, GameSnapshot};
