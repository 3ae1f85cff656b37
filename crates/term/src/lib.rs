//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders into a plain
//! framebuffer, and the renderer flushes only what changed to the terminal.
//! No widget toolkit is involved, which keeps exact control over the 2:1 cell
//! aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod score_ticker;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{block_rgb, preview_offset, AnchorY, GameView, Viewport, PREVIEW_BOX};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_ticker::ScoreTicker;
