use crate::catalog::Piece;
use crate::piece::PieceState;
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardRows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Read-only copy of everything the front-end draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardRows,
    pub current: Option<PieceState>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub phase: Phase,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Vacant; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
            phase: Phase::NotStarted,
        }
    }
}
