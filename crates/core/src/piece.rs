//! Piece state - the active falling piece
//!
//! Holds a rotatable copy of a catalog matrix plus the board position of the
//! matrix's top-left cell. Moves and rotations return new values; the engine
//! decides whether to keep them.

use arrayvec::ArrayVec;

use crate::catalog::{Piece, ShapeMatrix};
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceState {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl PieceState {
    /// Place a catalog piece at the spawn position
    pub fn spawn(piece: Piece) -> Self {
        Self::at(piece, SPAWN_X, SPAWN_Y)
    }

    pub fn at(piece: Piece, x: i8, y: i8) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            color: piece.color,
            x,
            y,
        }
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Same position, shape rotated 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates (x, y) of every filled cell.
    ///
    /// Widened to `i16` so positions near the `i8` limits never overflow.
    pub fn cells(&self) -> ArrayVec<(i16, i16), 16> {
        let (x, y) = (i16::from(self.x), i16::from(self.y));
        self.shape
            .filled()
            .iter()
            .map(|&(c, r)| (x + i16::from(c), y + i16::from(r)))
            .collect()
    }
}
