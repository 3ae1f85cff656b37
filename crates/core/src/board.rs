//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is vacant or filled with a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Collision deliberately ignores board contents above the top edge (y < 0) so a
//! piece may overlap the ceiling, but side walls and the floor always count.

use crate::piece::PieceState;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Vacant; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_filled()))
    }

    /// One row as a slice, or None below the floor
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Whether `piece` overlaps a wall, the floor, or a filled cell.
    ///
    /// Cells above the top edge are checked against the side walls only.
    pub fn collides(&self, piece: &PieceState) -> bool {
        piece.cells().iter().any(|&(x, y)| {
            if x < 0 || x >= i16::from(BOARD_WIDTH) || y >= i16::from(BOARD_HEIGHT) {
                return true;
            }
            // In range here, so the narrowing is lossless.
            y >= 0 && self.is_occupied(x as i8, y as i8)
        })
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Callers check `collides` first. Cells outside the grid are skipped.
    pub fn merge(&mut self, piece: &PieceState) {
        for (x, y) in piece.cells() {
            if let (Ok(x), Ok(y)) = (i8::try_from(x), i8::try_from(y)) {
                self.set(x, y, Cell::Filled(piece.color));
            }
        }
    }

    /// Remove row `y` and shift all rows above it down by one.
    /// The top row becomes vacant.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(Cell::Vacant);
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Scans bottom to top. After removing row `y` the rows above have moved
    /// down, so `y` is examined again before moving up.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid out as rows (for snapshots)
    pub fn write_rows(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (row, src) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_WIDTH as usize)) {
            row.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Vacant);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
