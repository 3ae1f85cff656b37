//! Catalog module - piece shapes, colors and random piece selection
//!
//! Every kind has one fixed matrix in its spawn orientation. Rotation works on
//! the matrix itself (transpose + reverse rows), so there is no rotation-state
//! table and no kick table.
//!
//! Selection is an independent uniform draw per spawn. There is no bag.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Color, PieceKind};

/// Largest matrix side used by any catalog shape
pub const MAX_SHAPE_DIM: usize = 4;

/// A small boolean matrix, at most 4x4.
///
/// Cells outside `rows` x `cols` are always `false`, so two matrices with the
/// same visible content compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from 0/1 rows. Every row must have the same length.
    ///
    /// Panics if the rows are ragged or larger than 4x4; catalog data is
    /// static so this only fires on a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", r);
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is filled. Out of range is `false`.
    pub fn get(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.bits[row as usize][col as usize]
    }

    /// Rotate 90° clockwise: transpose, then reverse rows.
    ///
    /// The result has `rows` and `cols` swapped. Row `i` of the result is
    /// column `i` of `self` read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let rows = self.rows as usize;
        for i in 0..self.cols as usize {
            for j in 0..rows {
                bits[i][j] = self.bits[rows - 1 - j][i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Local (col, row) offsets of all filled cells, row-major.
    pub fn filled(&self) -> ArrayVec<(i8, i8), 16> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.bits[r as usize][c as usize] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }
}

/// Spawn-orientation matrix for a piece kind
pub fn shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// A catalog entry: kind, spawn matrix and color.
///
/// This is what sits in the "next" slot before it becomes the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape(kind),
            color: kind.color(),
        }
    }
}

/// A fresh seed from the thread RNG.
///
/// Front-ends draw the seed themselves so it can be logged and replayed.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Uniform random piece generator
///
/// Seeded sources are deterministic, which the tests and benches rely on.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: StdRng,
}

impl PieceSource {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source from a fresh random seed
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Draw one piece, each kind with probability 1/7
    pub fn random_piece(&mut self) -> Piece {
        let idx = self.rng.gen_range(0..PieceKind::ALL.len());
        Piece::new(PieceKind::ALL[idx])
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dimensions() {
        let dims: Vec<(u8, u8)> = PieceKind::ALL
            .iter()
            .map(|&k| (shape(k).rows(), shape(k).cols()))
            .collect();
        assert_eq!(
            dims,
            vec![(1, 4), (2, 3), (2, 3), (2, 2), (2, 3), (2, 3), (2, 3)]
        );
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).filled().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let t = shape(PieceKind::T).rotated_cw();
        assert_eq!(t, ShapeMatrix::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]));
    }

    #[test]
    fn test_rotate_j_clockwise() {
        // #..      ##
        // ###  ->  #.
        //          #.
        let j = shape(PieceKind::J).rotated_cw();
        assert_eq!(j, ShapeMatrix::from_rows(&[&[1, 1], &[1, 0], &[1, 0]]));
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let i = shape(PieceKind::I).rotated_cw();
        assert_eq!((i.rows(), i.cols()), (4, 1));
        assert_eq!(i.filled().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in PieceKind::ALL {
            let m = shape(kind);
            let back = m.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, m, "{:?}", kind);
        }
    }

    #[test]
    fn test_get_out_of_range_is_false() {
        let o = shape(PieceKind::O);
        assert!(o.get(1, 1));
        assert!(!o.get(2, 0));
        assert!(!o.get(0, 2));
    }

    #[test]
    fn test_piece_new_uses_canonical_color() {
        assert_eq!(Piece::new(PieceKind::I).color, Color::Cyan);
        assert_eq!(Piece::new(PieceKind::Z).color, Color::Red);
    }

    #[test]
    fn test_source_deterministic() {
        let mut a = PieceSource::new(12345);
        let mut b = PieceSource::new(12345);
        for _ in 0..100 {
            assert_eq!(a.random_piece(), b.random_piece());
        }
    }

    #[test]
    fn test_entropy_source_draws_catalog_pieces() {
        let mut source = PieceSource::from_entropy();
        for _ in 0..20 {
            let piece = source.random_piece();
            assert_eq!(piece, Piece::new(piece.kind));
        }
    }

    #[test]
    fn test_source_covers_all_kinds() {
        let mut source = PieceSource::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = source.random_piece().kind;
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_source_allows_repeats() {
        // Independent draws: back-to-back duplicates must show up, unlike a bag.
        let mut source = PieceSource::new(99);
        let draws: Vec<PieceKind> = (0..200).map(|_| source.random_piece().kind).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }
}
