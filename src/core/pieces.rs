//! Piece catalog - canonical tetromino shapes and rotation
//!
//! Shapes are small boolean matrices with explicit width/height, matching the
//! classic representation (I is 1x4, O is 2x2, the rest are 2x3). Rotation is
//! a clockwise quarter turn computed on the matrix itself (transpose and
//! reverse), so a piece's orientation lives entirely in its current `Shape`.
//!
//! The catalog hands out owned copies (`Shape` is `Copy`); rotating an active
//! piece never touches the canonical templates.

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any catalog shape in any orientation
pub const MAX_SHAPE_DIM: usize = 4;

/// A piece shape: a `height x width` boolean matrix in a fixed 4x4 backing
/// store. Cells outside `width`/`height` are always false, so two shapes with
/// the same occupied pattern compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    width: u8,
    height: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                grid[r][c] = *v != 0;
            }
        }
        Self {
            width: rows[0].len() as u8,
            height: rows.len() as u8,
            grid,
        }
    }

    /// Width of the bounding box in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the bounding box in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (row, col) is occupied
    pub fn filled(&self, row: u8, col: u8) -> bool {
        row < self.height && col < self.width && self.grid[row as usize][col as usize]
    }

    /// Iterate occupied cells as (col, row) offsets from the shape origin
    pub fn cells(self) -> impl Iterator<Item = (u8, u8)> {
        (0..self.height).flat_map(move |r| {
            (0..self.width).filter_map(move |c| self.grid[r as usize][c as usize].then_some((c, r)))
        })
    }

    /// Number of occupied cells
    pub fn cell_count(self) -> usize {
        self.cells().count()
    }

    /// Clockwise quarter turn: for an `r x c` source, the `c x r` result has
    /// `dest[col][rows - 1 - row] = src[row][col]`.
    pub fn rotated_cw(self) -> Shape {
        let (h, w) = (self.height as usize, self.width as usize);
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..h {
            for c in 0..w {
                if self.grid[r][c] {
                    grid[c][h - 1 - r] = true;
                }
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            grid,
        }
    }
}

/// Canonical (unrotated) shape for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Spawn column for a shape: horizontally centered on the board
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// Draw a kind uniformly at random from the injected source
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}
