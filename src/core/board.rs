//! Board module - manages the committed grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a piece
//! kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//!
//! Cells above the board (y < 0) are a legal transient position for a falling
//! shape but are never written: `lock_shape` silently drops them.

use arrayvec::ArrayVec;

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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
            cells: [None; BOARD_SIZE],
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

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
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
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision test for a shape placed with its origin at (x, y).
    ///
    /// A placement fits unless an occupied shape cell maps to a column outside
    /// the board, a row below the floor, or an occupied board cell. Rows above
    /// the board (y < 0) are always permitted, so a freshly rotated tall piece
    /// may legally overhang the top edge.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().all(|(dx, dy)| {
            let px = x + dx as i8;
            let py = y + dy as i8;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.is_occupied(px, py)
        })
    }

    /// Write a shape's occupied cells into the board with the given marker.
    ///
    /// Cells that map above the board (y < 0) are dropped instead of written;
    /// the persisted grid never sees a negative row index.
    pub fn lock_shape(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            let px = x + dx as i8;
            let py = y + dy as i8;
            if py >= 0 {
                self.set(px, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (ascending). Rows above a cleared row shift down one step,
    /// preserving their relative order; fresh empty rows enter at the top, so
    /// the board always keeps its full cell count.
    ///
    /// Uses a two-pointer compaction with zero allocation beyond the result.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // Not full: move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows enter at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        // Ascending row order
        cleared_rows.reverse();
        cleared_rows
    }

    /// Number of occupied cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid as compact u8 markers (0 = empty, 1-7 = piece kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = match self.cells[y * BOARD_WIDTH as usize + x] {
                    Some(kind) => kind.code(),
                    None => 0,
                };
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
