//! Board module - the game grid and the placement rules that act on it
//!
//! The board is a `width x height` grid where each cell is empty or filled
//! with a piece kind. Cells live in a flat row-major vector.
//! Coordinates: (x, y) where x grows left to right and y grows downward
//! (row 0 is the top, where pieces spawn).
//!
//! The placement operations ([`Board::hard_drop`], [`Board::place`]) never
//! mutate `self`: they return new values so older boards stay valid for any
//! caller still holding them.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::pieces::Tetromino;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Empty board of the configured dimensions
    pub fn empty(rules: &RulesConfig) -> Self {
        Self::new(rules.board_width, rules.board_height)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x as i16 >= self.width as i16 || y < 0 || y as i16 >= self.height as i16
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Iterate rows from top to bottom (for rendering)
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // A zero-width board has no cells, so any chunk size yields no rows.
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Remove every full row, compacting the rows above downward.
    /// Returns the number of rows removed.
    ///
    /// Uses a single bottom-to-top two-pointer pass, so the result is the same
    /// as clearing full rows one at a time from the bottom.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let mut cleared = 0u32;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Lock a piece onto the board at given position with given shape
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        // First check if all positions are valid
        for &(dx, dy) in shape {
            match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(cx), Some(cy)) if self.is_valid(cx, cy) => {}
                _ => return false,
            }
        }

        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }

        true
    }

    /// True if any mino of `piece` is outside the board or on a filled cell.
    /// A mino past the `i8` coordinate range counts as outside.
    pub fn collides(&self, piece: &Tetromino) -> bool {
        match piece.checked_cells() {
            Some(cells) => cells.iter().any(|&(x, y)| !self.is_valid(x, y)),
            None => true,
        }
    }

    /// The piece moved down as far as it can go without colliding.
    ///
    /// A piece that already collides is returned unmoved.
    pub fn hard_drop(&self, piece: Tetromino) -> Tetromino {
        if self.collides(&piece) {
            return piece;
        }
        let mut dropped = piece;
        loop {
            match dropped.shifted(0, 1) {
                Some(next) if !self.collides(&next) => dropped = next,
                _ => return dropped,
            }
        }
    }

    /// A new board with `piece` burned in and full rows removed, along with
    /// the number of rows removed.
    ///
    /// Returns `None` if `piece` collides; a cell is only ever filled by a
    /// placement that fits.
    pub fn place(&self, piece: &Tetromino) -> Option<(Board, u32)> {
        let mut next = self.clone();
        if !next.lock_piece(&piece.shape(), piece.x, piece.y, piece.kind) {
            return None;
        }
        let lines = next.clear_full_rows();
        Some((next, lines))
    }

    /// True if `piece`, placed at its spawn position, already collides.
    /// This is the loss condition.
    pub fn is_terminal(&self, piece: &Tetromino) -> bool {
        self.collides(piece)
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let height = cells_2d.len();
        let width = cells_2d.first().map(Vec::len).unwrap_or(0);
        assert!(cells_2d.iter().all(|row| row.len() == width));

        Self {
            width: width as u8,
            height: height as u8,
            cells: cells_2d.into_iter().flatten().collect(),
        }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(&RulesConfig::default())
    }
}
