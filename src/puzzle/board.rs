//! Fixed-size board for the circular sixteen-tile puzzle
//!
//! A board is a permutation of the tiles 1..=16 laid out row-major on a 4x4
//! torus. Boards are small `Copy` values; every rotation yields a new board
//! and leaves the original untouched.

use crate::io::configuration::{GRID_SIDE, TILE_COUNT};
use crate::io::error::{Result, invalid_board};
use crate::puzzle::moves::{Move, Step};
use std::fmt;

/// Row-major arrangement of the sixteen tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; TILE_COUNT],
}

/// The solved arrangement, tiles in ascending row-major order
pub const GOAL: Board = Board {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
};

impl Board {
    /// Build a board, checking that the tiles are a permutation of 1..=16
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if a tile is outside 1..=16 or appears twice
    pub fn new(tiles: [u8; TILE_COUNT]) -> Result<Self> {
        let mut seen: u32 = 0;
        for (position, &tile) in tiles.iter().enumerate() {
            if tile == 0 || tile as usize > TILE_COUNT {
                return Err(invalid_board(&format!(
                    "tile {tile} at position {position} is outside 1..={TILE_COUNT}"
                )));
            }
            let bit = 1u32 << (tile - 1);
            if seen & bit != 0 {
                return Err(invalid_board(&format!(
                    "tile {tile} appears more than once"
                )));
            }
            seen |= bit;
        }
        Ok(Self { tiles })
    }

    /// Build a board without the permutation check
    ///
    /// Boards holding repeated tiles can never reach [`GOAL`]; searching one
    /// ends in an unsolvable outcome once its reachable arrangements run out.
    pub const fn new_unchecked(tiles: [u8; TILE_COUNT]) -> Self {
        Self { tiles }
    }

    /// Tiles in row-major order
    pub const fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Iterate over the four rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks_exact(GRID_SIDE)
    }

    /// Whether this board is the solved arrangement
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Cyclically shift one row by a single cell
    ///
    /// `Step::Forward` moves every tile one cell right with the last tile
    /// wrapping to the front; `Step::Backward` shifts left. Row indices wrap
    /// modulo the grid side.
    pub fn rotate_row(&self, row: usize, step: Step) -> (Self, Move) {
        let row = row % GRID_SIDE;
        let mut tiles = self.tiles;
        if let Some(line) = tiles.chunks_exact_mut(GRID_SIDE).nth(row) {
            shift_line(line, step);
        }
        (Self { tiles }, Move::row(row, step))
    }

    /// Cyclically shift one column by a single cell
    ///
    /// `Step::Forward` moves every tile one cell down with the bottom tile
    /// wrapping to the top; `Step::Backward` shifts up.
    pub fn rotate_col(&self, col: usize, step: Step) -> (Self, Move) {
        let col = col % GRID_SIDE;
        let mut line = [0u8; GRID_SIDE];
        for (slot, &tile) in line
            .iter_mut()
            .zip(self.tiles.iter().skip(col).step_by(GRID_SIDE))
        {
            *slot = tile;
        }
        shift_line(&mut line, step);

        let mut tiles = self.tiles;
        for (cell, &tile) in tiles
            .iter_mut()
            .skip(col)
            .step_by(GRID_SIDE)
            .zip(line.iter())
        {
            *cell = tile;
        }
        (Self { tiles }, Move::column(col, step))
    }
}

impl Default for Board {
    fn default() -> Self {
        GOAL
    }
}

fn shift_line(line: &mut [u8], step: Step) {
    match step {
        Step::Forward => line.rotate_right(1),
        Step::Backward => line.rotate_left(1),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|tile| format!("{tile:3}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
