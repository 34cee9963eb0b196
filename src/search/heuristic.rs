//! Remaining-cost estimates used to order the search frontier
//!
//! The base measure is a per-tile distance that understands the board wraps
//! around between the outermost rows and columns. Distances are collected in
//! a 4x4 grid indexed by each tile's goal cell; the grid can then be scored
//! for how uniformly misplacement is spread along single lines.
//!
//! None of the estimators is proven admissible, so a search ordered by them
//! may return a longer route than necessary.

use crate::io::configuration::{GRID_SIDE, TILE_COUNT};
use crate::puzzle::board::{Board, GOAL};
use clap::ValueEnum;

/// Per-tile distances indexed by goal row and goal column
pub type DistanceGrid = [[u32; GRID_SIDE]; GRID_SIDE];

/// Selectable remaining-cost estimators
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Estimator {
    /// Sum of the wrap-aware tile distances
    #[default]
    Manhattan,
    /// Tile distances plus the row/column uniformity bonus
    Uniformity,
    /// Tile distances plus the number of misplaced tiles
    Misplaced,
}

impl Estimator {
    /// Estimated number of moves from `board` to the goal
    pub fn estimate(self, board: &Board) -> u32 {
        let grid = distance_grid(board);
        let base = grid_sum(&grid);
        match self {
            Self::Manhattan => base,
            Self::Uniformity => base + uniformity_bonus(&grid),
            Self::Misplaced => base + misplaced_tiles(board),
        }
    }
}

const fn is_extreme_pair(a: usize, b: usize) -> bool {
    (a == 0 && b == GRID_SIDE - 1) || (a == GRID_SIDE - 1 && b == 0)
}

/// Distance between two cells, given as row-major indices
///
/// A tile sitting on the opposite outer row from its goal is one column
/// rotation away from that row, plus the plain column offset. The same holds
/// for opposite outer columns. Every other pair uses the ordinary Manhattan
/// distance, without wrapping.
pub const fn tile_distance(current: usize, goal: usize) -> u32 {
    let (current_row, current_col) = (current / GRID_SIDE, current % GRID_SIDE);
    let (goal_row, goal_col) = (goal / GRID_SIDE, goal % GRID_SIDE);

    let distance = if is_extreme_pair(current_row, goal_row) {
        1 + current_col.abs_diff(goal_col)
    } else if is_extreme_pair(current_col, goal_col) {
        1 + current_row.abs_diff(goal_row)
    } else {
        current_row.abs_diff(goal_row) + current_col.abs_diff(goal_col)
    };
    distance as u32
}

/// Goal cell of a tile value
///
/// Values outside 1..=16 can only come from unchecked boards and are clamped
/// onto the grid.
fn goal_index(tile: u8) -> usize {
    usize::from(tile).saturating_sub(1).min(TILE_COUNT - 1)
}

/// Distance of every tile from its goal, stored at the tile's goal cell
pub fn distance_grid(board: &Board) -> DistanceGrid {
    let mut grid: DistanceGrid = [[0; GRID_SIDE]; GRID_SIDE];

    for (current, &tile) in board.tiles().iter().enumerate() {
        let goal = goal_index(tile);
        let distance = tile_distance(current, goal);
        if let Some(cell) = grid
            .get_mut(goal / GRID_SIDE)
            .and_then(|row| row.get_mut(goal % GRID_SIDE))
        {
            *cell = distance;
        }
    }

    grid
}

/// Sum of all cells of a distance grid
pub fn grid_sum(grid: &DistanceGrid) -> u32 {
    grid.iter().flatten().sum()
}

/// Bonus for one line of the distance grid
///
/// Scores the number of distinct values in the line (zero included), as long
/// as the line is not dominated by zeros: one value that is not zero scores 1,
/// two values with fewer than three zeros score 2, three values with fewer
/// than two zeros score 3, and four values with no zero score 4.
pub fn line_bonus(line: &[u32; GRID_SIDE]) -> u32 {
    let zeros = line.iter().filter(|&&d| d == 0).count();
    let mut values = *line;
    values.sort_unstable();
    let mut distinct = values.to_vec();
    distinct.dedup();

    match distinct.len() {
        1 if zeros < GRID_SIDE => 1,
        2 if zeros < 3 => 2,
        3 if zeros < 2 => 3,
        4 if zeros < 1 => 4,
        _ => 0,
    }
}

/// Sum of the line bonuses over the four rows and four columns of the grid
pub fn uniformity_bonus(grid: &DistanceGrid) -> u32 {
    let rows: u32 = grid.iter().map(line_bonus).sum();

    let columns: u32 = (0..GRID_SIDE)
        .map(|col| {
            let mut line = [0; GRID_SIDE];
            for (slot, row) in line.iter_mut().zip(grid.iter()) {
                *slot = row.get(col).copied().unwrap_or(0);
            }
            line_bonus(&line)
        })
        .sum();

    rows + columns
}

/// Number of cells not holding their goal tile
pub fn misplaced_tiles(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(GOAL.tiles().iter())
        .filter(|(tile, goal)| tile != goal)
        .count() as u32
}
