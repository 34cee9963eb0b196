//! Puzzle constants and runtime configuration defaults

/// Number of cells along each side of the board
pub const GRID_SIDE: usize = 4;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Number of elementary moves available from any board (rows and columns, both directions)
pub const MOVES_PER_BOARD: usize = 2 * 2 * GRID_SIDE;

// Default values for configurable parameters
/// Fixed seed for reproducible scrambles
pub const DEFAULT_SEED: u64 = 42;

/// Default number of random moves applied by the scrambler
pub const DEFAULT_SCRAMBLE_MOVES: usize = 12;

// Monitors are notified on this cadence rather than on every expansion
/// Number of node expansions between progress reports
pub const PROGRESS_INTERVAL: usize = 1024;

// Progress display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Input and output settings
/// Extension of board files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Line printed when the frontier is exhausted without reaching the goal
pub const NO_SOLUTION_MESSAGE: &str = "no solution";
/// Prefix of the line printed when a search budget stops the search early
pub const INCOMPLETE_MESSAGE: &str = "incomplete";
