//! Best-first solver for the circular sixteen-tile puzzle
//!
//! Tiles 1..=16 sit on a 4x4 torus with no blank cell. A move cyclically
//! rotates one row left or right, or one column up or down. The solver
//! searches for a short sequence of moves that restores row-major order.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Board representation, rotations and scrambles
pub mod puzzle;
/// Heuristic search over board states
pub mod search;

pub use io::error::{Result, SolverError};
pub use puzzle::{Board, GOAL, Move};
pub use search::{Estimator, SearchConfig, SearchEngine, SearchOutcome, Solution};
