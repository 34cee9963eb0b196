//! Board representation and the rotations that act on it

/// Fixed-size permutation board and its row/column rotations
pub mod board;
/// Move labels, inversion and successor generation
pub mod moves;
/// Seeded random scrambles of the solved board
pub mod scramble;

pub use board::{Board, GOAL};
pub use moves::{Axis, Move, Step};
