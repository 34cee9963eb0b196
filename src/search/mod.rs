//! Heuristic best-first search over board states
//!
//! This module contains:
//! - Remaining-cost estimators
//! - The frontier priority queue and its shared move-path arena
//! - The best-known cost map
//! - The search loop itself

/// Cheapest known cost per board
pub mod cost;
/// Search loop, configuration and outcomes
pub mod engine;
/// Priority queue of pending states and the move-path arena
pub mod frontier;
/// Remaining-cost estimators
pub mod heuristic;

pub use engine::{SearchConfig, SearchEngine, SearchOutcome, Solution};
pub use heuristic::Estimator;
