//! Best-known cost per board for a single search

use crate::puzzle::board::Board;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Cheapest known number of moves from the initial board to each board seen
///
/// Values only ever decrease for a given key. The map lives for one search.
#[derive(Debug, Default)]
pub struct CostMap {
    costs: HashMap<Board, u32>,

    /// Update statistics
    pub stats: CostStats,
}

/// Counters describing how the cost map was updated
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostStats {
    /// Boards recorded for the first time
    pub inserted: usize,
    /// Boards whose cost was lowered
    pub improved: usize,
    /// Offers rejected because a path at least as cheap was known
    pub rejected: usize,
}

impl CostMap {
    /// Create a map holding only the initial board at cost zero
    pub fn starting_at(initial: Board) -> Self {
        let mut costs = HashMap::new();
        costs.insert(initial, 0);
        Self {
            costs,
            stats: CostStats::default(),
        }
    }

    /// Known cost of a board
    pub fn get(&self, board: &Board) -> Option<u32> {
        self.costs.get(board).copied()
    }

    /// Record `cost` for `board` if it beats the known cost
    ///
    /// Returns whether the map changed.
    pub fn offer(&mut self, board: Board, cost: u32) -> bool {
        match self.costs.entry(board) {
            Entry::Occupied(mut entry) => {
                if cost < *entry.get() {
                    entry.insert(cost);
                    self.stats.improved += 1;
                    true
                } else {
                    self.stats.rejected += 1;
                    false
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(cost);
                self.stats.inserted += 1;
                true
            }
        }
    }

    /// Number of boards recorded
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether no board is recorded
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
