//! Seeded random scrambles of the solved board

use crate::io::configuration::MOVES_PER_BOARD;
use crate::puzzle::board::{Board, GOAL};
use crate::puzzle::moves::{Move, Step};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded source of random boards for demos, tests and benchmarks
pub struct Scrambler {
    rng: StdRng,
}

impl Scrambler {
    /// Create a deterministic scrambler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of the sixteen moves uniformly
    pub fn random_move(&mut self) -> Move {
        let index = self.rng.random_range(0..MOVES_PER_BOARD);
        Move::all()
            .nth(index)
            .unwrap_or(Move::row(0, Step::Forward))
    }

    /// Apply `count` random moves to the goal
    ///
    /// Returns the scrambled board and the moves that produced it. A move that
    /// would immediately undo the previous one is redrawn, so short scrambles
    /// do not collapse back towards the goal.
    pub fn scramble(&mut self, count: usize) -> (Board, Vec<Move>) {
        let mut board = GOAL;
        let mut applied: Vec<Move> = Vec::with_capacity(count);

        while applied.len() < count {
            let mv = self.random_move();
            if applied.last().is_some_and(|last| last.inverse() == mv) {
                continue;
            }
            board = mv.apply(&board);
            applied.push(mv);
        }

        (board, applied)
    }
}
