//! Best-first search from a scrambled board to the goal
//!
//! The frontier is ordered by cost so far plus an estimate of the remaining
//! cost, with a cost map suppressing successors already reached as cheaply.
//! Two details set this apart from textbook A*:
//! - the goal test runs on generated successors, so the route is returned as
//!   soon as a successor matches, without checking that the expanded entry
//!   still carries the cheapest known cost;
//! - the estimators are not admissible.
//!
//! Routes are therefore short but not guaranteed shortest.

use crate::io::configuration::PROGRESS_INTERVAL;
use crate::puzzle::board::Board;
use crate::puzzle::moves::{Move, apply_all, successors};
use crate::search::cost::CostMap;
use crate::search::frontier::{Frontier, MoveTrail};
use crate::search::heuristic::Estimator;
use log::{debug, info, trace};
use std::fmt;
use std::time::{Duration, Instant};

/// Search parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Estimator used for frontier priorities
    pub estimator: Estimator,
    /// Stop after this many expansions
    pub max_expansions: Option<usize>,
    /// Stop once this much wall-clock time has passed
    pub time_limit: Option<Duration>,
    /// Expansions between monitor reports (0 disables reporting)
    pub progress_interval: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            estimator: Estimator::default(),
            max_expansions: None,
            time_limit: None,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

/// Sequence of moves leading from a board to the goal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    /// Wrap a move sequence
    pub const fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Moves in the order they are applied
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the board was already solved
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay the moves on `initial` and check that they reach the goal
    pub fn verify(&self, initial: &Board) -> bool {
        apply_all(initial, &self.moves).is_goal()
    }
}

/// Route text: each move preceded by a single space
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            write!(f, " {mv}")?;
        }
        Ok(())
    }
}

/// Budget that stopped a search early
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutoffReason {
    /// `max_expansions` was reached
    ExpansionLimit,
    /// `time_limit` elapsed
    TimeLimit,
}

impl fmt::Display for CutoffReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpansionLimit => write!(f, "expansion limit reached"),
            Self::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

/// Details of an early stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cutoff {
    /// Which budget ran out
    pub reason: CutoffReason,
    /// Nodes expanded before stopping
    pub expanded: usize,
}

/// Result of one search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A successor matched the goal
    Solved(Solution),
    /// The frontier emptied without reaching the goal
    Unsolvable,
    /// A budget stopped the search before either of the above
    Incomplete(Cutoff),
}

impl SearchOutcome {
    /// The solution, if one was found
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::Unsolvable | Self::Incomplete(_) => None,
        }
    }

    /// Whether a solution was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Counters describing a search in progress or just finished
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries popped and expanded
    pub expanded: usize,
    /// Successors generated
    pub generated: usize,
    /// Entries pushed onto the frontier (the initial entry included)
    pub pushed: usize,
    /// Entries currently queued
    pub frontier_len: usize,
    /// Largest frontier size seen
    pub frontier_peak: usize,
    /// Boards recorded in the cost map
    pub boards_seen: usize,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Receives periodic statistics while a search runs
pub trait SearchMonitor {
    /// Called every `progress_interval` expansions
    fn report(&mut self, stats: &SearchStats);
}

/// Monitor that ignores every report
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentMonitor;

impl SearchMonitor for SilentMonitor {
    fn report(&mut self, _stats: &SearchStats) {}
}

/// Runs searches with a fixed configuration
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,

    /// Statistics of the most recent search
    pub stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a route from `initial` to the goal
    pub fn solve(&mut self, initial: &Board) -> SearchOutcome {
        self.solve_with(initial, &mut SilentMonitor)
    }

    /// Search for a route, reporting progress to `monitor`
    pub fn solve_with(
        &mut self,
        initial: &Board,
        monitor: &mut dyn SearchMonitor,
    ) -> SearchOutcome {
        let started = Instant::now();
        self.stats = SearchStats::default();

        if initial.is_goal() {
            info!("initial board is already solved");
            self.stats.elapsed = started.elapsed();
            return SearchOutcome::Solved(Solution::default());
        }

        debug!(
            "searching with {:?} estimator, expansion limit {:?}, time limit {:?}",
            self.config.estimator, self.config.max_expansions, self.config.time_limit
        );

        let mut costs = CostMap::starting_at(*initial);
        let mut frontier = Frontier::new();
        let mut trail = MoveTrail::new();
        frontier.push(0, *initial, None);
        self.stats.pushed = 1;

        while let Some(entry) = frontier.pop() {
            if let Some(reason) = self.budget_exhausted(started) {
                self.record(&frontier, &costs, started);
                info!(
                    "search stopped after {} expansions: {reason}",
                    self.stats.expanded
                );
                return SearchOutcome::Incomplete(Cutoff {
                    reason,
                    expanded: self.stats.expanded,
                });
            }

            self.stats.expanded += 1;
            // Read at expansion time; the cost may have dropped since the push
            let cost = costs.get(&entry.board).unwrap_or(0);
            trace!(
                "expanding priority {} cost {cost} sequence {}",
                entry.priority, entry.sequence
            );

            for (next, mv) in successors(&entry.board) {
                self.stats.generated += 1;

                if next.is_goal() {
                    let mut moves = trail.moves(entry.trail);
                    moves.push(mv);
                    self.record(&frontier, &costs, started);
                    info!(
                        "solved in {} moves after {} expansions ({} boards seen)",
                        moves.len(),
                        self.stats.expanded,
                        self.stats.boards_seen
                    );
                    return SearchOutcome::Solved(Solution::new(moves));
                }

                let next_cost = cost + 1;
                if costs.offer(next, next_cost) {
                    let priority = next_cost + self.config.estimator.estimate(&next);
                    let link = trail.extend(entry.trail, mv);
                    frontier.push(priority, next, Some(link));
                    self.stats.pushed += 1;
                }
            }

            let interval = self.config.progress_interval;
            if interval > 0 && self.stats.expanded % interval == 0 {
                self.record(&frontier, &costs, started);
                monitor.report(&self.stats);
            }
        }

        self.record(&frontier, &costs, started);
        info!(
            "frontier exhausted after {} expansions without reaching the goal",
            self.stats.expanded
        );
        SearchOutcome::Unsolvable
    }

    fn budget_exhausted(&self, started: Instant) -> Option<CutoffReason> {
        if self
            .config
            .max_expansions
            .is_some_and(|limit| self.stats.expanded >= limit)
        {
            return Some(CutoffReason::ExpansionLimit);
        }
        if self
            .config
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Some(CutoffReason::TimeLimit);
        }
        None
    }

    fn record(&mut self, frontier: &Frontier, costs: &CostMap, started: Instant) {
        self.stats.frontier_len = frontier.len();
        self.stats.frontier_peak = frontier.peak;
        self.stats.boards_seen = costs.len();
        self.stats.elapsed = started.elapsed();
        trace!(
            "cost map: {} inserted, {} improved, {} rejected",
            costs.stats.inserted, costs.stats.improved, costs.stats.rejected
        );
    }
}
