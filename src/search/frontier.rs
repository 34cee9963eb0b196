//! Search frontier ordered by priority and the arena of move paths behind it

use crate::puzzle::board::Board;
use crate::puzzle::moves::Move;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Handle to one link of a [`MoveTrail`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrailId(usize);

#[derive(Clone, Copy, Debug)]
struct Link {
    parent: Option<TrailId>,
    mv: Move,
}

/// Arena of move paths shared between frontier entries
///
/// Each path is stored as its last move plus a link to the path it extends,
/// so pushing a successor costs one link instead of a copy of the route.
#[derive(Debug, Default)]
pub struct MoveTrail {
    links: Vec<Link>,
}

impl MoveTrail {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the path `parent` followed by `mv`
    ///
    /// `None` stands for the empty path at the initial board.
    pub fn extend(&mut self, parent: Option<TrailId>, mv: Move) -> TrailId {
        self.links.push(Link { parent, mv });
        TrailId(self.links.len() - 1)
    }

    /// Moves of the path ending at `tail`, first move first
    pub fn moves(&self, tail: Option<TrailId>) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut cursor = tail;
        while let Some(TrailId(index)) = cursor {
            let Some(link) = self.links.get(index) else {
                break;
            };
            moves.push(link.mv);
            cursor = link.parent;
        }
        moves.reverse();
        moves
    }
}

/// One not-yet-expanded search state
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    /// Cost so far plus the estimate at push time
    pub priority: u32,
    /// Insertion order, used to break priority ties
    pub sequence: u64,
    /// Board reached by this entry
    pub board: Board,
    /// Path from the initial board
    pub trail: Option<TrailId>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

/// Reversed so the max-heap pops the lowest priority, oldest entry first
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of search states
///
/// Orders by priority alone; equal priorities come out in insertion order.
/// Board contents and paths never take part in the ordering.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    /// Largest number of entries held at once
    pub peak: usize,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a board with its priority and path
    pub fn push(&mut self, priority: u32, board: Board, trail: Option<TrailId>) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            board,
            trail,
        });
        self.next_sequence += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    /// Remove the lowest-priority entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
