//! Exploration-order strategies over arena node indices.
//!
//! One `Frontier` type backed by three stores: a `Vec` stack (LIFO,
//! drives DFS), a `VecDeque` queue (FIFO, drives BFS), and a
//! `BinaryHeap` keyed by [`FrontierKey`] (best-first, drives A* and
//! greedy). The heap is a max-heap, so entries wrap their key in
//! `Reverse` to pop the lowest `f_cost` first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::FrontierKey;

/// Which exploration order the engine should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// Last in, first out. Drives depth-first search.
    Lifo,
    /// First in, first out. Drives breadth-first search.
    Fifo,
    /// Minimum [`FrontierKey`] first with `f = g + h`. Drives A*;
    /// with a null heuristic it reduces to uniform-cost search.
    BestFirst,
    /// Minimum [`FrontierKey`] first with `f = h` alone. Drives
    /// greedy best-first search — fast, no optimality guarantee.
    Greedy,
}

/// A heap entry pairing an ordering key with an arena index.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    index: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Entries {
    Lifo(Vec<usize>),
    Fifo(VecDeque<usize>),
    BestFirst(BinaryHeap<HeapEntry>),
}

/// The frontier: pending arena node indices in exploration order.
#[derive(Debug)]
pub struct Frontier {
    entries: Entries,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier of the given kind.
    #[must_use]
    pub fn new(kind: FrontierKind) -> Self {
        let entries = match kind {
            FrontierKind::Lifo => Entries::Lifo(Vec::new()),
            FrontierKind::Fifo => Entries::Fifo(VecDeque::new()),
            FrontierKind::BestFirst | FrontierKind::Greedy => {
                Entries::BestFirst(BinaryHeap::new())
            }
        };
        Self {
            entries,
            high_water: 0,
        }
    }

    /// Insert a node index. `key` is consulted only by the best-first
    /// store; stack and queue frontiers order purely by insertion.
    pub fn push(&mut self, key: FrontierKey, index: usize) {
        match &mut self.entries {
            Entries::Lifo(stack) => stack.push(index),
            Entries::Fifo(queue) => queue.push_back(index),
            Entries::BestFirst(heap) => heap.push(HeapEntry {
                key: Reverse(key),
                index,
            }),
        }
        let size = self.len();
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the next node index, or `None` when the
    /// frontier is exhausted. The engine surfaces exhaustion as
    /// "no solution exists".
    #[must_use]
    pub fn pop(&mut self) -> Option<usize> {
        match &mut self.entries {
            Entries::Lifo(stack) => stack.pop(),
            Entries::Fifo(queue) => queue.pop_front(),
            Entries::BestFirst(heap) => heap.pop().map(|e| e.index),
        }
    }

    /// Current number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Lifo(stack) => stack.len(),
            Entries::Fifo(queue) => queue.len(),
            Entries::BestFirst(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size over the whole search.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
