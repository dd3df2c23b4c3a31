//! Proof obligations and the min-priority queue that drives path construction.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use pdr_formula::LiteralSet;

/// A proof task `(state, i)`: either extend `state` to a state modelling `L_{i-1}` in one
/// step, or prove unreachability and strengthen `L_i`.
///
/// The parent chain is a lineage (one parent per obligation, no sharing of descendants), so
/// `Rc` is enough to let a popped-and-requeued obligation and its freshly created successor
/// share the same ancestry without cloning it.
#[derive(Debug)]
pub struct Obligation {
    pub state: LiteralSet,
    pub priority: usize,
    pub parent: Option<Rc<Obligation>>,
}

impl Obligation {
    pub fn new(state: LiteralSet, priority: usize, parent: Option<Rc<Obligation>>) -> Obligation {
        debug_assert!(state.is_cube());
        Obligation {
            state,
            priority,
            parent,
        }
    }
}

/// Orders obligations so the queue pops the *smallest* priority first (a min-priority
/// queue), inverting `BinaryHeap`'s default max-heap behaviour.
impl PartialEq for Obligation {
    fn eq(&self, other: &Obligation) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Obligation {}

impl PartialOrd for Obligation {
    fn partial_cmp(&self, other: &Obligation) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Obligation {
    fn cmp(&self, other: &Obligation) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

/// A min-priority queue of obligations, ordered by ascending `priority`.
#[derive(Default)]
pub struct ObligationQueue {
    heap: BinaryHeap<Rc<Obligation>>,
}

impl ObligationQueue {
    pub fn new() -> ObligationQueue {
        ObligationQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, obligation: Rc<Obligation>) {
        self.heap.push(obligation);
    }

    pub fn pop(&mut self) -> Option<Rc<Obligation>> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
