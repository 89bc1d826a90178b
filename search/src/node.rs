//! Core search node types and path reconstruction.

/// An immutable exploration node.
///
/// Nodes live in a flat arena (`Vec<Node<S, A>>`) owned by the engine
/// and reference their parent by arena index. Because children are
/// always appended after their parent, parent links point strictly
/// earlier in the arena and the parent chain can never form a cycle.
/// The arena index doubles as the node's creation order.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    /// The state this node wraps. States carry no history.
    pub state: S,
    /// Arena index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// The action that produced this state from the parent, `None`
    /// for the root.
    pub action: Option<A>,
    /// Cumulative cost g(n) from the root. Monotonically
    /// non-decreasing along any parent chain since step costs are
    /// unsigned.
    pub path_cost: u64,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> Node<S, A> {
    /// Create the root node for a search.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }
}

/// The best-first frontier ordering key: `(f_cost, depth, creation_order)`.
///
/// Lower `f_cost` first, then shallower depth, then older creation
/// order. The creation-order tail makes ties deterministic (FIFO among
/// equal keys), which is what makes `nodes_expanded` counts
/// reproducible run to run. The tie-break policy is fixed, not
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub depth: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// Reconstruct the action sequence from the root to `goal`, in order.
///
/// Walks parent links backwards and reverses. The root's `action` is
/// `None` and contributes nothing.
#[must_use]
pub fn solution_actions<S, A: Clone>(arena: &[Node<S, A>], goal: usize) -> Vec<A> {
    let mut actions = Vec::new();
    let mut current = Some(goal);
    while let Some(idx) = current {
        if let Some(action) = &arena[idx].action {
            actions.push(action.clone());
        }
        current = arena[idx].parent;
    }
    actions.reverse();
    actions
}

/// Reconstruct the state sequence from the root to `goal`, inclusive.
#[must_use]
pub fn solution_states<S: Clone, A>(arena: &[Node<S, A>], goal: usize) -> Vec<S> {
    let mut states = Vec::new();
    let mut current = Some(goal);
    while let Some(idx) = current {
        states.push(arena[idx].state.clone());
        current = arena[idx].parent;
    }
    states.reverse();
    states
}
