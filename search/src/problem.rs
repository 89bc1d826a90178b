//! Search problem contract trait.

use std::hash::Hash;

/// One outgoing edge from a state: the action taken, the state it
/// leads to, and the non-negative step cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub action: A,
    pub state: S,
    pub cost: u64,
}

/// Trait implemented by problem authors; the engine calls nothing else.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state yields the
///   same successors in the same order. Expansion order, and with it
///   `nodes_expanded`, is reproducible only under this condition.
/// - Step costs are unsigned, so `cost >= 0` holds by construction.
/// - `heuristic` must never overestimate the true remaining cost
///   (admissible) for A* to return minimum-cost paths, and should
///   satisfy `h(n) <= cost(n, n') + h(n')` for every successor
///   (consistent) so no state ever needs re-expansion. Neither
///   property is verified by the engine; violating them silently
///   forfeits the optimality guarantee, nothing more.
pub trait SearchProblem {
    /// One configuration of the world. Equality and hashing must
    /// cover exactly the domain-relevant attributes.
    type State: Clone + Eq + Hash;
    /// The label of a move between states.
    type Action: Clone;

    /// The state the search begins from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All edges leaving `state`, deterministically ordered.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Estimated remaining cost from `state` to a goal.
    ///
    /// The default null heuristic turns best-first search into
    /// uniform-cost search (`f = g`).
    fn heuristic(&self, _state: &Self::State) -> u64 {
        0
    }
}
