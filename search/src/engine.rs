//! Search entry point and expansion loop.
//!
//! One generic loop serves all four strategies; the [`FrontierKind`]
//! decides the exploration order and how the priority key is built
//! (`g + h` for best-first, `h` alone for greedy). The goal test runs
//! when a node is removed from the frontier, which is what makes the
//! best-first result cost-optimal under an admissible heuristic.

use std::collections::{HashMap, HashSet};

use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierKind};
use crate::node::{solution_actions, solution_states, FrontierKey, Node};
use crate::policy::{CancelToken, DedupPolicy, SearchPolicy};
use crate::problem::SearchProblem;

/// Counters tracked across one search invocation.
///
/// Returned with every outcome, success or failure — comparative
/// `nodes_expanded` counts are the primary observable of this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub nodes_expanded: u64,
    /// Child nodes created and inserted into the frontier.
    pub nodes_generated: u64,
    /// Nodes or successors discarded as duplicates of explored or
    /// cheaper-known states.
    pub duplicates_suppressed: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: usize,
    /// Deepest node expanded.
    pub max_depth_reached: u32,
}

/// A successful search outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A> {
    /// Ordered actions from the initial state to the goal.
    pub actions: Vec<A>,
    /// The state sequence the actions trace, initial state inclusive.
    pub states: Vec<S>,
    /// Cumulative cost of the path.
    pub total_cost: u64,
    /// Counters at termination.
    pub stats: SearchStats,
}

/// Run a search with the default (never-cancelled) token.
///
/// # Errors
///
/// See [`solve_with_cancel`].
pub fn solve<P: SearchProblem>(
    problem: &P,
    kind: FrontierKind,
    policy: &SearchPolicy,
) -> Result<Solution<P::State, P::Action>, SearchError> {
    solve_with_cancel(problem, kind, policy, &CancelToken::new())
}

/// Run a search, polling `cancel` before each expansion.
///
/// Deterministic: the same problem, kind, and policy produce the same
/// solution and the same counters, because successor enumeration is
/// contract-deterministic and frontier ties break by creation order.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation
///   (pre-flight; no search step is taken).
/// - [`SearchError::NoSolution`] when the frontier drains first.
/// - [`SearchError::BudgetExhausted`] when `max_expansions` is spent.
/// - [`SearchError::Cancelled`] when the token fires mid-search.
pub fn solve_with_cancel<P: SearchProblem>(
    problem: &P,
    kind: FrontierKind,
    policy: &SearchPolicy,
    cancel: &CancelToken,
) -> Result<Solution<P::State, P::Action>, SearchError> {
    policy.validate()?;

    let mut arena: Vec<Node<P::State, P::Action>> = Vec::new();
    let mut frontier = Frontier::new(kind);
    let mut explored: HashSet<P::State> = HashSet::new();
    // Best-first only: cheapest known g per state, for lazy deletion
    // of superseded frontier entries.
    let mut best_cost: HashMap<P::State, u64> = HashMap::new();
    let mut stats = SearchStats::default();
    let mut next_creation: u64 = 0;

    let root_state = problem.initial_state();
    let root_key = FrontierKey {
        f_cost: priority_heuristic(problem, kind, &root_state),
        depth: 0,
        creation_order: next_creation,
    };
    next_creation += 1;
    if kind == FrontierKind::BestFirst {
        best_cost.insert(root_state.clone(), 0);
    }
    arena.push(Node::root(root_state));
    frontier.push(root_key, 0);
    stats.nodes_generated += 1;

    loop {
        if cancel.is_cancelled() {
            stats.frontier_high_water = frontier.high_water();
            return Err(SearchError::Cancelled { stats });
        }

        let Some(index) = frontier.pop() else {
            // EmptyFrontier is internal: surfaced as "no solution".
            stats.frontier_high_water = frontier.high_water();
            return Err(SearchError::NoSolution { stats });
        };

        if problem.is_goal(&arena[index].state) {
            stats.frontier_high_water = frontier.high_water();
            return Ok(Solution {
                actions: solution_actions(&arena, index),
                states: solution_states(&arena, index),
                total_cost: arena[index].path_cost,
                stats,
            });
        }

        // Duplicate-state pruning on removal: a state expanded once is
        // never expanded again in graph mode.
        if policy.dedup == DedupPolicy::Graph && explored.contains(&arena[index].state) {
            stats.duplicates_suppressed += 1;
            continue;
        }
        // Lazy deletion: a superseded best-first entry is recognised by
        // its stale (higher) path cost.
        if kind == FrontierKind::BestFirst {
            if let Some(&best) = best_cost.get(&arena[index].state) {
                if arena[index].path_cost > best {
                    stats.duplicates_suppressed += 1;
                    continue;
                }
            }
        }

        if stats.nodes_expanded >= policy.max_expansions {
            stats.frontier_high_water = frontier.high_water();
            return Err(SearchError::BudgetExhausted { stats });
        }

        if policy.dedup == DedupPolicy::Graph {
            explored.insert(arena[index].state.clone());
        }
        stats.nodes_expanded += 1;
        let depth = arena[index].depth;
        let g = arena[index].path_cost;
        if depth > stats.max_depth_reached {
            stats.max_depth_reached = depth;
        }

        for succ in problem.successors(&arena[index].state) {
            let child_depth = depth + 1;
            if child_depth > policy.max_depth {
                continue;
            }
            let child_cost = g.saturating_add(succ.cost);

            if policy.dedup == DedupPolicy::Graph && explored.contains(&succ.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            if kind == FrontierKind::BestFirst {
                // Requeue only strictly cheaper paths; equal-or-worse
                // ones are duplicates.
                if let Some(&best) = best_cost.get(&succ.state) {
                    if child_cost >= best {
                        stats.duplicates_suppressed += 1;
                        continue;
                    }
                }
                best_cost.insert(succ.state.clone(), child_cost);
            }

            let key = FrontierKey {
                f_cost: child_key_cost(problem, kind, &succ.state, child_cost),
                depth: child_depth,
                creation_order: next_creation,
            };
            next_creation += 1;
            let child_index = arena.len();
            arena.push(Node {
                state: succ.state,
                parent: Some(index),
                action: Some(succ.action),
                path_cost: child_cost,
                depth: child_depth,
            });
            frontier.push(key, child_index);
            stats.nodes_generated += 1;
        }
    }
}

/// Priority contribution of the heuristic for the root node.
fn priority_heuristic<P: SearchProblem>(problem: &P, kind: FrontierKind, state: &P::State) -> u64 {
    match kind {
        FrontierKind::BestFirst | FrontierKind::Greedy => problem.heuristic(state),
        FrontierKind::Lifo | FrontierKind::Fifo => 0,
    }
}

/// The f-cost a child enters the frontier with: `g + h` for A*,
/// `h` alone for greedy, unused for stack/queue frontiers.
fn child_key_cost<P: SearchProblem>(
    problem: &P,
    kind: FrontierKind,
    state: &P::State,
    g: u64,
) -> u64 {
    match kind {
        FrontierKind::BestFirst => g.saturating_add(problem.heuristic(state)),
        FrontierKind::Greedy => problem.heuristic(state),
        FrontierKind::Lifo | FrontierKind::Fifo => 0,
    }
}
