//! Bounded integer line walk.
//!
//! Tiny branching factor (at most two successors per state), which
//! makes it the clearest world for watching strategy differences:
//! depth-first commits to one direction, breadth-first fans out.

use wayfarer_search::problem::{SearchProblem, Successor};

/// Walk a bounded integer line one step at a time until the goal.
#[derive(Debug, Clone)]
pub struct NumberLine {
    start: i64,
    lower: i64,
    upper: i64,
    goal: i64,
}

impl NumberLine {
    /// Build a line walk. Positions stay within `lower..=upper`;
    /// `start` and `goal` are expected inside the bounds.
    #[must_use]
    pub fn new(start: i64, lower: i64, upper: i64, goal: i64) -> Self {
        Self {
            start,
            lower,
            upper,
            goal,
        }
    }
}

impl SearchProblem for NumberLine {
    type State = i64;
    /// The signed step taken, `-1` or `1`.
    type Action = i64;

    fn initial_state(&self) -> i64 {
        self.start
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &i64) -> Vec<Successor<i64, i64>> {
        let mut out = Vec::with_capacity(2);
        if *state > self.lower {
            out.push(Successor {
                action: -1,
                state: state - 1,
                cost: 1,
            });
        }
        if *state < self.upper {
            out.push(Successor {
                action: 1,
                state: state + 1,
                cost: 1,
            });
        }
        out
    }

    /// Absolute distance to the goal. Admissible for unit steps.
    fn heuristic(&self, state: &i64) -> u64 {
        state.abs_diff(self.goal)
    }
}
