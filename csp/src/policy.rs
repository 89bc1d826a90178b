//! Solver configuration with eager validation.

use crate::error::SolverError;
use crate::heuristics::{ValueOrdering, VarOrdering};

/// Bounds and heuristic choices for a single solve.
///
/// Validated once up front; a rejected policy never starts a search.
#[derive(Debug, Clone, Copy)]
pub struct SolverPolicy {
    /// How the next unassigned variable is chosen.
    pub var_ordering: VarOrdering,
    /// The order candidate values are tried in.
    pub value_ordering: ValueOrdering,
    /// Prune neighbor domains after each tentative assignment and
    /// fail fast when any domain empties. Prunes are restored exactly
    /// on backtrack.
    pub forward_checking: bool,
    /// Hard cap on tentative assignments before the solve aborts with
    /// a budget error.
    pub max_assignments: u64,
}

impl Default for SolverPolicy {
    fn default() -> Self {
        Self {
            var_ordering: VarOrdering::Declaration,
            value_ordering: ValueOrdering::Domain,
            forward_checking: false,
            max_assignments: 10_000_000,
        }
    }
}

impl SolverPolicy {
    /// Reject configurations that could never make progress.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidPolicy`] when `max_assignments`
    /// is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.max_assignments == 0 {
            return Err(SolverError::InvalidPolicy {
                detail: "max_assignments must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}
