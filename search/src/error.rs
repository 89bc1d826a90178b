//! Typed search errors.
//!
//! Every failure is an explicit value. Exhaustion, budgets, and
//! cancellation each carry the counter snapshot at termination so a
//! failed run is still benchmarkable, and a caller can always tell
//! "no solution exists" apart from "the search was stopped".

use crate::engine::SearchStats;

/// Why a search returned without a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier drained without reaching a goal. A normal,
    /// expected outcome, not a crash.
    NoSolution { stats: SearchStats },
    /// The expansion budget was spent before the frontier drained.
    BudgetExhausted { stats: SearchStats },
    /// Cooperative cancellation was observed.
    Cancelled { stats: SearchStats },
    /// The policy was malformed; rejected before any search step.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSolution { stats } => {
                write!(
                    f,
                    "no solution exists ({} nodes expanded)",
                    stats.nodes_expanded
                )
            }
            Self::BudgetExhausted { stats } => {
                write!(
                    f,
                    "expansion budget exhausted after {} nodes",
                    stats.nodes_expanded
                )
            }
            Self::Cancelled { stats } => {
                write!(
                    f,
                    "search cancelled after {} nodes expanded",
                    stats.nodes_expanded
                )
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
