//! Solver failure taxonomy.
//!
//! Terminal outcomes carry the counters accumulated up to the failure
//! point, so an exhausted or cancelled run is still measurable.

use std::fmt;

use crate::solver::SolverStats;

/// Why a solve did not produce a complete assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The problem definition is malformed, e.g. a declared variable
    /// with an empty domain. Detected before any search happens.
    InvalidProblem {
        /// Human-readable description of the defect.
        detail: String,
    },
    /// The policy is malformed and was rejected before searching.
    InvalidPolicy {
        /// Human-readable description of the defect.
        detail: String,
    },
    /// The search space was exhausted without a complete consistent
    /// assignment. Definitive given a correct problem definition.
    NoSolution {
        /// Counters at exhaustion.
        stats: SolverStats,
    },
    /// The assignment budget ran out before the search space was
    /// exhausted. Says nothing about solvability.
    BudgetExhausted {
        /// Counters at the point the budget tripped.
        stats: SolverStats,
    },
    /// A cancellation request was observed between assignments.
    Cancelled {
        /// Counters at the cancellation point.
        stats: SolverStats,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProblem { detail } => {
                write!(f, "invalid problem: {detail}")
            }
            Self::InvalidPolicy { detail } => {
                write!(f, "invalid policy: {detail}")
            }
            Self::NoSolution { stats } => write!(
                f,
                "no consistent complete assignment exists ({} assignments tried, {} backtracks)",
                stats.assignments_tried, stats.backtracks
            ),
            Self::BudgetExhausted { stats } => write!(
                f,
                "assignment budget exhausted after {} assignments",
                stats.assignments_tried
            ),
            Self::Cancelled { stats } => write!(
                f,
                "solve cancelled after {} assignments",
                stats.assignments_tried
            ),
        }
    }
}

impl std::error::Error for SolverError {}
