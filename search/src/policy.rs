//! Search policy and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SearchError;

/// Expansion/depth budgets and the duplicate-handling mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. Exceeding it terminates the
    /// search with a budget error, distinct from "no solution".
    pub max_expansions: u64,
    /// Depth cutoff: children deeper than this are never generated.
    pub max_depth: u32,
    /// Duplicate-state handling mode.
    pub dedup: DedupPolicy,
}

impl SearchPolicy {
    /// Validate budgets before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 1_000_000,
            max_depth: 100_000,
            dedup: DedupPolicy::Graph,
        }
    }
}

/// Duplicate-state handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Graph search: keep an explored set and expand each state at
    /// most once. Required for termination on state spaces with
    /// cycles. Default.
    Graph,
    /// Tree search: no explored set. Only sound on strict trees; on
    /// cyclic spaces the search may run until a budget stops it.
    Tree,
}

/// Cooperative cancellation signal, polled before each expansion.
///
/// Cloned tokens share the flag, so a token handed to another thread
/// can stop a search in progress. An observed cancellation surfaces
/// as [`SearchError::Cancelled`], never as "no solution".
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
