//! Wayfarer Search: deterministic graph search over explicitly
//! enumerable state spaces.
//!
//! A caller defines a problem by implementing
//! [`problem::SearchProblem`]; the engine drives exploration through a
//! pluggable [`frontier::Frontier`] (LIFO for DFS, FIFO for BFS,
//! best-first for A* and greedy) and returns either an
//! [`engine::Solution`] — the ordered action sequence plus its total
//! cost and the expansion counters — or a typed [`error::SearchError`].
//!
//! # Key types
//!
//! - [`node::Node`] — arena-allocated exploration node with parent links
//! - [`frontier::FrontierKind`] — exploration-order strategy selector
//! - [`problem::SearchProblem`] — the contract a problem author implements
//! - [`policy::SearchPolicy`] — expansion/depth budgets and dedup mode
//! - [`policy::CancelToken`] — cooperative cancellation, polled per expansion

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod problem;
