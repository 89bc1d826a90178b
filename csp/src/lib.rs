//! Wayfarer CSP: backtracking constraint satisfaction with ordering
//! heuristics.
//!
//! A caller defines a problem by implementing [`model::Csp`] —
//! variables, per-variable domains, and an immediate consistency
//! predicate over the current partial [`model::Assignment`]. The
//! solver is written once against that contract and never inspects
//! concrete problem types. It runs recursive Try/Check/Recurse/Undo
//! backtracking with pluggable variable ordering (declaration order or
//! minimum-remaining-values), value ordering (domain order or
//! least-constraining-value), and optional forward checking with
//! strict stack-discipline domain restoration.

#![forbid(unsafe_code)]

pub mod error;
pub mod heuristics;
pub mod model;
pub mod policy;
pub mod solver;
