//! Concrete example worlds for the wayfarer engines.
//!
//! Each world implements one of the engine contracts and nothing
//! else; the engines never learn about these types. The fixtures
//! here double as the integration-test and benchmark workloads.

#![forbid(unsafe_code)]

pub mod grid_maze;
pub mod map_coloring;
pub mod number_line;
