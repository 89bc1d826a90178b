//! Shared fixtures and runners for the wayfarer benchmark suites.

#![forbid(unsafe_code)]

use wayfarer_csp::heuristics::{ValueOrdering, VarOrdering};
use wayfarer_csp::policy::SolverPolicy;
use wayfarer_csp::solver::{CspSolution, SolverStats};
use wayfarer_search::engine::{solve as search_solve, Solution};
use wayfarer_search::frontier::FrontierKind;
use wayfarer_search::policy::SearchPolicy;
use wayfarer_worlds::grid_maze::{GridMaze, Move};
use wayfarer_worlds::map_coloring::MapColoring;

/// Every search strategy, with a stable display name.
pub const STRATEGIES: [(&str, FrontierKind); 4] = [
    ("bfs", FrontierKind::Fifo),
    ("dfs", FrontierKind::Lifo),
    ("astar", FrontierKind::BestFirst),
    ("greedy", FrontierKind::Greedy),
];

/// Named solver configurations worth comparing.
#[must_use]
pub fn solver_configurations() -> Vec<(&'static str, SolverPolicy)> {
    vec![
        ("declaration", SolverPolicy::default()),
        (
            "mrv",
            SolverPolicy {
                var_ordering: VarOrdering::MinRemainingValues,
                ..SolverPolicy::default()
            },
        ),
        (
            "mrv_lcv",
            SolverPolicy {
                var_ordering: VarOrdering::MinRemainingValues,
                value_ordering: ValueOrdering::LeastConstraining,
                ..SolverPolicy::default()
            },
        ),
        (
            "mrv_forward_checking",
            SolverPolicy {
                var_ordering: VarOrdering::MinRemainingValues,
                forward_checking: true,
                ..SolverPolicy::default()
            },
        ),
    ]
}

/// The maze workload every search bench runs against.
#[must_use]
pub fn maze_fixture() -> GridMaze {
    GridMaze::benchmark_maze()
}

/// The coloring workload every solver bench runs against.
#[must_use]
pub fn coloring_fixture() -> MapColoring {
    MapColoring::australia()
}

/// Solve the maze fixture with one strategy.
///
/// # Panics
///
/// Panics if the fixture becomes unsolvable; benchmark workload
/// failures are fatal.
#[must_use]
pub fn run_maze(maze: &GridMaze, kind: FrontierKind) -> Solution<(usize, usize), Move> {
    search_solve(maze, kind, &SearchPolicy::default()).expect("maze fixture is solvable")
}

/// Solve the coloring fixture with one configuration.
///
/// # Panics
///
/// Panics if the fixture becomes unsolvable.
#[must_use]
pub fn run_coloring(map: &MapColoring, policy: SolverPolicy) -> CspSolution<String, String> {
    wayfarer_csp::solver::solve(map, policy).expect("coloring fixture is solvable")
}

/// Prove the two-color triangle unsolvable, returning the effort it
/// took.
///
/// # Panics
///
/// Panics if the solver stops claiming unsatisfiability.
#[must_use]
pub fn run_unsolvable_triangle() -> SolverStats {
    match wayfarer_csp::solver::solve(&MapColoring::unsolvable_triangle(), SolverPolicy::default())
    {
        Err(wayfarer_csp::error::SolverError::NoSolution { stats }) => stats,
        other => panic!("triangle fixture must be unsolvable, got {other:?}"),
    }
}
