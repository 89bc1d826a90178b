//! Strategy guarantees locked against the shipped worlds.

use property_tests::assert_legal_maze_walk;
use wayfarer_search::engine::solve;
use wayfarer_search::frontier::FrontierKind;
use wayfarer_search::policy::SearchPolicy;
use wayfarer_worlds::grid_maze::GridMaze;
use wayfarer_worlds::number_line::NumberLine;

#[test]
fn bfs_minimizes_action_count() {
    // Goal 6 steps right: no shorter action sequence exists.
    let line = NumberLine::new(0, -10, 10, 6);
    let solution = solve(&line, FrontierKind::Fifo, &SearchPolicy::default()).unwrap();
    assert_eq!(solution.actions.len(), 6);
    assert_eq!(solution.actions, vec![1; 6]);
}

#[test]
fn astar_is_cost_optimal_with_an_admissible_heuristic() {
    let maze = GridMaze::benchmark_maze();
    let blind = solve(&maze, FrontierKind::Fifo, &SearchPolicy::default()).unwrap();
    let guided = solve(&maze, FrontierKind::BestFirst, &SearchPolicy::default()).unwrap();

    assert_eq!(guided.total_cost, blind.total_cost);
    assert_legal_maze_walk(&maze, &guided);
}

#[test]
fn astar_expands_no_more_than_bfs() {
    let maze = GridMaze::benchmark_maze();
    let blind = solve(&maze, FrontierKind::Fifo, &SearchPolicy::default()).unwrap();
    let guided = solve(&maze, FrontierKind::BestFirst, &SearchPolicy::default()).unwrap();

    assert!(guided.stats.nodes_expanded <= blind.stats.nodes_expanded);
}

#[test]
fn dfs_solutions_are_valid_even_when_long() {
    let maze = GridMaze::benchmark_maze();
    let solution = solve(&maze, FrontierKind::Lifo, &SearchPolicy::default()).unwrap();
    assert_legal_maze_walk(&maze, &solution);
}

#[test]
fn every_strategy_is_idempotent() {
    let maze = GridMaze::benchmark_maze();
    for kind in [
        FrontierKind::Fifo,
        FrontierKind::Lifo,
        FrontierKind::BestFirst,
        FrontierKind::Greedy,
    ] {
        let first = solve(&maze, kind, &SearchPolicy::default()).unwrap();
        for _ in 0..3 {
            let again = solve(&maze, kind, &SearchPolicy::default()).unwrap();
            assert_eq!(again, first, "{kind:?} must reproduce its outcome exactly");
        }
    }
}

#[test]
fn expansion_counts_come_back_on_failure_too() {
    let line = NumberLine::new(0, -1000, 1000, 999);
    let policy = SearchPolicy {
        max_expansions: 10,
        ..SearchPolicy::default()
    };
    let err = solve(&line, FrontierKind::Fifo, &policy).unwrap_err();
    let wayfarer_search::error::SearchError::BudgetExhausted { stats } = err else {
        panic!("expected BudgetExhausted");
    };
    assert_eq!(stats.nodes_expanded, 10);
    assert!(stats.nodes_generated > 0);
}
