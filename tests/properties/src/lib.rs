//! Cross-crate lock tests.
//!
//! The guarantees the engines advertise are pinned here, against the
//! shipped worlds, so a regression in any member crate fails this
//! member's suite. The tests live in `tests/`; this library only
//! hosts shared assertions.

#![forbid(unsafe_code)]

use wayfarer_search::engine::Solution;
use wayfarer_worlds::grid_maze::GridMaze;

/// Assert that a maze solution is a legal walk from start to goal.
pub fn assert_legal_maze_walk(maze: &GridMaze, solution: &Solution<(usize, usize), impl Clone>) {
    assert_eq!(solution.states.last(), Some(&maze.goal()));
    for pair in solution.states.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        assert!(maze.is_open(to));
        assert_eq!(from.0.abs_diff(to.0) + from.1.abs_diff(to.1), 1);
    }
}
