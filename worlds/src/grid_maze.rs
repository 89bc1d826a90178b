//! Rectangular maze world with unit-cost moves.
//!
//! States are `(row, col)` cells; the four moves cost 1 each, so the
//! Manhattan distance to the goal is an admissible and consistent
//! heuristic and best-first search returns shortest paths.

use std::collections::HashSet;

use wayfarer_search::problem::{SearchProblem, Successor};

/// One of the four cardinal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// A rectangular grid with blocked cells.
#[derive(Debug, Clone)]
pub struct GridMaze {
    rows: usize,
    cols: usize,
    start: (usize, usize),
    goal: (usize, usize),
    walls: HashSet<(usize, usize)>,
}

impl GridMaze {
    /// Build a maze. `start`, `goal`, and every wall must lie inside
    /// the `rows` x `cols` grid; out-of-bounds walls are simply
    /// unreachable and ignored.
    #[must_use]
    pub fn new(
        rows: usize,
        cols: usize,
        start: (usize, usize),
        goal: (usize, usize),
        walls: HashSet<(usize, usize)>,
    ) -> Self {
        Self {
            rows,
            cols,
            start,
            goal,
            walls,
        }
    }

    /// The 7x12 comparison fixture: two vertical barriers with one
    /// gap each, start at the top-left corner, goal at the
    /// bottom-right. Forces a winding shortest path so breadth-first
    /// and best-first expansion counts separate measurably.
    #[must_use]
    pub fn benchmark_maze() -> Self {
        let mut walls = HashSet::new();
        for row in 0..7 {
            if row != 5 {
                walls.insert((row, 3));
            }
            if row != 1 {
                walls.insert((row, 7));
            }
        }
        Self::new(7, 12, (0, 0), (6, 11), walls)
    }

    /// Whether `cell` is inside the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, cell: (usize, usize)) -> bool {
        cell.0 < self.rows && cell.1 < self.cols && !self.walls.contains(&cell)
    }

    /// The cell `mv` leads to from `cell`, if it is open.
    #[must_use]
    pub fn step(&self, cell: (usize, usize), mv: Move) -> Option<(usize, usize)> {
        let (row, col) = cell;
        let target = match mv {
            Move::Up => (row.checked_sub(1)?, col),
            Move::Down => (row + 1, col),
            Move::Left => (row, col.checked_sub(1)?),
            Move::Right => (row, col + 1),
        };
        self.is_open(target).then_some(target)
    }

    /// The goal cell.
    #[must_use]
    pub fn goal(&self) -> (usize, usize) {
        self.goal
    }
}

impl SearchProblem for GridMaze {
    type State = (usize, usize);
    type Action = Move;

    fn initial_state(&self) -> (usize, usize) {
        self.start
    }

    fn is_goal(&self, state: &(usize, usize)) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &(usize, usize)) -> Vec<Successor<(usize, usize), Move>> {
        [Move::Up, Move::Down, Move::Left, Move::Right]
            .into_iter()
            .filter_map(|mv| {
                self.step(*state, mv).map(|next| Successor {
                    action: mv,
                    state: next,
                    cost: 1,
                })
            })
            .collect()
    }

    /// Manhattan distance. Admissible and consistent for unit-cost
    /// cardinal moves.
    fn heuristic(&self, state: &(usize, usize)) -> u64 {
        let dr = state.0.abs_diff(self.goal.0);
        let dc = state.1.abs_diff(self.goal.1);
        u64::try_from(dr + dc).unwrap_or(u64::MAX)
    }
}
