use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::config::Heuristic;
use crate::data::{Dir, Goal, Pos, BLANK};
use crate::grid::Grid;

/// One configuration of the puzzle.
///
/// `state` is regenerated from `grid` and the heuristics are recomputed
/// every time a board is created so they never go stale.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    state: String,
    grid: Grid,
    blank_pos: Pos,
    depth: u32,
    misplaced: [u32; 2],
    manhattan: [u32; 2],
}

impl Board {
    /// Creates the board without validating `state` - use `str::parse` for user input.
    ///
    /// Panics if there's no blank.
    pub fn from_state(state: &str) -> Self {
        let grid = Grid::from_state(state);
        let blank_pos = grid.find(BLANK).expect("state without a blank");
        Self::from_grid(grid, blank_pos)
    }

    fn from_grid(grid: Grid, blank_pos: Pos) -> Self {
        let mut misplaced = [0; 2];
        let mut manhattan = [0; 2];
        for &goal in &Goal::ALL {
            misplaced[goal.index()] = count_misplaced(&grid, goal);
            manhattan[goal.index()] = sum_manhattan(&grid, goal);
        }
        Board {
            state: grid.to_state(),
            grid,
            blank_pos,
            depth: 0,
            misplaced,
            manhattan,
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn blank_pos(&self) -> Pos {
        self.blank_pos
    }

    /// Number of moves from the root of the search, set by the solver.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub(crate) fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn tile(&self, pos: Pos) -> char {
        self.grid[pos]
    }

    /// A copy with the blank moved in `dir` or `None` if it would leave the board.
    ///
    /// The copy starts at depth 0.
    pub fn copy_with_swap(&self, dir: Dir) -> Option<Board> {
        let target = self.blank_pos.step(dir)?;
        let mut grid = self.grid;
        grid.swap(self.blank_pos, target);
        Some(Board::from_grid(grid, target))
    }

    /// Boards reachable with one move, in the order given by `order`.
    pub fn successors(&self, order: &[Dir]) -> Vec<Board> {
        order
            .iter()
            .filter_map(|&dir| self.copy_with_swap(dir))
            .collect()
    }

    pub fn is_goal(&self) -> bool {
        let (mut goal_a, mut goal_b) = (true, true);
        let cells = self.grid.cells();
        for (i, &cell) in cells.iter().enumerate() {
            goal_a = goal_a && cell == Goal::A.cells()[i];
            goal_b = goal_b && cell == Goal::B.cells()[i];
            if !goal_a && !goal_b {
                return false;
            }
        }
        true
    }

    pub fn misplaced_count(&self, goal: Goal) -> u32 {
        self.misplaced[goal.index()]
    }

    pub fn manhattan_sum(&self, goal: Goal) -> u32 {
        self.manhattan[goal.index()]
    }

    /// Value of `heuristic` towards whichever goal is closer.
    pub fn heuristic(&self, heuristic: Heuristic) -> u32 {
        let value = |goal: Goal| match heuristic {
            Heuristic::Misplaced => self.misplaced_count(goal),
            Heuristic::Manhattan => self.manhattan_sum(goal),
        };
        value(Goal::A).min(value(Goal::B))
    }
}

fn count_misplaced(grid: &Grid, goal: Goal) -> u32 {
    grid.cells()
        .iter()
        .zip(goal.cells().iter())
        .filter(|(cell, goal_cell)| cell != goal_cell)
        .count() as u32
}

fn sum_manhattan(grid: &Grid, goal: Goal) -> u32 {
    grid.cells()
        .iter()
        .enumerate()
        .filter_map(|(i, &tile)| {
            goal.manhattan_target(tile)
                .map(|target| u32::from(Pos::from_index(i).dist(target)))
        })
        .sum()
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (depth {})", self.state, self.depth)
    }
}
