use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// `h1` - number of cells that differ from the goal
    Misplaced,
    /// `h2` - sum of Manhattan distances of every symbol from its goal cell
    Manhattan,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Misplaced => write!(f, "h1"),
            Heuristic::Manhattan => write!(f, "h2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
    /// Depth-first search that never creates boards deeper than the limit
    Dls(u32),
    Greedy(Heuristic),
    AStar(Heuristic),
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "BFS"),
            Strategy::Dfs => write!(f, "DFS"),
            Strategy::Dls(limit) => write!(f, "DLS {}", limit),
            Strategy::Greedy(h) => write!(f, "GBFS {}", h),
            Strategy::AStar(h) => write!(f, "A* {}", h),
        }
    }
}
