pub mod frontier;
pub mod priority;
pub mod stats;

use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::board::Board;
use crate::config::Strategy;
use crate::data::{Dir, QUEUE_ORDER, STACK_ORDER};
use crate::Solve;

use self::frontier::{Fifo, Frontier, Lifo};
use self::priority::{a_star_key, greedy_key, PriorityFrontier};
use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { depth: u32 },
    /// The frontier ran out without a depth limit
    Exhausted,
    /// The frontier ran out and the depth limit cut off some boards
    DepthExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Finished(Outcome),
}

/// The four numbers printed after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub max_depth: i64,
    pub nodes_created: usize,
    pub nodes_expanded: usize,
    pub max_fringe_size: usize,
}

impl Summary {
    /// Reported when depth limited search doesn't find a goal.
    pub const DEPTH_EXHAUSTED: Summary = Summary {
        max_depth: -1,
        nodes_created: 0,
        nodes_expanded: 0,
        max_fringe_size: 0,
    };
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.max_depth, self.nodes_created, self.nodes_expanded, self.max_fringe_size
        )
    }
}

pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: Stats,
    pub(crate) strategy: Strategy,
}

impl SearchReport {
    pub fn summary(&self) -> Summary {
        let max_depth = match self.outcome {
            Outcome::Solved { depth } => i64::from(depth),
            Outcome::Exhausted => 0,
            Outcome::DepthExhausted => return Summary::DEPTH_EXHAUSTED,
        };
        Summary {
            max_depth,
            nodes_created: self.stats.total_created(),
            nodes_expanded: self.stats.total_expanded(),
            max_fringe_size: self.stats.max_fringe_size(),
        }
    }
}

impl Debug for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.strategy)?;
        match self.outcome {
            Outcome::Solved { depth } => writeln!(f, "solved at depth {}", depth)?,
            Outcome::Exhausted => writeln!(f, "no solution")?,
            Outcome::DepthExhausted => writeln!(f, "no solution within depth limit")?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, strategy: Strategy, print_status: bool) -> SearchReport {
        solve(self, strategy, print_status)
    }
}

fn solve(board: &Board, strategy: Strategy, print_status: bool) -> SearchReport {
    debug!("Search started: {} from {:?}", strategy, board.state());

    let mut root = board.clone();
    root.set_depth(0);

    let (outcome, stats) = match strategy {
        Strategy::Bfs => Search::new(root, Fifo::new(), &QUEUE_ORDER, None)
            .print_status(print_status)
            .run(),
        Strategy::Dfs => Search::new(root, Lifo::new(), &STACK_ORDER, None)
            .print_status(print_status)
            .run(),
        Strategy::Dls(limit) => Search::new(root, Lifo::new(), &STACK_ORDER, Some(limit))
            .print_status(print_status)
            .run(),
        Strategy::Greedy(h) => {
            let frontier = PriorityFrontier::new(greedy_key(h));
            Search::new(root, frontier, &QUEUE_ORDER, None)
                .print_status(print_status)
                .run()
        }
        Strategy::AStar(h) => {
            let frontier = PriorityFrontier::new(a_star_key(h));
            Search::new(root, frontier, &QUEUE_ORDER, None)
                .print_status(print_status)
                .run()
        }
    };

    debug!("Search finished: {:?}", outcome);
    SearchReport {
        outcome,
        stats,
        strategy,
    }
}

/// One run of the search loop over a particular frontier.
///
/// Duplicates are only checked against boards that were already expanded,
/// so the same state can sit in the frontier several times - the first copy
/// popped is expanded and the rest are dropped when they're popped.
#[derive(Debug)]
pub struct Search<F> {
    frontier: F,
    visited: FnvHashSet<String>,
    order: &'static [Dir],
    depth_limit: Option<u32>,
    stats: Stats,
    phase: Phase,
    print_status: bool,
}

impl<F: Frontier> Search<F> {
    pub fn new(
        root: Board,
        mut frontier: F,
        order: &'static [Dir],
        depth_limit: Option<u32>,
    ) -> Self {
        let mut stats = Stats::new();
        stats.add_created(root.depth());
        frontier.push(root);
        stats.update_fringe(frontier.len());

        Search {
            frontier,
            visited: FnvHashSet::default(),
            order,
            depth_limit,
            stats,
            phase: Phase::Ready,
            print_status: false,
        }
    }

    /// Print stats whenever a new depth is expanded for the first time.
    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Pops one board and expands it unless it's a duplicate or a goal.
    pub fn step(&mut self) -> Phase {
        if let Phase::Finished(_) = self.phase {
            return self.phase;
        }
        self.phase = Phase::Running;

        let board = match self.frontier.pop() {
            Some(board) => board,
            None => {
                let outcome = if self.depth_limit.is_some() {
                    Outcome::DepthExhausted
                } else {
                    Outcome::Exhausted
                };
                debug!("Frontier exhausted after {} expansions", self.stats.total_expanded());
                self.phase = Phase::Finished(outcome);
                return self.phase;
            }
        };

        if self.visited.contains(board.state()) {
            self.stats.add_reached_duplicate(board.depth());
            return self.phase;
        }
        self.visited.insert(board.state().to_owned());

        if self.stats.add_expanded(board.depth()) && self.print_status {
            println!("Expanded new depth: {}", board.depth());
            println!("{:?}", self.stats);
        }

        if board.is_goal() {
            debug!("Solved at depth {}", board.depth());
            self.phase = Phase::Finished(Outcome::Solved {
                depth: board.depth(),
            });
            return self.phase;
        }

        let depth = board.depth() + 1;
        let within_limit = self.depth_limit.map_or(true, |limit| depth <= limit);
        if within_limit {
            for mut next in board.successors(self.order) {
                if self.visited.contains(next.state()) {
                    continue;
                }
                next.set_depth(depth);
                self.stats.add_created(depth);
                self.frontier.push(next);
            }
        }
        self.stats.update_fringe(self.frontier.len());

        self.phase
    }

    pub fn run(mut self) -> (Outcome, Stats) {
        loop {
            if let Phase::Finished(outcome) = self.step() {
                return (outcome, self.stats);
            }
        }
    }
}
