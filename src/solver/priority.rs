use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::board::Board;
use crate::config::Heuristic;

use super::frontier::Frontier;

/// Greedy best-first: only the estimate to the closer goal counts.
pub fn greedy_key(heuristic: Heuristic) -> impl Fn(&Board) -> u32 {
    move |board: &Board| board.heuristic(heuristic)
}

/// A*: moves made so far plus the estimate to the closer goal.
pub fn a_star_key(heuristic: Heuristic) -> impl Fn(&Board) -> u32 {
    move |board: &Board| board.depth() + board.heuristic(heuristic)
}

struct SearchNode {
    key: u32,
    /// insertion order, breaks ties so runs are reproducible
    seq: u64,
    board: Board,
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.key, other.seq).cmp(&(self.key, self.seq))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for SearchNode {}

/// Pops the board with the lowest key, oldest first among equal keys.
///
/// The key is computed once on push - boards in the frontier are never mutated.
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<SearchNode>,
    key: K,
    pushed: u64,
}

impl<K> PriorityFrontier<K>
where
    K: Fn(&Board) -> u32,
{
    pub fn new(key: K) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            key,
            pushed: 0,
        }
    }
}

impl<K> Frontier for PriorityFrontier<K>
where
    K: Fn(&Board) -> u32,
{
    fn push(&mut self, board: Board) {
        let key = (self.key)(&board);
        self.heap.push(SearchNode {
            key,
            seq: self.pushed,
            board,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<Board> {
        self.heap.pop().map(|node| node.board)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<K> Debug for PriorityFrontier<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityFrontier {{ len: {}, pushed: {} }}", self.heap.len(), self.pushed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;

    #[test]
    fn lowest_key_first() {
        let solved = Board::from_state("123456789ABCDEF ");
        let one_away = solved.copy_with_swap(Dir::Up).unwrap();
        let two_away = one_away.copy_with_swap(Dir::Left).unwrap();

        let mut frontier = PriorityFrontier::new(greedy_key(Heuristic::Misplaced));
        frontier.push(two_away.clone());
        frontier.push(solved.clone());
        frontier.push(one_away.clone());
        assert_eq!(frontier.len(), 3);

        assert_eq!(frontier.pop(), Some(solved));
        assert_eq!(frontier.pop(), Some(one_away));
        assert_eq!(frontier.pop(), Some(two_away));
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new(|_: &Board| 7);
        let states = ["5 2416378ABC9DEF", "123456789ABCDE F", "123456789AB DEFC"];
        for state in &states {
            frontier.push(Board::from_state(state));
        }
        for state in &states {
            assert_eq!(frontier.pop().unwrap().state(), *state);
        }
    }

    #[test]
    fn a_star_adds_depth() {
        let mut board = Board::from_state("123456789ABCDE F");
        assert_eq!(a_star_key(Heuristic::Manhattan)(&board), 2);
        assert_eq!(greedy_key(Heuristic::Manhattan)(&board), 2);
        board.set_depth(5);
        assert_eq!(a_star_key(Heuristic::Manhattan)(&board), 7);
        assert_eq!(a_star_key(Heuristic::Misplaced)(&board), 7);
        assert_eq!(greedy_key(Heuristic::Misplaced)(&board), 2);
    }

    #[test]
    fn a_star_prefers_shallow_on_equal_estimate() {
        let mut deep = Board::from_state("123456789ABCDE F");
        deep.set_depth(3);
        let shallow = Board::from_state("123456789AB DEFC");

        let mut frontier = PriorityFrontier::new(a_star_key(Heuristic::Misplaced));
        frontier.push(deep);
        frontier.push(shallow.clone());
        assert_eq!(frontier.pop(), Some(shallow));
    }
}
