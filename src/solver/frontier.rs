use std::collections::VecDeque;

use crate::board::Board;

/// Open set of boards waiting to be expanded.
pub trait Frontier {
    fn push(&mut self, board: Board);

    fn pop(&mut self) -> Option<Board>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out - breadth first search.
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<Board>);

impl Fifo {
    pub fn new() -> Self {
        Fifo(VecDeque::new())
    }
}

impl Frontier for Fifo {
    fn push(&mut self, board: Board) {
        self.0.push_back(board);
    }

    fn pop(&mut self) -> Option<Board> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out - depth first and depth limited search.
#[derive(Debug, Default)]
pub struct Lifo(Vec<Board>);

impl Lifo {
    pub fn new() -> Self {
        Lifo(Vec::new())
    }
}

impl Frontier for Lifo {
    fn push(&mut self, board: Board) {
        self.0.push(board);
    }

    fn pop(&mut self) -> Option<Board> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boards() -> Vec<Board> {
        vec![
            Board::from_state("123456789ABCDEF "),
            Board::from_state("123456789ABCDE F"),
            Board::from_state("123456789AB DEFC"),
        ]
    }

    fn drain<F: Frontier>(frontier: &mut F) -> Vec<String> {
        let mut states = Vec::new();
        while let Some(board) = frontier.pop() {
            states.push(board.state().to_owned());
        }
        states
    }

    #[test]
    fn fifo_pops_oldest() {
        let mut fifo = Fifo::new();
        assert!(fifo.is_empty());
        for board in boards() {
            fifo.push(board);
        }
        assert_eq!(fifo.len(), 3);
        assert_eq!(
            drain(&mut fifo),
            vec!["123456789ABCDEF ", "123456789ABCDE F", "123456789AB DEFC"]
        );
        assert!(fifo.is_empty());
    }

    #[test]
    fn lifo_pops_newest() {
        let mut lifo = Lifo::new();
        for board in boards() {
            lifo.push(board);
        }
        assert_eq!(lifo.len(), 3);
        assert_eq!(
            drain(&mut lifo),
            vec!["123456789AB DEFC", "123456789ABCDE F", "123456789ABCDEF "]
        );
        assert_eq!(lifo.pop(), None);
    }
}
