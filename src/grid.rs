use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Pos, BLANK, CELLS, SIZE};

/// The 16 cells of a board in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Grid {
    data: [char; CELLS],
}

impl Grid {
    /// Doesn't validate - extra symbols are ignored, missing ones stay blank.
    pub(crate) fn from_state(state: &str) -> Self {
        let mut data = [BLANK; CELLS];
        for (cell, symbol) in data.iter_mut().zip(state.chars()) {
            *cell = symbol;
        }
        Grid { data }
    }

    pub(crate) fn cells(&self) -> &[char; CELLS] {
        &self.data
    }

    pub(crate) fn find(&self, symbol: char) -> Option<Pos> {
        self.data
            .iter()
            .position(|&cell| cell == symbol)
            .map(Pos::from_index)
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        self.data.swap(a.index(), b.index());
    }

    pub(crate) fn to_state(&self) -> String {
        self.data.iter().collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(usize::from(SIZE)) {
            for &cell in row {
                write!(f, "{}", if cell == BLANK { '_' } else { cell })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Index<Pos> for Grid {
    type Output = char;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[index.index()]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.data[index.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let grid = Grid::from_state("123456789ABCDEF ");
        assert_eq!(grid[Pos::new(0, 0)], '1');
        assert_eq!(grid[Pos::new(1, 3)], '8');
        assert_eq!(grid[Pos::new(2, 1)], 'A');
        assert_eq!(grid[Pos::new(3, 3)], BLANK);
        assert_eq!(grid.find(BLANK), Some(Pos::new(3, 3)));
        assert_eq!(grid.find('Z'), None);
    }

    #[test]
    fn swapping_regenerates_state() {
        let mut grid = Grid::from_state("123456789ABCDEF ");
        grid.swap(Pos::new(3, 3), Pos::new(3, 2));
        assert_eq!(grid.to_state(), "123456789ABCDE F");
        grid[Pos::new(0, 0)] = 'X';
        assert_eq!(grid.to_state(), "X23456789ABCDE F");
    }

    #[test]
    fn formatting() {
        let grid = Grid::from_state("123456789ABCDEF ");
        assert_eq!(grid.to_string(), "1234\n5678\n9ABC\nDEF_\n");
        assert_eq!(format!("{:?}", grid), grid.to_string());
    }
}
