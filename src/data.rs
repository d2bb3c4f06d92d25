pub(crate) const SIZE: u8 = 4;
pub(crate) const CELLS: usize = (SIZE as usize) * (SIZE as usize);
pub(crate) const BLANK: char = ' ';

/// Order used by solvers that pop the oldest or best board first.
pub const QUEUE_ORDER: [Dir; 4] = [Dir::Right, Dir::Down, Dir::Left, Dir::Up];

/// Reverse of `QUEUE_ORDER` so that popping from a stack visits right first.
pub const STACK_ORDER: [Dir; 4] = [Dir::Up, Dir::Left, Dir::Down, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        Pos::new((index / SIZE as usize) as u8, (index % SIZE as usize) as u8)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.r) * usize::from(SIZE) + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u8 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u8
    }

    /// Neighbor in `dir` or `None` if it would leave the board.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (r, c) = (self.r, self.c);
        match dir {
            Dir::Up if r > 0 => Some(Pos::new(r - 1, c)),
            Dir::Right if c + 1 < SIZE => Some(Pos::new(r, c + 1)),
            Dir::Down if r + 1 < SIZE => Some(Pos::new(r + 1, c)),
            Dir::Left if c > 0 => Some(Pos::new(r, c - 1)),
            _ => None,
        }
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

/// One of the two solved layouts.
///
/// They only differ in the order of `E` and `F` so every permutation
/// can reach exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    A,
    B,
}

const GOAL_A: [char; CELLS] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', BLANK,
];
const GOAL_B: [char; CELLS] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'F', 'E', BLANK,
];

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::A, Goal::B];

    pub(crate) fn index(self) -> usize {
        match self {
            Goal::A => 0,
            Goal::B => 1,
        }
    }

    pub fn cells(self) -> &'static [char; CELLS] {
        match self {
            Goal::A => &GOAL_A,
            Goal::B => &GOAL_B,
        }
    }

    /// Cell the Manhattan heuristic measures `tile` against.
    ///
    /// Both goals use goal A's table, so for goal B the tiles `E` and `F`
    /// are still measured against goal A's layout.
    pub(crate) fn manhattan_target(self, tile: char) -> Option<Pos> {
        match tile {
            '1'..='9' | 'A'..='F' => tile
                .to_digit(16)
                .map(|value| Pos::from_index(value as usize - 1)),
            BLANK => Some(Pos::from_index(CELLS - 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_respects_bounds() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Dir::Up), None);
        assert_eq!(corner.step(Dir::Left), None);
        assert_eq!(corner.step(Dir::Right), Some(Pos::new(0, 1)));
        assert_eq!(corner.step(Dir::Down), Some(Pos::new(1, 0)));

        let corner = Pos::new(3, 3);
        assert_eq!(corner.step(Dir::Down), None);
        assert_eq!(corner.step(Dir::Right), None);
        assert_eq!(corner.step(Dir::Up), Some(Pos::new(2, 3)));
        assert_eq!(corner.step(Dir::Left), Some(Pos::new(3, 2)));
    }

    #[test]
    fn indexing() {
        for i in 0..CELLS {
            assert_eq!(Pos::from_index(i).index(), i);
        }
        assert_eq!(Pos::from_index(6), Pos::new(1, 2));
    }

    #[test]
    fn distances() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(3, 3)), 6);
        assert_eq!(Pos::new(2, 1).dist(Pos::new(1, 2)), 2);
        assert_eq!(Pos::new(1, 1).dist(Pos::new(1, 1)), 0);
    }

    #[test]
    fn manhattan_targets() {
        assert_eq!(Goal::A.manhattan_target('1'), Some(Pos::new(0, 0)));
        assert_eq!(Goal::A.manhattan_target('9'), Some(Pos::new(2, 0)));
        assert_eq!(Goal::A.manhattan_target('A'), Some(Pos::new(2, 1)));
        assert_eq!(Goal::A.manhattan_target('D'), Some(Pos::new(3, 0)));
        assert_eq!(Goal::A.manhattan_target('E'), Some(Pos::new(3, 1)));
        assert_eq!(Goal::A.manhattan_target('F'), Some(Pos::new(3, 2)));
        assert_eq!(Goal::A.manhattan_target(BLANK), Some(Pos::new(3, 3)));
        assert_eq!(Goal::A.manhattan_target('0'), None);
        assert_eq!(Goal::A.manhattan_target('a'), None);
    }

    #[test]
    fn goal_b_shares_goal_a_manhattan_table() {
        // characterization: goal B's layout swaps E and F but its distance table doesn't
        assert_eq!(Goal::B.cells()[13], 'F');
        assert_eq!(Goal::B.cells()[14], 'E');
        for &tile in &GOAL_A {
            assert_eq!(Goal::B.manhattan_target(tile), Goal::A.manhattan_target(tile));
        }
    }
}
