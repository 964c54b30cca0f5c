use std::ops::{Add, Neg, Sub};

/// A signed `(row, col)` offset on the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True for the "L" shape: two along one axis, one along the other.
    #[inline]
    pub fn is_knight_step(self) -> bool {
        let (r, c) = (self.row.abs(), self.col.abs());
        (r == 1 && c == 2) || (r == 2 && c == 1)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

/// The 8 knight steps, in the order neighbour lists are generated.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
];
