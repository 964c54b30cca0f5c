use std::fmt;

use crate::core::coord::Coord;
use crate::error::PuzzleError;

/// Side length of the board.
pub const BOARD_SIZE: i32 = 8;

/// A square on the 8x8 board, indexed `row * 8 + col`.
///
/// Always in `[0, 64)`; the only ways in are the checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const NUM: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

    /// Construct from a board index, `None` when off the board.
    #[inline]
    pub fn new(index: usize) -> Option<Square> {
        (index < Self::NUM).then(|| Square(index as u8))
    }

    /// Construct from a row and column, `None` when either is off the board.
    #[inline]
    pub fn from_coord(c: Coord) -> Option<Square> {
        let on_board = |v: i32| (0..BOARD_SIZE).contains(&v);
        if on_board(c.row) && on_board(c.col) {
            Some(Square((c.row * BOARD_SIZE + c.col) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> i32 {
        self.0 as i32 / BOARD_SIZE
    }

    #[inline]
    pub fn col(self) -> i32 {
        self.0 as i32 % BOARD_SIZE
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.row(), self.col())
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn shifted(self, delta: Coord) -> Option<Square> {
        Square::from_coord(self.coord() + delta)
    }

    /// Every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl TryFrom<i64> for Square {
    type Error = PuzzleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Square::new)
            .ok_or(PuzzleError::SquareOutOfRange { value })
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_decomposes_into_row_and_col() {
        let sq = Square::try_from(19).unwrap();
        assert_eq!((sq.row(), sq.col()), (2, 3));
        assert_eq!(Square::from_coord(sq.coord()), Some(sq));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(
            Square::try_from(64),
            Err(PuzzleError::SquareOutOfRange { value: 64 })
        );
        assert_eq!(
            Square::try_from(-1),
            Err(PuzzleError::SquareOutOfRange { value: -1 })
        );
        assert!(Square::from_coord(Coord::new(0, 8)).is_none());
        assert!(Square::from_coord(Coord::new(-1, 0)).is_none());
    }

    #[test]
    fn shifting_off_the_edge_yields_none() {
        let corner = Square::new(0).unwrap();
        assert_eq!(corner.shifted(Coord::new(-2, -1)), None);
        assert_eq!(corner.shifted(Coord::new(2, 1)), Square::new(17));
    }
}
