//! Board coordinate (Square)

use std::fmt;

use super::Direction;

/// A (row, col) coordinate.
///
/// Squares are plain values and carry no bounds guarantee: whether a square
/// lies on a given board is decided by [`crate::board::Board`], which reports
/// out-of-range coordinates as [`crate::CoordinateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i32,
    col: i32,
}

impl Square {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Square {
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Square one unit step away in `dir`
    #[inline]
    pub const fn step(self, dir: Direction) -> Square {
        let (dr, dc) = dir.delta();
        Square::new(self.row + dr, self.col + dc)
    }

    /// Displacement (Δrow, Δcol) from `self` to `to`
    #[inline]
    pub const fn delta_to(self, to: Square) -> (i32, i32) {
        (to.row - self.row, to.col - self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.row, self.col)
    }
}
