//! Compass direction between two squares (Direction)

/// One of the eight compass directions.
///
/// Discriminants run clockwise from North, so even values are orthogonal and
/// odd values are diagonal. Rows grow towards the south (row 0 is rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in clockwise order starting at North
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Clockwise index (0 = North)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit step as (Δrow, Δcol)
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Along a rank or a file (even index)
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Along a diagonal (odd index)
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_orthogonal()
    }

    /// Classifies a displacement (destination - origin).
    ///
    /// Returns `None` for the null displacement and for anything that is
    /// neither on a line nor on a diagonal (knight jumps included).
    pub const fn from_delta(d_row: i32, d_col: i32) -> Option<Direction> {
        let v = d_row;
        let h = d_col;
        if v < 0 && h == 0 {
            Some(Direction::North)
        } else if v < 0 && h > 0 && h + v == 0 {
            Some(Direction::NorthEast)
        } else if v == 0 && h > 0 {
            Some(Direction::East)
        } else if v > 0 && h > 0 && h == v {
            Some(Direction::SouthEast)
        } else if v > 0 && h == 0 {
            Some(Direction::South)
        } else if v > 0 && h < 0 && h + v == 0 {
            Some(Direction::SouthWest)
        } else if v == 0 && h < 0 {
            Some(Direction::West)
        } else if v < 0 && h < 0 && h == v {
            Some(Direction::NorthWest)
        } else {
            None
        }
    }
}
