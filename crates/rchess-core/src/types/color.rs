//! Side to move (Color)

use std::fmt;

/// Side (White / Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of sides
    pub const NUM: usize = 2;

    /// Both sides, White first
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the other side
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index for array access
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Letter used in the board rendering
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Row step of a pawn advance: White moves up the board (towards row 0).
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}
