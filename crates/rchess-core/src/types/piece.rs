//! Piece (color + kind + first-move flag)

use std::fmt;

use super::{Color, PieceType};

/// A chess piece.
///
/// Pieces do not know where they stand; the board keeps that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    color: Color,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[inline]
    pub const fn new(kind: PieceType, color: Color) -> Piece {
        Piece {
            kind,
            color,
            first_move: true,
        }
    }

    pub const fn pawn(color: Color) -> Piece {
        Piece::new(PieceType::Pawn, color)
    }

    pub const fn knight(color: Color) -> Piece {
        Piece::new(PieceType::Knight, color)
    }

    pub const fn bishop(color: Color) -> Piece {
        Piece::new(PieceType::Bishop, color)
    }

    pub const fn rook(color: Color) -> Piece {
        Piece::new(PieceType::Rook, color)
    }

    pub const fn queen(color: Color) -> Piece {
        Piece::new(PieceType::Queen, color)
    }

    pub const fn king(color: Color) -> Piece {
        Piece::new(PieceType::King, color)
    }

    #[inline]
    pub const fn kind(self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// True until the piece is committed to a real move
    #[inline]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    #[inline]
    pub fn mark_moved(&mut self) {
        self.first_move = false;
    }

    /// Restores the flag recorded before a trial move.
    #[inline]
    pub(crate) fn set_first_move(&mut self, first_move: bool) {
        self.first_move = first_move;
    }

    /// Copy of this piece that has already moved
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            first_move: false,
            ..self
        }
    }

    /// Two-letter rendering, e.g. `QW`
    pub fn code(self) -> String {
        format!("{}{}", self.kind.to_char(), self.color.to_char())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.kind.to_char(), self.color, self.first_move)
    }
}
