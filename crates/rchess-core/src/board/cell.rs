//! Board square record (Cell) and piece handles (PieceId)

use std::hash::{Hash, Hasher};

use crate::types::Square;

/// Stable handle of a piece stored in a [`super::Board`].
///
/// Ids are issued by the board on placement and stay valid for the lifetime
/// of that board, also while the piece is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub(crate) const fn new(index: usize) -> PieceId {
        PieceId(index as u32)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board square: fixed coordinates and at most one occupant.
///
/// Equality and hashing only look at the coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    square: Square,
    occupant: Option<PieceId>,
}

impl Cell {
    pub(crate) const fn new(square: Square) -> Cell {
        Cell {
            square,
            occupant: None,
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.square.row()
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.square.col()
    }

    #[inline]
    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Same (row, col) as `other`
    #[inline]
    pub fn same_coordinates(&self, other: &Cell) -> bool {
        self.square == other.square
    }

    #[inline]
    pub(crate) fn set_occupant(&mut self, occupant: Option<PieceId>) {
        self.occupant = occupant;
    }

    #[inline]
    pub(crate) fn take_occupant(&mut self) -> Option<PieceId> {
        self.occupant.take()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Cell) -> bool {
        self.square == other.square
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.square.hash(state);
    }
}
