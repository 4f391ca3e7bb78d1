//! Per-piece movement rules
//!
//! `Piece::is_legal_move` dispatches over `PieceType`. The board-level facts a
//! rule needs (direction, whether the path is blocked, who stands on the
//! destination) are computed by the caller and passed in, so the rules are
//! pure functions of their arguments.

use crate::types::{Color, Direction, Piece, PieceType, Square};

/// Destination of a candidate move as seen by the moving piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub square: Square,
    /// Color of the piece standing on the destination
    pub occupant: Option<Color>,
}

impl Target {
    #[inline]
    pub const fn new(square: Square, occupant: Option<Color>) -> Target {
        Target { square, occupant }
    }

    #[inline]
    pub const fn empty(square: Square) -> Target {
        Target::new(square, None)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

impl Piece {
    /// Whether this piece, standing on `from`, may move to `destination`.
    ///
    /// `blocked` tells whether a square strictly between `from` and the
    /// destination is occupied. Knights ignore it and the direction.
    pub fn is_legal_move(
        &self,
        from: Square,
        destination: Option<Target>,
        direction: Option<Direction>,
        blocked: bool,
    ) -> bool {
        let Some(target) = destination else {
            return false;
        };
        let color = self.color();
        match (self.kind(), direction) {
            (PieceType::Knight, _) => knight_jump(from, target.square),
            (_, None) => false,
            (PieceType::Rook, Some(dir)) => slides_straight(color, &target, dir, blocked),
            (PieceType::Bishop, Some(dir)) => slides_diagonally(color, &target, dir, blocked),
            (PieceType::Queen, Some(dir)) if dir.is_orthogonal() => {
                slides_straight(color, &target, dir, blocked)
            }
            (PieceType::Queen, Some(dir)) => slides_diagonally(color, &target, dir, blocked),
            (PieceType::King, Some(_)) => king_step(from, target.square),
            (PieceType::Pawn, Some(_)) => pawn_move(self, from, &target, blocked),
        }
    }
}

/// Destination holds a piece of `color`
#[inline]
pub fn is_friendly(color: Color, target: &Target) -> bool {
    target.occupant == Some(color)
}

/// Rook move along `dir`
pub fn slides_straight(color: Color, target: &Target, dir: Direction, blocked: bool) -> bool {
    !blocked && dir.is_orthogonal() && !is_friendly(color, target)
}

/// Bishop move along `dir`
pub fn slides_diagonally(color: Color, target: &Target, dir: Direction, blocked: bool) -> bool {
    !blocked && dir.is_diagonal() && !is_friendly(color, target)
}

fn knight_jump(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs().max(d_col.abs()) == 1
}

fn pawn_move(pawn: &Piece, from: Square, target: &Target, blocked: bool) -> bool {
    if blocked {
        return false;
    }
    let (d_row, d_col) = from.delta_to(target.square);
    let forward = pawn.color().forward();
    match (d_row * forward, d_col.abs()) {
        (1, 0) => target.is_empty(),
        (2, 0) => pawn.is_first_move() && target.is_empty(),
        (1, 1) => !target.is_empty() && !is_friendly(pawn.color(), target),
        _ => false,
    }
}
