//! Trial moves: would a move expose the mover's own king?

use log::trace;

use super::{Arbiter, Context};
use crate::board::PieceId;
use crate::error::{ArbiterError, ArbiterResult};
use crate::types::Square;

/// Everything a trial move changed, enough to put it back
#[derive(Debug, Clone, Copy)]
struct UndoRecord {
    from: Square,
    to: Square,
    moved: PieceId,
    first_move: bool,
    captured: Option<PieceId>,
}

impl Arbiter {
    /// Whether playing origin -> destination would leave the mover's king in
    /// check.
    ///
    /// Moves that are not legal for the piece answer `false` without touching
    /// the board. The side to move is not enforced here. The board, the piece
    /// flags and the move count are the same before and after the call.
    pub fn would_leave_own_king_in_check(
        &mut self,
        origin: impl Into<Option<Square>>,
        destination: impl Into<Option<Square>>,
    ) -> ArbiterResult<bool> {
        let (origin, destination) = (origin.into(), destination.into());
        if !self.is_legal_in(origin, destination, Context::Simulating)? {
            return Ok(false);
        }
        let (Some(from), Some(to)) = (origin, destination) else {
            return Ok(false);
        };

        #[cfg(debug_assertions)]
        let before = self.board.render();

        let undo = self.apply_trial(from, to)?;
        let mover = self.board.piece(undo.moved).map(|piece| piece.color());
        let verdict = match mover {
            Some(color) => self.is_in_check(color),
            None => Ok(false),
        };
        // restore before reporting anything
        self.undo_trial(undo)?;

        #[cfg(debug_assertions)]
        debug_assert_eq!(before, self.board.render(), "trial move left a trace on the board");

        let verdict = verdict?;
        trace!("trial {from} -> {to}: own king in check = {verdict}");
        Ok(verdict)
    }

    fn apply_trial(&mut self, from: Square, to: Square) -> ArbiterResult<UndoRecord> {
        let Some(moved) = self.board.occupant(from)? else {
            return Err(ArbiterError::EmptyOrigin(from));
        };
        let first_move = self.board.piece(moved).is_some_and(|piece| piece.is_first_move());
        self.board.mark_moved(moved);
        let captured = self.board.relocate(from, to)?;
        Ok(UndoRecord {
            from,
            to,
            moved,
            first_move,
            captured,
        })
    }

    fn undo_trial(&mut self, undo: UndoRecord) -> ArbiterResult<()> {
        self.board.put_back(undo.moved, undo.from)?;
        if let Some(captured) = undo.captured {
            self.board.put_back(captured, undo.to)?;
        }
        if let Some(piece) = self.board.piece_mut(undo.moved) {
            piece.set_first_move(undo.first_move);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbiter::KingRefs;
    use crate::types::{Color, Piece};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    /// Black king a8, white queen b6, white pawn c6, white king a1
    fn queen_and_pawn() -> Arbiter {
        let mut arbiter = Arbiter::default();
        let placements = [
            (Piece::king(Color::Black), sq(0, 0)),
            (Piece::queen(Color::White), sq(2, 1)),
            (Piece::pawn(Color::White), sq(2, 2)),
            (Piece::king(Color::White), sq(7, 0)),
        ];
        arbiter
            .place_pieces(&placements, Some(KingRefs { white: 3, black: 0 }))
            .unwrap();
        arbiter
    }

    #[test]
    fn test_king_walking_into_queen_file() {
        let mut arbiter = queen_and_pawn();
        arbiter.change_turn();
        assert!(arbiter.would_leave_own_king_in_check(sq(0, 0), sq(0, 1)).unwrap());
    }

    #[test]
    fn test_harmless_pawn_push() {
        let mut arbiter = queen_and_pawn();
        assert!(!arbiter.would_leave_own_king_in_check(sq(2, 2), sq(1, 2)).unwrap());
    }

    #[test]
    fn test_illegal_move_answers_false_without_touching_board() {
        let mut arbiter = queen_and_pawn();
        let before = arbiter.board().render();
        assert!(!arbiter.would_leave_own_king_in_check(sq(2, 2), sq(2, 3)).unwrap());
        assert!(!arbiter.would_leave_own_king_in_check(sq(4, 4), sq(3, 4)).unwrap());
        assert_eq!(arbiter.board().render(), before);
    }

    #[test]
    fn test_trial_leaves_no_trace() {
        let mut arbiter = queen_and_pawn();
        let before = arbiter.board().render();
        let white = arbiter.board().count_pieces(Color::White);
        let black = arbiter.board().count_pieces(Color::Black);
        arbiter.would_leave_own_king_in_check(sq(2, 2), sq(1, 2)).unwrap();
        assert_eq!(arbiter.board().render(), before);
        assert_eq!(arbiter.board().count_pieces(Color::White), white);
        assert_eq!(arbiter.board().count_pieces(Color::Black), black);
        assert_eq!(arbiter.move_count(), 0);
    }

    #[test]
    fn test_trial_restores_first_move_flag() {
        let mut arbiter = queen_and_pawn();
        let queen_before = arbiter.board().piece_at(sq(2, 1)).unwrap().copied();
        assert!(queen_before.is_some_and(|queen| queen.is_first_move()));
        arbiter.would_leave_own_king_in_check(sq(2, 1), sq(1, 1)).unwrap();
        assert_eq!(arbiter.board().piece_at(sq(2, 1)).unwrap().copied(), queen_before);
        assert!(arbiter.board().is_empty_at(sq(1, 1)).unwrap());
    }

    #[test]
    fn test_king_capturing_defended_piece_stays_in_check() {
        let mut arbiter = Arbiter::default();
        let placements = [
            (Piece::king(Color::Black), sq(0, 0)),
            (Piece::rook(Color::White), sq(1, 1)),
            (Piece::bishop(Color::White), sq(3, 3)),
            (Piece::king(Color::White), sq(7, 7)),
        ];
        arbiter.place_pieces(&placements, None).unwrap();
        let before = arbiter.board().render();
        // b7 rook is protected by the bishop on d5
        assert!(arbiter.would_leave_own_king_in_check(sq(0, 0), sq(1, 1)).unwrap());
        assert_eq!(arbiter.board().render(), before);
        assert_eq!(arbiter.king_square(Color::Black), Some(sq(0, 0)));
        let rook = arbiter.board().piece_at(sq(1, 1)).unwrap().copied().unwrap();
        assert_eq!(rook, Piece::rook(Color::White));
    }
}
