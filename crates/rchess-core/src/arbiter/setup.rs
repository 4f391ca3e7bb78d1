//! Piece placement at the start of a game

use log::debug;

use super::Arbiter;
use crate::board::PieceId;
use crate::error::{ArbiterError, ArbiterResult, CoordinateError};
use crate::types::{Color, Piece, PieceType, Square};

/// Which placements of a custom setup are the two kings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingRefs {
    pub white: usize,
    pub black: usize,
}

impl Arbiter {
    /// Standard opening position; White moves first.
    ///
    /// The board needs a full back rank and four rows; nothing is placed
    /// otherwise.
    pub fn place_standard_setup(&mut self) -> ArbiterResult<()> {
        let (rows, cols) = (self.board.rows(), self.board.cols());
        let needed = PieceType::BACK_RANK.len() as i32;
        if cols < needed {
            return Err(CoordinateError::out_of_bounds(Square::new(0, cols)).into());
        }
        if rows < 4 {
            return Err(CoordinateError::InvalidSize { rows, cols }.into());
        }
        let last = rows - 1;
        for (col, kind) in PieceType::BACK_RANK.into_iter().enumerate() {
            let col = col as i32;
            self.board.place_at(Piece::new(kind, Color::Black), 0, col)?;
            self.board.place_at(Piece::pawn(Color::Black), 1, col)?;
            self.board.place_at(Piece::new(kind, Color::White), last, col)?;
            self.board.place_at(Piece::pawn(Color::White), last - 1, col)?;
        }
        self.kings = [self.board.find_king(Color::White), self.board.find_king(Color::Black)];
        self.start();
        debug!("standard setup placed");
        Ok(())
    }

    /// Custom position from `(piece, square)` placements.
    ///
    /// `kings` names the placements holding the white and black king; with
    /// `None` the kings are found by scanning the board afterwards.
    pub fn place_pieces(
        &mut self,
        placements: &[(Piece, Square)],
        kings: Option<KingRefs>,
    ) -> ArbiterResult<()> {
        if let Some(refs) = kings {
            check_king_ref(placements, refs.white, Color::White)?;
            check_king_ref(placements, refs.black, Color::Black)?;
        }
        // reject bad coordinates before anything is placed
        for &(_, square) in placements {
            self.board.cell_at(square)?;
        }

        let mut ids: Vec<PieceId> = Vec::with_capacity(placements.len());
        for &(piece, square) in placements {
            self.board.remove(square)?;
            ids.push(self.board.place(piece, square)?);
        }

        self.kings = match kings {
            Some(refs) => [Some(ids[refs.white]), Some(ids[refs.black])],
            None => [self.board.find_king(Color::White), self.board.find_king(Color::Black)],
        };
        self.start();
        debug!("custom setup placed: {} pieces", placements.len());
        Ok(())
    }
}

fn check_king_ref(placements: &[(Piece, Square)], index: usize, color: Color) -> ArbiterResult<()> {
    match placements.get(index) {
        Some((piece, _)) if piece.kind() == PieceType::King && piece.color() == color => Ok(()),
        _ => Err(ArbiterError::KingIndex(index)),
    }
}
