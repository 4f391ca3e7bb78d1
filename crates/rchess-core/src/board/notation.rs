//! Algebraic coordinates ("e4") and move text ("e2e4")
//!
//! File letters start at 'a' for column 0. Rank digits count from the bottom
//! of the board, so on 8x8 rank '8' is row 0 and rank '1' is row 7.

use super::Board;
use crate::error::{CoordinateError, CoordinateResult};
use crate::types::Square;

impl Board {
    /// Parses a two-character coordinate such as `"e4"`.
    pub fn square_from_algebraic(&self, text: &str) -> CoordinateResult<Square> {
        let invalid = || CoordinateError::InvalidNotation(text.to_string());
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
            return Err(invalid());
        }
        let col = (file as u8 - b'a') as i32;
        let rank = (rank as u8 - b'0') as i32;
        if rank < 1 || rank > self.rows() || col >= self.cols() {
            return Err(invalid());
        }
        Ok(Square::new(self.rows() - rank, col))
    }

    /// Two-character coordinate of `square`.
    pub fn algebraic(&self, square: Square) -> CoordinateResult<String> {
        if !self.contains(square) {
            return Err(CoordinateError::out_of_bounds(square));
        }
        let file = (b'a' + square.col() as u8) as char;
        let rank = (b'0' + (self.rows() - square.row()) as u8) as char;
        Ok(format!("{file}{rank}"))
    }

    /// Parses four-character move text such as `"g1f3"` into (origin, destination).
    pub fn parse_move(&self, text: &str) -> CoordinateResult<(Square, Square)> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(CoordinateError::InvalidNotation(text.to_string()));
        }
        let from = self.square_from_algebraic(&text[..2])?;
        let to = self.square_from_algebraic(&text[2..])?;
        Ok((from, to))
    }

    /// Move text of (origin, destination), e.g. `"e2e4"`.
    pub fn move_text(&self, from: Square, to: Square) -> CoordinateResult<String> {
        Ok(format!("{}{}", self.algebraic(from)?, self.algebraic(to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_from_algebraic_corners() {
        let board = Board::new();
        assert_eq!(board.square_from_algebraic("a8").unwrap(), Square::new(0, 0));
        assert_eq!(board.square_from_algebraic("h8").unwrap(), Square::new(0, 7));
        assert_eq!(board.square_from_algebraic("a1").unwrap(), Square::new(7, 0));
        assert_eq!(board.square_from_algebraic("h1").unwrap(), Square::new(7, 7));
        assert_eq!(board.square_from_algebraic("e2").unwrap(), Square::new(6, 4));
    }

    #[test]
    fn test_square_from_algebraic_rejects_bad_text() {
        let board = Board::new();
        for text in ["", "e", "e22", "i1", "a0", "a9", "E2", "2e", "é2", "--"] {
            assert!(
                matches!(board.square_from_algebraic(text), Err(CoordinateError::InvalidNotation(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_algebraic_round_trip_all_squares() {
        let board = Board::new();
        for square in board.squares() {
            let text = board.algebraic(square).unwrap();
            assert_eq!(board.square_from_algebraic(&text).unwrap(), square);
        }
        assert_eq!(board.algebraic(Square::new(6, 4)).unwrap(), "e2");
    }

    #[test]
    fn test_algebraic_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.algebraic(Square::new(8, 0)).unwrap_err(),
            CoordinateError::OutOfBounds { row: 8, col: 0 }
        );
    }

    #[test]
    fn test_small_board_notation() {
        let board = Board::with_size(5, 4).unwrap();
        assert_eq!(board.square_from_algebraic("a5").unwrap(), Square::new(0, 0));
        assert_eq!(board.square_from_algebraic("d1").unwrap(), Square::new(4, 3));
        assert!(board.square_from_algebraic("e1").is_err());
        assert!(board.square_from_algebraic("a6").is_err());
    }

    #[test]
    fn test_parse_move_and_move_text() {
        let board = Board::new();
        let (from, to) = board.parse_move("g1f3").unwrap();
        assert_eq!(from, Square::new(7, 6));
        assert_eq!(to, Square::new(5, 5));
        assert_eq!(board.move_text(from, to).unwrap(), "g1f3");
        assert!(board.parse_move("g1f").is_err());
        assert!(board.parse_move("g1f9").is_err());
        assert!(board.parse_move("tablas").is_err());
    }
}
