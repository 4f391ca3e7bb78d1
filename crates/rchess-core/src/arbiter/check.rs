//! Check detection

use log::trace;

use super::{Arbiter, Context};
use crate::error::ArbiterResult;
use crate::types::{Color, Square};

impl Arbiter {
    /// Whether some enemy piece can legally move onto the king of `color`.
    ///
    /// A color without a king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> ArbiterResult<bool> {
        let Some(king) = self.king_square(color) else {
            trace!("no {color} king on the board");
            return Ok(false);
        };
        for square in self.enemy_squares(color) {
            if self.is_legal_in(Some(square), Some(king), Context::ScanningForCheck)? {
                trace!("{color} king on {king} attacked from {square}");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Squares of every piece that can currently capture the king of `color`
    pub fn checkers(&self, color: Color) -> ArbiterResult<Vec<Square>> {
        let Some(king) = self.king_square(color) else {
            return Ok(Vec::new());
        };
        let mut found = Vec::new();
        for square in self.enemy_squares(color) {
            if self.is_legal_in(Some(square), Some(king), Context::ScanningForCheck)? {
                found.push(square);
            }
        }
        Ok(found)
    }

    fn enemy_squares(&self, color: Color) -> Vec<Square> {
        self.board
            .occupied()
            .filter(|(_, _, piece)| piece.color() != color)
            .map(|(square, _, _)| square)
            .collect()
    }
}
