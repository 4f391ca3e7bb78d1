//! Direction and path between two squares

use super::Board;
use crate::error::{CoordinateError, CoordinateResult};
use crate::types::{Direction, Square};

impl Board {
    /// Direction from `from` to `to`, `None` when they are not on a common
    /// rank, file or diagonal.
    pub fn direction(&self, from: Square, to: Square) -> CoordinateResult<Option<Direction>> {
        self.ensure_on_board(from)?;
        self.ensure_on_board(to)?;
        let (d_row, d_col) = from.delta_to(to);
        Ok(Direction::from_delta(d_row, d_col))
    }

    /// Squares strictly between `from` and `to` along their common
    /// direction, in walking order. Empty when there is no common direction
    /// or the squares are adjacent.
    pub fn cells_between(&self, from: Square, to: Square) -> CoordinateResult<Vec<Square>> {
        let Some(dir) = self.direction(from, to)? else {
            return Ok(Vec::new());
        };
        let (d_row, d_col) = from.delta_to(to);
        // on a diagonal |Δrow| == |Δcol|; on a line one of them is zero
        let steps = if d_row.abs() == d_col.abs() {
            d_row.abs()
        } else {
            d_row.abs() + d_col.abs()
        };

        let mut path = Vec::with_capacity(steps.saturating_sub(1) as usize);
        let mut current = from;
        for _ in 1..steps {
            current = current.step(dir);
            self.ensure_on_board(current)?;
            path.push(current);
        }
        Ok(path)
    }

    /// Whether any square strictly between `from` and `to` is occupied
    pub fn has_pieces_between(&self, from: Square, to: Square) -> CoordinateResult<bool> {
        for square in self.cells_between(from, to)? {
            if !self.is_empty_at(square)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn ensure_on_board(&self, square: Square) -> CoordinateResult<()> {
        if self.contains(square) {
            Ok(())
        } else {
            Err(CoordinateError::out_of_bounds(square))
        }
    }
}
