//! Basic types
//!
//! - `Color`: side (White / Black)
//! - `PieceType`: the six piece kinds
//! - `Piece`: color + kind + first-move flag
//! - `Direction`: the eight compass directions
//! - `Square`: (row, col) coordinate

mod color;
mod direction;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use direction::Direction;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;
