//! Error types
//!
//! Only structurally invalid coordinates are errors. An illegal chess move is
//! an ordinary `false` answer from the legality test.

use crate::types::Square;

/// Coordinate outside the board or malformed coordinate text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// (row, col) outside the board
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Text that is not a two-character file+rank coordinate
    #[error("invalid coordinate text: {0:?}")]
    InvalidNotation(String),

    /// Board dimensions that notation cannot address
    #[error("unsupported board size {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },
}

impl CoordinateError {
    pub(crate) fn out_of_bounds(square: Square) -> CoordinateError {
        CoordinateError::OutOfBounds {
            row: square.row(),
            col: square.col(),
        }
    }
}

/// Errors escalated by the arbiter
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbiterError {
    /// A board operation rejected a coordinate
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    /// `commit_move` called on an empty origin
    #[error("no piece to move at {0}")]
    EmptyOrigin(Square),

    /// Custom setup king reference that does not point at a king placement
    #[error("placement #{0} is not a king")]
    KingIndex(usize),
}

/// Result type for board operations
pub type CoordinateResult<T> = Result<T, CoordinateError>;

/// Result type for arbiter operations
pub type ArbiterResult<T> = Result<T, ArbiterError>;
