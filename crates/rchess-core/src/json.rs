//! JSON views of the game state for tools and front ends

use serde::{Deserialize, Serialize};

use crate::arbiter::Arbiter;
use crate::board::Board;
use crate::error::CoordinateResult;
use crate::types::Piece;

/// JSON representation of a piece
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "white" | "black"
    pub color: String,
    /// "P" | "N" | "B" | "R" | "Q" | "K"
    #[serde(rename = "type")]
    pub piece_type: String,
    /// Still allowed the pawn double step
    pub first_move: bool,
}

/// One board cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    /// "a8" .. "h1"
    pub square: String,
    /// Occupant (null when empty)
    pub piece: Option<PieceJson>,
}

/// Whole board state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    pub rows: i32,
    pub cols: i32,
    /// Cells row by row, top rank first
    pub cells: Vec<Vec<CellJson>>,
    /// "white" | "black", null before setup
    pub turn: Option<String>,
    pub move_count: u32,
}

/// Result of replaying a list of moves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplayResultJson {
    /// Moves that were committed, in order
    pub applied: Vec<String>,
    pub move_count: u32,
    /// Whether the side to move is in check
    pub check: bool,
    pub board: BoardStateJson,
    /// Why the replay stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Piece> for PieceJson {
    fn from(piece: &Piece) -> PieceJson {
        PieceJson {
            color: piece.color().to_string(),
            piece_type: piece.kind().to_char().to_string(),
            first_move: piece.is_first_move(),
        }
    }
}

/// Cells of `board` as JSON rows
pub fn board_cells(board: &Board) -> CoordinateResult<Vec<Vec<CellJson>>> {
    let mut rows = Vec::with_capacity(board.rows() as usize);
    for row in 0..board.rows() {
        let mut cells = Vec::with_capacity(board.cols() as usize);
        for col in 0..board.cols() {
            let square = board.cell(row, col)?.square();
            cells.push(CellJson {
                square: board.algebraic(square)?,
                piece: board.piece_at(square)?.map(PieceJson::from),
            });
        }
        rows.push(cells);
    }
    Ok(rows)
}

impl BoardStateJson {
    /// Snapshot of the arbiter's board and game state
    pub fn from_arbiter(arbiter: &Arbiter) -> CoordinateResult<BoardStateJson> {
        let board = arbiter.board();
        Ok(BoardStateJson {
            rows: board.rows(),
            cols: board.cols(),
            cells: board_cells(board)?,
            turn: arbiter.turn().map(|color| color.to_string()),
            move_count: arbiter.move_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_state_json_standard() {
        let mut arbiter = Arbiter::default();
        arbiter.place_standard_setup().unwrap();
        let state = BoardStateJson::from_arbiter(&arbiter).unwrap();
        assert_eq!(state.turn.as_deref(), Some("white"));
        assert_eq!(state.cells.len(), 8);
        assert_eq!(state.cells[0][0].square, "a8");
        let rook = state.cells[0][0].piece.as_ref().unwrap();
        assert_eq!(rook.piece_type, "R");
        assert_eq!(rook.color, "black");
        assert!(state.cells[4][4].piece.is_none());
    }

    #[test]
    fn test_board_state_json_serializes_type_key() {
        let mut arbiter = Arbiter::default();
        arbiter.place_standard_setup().unwrap();
        let state = BoardStateJson::from_arbiter(&arbiter).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"type\":\"K\""));
        assert!(json.contains("\"turn\":\"white\""));
        let back: BoardStateJson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_turn_is_null_before_setup() {
        let arbiter = Arbiter::default();
        let state = BoardStateJson::from_arbiter(&arbiter).unwrap();
        assert_eq!(state.turn, None);
        assert!(state.cells.iter().flatten().all(|cell| cell.piece.is_none()));
    }
}
