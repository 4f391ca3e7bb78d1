//! Board representation
//!
//! - `Board`: arena of cells plus the pieces placed on them
//! - `Cell`: one square and its optional occupant
//! - `PieceId`: stable handle of a piece stored in the board
//! - geometry (`direction`, `cells_between`), algebraic notation and the text
//!   rendering live in the submodules
//!
//! Cells store the id of their occupant and the board keeps the reverse
//! `PieceId -> Square` table. Both sides are only updated through the
//! placement methods of `Board` (`place` / `remove` / `relocate` /
//! `put_back`), which keep them consistent with each other.

mod cell;
mod display;
mod geometry;
mod notation;

pub use cell::{Cell, PieceId};

use crate::error::{CoordinateError, CoordinateResult};
use crate::types::{Color, Piece, PieceType, Square};

/// Game board of `rows x cols` cells
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    /// Row-major cells
    cells: Vec<Cell>,
    /// Every piece ever placed, indexed by `PieceId`
    pieces: Vec<Piece>,
    /// Current square of each piece, `None` once it left the board
    locations: Vec<Option<Square>>,
}

impl Board {
    /// Rows of a standard chess board
    pub const DEFAULT_ROWS: i32 = 8;
    /// Columns of a standard chess board
    pub const DEFAULT_COLS: i32 = 8;
    /// Largest row count that a single rank digit can address
    pub const MAX_ROWS: i32 = 9;
    /// Largest column count that a single file letter can address
    pub const MAX_COLS: i32 = 26;

    /// Empty 8x8 board
    pub fn new() -> Board {
        Board::build(Board::DEFAULT_ROWS, Board::DEFAULT_COLS)
    }

    /// Empty board of the given size
    pub fn with_size(rows: i32, cols: i32) -> CoordinateResult<Board> {
        if !(1..=Board::MAX_ROWS).contains(&rows) || !(1..=Board::MAX_COLS).contains(&cols) {
            return Err(CoordinateError::InvalidSize { rows, cols });
        }
        Ok(Board::build(rows, cols))
    }

    fn build(rows: i32, cols: i32) -> Board {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Square::new(row, col))))
            .collect();
        Board {
            rows,
            cols,
            cells,
            pieces: Vec::new(),
            locations: Vec::new(),
        }
    }

    #[inline]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `square` lies on this board
    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        square.row() >= 0 && square.row() < self.rows && square.col() >= 0 && square.col() < self.cols
    }

    fn index(&self, square: Square) -> CoordinateResult<usize> {
        if self.contains(square) {
            Ok((square.row() * self.cols + square.col()) as usize)
        } else {
            Err(CoordinateError::out_of_bounds(square))
        }
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, row: i32, col: i32) -> CoordinateResult<&Cell> {
        self.cell_at(Square::new(row, col))
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, square: Square) -> CoordinateResult<&Cell> {
        let idx = self.index(square)?;
        Ok(&self.cells[idx])
    }

    /// All cells, row by row from row 0
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All squares, row by row from row 0
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().map(Cell::square)
    }

    /// Piece behind an id issued by this board
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// Current square of a piece, `None` when it is not on the board
    #[inline]
    pub fn location(&self, id: PieceId) -> Option<Square> {
        self.locations.get(id.index()).copied().flatten()
    }

    /// Id of the piece standing on `square`
    pub fn occupant(&self, square: Square) -> CoordinateResult<Option<PieceId>> {
        Ok(self.cell_at(square)?.occupant())
    }

    /// Piece standing on `square`
    pub fn piece_at(&self, square: Square) -> CoordinateResult<Option<&Piece>> {
        Ok(self.occupant(square)?.and_then(|id| self.piece(id)))
    }

    /// Color of the piece standing on `square`
    pub fn color_at(&self, square: Square) -> CoordinateResult<Option<Color>> {
        Ok(self.piece_at(square)?.map(|p| p.color()))
    }

    /// Whether `square` is empty
    pub fn is_empty_at(&self, square: Square) -> CoordinateResult<bool> {
        Ok(self.cell_at(square)?.is_empty())
    }

    /// Occupied squares with their pieces, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId, &Piece)> + '_ {
        self.cells.iter().filter_map(move |cell| {
            let id = cell.occupant()?;
            let piece = self.piece(id)?;
            Some((cell.square(), id, piece))
        })
    }

    /// Places a new piece on `square` and returns its id.
    ///
    /// A piece already standing there is taken off the board.
    pub fn place(&mut self, piece: Piece, square: Square) -> CoordinateResult<PieceId> {
        let idx = self.index(square)?;
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(piece);
        self.locations.push(None);
        self.link(idx, id, square);
        Ok(id)
    }

    /// [`Board::place`] by row and column
    pub fn place_at(&mut self, piece: Piece, row: i32, col: i32) -> CoordinateResult<PieceId> {
        self.place(piece, Square::new(row, col))
    }

    /// Takes the occupant of `square` off the board.
    pub fn remove(&mut self, square: Square) -> CoordinateResult<Option<PieceId>> {
        let idx = self.index(square)?;
        let removed = self.cells[idx].take_occupant();
        if let Some(id) = removed {
            self.locations[id.index()] = None;
        }
        Ok(removed)
    }

    /// Moves the occupant of `from` onto `to` and returns the piece displaced
    /// from `to`, if any. Nothing happens when `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> CoordinateResult<Option<PieceId>> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        let Some(id) = self.cells[from_idx].take_occupant() else {
            return Ok(None);
        };
        self.locations[id.index()] = None;
        let displaced = self.link(to_idx, id, to);
        Ok(displaced)
    }

    /// Puts a piece that was issued by this board back on `square`.
    pub(crate) fn put_back(&mut self, id: PieceId, square: Square) -> CoordinateResult<()> {
        let idx = self.index(square)?;
        if let Some(old) = self.location(id) {
            let old_idx = self.index(old)?;
            self.cells[old_idx].set_occupant(None);
        }
        self.link(idx, id, square);
        Ok(())
    }

    /// Clears the first-move flag of a piece.
    pub fn mark_moved(&mut self, id: PieceId) {
        if let Some(piece) = self.piece_mut(id) {
            piece.mark_moved();
        }
    }

    fn link(&mut self, idx: usize, id: PieceId, square: Square) -> Option<PieceId> {
        let displaced = self.cells[idx].take_occupant();
        if let Some(old) = displaced {
            self.locations[old.index()] = None;
        }
        self.cells[idx].set_occupant(Some(id));
        self.locations[id.index()] = Some(square);
        displaced
    }

    /// Number of pieces of `color` on the board
    pub fn count_pieces(&self, color: Color) -> usize {
        self.occupied().filter(|(_, _, piece)| piece.color() == color).count()
    }

    /// First king of `color` found scanning from row 0
    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.occupied()
            .find(|(_, _, piece)| piece.kind() == PieceType::King && piece.color() == color)
            .map(|(_, id, _)| id)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
