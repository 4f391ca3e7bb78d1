//! Game arbiter
//!
//! The arbiter owns the board and the game state (turn, committed move
//! count, king handles) and answers the rule questions:
//!
//! - `is_legal_move`: does a move obey the moving piece's rule?
//! - `commit_move`: apply an already validated move
//! - `is_in_check`: can any enemy piece reach a color's king?
//! - `would_leave_own_king_in_check`: trial move + check test + undo
//!
//! Legality is always evaluated under an explicit [`Context`]. Only
//! `Context::Normal` enforces that the moving piece belongs to the side to
//! move; check scans and trial moves evaluate enemy moves through the same
//! code path with that rule relaxed.

mod check;
mod setup;
mod simulate;

pub use setup::KingRefs;

use log::debug;

use crate::board::{Board, PieceId};
use crate::error::{ArbiterError, ArbiterResult};
use crate::rules::Target;
use crate::types::{Color, Square};

/// Evaluation context of a legality test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// A move requested by the side to move
    Normal,
    /// Legality of a move tried out by `would_leave_own_king_in_check`
    Simulating,
    /// Enemy moves examined by `is_in_check`
    ScanningForCheck,
}

impl Context {
    /// Whether the moving piece must belong to the side to move
    #[inline]
    pub const fn enforces_turn(self) -> bool {
        matches!(self, Context::Normal)
    }
}

/// Result of [`Arbiter::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move breaks the rules of the moving piece (or it is not its turn)
    Illegal,
    /// The move is legal for the piece but exposes the mover's own king
    LeavesKingInCheck,
    /// The move was committed and the turn passed; `check` tells whether the
    /// new side to move is in check
    Played { check: bool },
}

/// Rule keeper of one game
#[derive(Debug, Clone)]
pub struct Arbiter {
    board: Board,
    turn: Color,
    started: bool,
    move_count: u32,
    /// King of each color, indexed by `Color::index`
    kings: [Option<PieceId>; Color::NUM],
}

impl Arbiter {
    /// Arbiter over `board`; the game starts once pieces are placed.
    pub fn new(board: Board) -> Arbiter {
        Arbiter {
            board,
            turn: Color::White,
            started: false,
            move_count: 0,
            kings: [None; Color::NUM],
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move, `None` until pieces have been placed
    #[inline]
    pub fn turn(&self) -> Option<Color> {
        self.started.then_some(self.turn)
    }

    /// Passes the turn to the other side. No effect before setup.
    pub fn change_turn(&mut self) {
        if self.started {
            self.turn = self.turn.opponent();
        }
    }

    /// Number of committed moves
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current square of the king of `color`
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()].and_then(|id| self.board.location(id))
    }

    /// Whether the piece on `origin` may move to `destination` now.
    ///
    /// Absent squares, an empty origin, a friendly destination or a piece of
    /// the side not to move all give `Ok(false)`. Only coordinates outside
    /// the board are errors.
    pub fn is_legal_move(
        &self,
        origin: impl Into<Option<Square>>,
        destination: impl Into<Option<Square>>,
    ) -> ArbiterResult<bool> {
        self.is_legal_in(origin.into(), destination.into(), Context::Normal)
    }

    /// Legality test under an explicit context.
    pub fn is_legal_in(
        &self,
        origin: Option<Square>,
        destination: Option<Square>,
        context: Context,
    ) -> ArbiterResult<bool> {
        let (Some(from), Some(to)) = (origin, destination) else {
            return Ok(false);
        };
        let Some(piece) = self.board.piece_at(from)?.copied() else {
            return Ok(false);
        };
        let occupant = self.board.color_at(to)?;
        if occupant == Some(piece.color()) {
            return Ok(false);
        }
        if context.enforces_turn() && self.turn() != Some(piece.color()) {
            return Ok(false);
        }

        let direction = self.board.direction(from, to)?;
        let blocked = self.board.has_pieces_between(from, to)?;
        Ok(piece.is_legal_move(from, Some(Target::new(to, occupant)), direction, blocked))
    }

    /// Applies a move that the caller has already validated.
    ///
    /// Clears the first-move flag of the moving piece, captures whatever
    /// stands on `destination` and counts the move. The turn is not changed.
    pub fn commit_move(&mut self, origin: Square, destination: Square) -> ArbiterResult<()> {
        let Some(id) = self.board.occupant(origin)? else {
            return Err(ArbiterError::EmptyOrigin(origin));
        };
        // validate before mutating anything
        self.board.cell_at(destination)?;

        self.board.mark_moved(id);
        let captured = self.board.relocate(origin, destination)?;
        self.move_count += 1;
        debug!(
            "move {}: {} -> {}{}",
            self.move_count,
            origin,
            destination,
            if captured.is_some() { " (capture)" } else { "" }
        );
        Ok(())
    }

    /// Four-character move text of (origin, destination), e.g. `"e2e4"`.
    pub fn move_text(&self, origin: Square, destination: Square) -> ArbiterResult<String> {
        Ok(self.board.move_text(origin, destination)?)
    }

    /// One turn of play from move text: validate, reject self-check,
    /// commit, pass the turn and report check on the opponent.
    pub fn play(&mut self, text: &str) -> ArbiterResult<MoveOutcome> {
        let (from, to) = self.board.parse_move(text)?;
        if !self.is_legal_move(from, to)? {
            return Ok(MoveOutcome::Illegal);
        }
        if self.would_leave_own_king_in_check(from, to)? {
            return Ok(MoveOutcome::LeavesKingInCheck);
        }
        self.commit_move(from, to)?;
        self.change_turn();
        let check = match self.turn() {
            Some(side) => self.is_in_check(side)?,
            None => false,
        };
        Ok(MoveOutcome::Played { check })
    }

    /// Begins a fresh game: White to move, no committed moves.
    fn start(&mut self) {
        self.started = true;
        self.turn = Color::White;
        self.move_count = 0;
    }
}

impl Default for Arbiter {
    fn default() -> Arbiter {
        Arbiter::new(Board::new())
    }
}
