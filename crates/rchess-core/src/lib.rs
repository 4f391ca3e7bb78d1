//! # rchess-core
//!
//! Chess move legality and check detection.
//!
//! ## Modules
//!
//! - `types`: basic types (Color, PieceType, Piece, Direction, Square)
//! - `board`: cell arena, geometry between squares, algebraic notation, text rendering
//! - `rules`: per-piece movement rules
//! - `arbiter`: turn keeping, legality, commit, check detection and trial moves
//! - `json`: serde views of the game state
//!
//! ```
//! use rchess_core::{Arbiter, Color};
//!
//! let mut arbiter = Arbiter::default();
//! arbiter.place_standard_setup().unwrap();
//!
//! let board = arbiter.board();
//! let (from, to) = board.parse_move("e2e4").unwrap();
//! assert!(arbiter.is_legal_move(from, to).unwrap());
//! assert!(!arbiter.would_leave_own_king_in_check(from, to).unwrap());
//!
//! arbiter.commit_move(from, to).unwrap();
//! arbiter.change_turn();
//! assert_eq!(arbiter.turn(), Some(Color::Black));
//! ```

pub mod arbiter;
pub mod board;
pub mod error;
pub mod json;
pub mod rules;
pub mod types;

pub use arbiter::{Arbiter, Context, KingRefs, MoveOutcome};
pub use board::{Board, Cell, PieceId};
pub use error::{ArbiterError, ArbiterResult, CoordinateError, CoordinateResult};
pub use rules::Target;
pub use types::{Color, Direction, Piece, PieceType, Square};
