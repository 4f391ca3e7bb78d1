//! Complete games replayed move by move through the arbiter

use rchess_core::{Arbiter, Color};

/// Scholar's mate
const SCHOLARS_MATE: [&str; 7] = ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"];

/// Karpov, game 2, up to the first castling (not supported)
const KARPOV_GAME_2: [&str; 34] = [
    "e2e4", "c7c6", "d2d4", "d7d5", "e4e5", "c8f5", "b1c3", "e7e6", "g2g4", "f5g6", "g1e2",
    "g8e7", "e2f4", "c6c5", "d4c5", "b8d7", "h2h4", "d7e5", "f1g2", "d5d4", "h4h5", "d4c3",
    "d1d8", "a8d8", "h5g6", "e7g6", "b2b4", "g6f4", "c1f4", "e5c6", "a1b1", "f8e7", "f4e3",
    "e8g8",
];

/// Alekhine, game 8 (no castling)
const ALEKHINE_GAME_8: [&str; 68] = [
    "e2e4", "b7b6", "d2d4", "c8b7", "b1c3", "e7e6", "f1d3", "g8f6", "c1g5", "f8e7", "g1h3",
    "d7d5", "g5f6", "g7f6", "d1g4", "d5e4", "g4g7", "h8f8", "c3e4", "f6f5", "e4g5", "e7f6",
    "g7h6", "d8d4", "a1d1", "d4e5", "e1f1", "f6g7", "h6h5", "h7h6", "d1e1", "b7e4", "d3e4",
    "f5e4", "e1e4", "e5d5", "g5e6", "d5e4", "e6g7", "e8d8", "h5h6", "b8d7", "h3f4", "d8c8",
    "f4d3", "c8b7", "h6f4", "e4g6", "g7f5", "a8e8", "g2g3", "g6c6", "f1g1", "d7c5", "d3e5",
    "c6d5", "e5f3", "e8e4", "f4g5", "e4e2", "g1g2", "e2f2", "g2h3", "f8h8", "f5h4", "d5f3",
    "h1e1", "f7f6",
];

fn new_game() -> Arbiter {
    let mut arbiter = Arbiter::default();
    arbiter.place_standard_setup().unwrap();
    arbiter
}

/// Asserts that `text` is legal for the side to move, then commits it and
/// passes the turn.
fn play_legal(arbiter: &mut Arbiter, text: &str) {
    let (from, to) = arbiter.board().parse_move(text).unwrap();
    assert!(
        arbiter.is_legal_move(from, to).unwrap(),
        "move {} ({text}) should be legal\n{}",
        arbiter.move_count() + 1,
        arbiter.board()
    );
    arbiter.commit_move(from, to).unwrap();
    arbiter.change_turn();
}

#[test]
fn test_scholars_mate_is_legal_and_ends_in_check() {
    let mut arbiter = new_game();
    assert_eq!(arbiter.move_count(), 0);
    for text in SCHOLARS_MATE {
        play_legal(&mut arbiter, text);
    }
    assert_eq!(arbiter.move_count(), 7);
    assert_eq!(arbiter.turn(), Some(Color::Black));
    assert!(arbiter.is_in_check(Color::Black).unwrap());
    assert!(!arbiter.is_in_check(Color::White).unwrap());
    assert_eq!(arbiter.board().count_pieces(Color::Black), 15);
}

#[test]
fn test_scholars_mate_final_position() {
    let mut arbiter = new_game();
    for text in SCHOLARS_MATE {
        play_legal(&mut arbiter, text);
    }
    let expected = "\
8  RB -- BB QB KB BB -- RB 
7  PB PB PB PB -- QW PB PB 
6  -- -- NB -- -- NB -- -- 
5  -- -- -- -- PB -- -- -- 
4  -- -- BW -- PW -- -- -- 
3  -- -- -- -- -- -- -- -- 
2  PW PW PW PW -- PW PW PW 
1  RW NW BW -- KW -- NW RW 
   a  b  c  d  e  f  g  h 
";
    assert_eq!(arbiter.board().render(), expected);
}

#[test]
fn test_scholars_mate_king_cannot_take_defended_queen() {
    let mut arbiter = new_game();
    for text in SCHOLARS_MATE {
        play_legal(&mut arbiter, text);
    }
    let board = arbiter.board();
    let (from, to) = board.parse_move("e8f7").unwrap();
    assert!(arbiter.is_legal_move(from, to).unwrap());
    // the queen on f7 is covered by the bishop on c4
    assert!(arbiter.would_leave_own_king_in_check(from, to).unwrap());
}

#[test]
fn test_karpov_game_2_until_castling() {
    let mut arbiter = new_game();
    let (played, castling) = KARPOV_GAME_2.split_at(33);
    for text in played {
        play_legal(&mut arbiter, text);
    }
    let (from, to) = arbiter.board().parse_move(castling[0]).unwrap();
    assert!(!arbiter.is_legal_move(from, to).unwrap(), "castling is not supported");
    assert_eq!(arbiter.move_count(), 33);
}

#[test]
fn test_alekhine_game_8() {
    let mut arbiter = new_game();
    for text in ALEKHINE_GAME_8 {
        play_legal(&mut arbiter, text);
    }
    assert_eq!(arbiter.move_count(), 68);
}

#[test]
fn test_play_rejects_moves_out_of_turn() {
    let mut arbiter = new_game();
    let (from, to) = arbiter.board().parse_move("e7e5").unwrap();
    assert!(!arbiter.is_legal_move(from, to).unwrap());
    play_legal(&mut arbiter, "e2e4");
    assert!(arbiter.is_legal_move(from, to).unwrap());
}

#[test]
fn test_rook_cannot_move_diagonally_from_start() {
    let arbiter = new_game();
    let board = arbiter.board();
    let a1 = board.square_from_algebraic("a1").unwrap();
    let b2 = board.square_from_algebraic("b2").unwrap();
    assert!(!arbiter.is_legal_move(a1, b2).unwrap());
}

#[test]
fn test_pieces_blocked_at_start() {
    let arbiter = new_game();
    for text in ["a1a3", "c1e3", "d1d3", "e1e2", "f1a6"] {
        let (from, to) = arbiter.board().parse_move(text).unwrap();
        assert!(!arbiter.is_legal_move(from, to).unwrap(), "{text}");
    }
    for text in ["b1c3", "g1f3", "a2a4", "h2h3"] {
        let (from, to) = arbiter.board().parse_move(text).unwrap();
        assert!(arbiter.is_legal_move(from, to).unwrap(), "{text}");
    }
}
