//! Behaviour of the public game surface, one scenario per rule.

use chess_rules::board::Board;
use chess_rules::game::{attempt_move, legal_destination, new_game, new_game_with, piece_at};
use chess_rules::options::RuleOptions;
use chess_rules::state::CastlingRights;
use chess_rules::{Color, GameState, Piece, PieceType, Square};

fn sq(name: &str) -> Square {
    Square::from_name(name).unwrap()
}

fn white(piece_type: PieceType) -> Piece {
    Piece::new(piece_type, Color::White)
}

fn black(piece_type: PieceType) -> Piece {
    Piece::new(piece_type, Color::Black)
}

/// Play a sequence of coordinate moves, asserting each one is accepted.
fn play(state: &mut GameState, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        assert!(attempt_move(state, sq(from), sq(to)), "{mv} was rejected");
    }
}

fn king_side_castling_position() -> Board {
    Board::empty()
        .with(sq("e1"), white(PieceType::King))
        .with(sq("h1"), white(PieceType::Rook))
        .with(sq("e8"), black(PieceType::King))
}

#[test]
fn new_game_has_the_standard_setup() {
    let state = new_game();
    let back_rank = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];
    for (col, piece_type) in back_rank.into_iter().enumerate() {
        let col = col as i8;
        assert_eq!(piece_at(&state, Square::new(col, 0)), Some(white(piece_type)));
        assert_eq!(piece_at(&state, Square::new(col, 1)), Some(white(PieceType::Pawn)));
        assert_eq!(piece_at(&state, Square::new(col, 6)), Some(black(PieceType::Pawn)));
        assert_eq!(piece_at(&state, Square::new(col, 7)), Some(black(piece_type)));
    }
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.castling_rights(), CastlingRights::all());
}

#[test]
fn double_step_then_en_passant() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(state.en_passant_target(), Some(sq("d6")));
    assert!(legal_destination(&state, sq("e5"), sq("d6")));

    play(&mut state, &["e5d6"]);
    assert_eq!(piece_at(&state, sq("d6")), Some(white(PieceType::Pawn)));
    assert_eq!(piece_at(&state, sq("d5")), None);
    assert_eq!(state.en_passant_target(), None);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut state = new_game();
    play(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
    assert!(!legal_destination(&state, sq("e5"), sq("d6")));
}

#[test]
fn d2d4_sets_target_on_d3() {
    let mut state = new_game();
    play(&mut state, &["d2d4"]);
    assert_eq!(state.en_passant_target(), Some(sq("d3")));
    play(&mut state, &["g8f6"]);
    assert_eq!(state.en_passant_target(), None);
}

#[test]
fn king_side_castling_from_the_opening() {
    let mut state = new_game();
    play(&mut state, &["g1f3", "a7a6", "e2e3", "a6a5", "f1d3", "b7b6"]);
    assert!(legal_destination(&state, sq("e1"), sq("g1")));

    play(&mut state, &["e1g1"]);
    assert_eq!(piece_at(&state, sq("g1")), Some(white(PieceType::King)));
    assert_eq!(piece_at(&state, sq("f1")), Some(white(PieceType::Rook)));
    assert_eq!(piece_at(&state, sq("h1")), None);
    let rights = state.castling_rights().for_color(Color::White);
    assert!(!rights.king_side && !rights.queen_side);
}

#[test]
fn castling_refused_when_any_king_square_is_attacked() {
    // Knights covering e1, f1 and g1 in turn
    for knight in ["d3", "g3", "h3"] {
        let board = king_side_castling_position().with(sq(knight), black(PieceType::Knight));
        let mut state = GameState::from_position(board, Color::White, CastlingRights::all(), None);
        assert!(
            !legal_destination(&state, sq("e1"), sq("g1")),
            "knight on {knight} should forbid castling"
        );
        assert!(!attempt_move(&mut state, sq("e1"), sq("g1")));
        assert_eq!(piece_at(&state, sq("h1")), Some(white(PieceType::Rook)));
    }

    let state = GameState::from_position(
        king_side_castling_position(),
        Color::White,
        CastlingRights::all(),
        None,
    );
    assert!(legal_destination(&state, sq("e1"), sq("g1")));
}

#[test]
fn pawn_diagonal_on_transit_square_refuses_castling() {
    // g2 covers f1 and h1 even though both diagonals are empty of white pieces
    let board = king_side_castling_position().with(sq("g2"), black(PieceType::Pawn));
    let mut state = GameState::from_position(board, Color::White, CastlingRights::all(), None);
    assert!(!legal_destination(&state, sq("e1"), sq("g1")));
    assert!(!attempt_move(&mut state, sq("e1"), sq("g1")));
    assert_eq!(piece_at(&state, sq("e1")), Some(white(PieceType::King)));
    assert_eq!(piece_at(&state, sq("h1")), Some(white(PieceType::Rook)));
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn queen_side_castling_moves_rook_to_d_file() {
    let board = Board::empty()
        .with(sq("e1"), white(PieceType::King))
        .with(sq("a1"), white(PieceType::Rook))
        .with(sq("e8"), black(PieceType::King));
    let mut state = GameState::from_position(board, Color::White, CastlingRights::all(), None);
    play(&mut state, &["e1c1"]);
    assert_eq!(piece_at(&state, sq("c1")), Some(white(PieceType::King)));
    assert_eq!(piece_at(&state, sq("d1")), Some(white(PieceType::Rook)));
    assert_eq!(piece_at(&state, sq("a1")), None);
}

#[test]
fn rook_blocked_by_own_pawn() {
    let blocked = Board::empty()
        .with(sq("a1"), white(PieceType::Rook))
        .with(sq("a2"), white(PieceType::Pawn));
    let state = GameState::from_position(blocked, Color::White, CastlingRights::none(), None);
    assert!(!legal_destination(&state, sq("a1"), sq("a4")));

    let open = Board::empty().with(sq("a1"), white(PieceType::Rook));
    let state = GameState::from_position(open, Color::White, CastlingRights::none(), None);
    assert!(legal_destination(&state, sq("a1"), sq("a4")));
}

#[test]
fn knight_jumps_out_of_a_crowd() {
    let mut board = Board::empty().with(sq("b1"), white(PieceType::Knight));
    for name in ["a1", "c1", "a2", "b2", "c2"] {
        board.place(sq(name), white(PieceType::Pawn));
    }
    let state = GameState::from_position(board, Color::White, CastlingRights::none(), None);
    for to in ["c3", "a3", "d2"] {
        assert!(legal_destination(&state, sq("b1"), sq(to)), "b1{to}");
    }
}

#[test]
fn exposing_own_king_is_not_detected_by_default() {
    let board = Board::empty()
        .with(sq("e1"), white(PieceType::King))
        .with(sq("e2"), white(PieceType::Bishop))
        .with(sq("e8"), black(PieceType::Rook));
    let mut state =
        GameState::from_position(board.clone(), Color::White, CastlingRights::none(), None);
    assert!(attempt_move(&mut state, sq("e2"), sq("d3")));

    let mut strict = GameState::from_position(board, Color::White, CastlingRights::none(), None)
        .with_options(RuleOptions::strict());
    assert!(!attempt_move(&mut strict, sq("e2"), sq("d3")));
    assert_eq!(strict.side_to_move(), Color::White);
}

#[test]
fn strict_game_from_options() {
    let state = new_game_with(RuleOptions::strict());
    assert!(state.options().forbid_self_check);
    assert!(legal_destination(&state, sq("e2"), sq("e4")));
}

#[test]
fn turns_alternate_only_on_success() {
    let mut state = new_game();
    let mut expected = Color::White;
    for (from, to, ok) in [
        ("e2", "e4", true),
        ("e4", "e5", false),
        ("e7", "e6", true),
        ("e6", "e5", false),
        ("d1", "h5", true),
        ("a8", "a6", false),
        ("g8", "f6", true),
    ] {
        assert_eq!(attempt_move(&mut state, sq(from), sq(to)), ok, "{from}{to}");
        if ok {
            expected = expected.opposite();
        }
        assert_eq!(state.side_to_move(), expected);
    }
}

#[test]
fn failed_attempts_leave_state_untouched() {
    let mut state = new_game();
    play(&mut state, &["e2e4"]);
    let before = state.clone();
    assert!(!attempt_move(&mut state, sq("e4"), sq("e5")));
    assert!(!attempt_move(&mut state, sq("d4"), sq("d5")));
    assert!(!attempt_move(&mut state, sq("e7"), Square::new(4, -1)));
    assert_eq!(state, before);
}

#[test]
fn queries_are_idempotent() {
    let state = new_game();
    let before = state.clone();
    for _ in 0..3 {
        assert_eq!(piece_at(&state, sq("g1")), Some(white(PieceType::Knight)));
        assert!(legal_destination(&state, sq("g1"), sq("f3")));
        assert!(!legal_destination(&state, sq("g1"), sq("g3")));
    }
    assert_eq!(state, before);
}

#[test]
fn pawn_on_last_rank_stays_a_pawn() {
    let board = Board::empty()
        .with(sq("a7"), white(PieceType::Pawn))
        .with(sq("h1"), white(PieceType::King))
        .with(sq("h8"), black(PieceType::King));
    let mut state = GameState::from_position(board, Color::White, CastlingRights::none(), None);
    play(&mut state, &["a7a8"]);
    assert_eq!(piece_at(&state, sq("a8")), Some(white(PieceType::Pawn)));
}
