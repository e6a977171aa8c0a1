//! The surface a presentation layer drives: start a game, read squares, ask
//! whether a destination is legal, and attempt moves.
//!
//! A rejected move is a plain `false` and leaves the game untouched. The
//! caller is expected to offer only squares holding a piece of the side to
//! move as move sources, the same gate [`crate::session::Session`] applies.

use tracing::{debug, trace};

use crate::moves::Move;
use crate::options::RuleOptions;
use crate::piece::Occupant;
use crate::square::Square;
use crate::state::GameState;

/// Platform-appropriate random number in [0, 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_f64() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// Standard starting position with the classic rules.
pub fn new_game() -> GameState {
    GameState::new()
}

pub fn new_game_with(options: RuleOptions) -> GameState {
    GameState::new().with_options(options)
}

pub fn piece_at(state: &GameState, sq: Square) -> Occupant {
    state.board().get(sq)
}

/// Whether the side to move may play its piece on `from` to `to`. Never
/// mutates the game.
pub fn legal_destination(state: &GameState, from: Square, to: Square) -> bool {
    match state.board().get(from) {
        Some(p) if p.color == state.side_to_move() => state.is_legal(from, to),
        _ => false,
    }
}

/// Validate, then apply and hand the turn over. Returns whether the move was
/// played.
pub fn attempt_move(state: &mut GameState, from: Square, to: Square) -> bool {
    if !legal_destination(state, from, to) {
        trace!(%from, %to, side = %state.side_to_move(), "move rejected");
        return false;
    }
    if let Some(piece) = state.board().get(from) {
        debug!(%from, %to, piece = %piece.piece_type, side = %piece.color, "move played");
    }
    state.apply(from, to);
    state.pass_turn();
    true
}

/// Every square the piece on `from` may move to, a1 first.
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| legal_destination(state, from, to))
        .collect()
}

/// Every move available to the side to move.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let side = state.side_to_move();
    state
        .board()
        .pieces()
        .filter(|(_, p)| p.color == side)
        .flat_map(|(from, _)| {
            legal_destinations(state, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// A uniformly chosen legal move, or `None` when the side to move has none.
pub fn random_move(state: &GameState) -> Option<Move> {
    let moves = legal_moves(state);
    if moves.is_empty() {
        return None;
    }
    let idx = ((random_f64() * moves.len() as f64) as usize).min(moves.len() - 1);
    Some(moves[idx])
}
