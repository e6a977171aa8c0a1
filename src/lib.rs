//! Rules engine for standard chess: board state, move legality, and move
//! application including en passant and castling.
//!
//! Presentation is left to the caller, which drives the functions in
//! [`game`] or a [`session::Session`].

pub mod attacks;
pub mod board;
pub mod error;
pub mod execute;
pub mod game;
pub mod moves;
pub mod options;
pub mod piece;
pub mod rules;
pub mod session;
pub mod square;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use error::EngineError;
pub use game::{attempt_move, legal_destination, new_game, piece_at};
pub use piece::{Color, Occupant, Piece, PieceType};
pub use square::Square;
pub use state::GameState;
