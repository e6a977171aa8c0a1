use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::{
    attempt_move, legal_destinations, new_game, new_game_with, piece_at, random_move,
};
use crate::options::RuleOptions;
use crate::square::Square;
use crate::state::GameState;
use crate::view::{BoardView, SquarePiece};

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game { state: new_game() }
    }

    /// Start over under options given as JSON, e.g. `{"forbid_self_check": true}`.
    pub fn with_options(options_json: &str) -> Result<Game, JsError> {
        let options = RuleOptions::from_json(options_json)?;
        Ok(Game {
            state: new_game_with(options),
        })
    }

    pub fn board_state(&self) -> JsValue {
        to_js(&BoardView::from_state(&self.state))
    }

    pub fn piece_at(&self, col: i8, row: i8) -> JsValue {
        let piece = piece_at(&self.state, Square::new(col, row)).map(SquarePiece::from);
        to_js(&piece)
    }

    pub fn legal_destinations(&self, col: i8, row: i8) -> JsValue {
        to_js(&legal_destinations(&self.state, Square::new(col, row)))
    }

    /// Returns false, leaving the game as it was, when the move is illegal.
    pub fn attempt_move(&mut self, from_col: i8, from_row: i8, to_col: i8, to_row: i8) -> bool {
        attempt_move(
            &mut self.state,
            Square::new(from_col, from_row),
            Square::new(to_col, to_row),
        )
    }

    /// Play a random legal move for the side to move.
    pub fn random_move(&mut self) -> bool {
        match random_move(&self.state) {
            Some(mv) => attempt_move(&mut self.state, mv.from, mv.to),
            None => false,
        }
    }

    pub fn build_timestamp() -> String {
        env!("BUILD_TIMESTAMP").to_string()
    }
}
