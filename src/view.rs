use serde::Serialize;

use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;
use crate::state::{CastlingRights, GameState};

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SquarePiece {
    pub kind: PieceType,
    pub color: Color,
    pub symbol: char,
}

impl From<Piece> for SquarePiece {
    fn from(p: Piece) -> Self {
        SquarePiece {
            kind: p.piece_type,
            color: p.color,
            symbol: p.symbol(),
        }
    }
}

/// Read-only snapshot of a game for renderers. `squares[0]` is rank 1,
/// `squares[r][0]` is file a.
#[derive(Serialize, Debug)]
pub struct BoardView {
    pub squares: Vec<Vec<Option<SquarePiece>>>,
    pub side_to_move: Color,
    pub en_passant_target: Option<String>,
    pub castling: CastlingRights,
}

impl BoardView {
    pub fn from_state(state: &GameState) -> Self {
        let squares = (0..8)
            .map(|row| {
                (0..8)
                    .map(|col| {
                        state.board().get(Square::new(col, row)).map(SquarePiece::from)
                    })
                    .collect()
            })
            .collect();

        BoardView {
            squares,
            side_to_move: state.side_to_move(),
            en_passant_target: state.en_passant_target().map(|sq| sq.to_string()),
            castling: state.castling_rights(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{attempt_move, new_game};
    use serde_json::Value;

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    #[test]
    fn snapshot_of_start_position() {
        let view = BoardView::from_state(&new_game());
        assert_eq!(view.squares.len(), 8);
        assert_eq!(
            view.squares[0][4],
            Some(SquarePiece {
                kind: PieceType::King,
                color: Color::White,
                symbol: '♔'
            })
        );
        assert!(view.squares[3].iter().all(Option::is_none));
        assert_eq!(view.side_to_move, Color::White);
        assert_eq!(view.en_passant_target, None);
    }

    #[test]
    fn json_shape() {
        let mut state = new_game();
        assert!(attempt_move(&mut state, sq("e2"), sq("e4")));
        let json: Value =
            serde_json::from_str(&BoardView::from_state(&state).to_json().unwrap()).unwrap();

        assert_eq!(json["side_to_move"], "Black");
        assert_eq!(json["en_passant_target"], "e3");
        assert_eq!(json["castling"]["white"]["king_side"], true);
        assert_eq!(json["squares"][3][4]["kind"], "Pawn");
        assert_eq!(json["squares"][3][4]["symbol"], "♙");
        assert!(json["squares"][1][4].is_null());
    }
}
