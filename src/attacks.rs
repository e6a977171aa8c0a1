use crate::piece::{Color, Piece, PieceType};
use crate::rules::{is_king_step, is_pawn_capture_step};
use crate::square::Square;
use crate::state::GameState;

impl GameState {
    /// Whether any piece of `by` could capture on `sq`, whoever's turn it is.
    ///
    /// Knights and sliders reuse the move rules unchanged. Pawns only
    /// threaten their two forward diagonals, whether or not anything stands
    /// there; their straight pushes never count. Kings threaten the eight
    /// neighbouring squares, never a castling destination.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        if !sq.is_on_board() {
            return false;
        }
        self.board
            .pieces()
            .filter(|(_, p)| p.color == by)
            .any(|(from, p)| self.threatens(p, from, sq))
    }

    fn threatens(&self, piece: Piece, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        if let Some(target) = self.board.get(to) {
            if target.color == piece.color {
                return false;
            }
        }
        match piece.piece_type {
            PieceType::Pawn => is_pawn_capture_step(piece.color, from, to),
            PieceType::King => is_king_step(to.col - from.col, to.row - from.row),
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                self.is_legal_for(piece, from, to)
            }
        }
    }
}
