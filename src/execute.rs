use tracing::debug;

use crate::error::EngineError;
use crate::piece::{Color, PieceType};
use crate::square::Square;
use crate::state::{CastleSide, GameState};

impl GameState {
    /// Apply a move the validator already accepted. Does not hand over the
    /// turn.
    ///
    /// Nothing is re-checked; an empty `from` is a no-op.
    pub(crate) fn apply(&mut self, from: Square, to: Square) {
        let piece = match self.board.take(from) {
            Some(p) => p,
            None => return,
        };
        let captured = self.board.get(to);
        self.board.set(to, Some(piece));

        let dc = to.col - from.col;
        let dr = to.row - from.row;
        let is_pawn = piece.piece_type == PieceType::Pawn;

        // En passant: the captured pawn sits beside the mover, behind `to`
        if is_pawn && dc.abs() == 1 && self.en_passant_target == Some(to) {
            let victim_sq = to.offset(0, -piece.color.pawn_direction());
            let victim = self.board.get(victim_sq);
            if victim.is_some_and(|v| v.piece_type == PieceType::Pawn && v.color != piece.color) {
                self.board.set(victim_sq, None);
                debug!(square = %victim_sq, "en passant capture");
            }
        }

        self.en_passant_target = None;
        if is_pawn && dr.abs() == 2 {
            self.en_passant_target = Some(Square::new(from.col, (from.row + to.row) / 2));
        }

        if piece.piece_type == PieceType::King && dc.abs() == 2 {
            if let Some(side) = CastleSide::from_king_destination(to.col) {
                let rook_from = Square::new(side.rook_home_col(), to.row);
                let rook_to = Square::new(side.rook_castled_col(), to.row);
                let rook = self.board.take(rook_from);
                self.board.set(rook_to, rook);
            }
        }

        match piece.piece_type {
            PieceType::King => {
                self.revoke_castling(piece.color, CastleSide::KingSide);
                self.revoke_castling(piece.color, CastleSide::QueenSide);
            }
            PieceType::Rook => match from.col {
                0 => self.revoke_castling(piece.color, CastleSide::QueenSide),
                7 => self.revoke_castling(piece.color, CastleSide::KingSide),
                _ => {}
            },
            _ => {}
        }

        // A rook taken on its home corner can no longer castle
        if let Some(victim) = captured {
            if victim.piece_type == PieceType::Rook && to.row == victim.color.home_row() {
                match to.col {
                    0 => self.revoke_castling(victim.color, CastleSide::QueenSide),
                    7 => self.revoke_castling(victim.color, CastleSide::KingSide),
                    _ => {}
                }
            }
        }
    }

    fn revoke_castling(&mut self, color: Color, side: CastleSide) {
        if self.castling_rights.revoke(color, side) {
            debug!(%color, ?side, "castling right revoked");
        }
    }

    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Precondition-checked move: every way the request can be wrong is
    /// reported as an [`EngineError`]. On success the move is applied and the
    /// turn passes to the other side.
    pub fn apply_checked(&mut self, from: Square, to: Square) -> Result<(), EngineError> {
        for sq in [from, to] {
            if !sq.is_on_board() {
                return Err(EngineError::OffBoard(sq));
            }
        }
        let piece = self.board.get(from).ok_or(EngineError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(EngineError::NotSideToMove {
                square: from,
                side: self.side_to_move,
            });
        }
        if !self.is_legal(from, to) {
            return Err(EngineError::PreconditionViolated { from, to });
        }
        self.apply(from, to);
        self.pass_turn();
        Ok(())
    }
}
