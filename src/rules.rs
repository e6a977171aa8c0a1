//! Move legality, one rule per piece type.
//!
//! Coordinate system: column 0 = file a, row 0 = rank 1. White pawns move
//! toward increasing rows.
//!
//! Only castling consults the attack detector. Unless
//! [`RuleOptions::forbid_self_check`](crate::options::RuleOptions) is set, a
//! move that leaves the mover's own king attacked is still legal.

use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;
use crate::state::{CastleSide, GameState};

pub(crate) fn is_knight_jump(dc: i8, dr: i8) -> bool {
    matches!((dc.abs(), dr.abs()), (1, 2) | (2, 1))
}

pub(crate) fn is_king_step(dc: i8, dr: i8) -> bool {
    dc.abs().max(dr.abs()) <= 1
}

/// Same row or same column, but not both.
pub(crate) fn is_straight(dc: i8, dr: i8) -> bool {
    (dc == 0) != (dr == 0)
}

pub(crate) fn is_diagonal(dc: i8, dr: i8) -> bool {
    dc != 0 && dc.abs() == dr.abs()
}

/// One column sideways and one row forward. This is the only pawn geometry
/// that threatens a square.
pub(crate) fn is_pawn_capture_step(color: Color, from: Square, to: Square) -> bool {
    (to.col - from.col).abs() == 1 && to.row - from.row == color.pawn_direction()
}

impl GameState {
    /// Whether the piece on `from` may move to `to`.
    ///
    /// Whose turn it is is not checked here; callers gate that (see
    /// [`crate::game::legal_destination`]). An empty or off-board `from`, an
    /// off-board `to`, or a `to` holding a piece of the mover's colour are all
    /// simply illegal.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let piece = match self.board.get(from) {
            Some(p) => p,
            None => return false,
        };
        if !self.is_legal_for(piece, from, to) {
            return false;
        }
        if self.options.forbid_self_check && self.exposes_own_king(piece.color, from, to) {
            return false;
        }
        true
    }

    /// Per-piece rule check for `piece` standing on `from`.
    pub(crate) fn is_legal_for(&self, piece: Piece, from: Square, to: Square) -> bool {
        if !to.is_on_board() {
            return false;
        }
        if let Some(target) = self.board.get(to) {
            if target.color == piece.color {
                return false;
            }
        }

        let dc = to.col - from.col;
        let dr = to.row - from.row;
        match piece.piece_type {
            PieceType::Pawn => {
                self.is_pawn_advance(piece.color, from, to)
                    || self.is_pawn_capture(piece.color, from, to)
            }
            PieceType::Knight => is_knight_jump(dc, dr),
            PieceType::Bishop => is_diagonal(dc, dr) && self.is_path_clear(from, to),
            PieceType::Rook => is_straight(dc, dr) && self.is_path_clear(from, to),
            PieceType::Queen => {
                (is_straight(dc, dr) || is_diagonal(dc, dr)) && self.is_path_clear(from, to)
            }
            PieceType::King => is_king_step(dc, dr) || self.is_castling(piece.color, from, to),
        }
    }

    /// Straight pushes: one row onto an empty square, or two rows from the
    /// starting row with both squares empty.
    fn is_pawn_advance(&self, color: Color, from: Square, to: Square) -> bool {
        if to.col != from.col {
            return false;
        }
        let dir = color.pawn_direction();
        let dr = to.row - from.row;
        if dr == dir {
            return self.board.is_empty(to);
        }
        dr == 2 * dir
            && from.row == color.pawn_start_row()
            && self.board.is_empty(from.offset(0, dir))
            && self.board.is_empty(to)
    }

    /// Diagonal step onto an opposing piece or onto the en passant target.
    fn is_pawn_capture(&self, color: Color, from: Square, to: Square) -> bool {
        if !is_pawn_capture_step(color, from, to) {
            return false;
        }
        // Own pieces were already rejected, so any occupant is an opponent.
        self.board.get(to).is_some() || self.en_passant_target == Some(to)
    }

    /// Two columns along the home row toward a rook whose right is intact.
    fn is_castling(&self, color: Color, from: Square, to: Square) -> bool {
        if to.row != from.row || (to.col - from.col).abs() != 2 {
            return false;
        }
        let side = match CastleSide::from_king_destination(to.col) {
            Some(side) => side,
            None => return false,
        };
        let toward_rook = (side.rook_home_col() - from.col).signum();
        if (to.col - from.col).signum() != toward_rook {
            return false;
        }
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let row = from.row;
        let enemy = color.opposite();
        if self.is_attacked(from, enemy) {
            return false;
        }
        if !self.is_path_clear(from, Square::new(side.rook_home_col(), row)) {
            return false;
        }
        // The knight's square next to the queen-side rook
        if side == CastleSide::QueenSide && !self.board.is_empty(Square::new(1, row)) {
            return false;
        }
        let transit = Square::new(side.king_transit_col(), row);
        !self.is_attacked(transit, enemy) && !self.is_attacked(to, enemy)
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Intended for straight and diagonal lines; squares one step apart are
    /// always clear. A path with an end off the board is never clear.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let step_col = (to.col - from.col).signum();
        let step_row = (to.row - from.row).signum();
        let steps = (to.col - from.col).abs().max((to.row - from.row).abs());
        (1..steps).all(|i| self.board.is_empty(from.offset(i * step_col, i * step_row)))
    }

    /// Play the move on a scratch copy and look at the mover's king.
    fn exposes_own_king(&self, color: Color, from: Square, to: Square) -> bool {
        let mut next = self.clone();
        next.apply(from, to);
        match next.board.find_king(color) {
            Some(king) => next.is_attacked(king, color.opposite()),
            None => false,
        }
    }
}
