use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::options::RuleOptions;
use crate::piece::Color;
use crate::square::Square;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Side selected by a two-column king move landing on `king_to_col`.
    pub fn from_king_destination(king_to_col: i8) -> Option<CastleSide> {
        match king_to_col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    pub fn rook_home_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub fn rook_castled_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column the king crosses on its way to the destination.
    pub fn king_transit_col(self) -> i8 {
        self.rook_castled_col()
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl SideRights {
    pub fn get(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side,
            CastleSide::QueenSide => self.queen_side,
        }
    }
}

/// Castling availability per colour. Rights only ever go from `true` to
/// `false`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    pub fn all() -> Self {
        let both = SideRights {
            king_side: true,
            queen_side: true,
        };
        CastlingRights {
            white: both,
            black: both,
        }
    }

    pub fn none() -> Self {
        let neither = SideRights {
            king_side: false,
            queen_side: false,
        };
        CastlingRights {
            white: neither,
            black: neither,
        }
    }

    pub fn for_color(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.for_color(color).get(side)
    }

    /// Clear one right. Returns whether it was still set.
    pub(crate) fn revoke(&mut self, color: Color, side: CastleSide) -> bool {
        let rights = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let flag = match side {
            CastleSide::KingSide => &mut rights.king_side,
            CastleSide::QueenSide => &mut rights.queen_side,
        };
        std::mem::replace(flag, false)
    }
}

/// Board plus the bookkeeping the special rules need.
///
/// Readers get shared access through the accessors; the only writer is the
/// move executor in [`crate::execute`], reached through
/// [`crate::game::attempt_move`] or [`GameState::apply_checked`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) options: RuleOptions,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move, all rights available.
    pub fn new() -> Self {
        GameState::from_position(Board::new(), Color::White, CastlingRights::all(), None)
    }

    /// Wrap an arbitrary board. Nothing about the position is validated.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        GameState {
            board,
            side_to_move,
            en_passant_target,
            castling_rights,
            options: RuleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }
}
