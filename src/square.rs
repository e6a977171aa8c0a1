use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A board coordinate. Column 0..=7 is file a..h, row 0..=7 is rank 1..8.
///
/// Coordinates are signed so a caller can name a square off the board; every
/// query treats such a square as illegal rather than panicking.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl Square {
    pub const fn new(col: i8, row: i8) -> Self {
        Square { col, row }
    }

    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.col) && (0..8).contains(&self.row)
    }

    /// Saturates at the `i8` limits, so the result is simply off the board.
    pub fn offset(self, dc: i8, dr: i8) -> Square {
        Square::new(self.col.saturating_add(dc), self.row.saturating_add(dr))
    }

    /// a1 is dark. Off-board squares are neither dark nor light.
    pub fn is_dark(self) -> bool {
        self.is_on_board() && (self.col + self.row) % 2 == 0
    }

    /// All 64 squares, a1, b1, ... h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(col, row)))
    }

    /// Parse a coordinate name such as `e4`.
    pub fn from_name(name: &str) -> Result<Square, EngineError> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::InvalidNotation(name.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(EngineError::InvalidNotation(name.to_string()));
        }
        Ok(Square::new((file - b'a') as i8, (rank - b'1') as i8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            let rank = (b'1' + self.row as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.col, self.row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_files_to_columns_and_ranks_to_rows() {
        assert_eq!(Square::from_name("a1").unwrap(), Square::new(0, 0));
        assert_eq!(Square::from_name("e4").unwrap(), Square::new(4, 3));
        assert_eq!(Square::from_name("h8").unwrap(), Square::new(7, 7));
        assert_eq!(Square::new(3, 5).to_string(), "d6");
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "i1", "a9", "e44", "E4"] {
            assert!(Square::from_name(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn off_board_squares_are_reported_not_panicked() {
        let sq = Square::new(7, 7).offset(1, 0);
        assert!(!sq.is_on_board());
        assert_eq!(sq.to_string(), "(8, 7)");
        assert!(!Square::new(-1, 3).is_on_board());
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert!(!Square::new(100, 100).is_dark());
        assert!(!Square::new(i8::MIN, i8::MIN).is_dark());

        let far = Square::new(i8::MAX, i8::MIN).offset(1, -1);
        assert_eq!(far, Square::new(i8::MAX, i8::MIN));
        assert!(!far.is_on_board());
        assert!(!Square::new(0, 0).offset(i8::MIN, i8::MAX).is_on_board());
    }

    #[test]
    fn a1_is_dark_and_h1_is_light() {
        assert!(Square::new(0, 0).is_dark());
        assert!(!Square::new(7, 0).is_dark());
        assert_eq!(Square::all().filter(|s| s.is_dark()).count(), 32);
    }
}
