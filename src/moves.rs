use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::square::Square;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parse coordinate notation, e.g. "e2e4".
    pub fn from_coordinates(s: &str) -> Result<Move, EngineError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(EngineError::InvalidNotation(s.to_string()));
        }
        let from = Square::from_name(&s[..2])?;
        let to = Square::from_name(&s[2..])?;
        Ok(Move { from, to })
    }
}

/// Coordinate notation, e.g. "e2e4".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_round_trip_through_display() {
        let mv = Move::from_coordinates("g1f3").unwrap();
        assert_eq!(mv.from, Square::new(6, 0));
        assert_eq!(mv.to, Square::new(5, 2));
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn rejects_bad_coordinates() {
        for bad in ["e2e", "e2e44", "z2e4", "e2e9", "é2e4"] {
            assert!(Move::from_coordinates(bad).is_err(), "{bad} should not parse");
        }
    }
}
