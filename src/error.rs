use crate::piece::Color;
use crate::square::Square;

/// Errors reported by the strict entry points.
///
/// An illegal move requested through `attempt_move` is not an error; it is a
/// plain `false`. These variants cover malformed input and misuse of the
/// precondition-checked API.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} does not belong to {side}, the side to move")]
    NotSideToMove { square: Square, side: Color },

    #[error("move {from}{to} is not legal in this position")]
    PreconditionViolated { from: Square, to: Square },

    #[error("invalid coordinate notation: {0:?}")]
    InvalidNotation(String),

    #[error("invalid rule options: {0}")]
    InvalidOptions(String),
}
