use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Rule switches a game is played under.
///
/// The defaults reproduce the classic behaviour of this engine: moves are
/// checked piece by piece, and only castling looks at attacked squares.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuleOptions {
    /// Reject any move that leaves the mover's own king attacked.
    pub forbid_self_check: bool,
}

impl RuleOptions {
    /// Strict rules: self-check exposing moves are illegal.
    pub fn strict() -> Self {
        RuleOptions {
            forbid_self_check: true,
        }
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        serde_json::from_str(text).map_err(|e| EngineError::InvalidOptions(e.to_string()))
    }
}
