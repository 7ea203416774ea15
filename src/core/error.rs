//! Error types.
//!
//! `Error` covers everything that can block a user action: starting a match
//! with too few words, an invalid configuration, a wrong editor secret, or a
//! word-list store that cannot be read or written. Starting a match while one
//! is running wraps the `InvalidTransition` in `Error::Transition`.
//!
//! `InvalidTransition` is returned by state-machine calls made outside their
//! valid phase. The state is left untouched, so callers may ignore it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coordinate;

/// Which word pool an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Column labels (theology concepts).
    Concepts,
    /// Row labels (contexts).
    Contexts,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Concepts => f.write_str("concepts"),
            Axis::Contexts => f.write_str("contexts"),
        }
    }
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("word bank has {available} {axis}, need at least {required} for this grid")]
    InsufficientWordBank {
        axis: Axis,
        available: usize,
        required: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("wrong password for the word bank editor")]
    UnauthorizedEdit,
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A state-machine call that does not apply in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidTransition {
    #[error("a match is already running")]
    NotConfiguring,
    #[error("no match in progress")]
    NotInProgress,
    #[error("no cell is selected")]
    NoActiveCell,
    #[error("another cell is already selected")]
    CellAlreadyActive,
    #[error("cell {0} is already resolved")]
    CellResolved(Coordinate),
    #[error("cell {0} is outside the grid")]
    OutOfGrid(Coordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InsufficientWordBank {
            axis: Axis::Contexts,
            available: 1,
            required: 2,
        };
        assert_eq!(err.to_string(), "word bank has 1 contexts, need at least 2 for this grid");

        let err = InvalidTransition::CellResolved(Coordinate::new(1, 1));
        assert_eq!(err.to_string(), "cell B2 is already resolved");
    }
}
