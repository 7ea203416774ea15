//! Match state machine.
//!
//! - `session`: `Session`, the only mutation surface
//! - `state`: `MatchState` and `Phase`, read-only projections of a match
//! - `snapshot`: serializable view for rendering

pub mod session;
pub mod state;
pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use session::{InsightRequest, InsightTicket, Session};
pub use state::{CellLabels, MatchState, Phase};
pub use snapshot::{CellView, MatchSnapshot, PlayerView};

/// The group's verdict on a revealed cell. Unplayed cells have no entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellResult {
    Correct,
    Wrong,
}

impl CellResult {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, CellResult::Correct)
    }
}
