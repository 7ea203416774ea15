//! Serializable view of a session for rendering.
//!
//! A UI re-renders from a `MatchSnapshot` and sends user actions back as
//! `Session` calls; it never mutates match state itself.

use serde::Serialize;

use super::state::{MatchState, Phase};
use super::CellResult;
use super::Session;
use crate::core::{format_clock, Coordinate};
use crate::insight::Insight;
use crate::scoring::FinalReport;

/// One grid cell as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Rendered coordinate (`B2`).
    pub label: String,
    pub concept: String,
    pub context: String,
    pub result: Option<CellResult>,
    /// Seat number (1-based) holding this cell.
    pub holder: Option<u32>,
}

/// One seat as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub number: u32,
    pub name: String,
    /// Hand as coordinate labels, sorted.
    pub hand: Vec<String>,
    /// How many of the hand's cells are still unplayed.
    pub unresolved: usize,
}

/// Everything a screen needs to draw the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    /// Cells row by row (`A1, B1, …, A2, …`).
    pub cells: Vec<CellView>,
    pub players: Vec<PlayerView>,
    pub current_player: u32,
    pub active_cell: Option<String>,
    pub insight: Option<Insight>,
    pub elapsed: String,
    pub remaining_turn_seconds: Option<u32>,
    pub time_up: bool,
    pub played: usize,
    pub total: usize,
    pub report: Option<FinalReport>,
}

impl MatchSnapshot {
    #[must_use]
    pub fn of(state: &MatchState) -> Self {
        let side = state.config().grid_size.side();
        let cells = (0..side)
            .flat_map(|row| (0..side).map(move |column| Coordinate::new(column, row)))
            .filter_map(|coord| {
                let labels = state.labels(coord)?;
                Some(CellView {
                    label: coord.to_string(),
                    concept: labels.concept.to_string(),
                    context: labels.context.to_string(),
                    result: state.result(coord),
                    holder: state.holder(coord).map(|p| p.id.number()),
                })
            })
            .collect();

        let players = state
            .players()
            .iter()
            .map(|p| PlayerView {
                number: p.id.number(),
                name: p.name.clone(),
                hand: p.hand.iter().map(ToString::to_string).collect(),
                unresolved: p.hand.iter().filter(|&&c| !state.is_resolved(c)).count(),
            })
            .collect();

        Self {
            phase: state.phase(),
            x_labels: state.x_labels().to_vec(),
            y_labels: state.y_labels().to_vec(),
            cells,
            players,
            current_player: state.current_player().id.number(),
            active_cell: state.active_cell().map(|c| c.to_string()),
            insight: state.insight().cloned(),
            elapsed: format_clock(state.elapsed_seconds()),
            remaining_turn_seconds: state.remaining_turn_seconds(),
            time_up: state.is_time_up(),
            played: state.played_count(),
            total: state.total_cells(),
            report: state.report(),
        }
    }
}

impl Session {
    /// Snapshot of the current match; `None` while configuring.
    #[must_use]
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.state().map(MatchSnapshot::of)
    }
}
