//! Match state: everything about one running or finished match.
//!
//! `MatchState` is read-only outside the crate. All mutation goes through
//! `Session`, which owns at most one match at a time.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::CellResult;
use crate::core::{Coordinate, ElapsedClock, MatchConfig, Player, PlayerId, TurnClock};
use crate::deck::Grid;
use crate::insight::Insight;
use crate::scoring::{self, FinalReport};

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No match; the configuration screen is shown.
    #[default]
    Configuring,
    /// Cells are being revealed and marked.
    InProgress,
    /// Every cell has a result.
    Finished,
}

/// Concept/context pair behind the selected cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellLabels<'a> {
    pub coord: Coordinate,
    pub concept: &'a str,
    pub context: &'a str,
}

/// State of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub(crate) id: u64,
    pub(crate) config: MatchConfig,
    pub(crate) seed: u64,
    pub(crate) grid: Grid,
    pub(crate) players: Vec<Player>,
    pub(crate) results: OrdMap<Coordinate, CellResult>,
    pub(crate) current_player: PlayerId,
    pub(crate) active_cell: Option<Coordinate>,
    pub(crate) elapsed: ElapsedClock,
    pub(crate) turn: TurnClock,
    pub(crate) phase: Phase,
    /// Bumped whenever the selection changes; ties insight responses to a selection.
    pub(crate) selection: u64,
    pub(crate) insight: Option<Insight>,
}

impl MatchState {
    pub(crate) fn new(id: u64, config: MatchConfig, seed: u64, grid: Grid, players: Vec<Player>) -> Self {
        let mut elapsed = ElapsedClock::default();
        let mut turn = TurnClock::new(config.turn_time);
        elapsed.start();
        turn.start();

        Self {
            id,
            config,
            seed,
            grid,
            players,
            results: OrdMap::new(),
            current_player: PlayerId::new(0),
            active_cell: None,
            elapsed,
            turn,
            phase: Phase::InProgress,
            selection: 0,
            insight: None,
        }
    }

    /// Session-unique match number.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed the grid and deck were shuffled with; replaying it rebuilds the same match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Column labels (concepts).
    #[must_use]
    pub fn x_labels(&self) -> &[String] {
        &self.grid.x_labels
    }

    /// Row labels (contexts).
    #[must_use]
    pub fn y_labels(&self) -> &[String] {
        &self.grid.y_labels
    }

    /// The shuffled deck in dealing order.
    #[must_use]
    pub fn deck(&self) -> &[Coordinate] {
        &self.grid.deck
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player.index()]
    }

    /// Result map. Cheap to clone.
    #[must_use]
    pub fn results(&self) -> &OrdMap<Coordinate, CellResult> {
        &self.results
    }

    /// Result for one cell; `None` while unplayed.
    #[must_use]
    pub fn result(&self, coord: Coordinate) -> Option<CellResult> {
        self.results.get(&coord).copied()
    }

    #[must_use]
    pub fn is_resolved(&self, coord: Coordinate) -> bool {
        self.results.contains_key(&coord)
    }

    /// Owner of a cell.
    #[must_use]
    pub fn holder(&self, coord: Coordinate) -> Option<&Player> {
        self.players.iter().find(|p| p.holds(coord))
    }

    #[must_use]
    pub fn active_cell(&self) -> Option<Coordinate> {
        self.active_cell
    }

    /// Labels of the selected cell, for the decision dialog.
    #[must_use]
    pub fn active_labels(&self) -> Option<CellLabels<'_>> {
        let coord = self.active_cell?;
        self.labels(coord)
    }

    /// Labels of any cell on the grid.
    #[must_use]
    pub fn labels(&self, coord: Coordinate) -> Option<CellLabels<'_>> {
        let (concept, context) = self.grid.labels(coord)?;
        Some(CellLabels { coord, concept, context })
    }

    /// Insight received for the current selection, if any.
    #[must_use]
    pub fn insight(&self) -> Option<&Insight> {
        self.insight.as_ref()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed.seconds()
    }

    /// Seconds left this turn; `None` with unlimited turns.
    #[must_use]
    pub fn remaining_turn_seconds(&self) -> Option<u32> {
        self.turn.remaining()
    }

    /// The turn countdown has run out and the match is still going.
    #[must_use]
    pub fn is_time_up(&self) -> bool {
        self.phase == Phase::InProgress && self.turn.is_expired()
    }

    /// Whether either clock is still running.
    #[must_use]
    pub fn clocks_running(&self) -> bool {
        self.elapsed.is_running() || self.turn.is_running()
    }

    #[must_use]
    pub fn played_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.config.grid_size.cell_count()
    }

    /// Current score, also meaningful mid-match.
    #[must_use]
    pub fn score(&self) -> u8 {
        scoring::score(self.results.iter(), self.config.grid_size)
    }

    /// Final report once every cell is marked.
    #[must_use]
    pub fn report(&self) -> Option<FinalReport> {
        self.is_finished()
            .then(|| FinalReport::new(self.results.iter(), self.config.grid_size, self.elapsed.seconds()))
    }
}
