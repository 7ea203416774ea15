//! The match state machine.
//!
//! `Session` is the single place match state changes:
//!
//! ```text
//! Configuring --start_match--> InProgress --(last mark_result)--> Finished
//!      ^                           |                                 |
//!      +------- return_to_config --+---------------------------------+
//! ```
//!
//! While `InProgress`, an optional active cell marks a pending decision:
//! `select_cell` (or a turn timeout) sets it, `mark_result` resolves it and
//! `dismiss_cell` backs out. Calls made in the wrong state return
//! `InvalidTransition` and change nothing.
//!
//! ## Timeouts
//!
//! When the turn countdown is at zero, no cell is selected and the match is
//! not finished, the current player's first unresolved coordinate (hand
//! order) is selected for them. The check runs after every tick and after a
//! dismissal, so a timed-out turn cannot be skipped by closing the dialog.

use tracing::{debug, info};

use super::state::{MatchState, Phase};
use super::CellResult;
use crate::core::{Coordinate, InvalidTransition, MatchConfig, MatchRng, Result};
use crate::deck::{build_deck, deal, DEFAULT_PLAYER_NAMES};
use crate::insight::Insight;
use crate::words::WordBank;

/// Identifies the selection an insight request was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InsightTicket {
    match_id: u64,
    cell: Coordinate,
    selection: u64,
}

impl InsightTicket {
    /// Cell the request was made for.
    #[must_use]
    pub fn cell(&self) -> Coordinate {
        self.cell
    }
}

/// What to ask the insight service for the active cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightRequest {
    pub ticket: InsightTicket,
    pub concept: String,
    pub context: String,
}

/// Owner of the current match, if any.
#[derive(Clone, Debug)]
pub struct Session {
    player_names: Vec<String>,
    next_match_id: u64,
    state: Option<MatchState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_player_names(DEFAULT_PLAYER_NAMES.iter().map(|s| (*s).to_string()).collect())
    }
}

impl Session {
    /// A session in `Configuring` using the default seat names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with custom seat names. Seats past the list get `"Jogador N"`.
    pub fn with_player_names(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            next_match_id: 1,
            state: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.as_ref().map_or(Phase::Configuring, MatchState::phase)
    }

    /// The current match, `None` while configuring.
    #[must_use]
    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    fn in_progress(&mut self) -> std::result::Result<&mut MatchState, InvalidTransition> {
        match self.state.as_mut() {
            Some(state) if state.phase == Phase::InProgress => Ok(state),
            _ => Err(InvalidTransition::NotInProgress),
        }
    }

    // === Transitions ===

    /// Build the grid, deal hands and start both clocks.
    ///
    /// Only valid while configuring. Fails without changing anything if the
    /// configuration is invalid or the word bank is too small for the grid.
    pub fn start_match(&mut self, config: MatchConfig, bank: &WordBank) -> Result<()> {
        if self.state.is_some() {
            return Err(InvalidTransition::NotConfiguring.into());
        }
        config.validate()?;

        let rng = config.seed.map_or_else(MatchRng::from_entropy, MatchRng::new);
        let grid = build_deck(bank.concepts(), bank.contexts(), config.grid_size, &rng)?;
        let players = deal(&grid.deck, config.player_count, &self.player_names);

        let id = self.next_match_id;
        self.next_match_id += 1;

        info!(
            match_id = id,
            grid = %config.grid_size,
            players = config.player_count,
            turn_time = %config.turn_time,
            seed = rng.seed(),
            "match started"
        );
        self.state = Some(MatchState::new(id, config, rng.seed(), grid, players));
        Ok(())
    }

    /// Open the decision for an unresolved cell.
    pub fn select_cell(&mut self, coord: Coordinate) -> std::result::Result<(), InvalidTransition> {
        let state = self.in_progress()?;
        if !coord.fits(state.config.grid_size.side()) {
            return Err(InvalidTransition::OutOfGrid(coord));
        }
        if state.is_resolved(coord) {
            return Err(InvalidTransition::CellResolved(coord));
        }
        if state.active_cell.is_some() {
            return Err(InvalidTransition::CellAlreadyActive);
        }

        debug!(match_id = state.id, cell = %coord, "cell selected");
        Self::set_selection(state, Some(coord));
        Ok(())
    }

    /// Close the decision without resolving the cell.
    ///
    /// Turn and countdown are unchanged. If the countdown has already run
    /// out, the timeout rule immediately selects a cell again.
    pub fn dismiss_cell(&mut self) -> std::result::Result<(), InvalidTransition> {
        let state = self.in_progress()?;
        let coord = state.active_cell.ok_or(InvalidTransition::NoActiveCell)?;

        debug!(match_id = state.id, cell = %coord, "selection dismissed");
        Self::set_selection(state, None);
        Self::apply_timeout(state);
        Ok(())
    }

    /// Record the group's verdict on the active cell.
    ///
    /// Passes the turn (when rotation is on) and refills the countdown.
    /// Returns the phase afterwards: `Finished` once every cell has a result.
    pub fn mark_result(&mut self, result: CellResult) -> std::result::Result<Phase, InvalidTransition> {
        let state = self.in_progress()?;
        let coord = state.active_cell.ok_or(InvalidTransition::NoActiveCell)?;

        state.results.insert(coord, result);
        Self::set_selection(state, None);
        if state.config.turn_rotation {
            state.current_player = state.current_player.next(state.players.len());
        }
        state.turn.reset();

        debug!(
            match_id = state.id,
            cell = %coord,
            ?result,
            played = state.results.len(),
            "result marked"
        );

        if state.results.len() == state.total_cells() {
            state.phase = Phase::Finished;
            state.elapsed.stop();
            state.turn.stop();
            info!(
                match_id = state.id,
                score = state.score(),
                elapsed = state.elapsed.seconds(),
                "match finished"
            );
        }
        Ok(state.phase)
    }

    /// Abandon or leave the current match and go back to configuration.
    pub fn return_to_config(&mut self) -> std::result::Result<(), InvalidTransition> {
        let mut state = self.state.take().ok_or(InvalidTransition::NotInProgress)?;
        state.elapsed.stop();
        state.turn.stop();
        info!(match_id = state.id, phase = ?state.phase, "returned to configuration");
        Ok(())
    }

    /// Advance both clocks by one second.
    ///
    /// Does nothing outside `InProgress`. Returns the cell forced open by a
    /// timeout on this tick, if any.
    pub fn tick(&mut self) -> Option<Coordinate> {
        let state = self.in_progress().ok()?;
        state.elapsed.tick();
        state.turn.tick();
        Self::apply_timeout(state)
    }

    // === Insight ===

    /// Ticket and labels for an insight request on the active cell.
    #[must_use]
    pub fn insight_request(&self) -> Option<InsightRequest> {
        let state = self.state.as_ref().filter(|s| s.phase == Phase::InProgress)?;
        let labels = state.active_labels()?;
        Some(InsightRequest {
            ticket: InsightTicket {
                match_id: state.id,
                cell: labels.coord,
                selection: state.selection,
            },
            concept: labels.concept.to_string(),
            context: labels.context.to_string(),
        })
    }

    /// Attach an insight if its ticket still matches the current selection.
    ///
    /// Returns `false` and drops the insight when the cell was dismissed,
    /// resolved or reselected since the request went out.
    pub fn resolve_insight(&mut self, ticket: InsightTicket, insight: Insight) -> bool {
        let Some(state) = self.state.as_mut() else {
            debug!(cell = %ticket.cell, "stale insight dropped: no match");
            return false;
        };
        let current = state.phase == Phase::InProgress
            && state.id == ticket.match_id
            && state.active_cell == Some(ticket.cell)
            && state.selection == ticket.selection;
        if !current {
            debug!(match_id = state.id, cell = %ticket.cell, "stale insight dropped");
            return false;
        }
        state.insight = Some(insight);
        true
    }

    // === Internals ===

    fn set_selection(state: &mut MatchState, cell: Option<Coordinate>) {
        state.active_cell = cell;
        state.selection += 1;
        state.insight = None;
    }

    fn apply_timeout(state: &mut MatchState) -> Option<Coordinate> {
        if state.phase != Phase::InProgress || state.active_cell.is_some() || !state.turn.is_expired() {
            return None;
        }
        let results = &state.results;
        let forced = state.players[state.current_player.index()].first_unresolved(|c| results.contains_key(&c))?;

        debug!(
            match_id = state.id,
            player = %state.current_player,
            cell = %forced,
            "turn timed out, cell forced"
        );
        Self::set_selection(state, Some(forced));
        Some(forced)
    }
}
