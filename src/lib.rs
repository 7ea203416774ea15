//! # linhas
//!
//! Match engine for Linhas, a turn-based party quiz played on one shared
//! device. Players are dealt grid coordinates pairing a theology concept
//! (column) with a context (row); in turn each reveals a cell, explains the
//! connection aloud, and the group marks it correct or wrong.
//!
//! ## Design Principles
//!
//! 1. **One mutation surface**: `Session` owns the match and exposes only the
//!    state-machine transitions. Views read `MatchState` / `MatchSnapshot`.
//!
//! 2. **Virtual clocks**: the elapsed and per-turn clocks advance only on
//!    `Session::tick`, so every rule is testable without waiting.
//!    `driver::ClockDriver` connects them to real time.
//!
//! 3. **Uniform, reproducible shuffles**: Fisher–Yates over ChaCha8 with
//!    per-purpose streams; a configured seed replays a match exactly.
//!
//! 4. **Failures are values**: invalid transitions leave state untouched, and
//!    the insight service always answers, with a fallback if it must.
//!
//! ## Modules
//!
//! - `core`: coordinates, players, configuration, clocks, RNG, errors
//! - `words`: word bank, persistence, password-gated editor
//! - `deck`: grid sampling and round-robin dealing
//! - `game`: the match state machine
//! - `scoring`: score percentage, ranks, final report
//! - `insight`: insight service trait and Gemini client
//! - `driver`: tokio clock driver and insight fetch

pub mod core;
pub mod words;
pub mod deck;
pub mod game;
pub mod scoring;
pub mod insight;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Axis, Coordinate, Error, GridSize, InvalidTransition, MatchConfig, Player, PlayerId, Result, TurnTime,
};

pub use crate::words::{EditorGate, FileStore, KeyValueStore, MemoryStore, WordBank, WordBankEditor};

pub use crate::deck::{build_deck, deal, Grid};

pub use crate::game::{CellResult, InsightRequest, InsightTicket, MatchSnapshot, MatchState, Phase, Session};

pub use crate::scoring::{rank, score, FinalReport, Rank, RankTier};

pub use crate::insight::{FixedInsight, GeminiClient, GeminiConfig, Insight, InsightService};

pub use crate::driver::{fetch_insight, ClockDriver, SharedSession};
