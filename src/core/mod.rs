//! Core types: coordinates, players, configuration, clocks, RNG, errors.
//!
//! Everything here is independent of the word bank and the match rules;
//! the deck builder and the state machine are assembled from these parts.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;
pub mod clock;
pub mod error;

pub use coord::{Coordinate, ParseCoordinateError, MAX_GRID_SIZE};
pub use player::{Hand, Player, PlayerId};
pub use rng::MatchRng;
pub use config::{GridSize, MatchConfig, TurnTime, MAX_PLAYERS, MIN_PLAYERS};
pub use clock::{format_clock, ElapsedClock, TurnClock};
pub use error::{Axis, Error, InvalidTransition, Result};
