//! Match setup: sampling the grid and dealing it out.
//!
//! - `builder`: axis labels and the shuffled coordinate deck
//! - `dealer`: round-robin distribution into sorted hands

pub mod builder;
pub mod dealer;

pub use builder::{build_deck, Grid};
pub use dealer::{deal, player_name, DEFAULT_PLAYER_NAMES};
