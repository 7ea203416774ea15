//! Match configuration.
//!
//! Chosen on the configuration screen before a match starts and immutable
//! while it runs:
//! - `GridSize`: side of the square grid (2, 3 or 4)
//! - `TurnTime`: per-turn countdown, or unlimited
//! - `MatchConfig`: combines them with the player count and turn rotation

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Fewest players in a match.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a match.
pub const MAX_PLAYERS: usize = 8;

/// Side of the square match grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    /// 2 × 2, "Iniciante".
    Two,
    /// 3 × 3, "Padrão".
    #[default]
    Three,
    /// 4 × 4, "Hardcore".
    Four,
}

impl GridSize {
    /// Every selectable size, smallest first.
    pub const ALL: [GridSize; 3] = [GridSize::Two, GridSize::Three, GridSize::Four];

    /// Cells per side.
    #[must_use]
    pub const fn side(self) -> u8 {
        match self {
            GridSize::Two => 2,
            GridSize::Three => 3,
            GridSize::Four => 4,
        }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    /// Difficulty label shown next to the size picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GridSize::Two => "Iniciante",
            GridSize::Three => "Padrão",
            GridSize::Four => "Hardcore",
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = Error;

    fn try_from(side: u8) -> Result<Self> {
        match side {
            2 => Ok(GridSize::Two),
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            other => Err(Error::InvalidConfig(format!("grid size must be 2, 3 or 4, got {other}"))),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> u8 {
        size.side()
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0} × {0}", self.side())
    }
}

/// Time allowed per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnTime {
    /// Countdown of this many seconds, reset after every marked result.
    Seconds(NonZeroU32),
    /// No countdown; turns never time out.
    Unlimited,
}

impl TurnTime {
    /// The presets offered on the configuration screen.
    pub const PRESETS: [TurnTime; 4] = [
        TurnTime::Seconds(match NonZeroU32::new(30) { Some(n) => n, None => unreachable!() }),
        TurnTime::Seconds(match NonZeroU32::new(60) { Some(n) => n, None => unreachable!() }),
        TurnTime::Seconds(match NonZeroU32::new(90) { Some(n) => n, None => unreachable!() }),
        TurnTime::Unlimited,
    ];

    /// Bounded turn time from a second count; zero means unlimited.
    #[must_use]
    pub fn seconds(seconds: u32) -> Self {
        NonZeroU32::new(seconds).map_or(TurnTime::Unlimited, TurnTime::Seconds)
    }

    /// Seconds per turn, or `None` when unlimited.
    #[must_use]
    pub fn limit(self) -> Option<u32> {
        match self {
            TurnTime::Seconds(n) => Some(n.get()),
            TurnTime::Unlimited => None,
        }
    }

    /// Whether turns can time out.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, TurnTime::Unlimited)
    }
}

impl Default for TurnTime {
    fn default() -> Self {
        TurnTime::seconds(60)
    }
}

impl std::fmt::Display for TurnTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnTime::Seconds(n) => write!(f, "{n}s"),
            TurnTime::Unlimited => f.write_str("∞"),
        }
    }
}

/// Complete match configuration.
///
/// Build with the chained setters, then `validate()` (match start does this
/// again, so an invalid config can never produce a running match).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Grid side.
    pub grid_size: GridSize,

    /// Number of seats (2-8).
    pub player_count: usize,

    /// Per-turn countdown.
    pub turn_time: TurnTime,

    /// Pass the turn to the next seat after every marked result.
    ///
    /// When off, the first player stays current for the whole match and
    /// timeouts always force a cell from their hand.
    pub turn_rotation: bool,

    /// Seed for grid and deck shuffles. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            player_count: MIN_PLAYERS,
            turn_time: TurnTime::default(),
            turn_rotation: true,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration (3 × 3, 2 players, 60 s turns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size.
    #[must_use]
    pub fn grid_size(mut self, size: GridSize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the per-turn countdown.
    #[must_use]
    pub fn turn_time(mut self, turn_time: TurnTime) -> Self {
        self.turn_time = turn_time;
        self
    }

    /// Enable or disable turn rotation.
    #[must_use]
    pub fn turn_rotation(mut self, enabled: bool) -> Self {
        self.turn_rotation = enabled;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can start a match.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(Error::InvalidConfig(format!(
                "player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(GridSize::Two.cell_count(), 4);
        assert_eq!(GridSize::Four.side(), 4);
        assert_eq!(GridSize::Three.label(), "Padrão");
        assert_eq!(GridSize::Three.to_string(), "3 × 3");

        assert_eq!(GridSize::try_from(4).ok(), Some(GridSize::Four));
        assert!(GridSize::try_from(5).is_err());
        assert!(GridSize::try_from(1).is_err());
    }

    #[test]
    fn test_grid_size_serde() {
        assert_eq!(serde_json::to_string(&GridSize::Two).unwrap(), "2");
        let parsed: GridSize = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, GridSize::Four);
        assert!(serde_json::from_str::<GridSize>("7").is_err());
    }

    #[test]
    fn test_turn_time() {
        assert_eq!(TurnTime::seconds(30).limit(), Some(30));
        assert_eq!(TurnTime::seconds(0), TurnTime::Unlimited);
        assert!(TurnTime::Unlimited.is_unlimited());
        assert_eq!(TurnTime::Unlimited.limit(), None);
        assert_eq!(TurnTime::default().limit(), Some(60));
        assert_eq!(TurnTime::PRESETS[2].to_string(), "90s");
        assert_eq!(TurnTime::PRESETS[3].to_string(), "∞");
    }

    #[test]
    fn test_match_config_builder() {
        let config = MatchConfig::new()
            .grid_size(GridSize::Four)
            .player_count(4)
            .turn_time(TurnTime::Unlimited)
            .turn_rotation(false)
            .seed(9);

        assert_eq!(config.grid_size, GridSize::Four);
        assert_eq!(config.player_count, 4);
        assert!(config.turn_time.is_unlimited());
        assert!(!config.turn_rotation);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.grid_size, GridSize::Three);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.turn_time.limit(), Some(60));
        assert!(config.turn_rotation);
    }

    #[test]
    fn test_match_config_player_bounds() {
        assert!(MatchConfig::new().player_count(1).validate().is_err());
        assert!(MatchConfig::new().player_count(8).validate().is_ok());
        assert!(MatchConfig::new().player_count(9).validate().is_err());
    }
}
