//! Player identification and hands.
//!
//! ## PlayerId
//!
//! Seat index for 2-8 players. Stored 0-based for indexing, shown 1-based.
//!
//! ## Player
//!
//! A seat with its display name and the coordinates dealt to it. The hand is
//! fixed once dealt; whether a coordinate has been played is derived from the
//! match result map, never stored here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coordinate;

/// Inline capacity of a hand: a 4×4 grid split between 2 players.
pub const HAND_INLINE: usize = 8;

/// The coordinates dealt to one player, sorted ascending.
pub type Hand = SmallVec<[Coordinate; HAND_INLINE]>;

/// Player seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`, shown as
/// player 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Stable 1-based number shown to players.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    /// The seat after this one, wrapping around `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    ///
    /// ```
    /// use linhas::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3].number(), 4);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A seated player and their dealt hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Dealt coordinates, sorted ascending.
    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Check if a coordinate was dealt to this player.
    #[must_use]
    pub fn holds(&self, coord: Coordinate) -> bool {
        self.hand.contains(&coord)
    }

    /// First coordinate in hand order for which `is_resolved` returns false.
    pub fn first_unresolved(&self, is_resolved: impl Fn(Coordinate) -> bool) -> Option<Coordinate> {
        self.hand.iter().copied().find(|&c| !is_resolved(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.number(), 2);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_first_unresolved() {
        let mut player = Player::new(PlayerId::new(0), "Judeia");
        player.hand.extend([Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(2, 0)]);

        assert!(player.holds(Coordinate::new(1, 1)));
        assert!(!player.holds(Coordinate::new(1, 0)));

        let first = player.first_unresolved(|c| c == Coordinate::new(0, 0));
        assert_eq!(first, Some(Coordinate::new(1, 1)));

        assert_eq!(player.first_unresolved(|_| true), None);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1), "Samaria");
        player.hand.push(Coordinate::new(0, 1));

        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
