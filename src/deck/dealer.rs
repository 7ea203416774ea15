//! Round-robin hand dealing.

use crate::core::{Coordinate, Player, PlayerId};

/// Seat names used before falling back to generated ones.
pub const DEFAULT_PLAYER_NAMES: [&str; 4] = ["Jerusalém", "Judeia", "Samaria", "Mundo"];

/// Display name for a seat: the pool entry at its position, or `"Jogador N"`.
#[must_use]
pub fn player_name<S: AsRef<str>>(names: &[S], id: PlayerId) -> String {
    names
        .get(id.index())
        .map_or_else(|| format!("Jogador {}", id.number()), |name| name.as_ref().to_string())
}

/// Deal `deck` across `player_count` seats.
///
/// The i-th coordinate goes to seat `i % player_count`, so hand sizes differ
/// by at most one. Each hand is then sorted for display. No seats means no
/// hands.
#[must_use]
pub fn deal<S: AsRef<str>>(deck: &[Coordinate], player_count: usize, names: &[S]) -> Vec<Player> {
    if player_count == 0 {
        return Vec::new();
    }

    let mut players: Vec<Player> = PlayerId::all(player_count)
        .map(|id| Player::new(id, player_name(names, id)))
        .collect();

    for (i, &coord) in deck.iter().enumerate() {
        players[i % player_count].hand.push(coord);
    }

    for player in &mut players {
        player.hand.sort_unstable();
    }

    players
}
