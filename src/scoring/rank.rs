//! Rank table.

use serde::Serialize;

/// Visual tier of a rank, from best to lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Green,
    Blue,
    Gray,
}

/// One row of the rank table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rank {
    /// Minimum score (inclusive) for this rank.
    pub threshold: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub tier: RankTier,
}

/// Ranks in descending threshold order. The last threshold is 0.
pub const RANKS: [Rank; 4] = [
    Rank {
        threshold: 100,
        title: "Symphonia Dei",
        description: "Harmonia Perfeita! Nós temos a mente de Cristo.",
        tier: RankTier::Gold,
    },
    Rank {
        threshold: 75,
        title: "Obreiro Aprovado",
        description: "Maneja bem a palavra da verdade.",
        tier: RankTier::Green,
    },
    Rank {
        threshold: 50,
        title: "Nobres Bereanos",
        description: "Examinando as Escrituras diariamente.",
        tier: RankTier::Blue,
    },
    Rank {
        threshold: 0,
        title: "Leite Espiritual",
        description: "Desejai o genuíno leite espiritual para crescimento.",
        tier: RankTier::Gray,
    },
];

/// First rank whose threshold the score reaches.
#[must_use]
pub fn rank(score: u8) -> &'static Rank {
    RANKS
        .iter()
        .find(|r| score >= r.threshold)
        .unwrap_or(&RANKS[RANKS.len() - 1])
}
