//! Scoring and ranks.
//!
//! The score is the share of correctly marked cells over the whole grid,
//! as a whole percentage rounded half-up. The rank is looked up from the
//! score in a fixed threshold table.

pub mod rank;

use serde::Serialize;

use crate::core::{format_clock, Coordinate, GridSize};
use crate::game::CellResult;

pub use rank::{rank, Rank, RankTier, RANKS};

/// Percentage of correct cells, `round(100 * correct / total)` half-up.
///
/// Computed in integers so ties always round the same way.
///
/// ```
/// use linhas::scoring::percent;
///
/// assert_eq!(percent(1, 8), 13); // 12.5 rounds up
/// assert_eq!(percent(2, 3), 67);
/// assert_eq!(percent(0, 0), 0);
/// ```
#[must_use]
pub fn percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

/// Score for a result map on a grid of `size`.
pub fn score<'a>(results: impl IntoIterator<Item = (&'a Coordinate, &'a CellResult)>, size: GridSize) -> u8 {
    let correct = results.into_iter().filter(|(_, r)| r.is_correct()).count();
    percent(correct, size.cell_count())
}

/// End-of-match summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    pub score: u8,
    pub rank: &'static Rank,
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
    pub elapsed_seconds: u32,
}

impl FinalReport {
    /// Build the report from a result map.
    pub fn new<'a>(
        results: impl IntoIterator<Item = (&'a Coordinate, &'a CellResult)>,
        size: GridSize,
        elapsed_seconds: u32,
    ) -> Self {
        let (mut correct, mut wrong) = (0, 0);
        for (_, result) in results {
            match result {
                CellResult::Correct => correct += 1,
                CellResult::Wrong => wrong += 1,
            }
        }
        let total = size.cell_count();
        let score = percent(correct, total);
        Self {
            score,
            rank: rank(score),
            correct,
            wrong,
            total,
            elapsed_seconds,
        }
    }

    /// Total match time as `MM:SS`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_clock(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_percent_grid_sizes() {
        assert_eq!(percent(4, 4), 100);
        assert_eq!(percent(3, 4), 75);
        assert_eq!(percent(5, 9), 56);
        assert_eq!(percent(4, 9), 44);
        assert_eq!(percent(1, 16), 6);
        assert_eq!(percent(9, 16), 56);
    }

    #[test]
    fn test_final_report() {
        let results = [
            (Coordinate::new(0, 0), CellResult::Correct),
            (Coordinate::new(0, 1), CellResult::Correct),
            (Coordinate::new(1, 0), CellResult::Correct),
            (Coordinate::new(1, 1), CellResult::Wrong),
        ];
        let report = FinalReport::new(results.iter().map(|(c, r)| (c, r)), GridSize::Two, 125);

        assert_eq!(report.score, 75);
        assert_eq!(report.rank.title, "Obreiro Aprovado");
        assert_eq!((report.correct, report.wrong, report.total), (3, 1, 4));
        assert_eq!(report.elapsed_display(), "02:05");
    }

    proptest! {
        #[test]
        fn prop_percent_bounded_and_monotonic(total in 1usize..=16, a in 0usize..=16, b in 0usize..=16) {
            let (lo, hi) = (a.min(b).min(total), a.max(b).min(total));
            prop_assert!(percent(hi, total) <= 100);
            prop_assert!(percent(lo, total) <= percent(hi, total));
        }

        #[test]
        fn prop_percent_matches_float_rounding(total in 1usize..=16, correct in 0usize..=16) {
            let correct = correct.min(total);
            let expected = ((correct as f64 / total as f64) * 100.0 + 0.5).floor() as u8;
            prop_assert_eq!(percent(correct, total), expected);
        }
    }
}
