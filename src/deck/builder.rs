//! Grid and deck construction.
//!
//! A match grid pairs `side` concepts (columns) with `side` contexts (rows).
//! Each axis is drawn by shuffling its whole pool and taking a prefix, so
//! every label is equally likely and the two axes are independent. The deck
//! of all cells is then shuffled on its own stream.

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Coordinate, Error, GridSize, MatchRng, Result};

/// Axis labels and shuffled deck for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Column labels (concepts), one per column.
    pub x_labels: Vec<String>,

    /// Row labels (contexts), one per row.
    pub y_labels: Vec<String>,

    /// Every cell exactly once, in dealing order.
    pub deck: Vec<Coordinate>,
}

impl Grid {
    /// Grid side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.x_labels.len()
    }

    /// The concept and context a coordinate pairs.
    #[must_use]
    pub fn labels(&self, coord: Coordinate) -> Option<(&str, &str)> {
        let x = self.x_labels.get(coord.column())?;
        let y = self.y_labels.get(coord.row())?;
        Some((x.as_str(), y.as_str()))
    }
}

/// Sample axis labels and build the shuffled deck.
///
/// Fails with `InsufficientWordBank` when either pool has fewer labels than
/// the grid side; exactly `side` labels is enough.
pub fn build_deck(concepts: &[String], contexts: &[String], size: GridSize, rng: &MatchRng) -> Result<Grid> {
    let side = usize::from(size.side());

    let x_labels = sample_axis(Axis::Concepts, concepts, side, &mut rng.for_context("concepts"))?;
    let y_labels = sample_axis(Axis::Contexts, contexts, side, &mut rng.for_context("contexts"))?;

    let mut deck: Vec<Coordinate> = Coordinate::all(size.side()).collect();
    rng.for_context("deck").shuffle(&mut deck);

    Ok(Grid {
        x_labels,
        y_labels,
        deck,
    })
}

fn sample_axis(axis: Axis, pool: &[String], side: usize, rng: &mut MatchRng) -> Result<Vec<String>> {
    if pool.len() < side {
        return Err(Error::InsufficientWordBank {
            axis,
            available: pool.len(),
            required: side,
        });
    }
    let mut labels = pool.to_vec();
    rng.shuffle(&mut labels);
    labels.truncate(side);
    Ok(labels)
}
