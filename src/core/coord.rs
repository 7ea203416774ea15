//! Grid coordinates.
//!
//! A `Coordinate` names one cell of the match grid: a column (concept axis)
//! and a row (context axis). Both indices are 0-based internally and rendered
//! the way players call them out at the table: column letter followed by the
//! 1-based row number (`A1`, `C3`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest grid side the engine supports.
pub const MAX_GRID_SIZE: u8 = 4;

/// One grid cell, `(column, row)`.
///
/// Ordering is column first, then row, which matches the lexical order of
/// the rendered labels for every supported grid size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Create a coordinate from 0-based column and row indices.
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// 0-based column index (concept axis).
    #[must_use]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// 0-based row index (context axis).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column label: `A` for column 0, then `B`..`Z`, `AA`, `AB`, ...
    #[must_use]
    pub fn column_label(self) -> String {
        let mut label = Vec::with_capacity(2);
        let mut n = u16::from(self.column) + 1;
        while n > 0 {
            n -= 1;
            label.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        label.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Check whether this coordinate lies inside a `grid_size` × `grid_size` grid.
    #[must_use]
    pub const fn fits(self, grid_size: u8) -> bool {
        self.column < grid_size && self.row < grid_size
    }

    /// All coordinates of a square grid, column-major (`A1, A2, …, B1, …`).
    pub fn all(grid_size: u8) -> impl Iterator<Item = Coordinate> {
        (0..grid_size).flat_map(move |column| (0..grid_size).map(move |row| Coordinate::new(column, row)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), u16::from(self.row) + 1)
    }
}

/// Error returned when a string is not a valid coordinate label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {0:?}")]
pub struct ParseCoordinateError(String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCoordinateError(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let column = letter as u8 - b'A';

        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: u8 = digits.parse().map_err(|_| invalid())?;
        if column >= MAX_GRID_SIZE || row > MAX_GRID_SIZE {
            return Err(invalid());
        }

        Ok(Self::new(column, row - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
        assert_eq!(Coordinate::new(2, 1).to_string(), "C2");
        assert_eq!(Coordinate::new(3, 3).to_string(), "D4");
    }

    #[test]
    fn test_parse() {
        assert_eq!("A1".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
        assert_eq!("b3".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));

        assert!("".parse::<Coordinate>().is_err());
        assert!("A0".parse::<Coordinate>().is_err());
        assert!("A5".parse::<Coordinate>().is_err());
        assert!("E1".parse::<Coordinate>().is_err());
        assert!("1A".parse::<Coordinate>().is_err());
        assert!("A".parse::<Coordinate>().is_err());
        assert!("A+1".parse::<Coordinate>().is_err());
        assert!("A01".parse::<Coordinate>().is_err());
        assert!("A 1".parse::<Coordinate>().is_err());
        assert!("A-1".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_display_far_outside_grid() {
        assert_eq!(Coordinate::new(25, 0).to_string(), "Z1");
        assert_eq!(Coordinate::new(26, 0).to_string(), "AA1");
        assert_eq!(Coordinate::new(200, 0).to_string(), "GS1");
        assert_eq!(Coordinate::new(255, 255).to_string(), "IV256");

        let far: Coordinate = serde_json::from_str(r#"{"column":250,"row":0}"#).unwrap();
        assert_eq!(far.to_string(), "IQ1");
    }

    #[test]
    fn test_order_matches_labels() {
        let mut coords: Vec<_> = Coordinate::all(4).collect();
        coords.reverse();
        coords.sort();

        let mut labels: Vec<_> = coords.iter().map(ToString::to_string).collect();
        let sorted = labels.clone();
        labels.sort();
        assert_eq!(labels, sorted);
        assert_eq!(coords.first(), Some(&Coordinate::new(0, 0)));
    }

    #[test]
    fn test_all_and_fits() {
        let cells: Vec<_> = Coordinate::all(3).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| c.fits(3)));
        assert!(!Coordinate::new(3, 0).fits(3));
        assert_eq!(cells[1], Coordinate::new(0, 1));
    }
}
