//! Lo Shu (lusho) grid: which digits 1-9 occur in the birth date and how often.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reduce::date_digits;

/// Traditional 3x3 placement, top row first.
pub const LOSHU_LAYOUT: [[u8; 3]; 3] = [[3, 6, 9], [2, 5, 8], [1, 4, 7]];

/// Digit population of a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LushoGrid {
    /// Every occurrence of each digit 1-9 (empty list when absent).
    pub grid_population: BTreeMap<u8, Vec<u8>>,
    /// Digits with at least one occurrence, ascending.
    pub present_numbers: Vec<u8>,
    /// Digits with no occurrence, ascending.
    pub missing_numbers: Vec<u8>,
    /// Occurrence count for each digit 1-9.
    pub number_counts: BTreeMap<u8, u32>,
}

/// One cell of the rendered 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub digit: u8,
    pub count: u32,
}

impl LushoGrid {
    /// Populate the grid from the non-zero digits of `"{day}{month}{year}"`.
    pub fn from_date(day: u32, month: u32, year: u32) -> Self {
        let mut grid_population: BTreeMap<u8, Vec<u8>> =
            (1..=9).map(|d| (d, Vec::new())).collect();
        let mut number_counts: BTreeMap<u8, u32> = (1..=9).map(|d| (d, 0)).collect();

        for d in date_digits(day, month, year) {
            if let Some(bucket) = grid_population.get_mut(&d) {
                bucket.push(d);
            }
            if let Some(count) = number_counts.get_mut(&d) {
                *count += 1;
            }
        }

        let (present_numbers, missing_numbers): (Vec<u8>, Vec<u8>) =
            (1..=9u8).partition(|d| number_counts.get(d).is_some_and(|&c| c > 0));

        Self {
            grid_population,
            present_numbers,
            missing_numbers,
            number_counts,
        }
    }

    /// Occurrence count of `digit` (0 for absent or out-of-range digits).
    pub fn count(&self, digit: u8) -> u32 {
        self.number_counts.get(&digit).copied().unwrap_or(0)
    }

    /// Cells in [`LOSHU_LAYOUT`] order, top row first.
    pub fn rows(&self) -> [[GridCell; 3]; 3] {
        LOSHU_LAYOUT.map(|row| {
            row.map(|digit| GridCell {
                digit,
                count: self.count(digit),
            })
        })
    }
}

/// Bitmask with bit `d` set for each digit in `digits`.
pub fn digit_mask(digits: &[u8]) -> u16 {
    digits
        .iter()
        .filter(|&&d| d < 16)
        .fold(0u16, |mask, &d| mask | (1 << d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_population() {
        let g = LushoGrid::from_date(7, 12, 1990);
        assert_eq!(g.present_numbers, vec![1, 2, 7, 9]);
        assert_eq!(g.missing_numbers, vec![3, 4, 5, 6, 8]);
        assert_eq!(g.count(1), 2);
        assert_eq!(g.count(9), 2);
        assert_eq!(g.count(2), 1);
        assert_eq!(g.count(7), 1);
        assert_eq!(g.grid_population[&9], vec![9, 9]);
        assert!(g.grid_population[&3].is_empty());
    }

    #[test]
    fn zeros_are_discarded() {
        let g = LushoGrid::from_date(10, 10, 2000);
        let total: u32 = g.number_counts.values().sum();
        assert_eq!(total, 3);
        assert_eq!(g.present_numbers, vec![1, 2]);
    }

    #[test]
    fn present_and_missing_partition() {
        let g = LushoGrid::from_date(29, 8, 1975);
        let mut all: Vec<u8> = g
            .present_numbers
            .iter()
            .chain(g.missing_numbers.iter())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn rows_follow_layout() {
        let g = LushoGrid::from_date(7, 12, 1990);
        let rows = g.rows();
        assert_eq!(rows[0][2], GridCell { digit: 9, count: 2 });
        assert_eq!(rows[2][0], GridCell { digit: 1, count: 2 });
        assert_eq!(rows[1][1], GridCell { digit: 5, count: 0 });
    }

    #[test]
    fn mask_matches_present() {
        let g = LushoGrid::from_date(7, 12, 1990);
        assert_eq!(digit_mask(&g.present_numbers), (1 << 1) | (1 << 2) | (1 << 7) | (1 << 9));
    }
}
