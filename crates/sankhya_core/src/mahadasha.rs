//! Simplified numerological mahadasha: a 9-period cycle seeded by the
//! destiny number.
//!
//! Each period is ruled by the graha of its number and lasts that many
//! years. Periods run 1..=9 upward from the seed and wrap from 9 back to 1,
//! so the full cycle always spans 45 years.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, planet_for};
use crate::reduce::reduce_full;

/// Number of periods in one cycle.
pub const MAHADASHA_PERIODS: usize = 9;

/// A single period of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MahadashaPeriod {
    pub number: u32,
    pub planet: Graha,
    /// Length of the period in years.
    pub duration: u32,
}

/// Next number in the 1..=9 cycle.
pub const fn next_in_cycle(n: u32) -> u32 {
    if n >= 9 { 1 } else { n + 1 }
}

/// The 9 periods in chronological order, starting at the reduced destiny number.
///
/// Master numbers are reduced to their digit root first (11 starts at 2).
pub fn mahadasha_sequence(destiny: u32) -> Vec<MahadashaPeriod> {
    let mut current = reduce_full(destiny);
    if current == 0 {
        current = 9;
    }
    let mut periods = Vec::with_capacity(MAHADASHA_PERIODS);
    for _ in 0..MAHADASHA_PERIODS {
        periods.push(MahadashaPeriod {
            number: current,
            planet: planet_for(current),
            duration: current,
        });
        current = next_in_cycle(current);
    }
    periods
}
