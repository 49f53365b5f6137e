//! Psychic and destiny numbers.
//!
//! The psychic number always reduces to a plain digit; the destiny number
//! keeps master numbers 11, 22 and 33.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, planet_for};
use crate::reduce::{date_digit_sum, reduce};

/// A derived number and its ruling graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumber {
    pub number: u32,
    pub planet: Graha,
}

impl CoreNumber {
    /// Pair `number` with its ruler.
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            planet: planet_for(number),
        }
    }
}

/// Psychic (moolank) number: the birth day reduced to 1-9.
pub const fn psychic_number(day: u32) -> u32 {
    reduce(day, false)
}

/// Destiny (bhagyank) number: digit sum of the whole date, reduced with
/// master numbers preserved.
pub const fn destiny_number(day: u32, month: u32, year: u32) -> u32 {
    reduce(date_digit_sum(day, month, year), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psychic_single_digit_day() {
        assert_eq!(psychic_number(7), 7);
        assert_eq!(CoreNumber::new(psychic_number(7)).planet, Graha::Ketu);
    }

    #[test]
    fn psychic_never_master() {
        // 29 → 11 would be a master number, but psychic always reduces fully.
        assert_eq!(psychic_number(29), 2);
        assert_eq!(psychic_number(11), 2);
        assert_eq!(psychic_number(22), 4);
    }

    #[test]
    fn destiny_master_eleven() {
        assert_eq!(destiny_number(7, 12, 1990), 11);
        assert_eq!(CoreNumber::new(11).planet, Graha::Chandra);
    }

    #[test]
    fn destiny_plain_digit() {
        // 1+1+1+9+0+0 = 12 → 3
        assert_eq!(destiny_number(1, 1, 1900), 3);
    }
}
