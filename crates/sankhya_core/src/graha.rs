//! Vedic planet (graha) enum and the number-to-graha association.
//!
//! Each digit 1-9 is ruled by one of the 9 grahas. Master numbers have no
//! ruler of their own and take the ruler of their fully reduced digit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reduce::reduce_full;

/// The 9 Vedic grahas. Serialized by English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Rahu")]
    Rahu,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Ketu")]
    Ketu,
    #[serde(rename = "Saturn")]
    Shani,
    #[serde(rename = "Mars")]
    Mangal,
}

/// Grahas in ruling-number order: index 0 rules 1, index 8 rules 9.
pub const NUMBER_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Guru,
    Graha::Rahu,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Ketu,
    Graha::Shani,
    Graha::Mangal,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Guru => "Guru",
            Self::Rahu => "Rahu",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Ketu => "Ketu",
            Self::Shani => "Shani",
            Self::Mangal => "Mangal",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Guru => "Jupiter",
            Self::Rahu => "Rahu",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Ketu => "Ketu",
            Self::Shani => "Saturn",
            Self::Mangal => "Mars",
        }
    }

    /// The digit 1-9 this graha rules.
    pub const fn ruling_number(self) -> u8 {
        match self {
            Self::Surya => 1,
            Self::Chandra => 2,
            Self::Guru => 3,
            Self::Rahu => 4,
            Self::Buddh => 5,
            Self::Shukra => 6,
            Self::Ketu => 7,
            Self::Shani => 8,
            Self::Mangal => 9,
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Graha ruling `number`.
///
/// Anything outside 1-9 (master numbers, multi-digit sums) is fully reduced
/// first. 0 has no digit root and maps to the ruler of 9.
pub const fn planet_for(number: u32) -> Graha {
    let digit = reduce_full(number);
    let idx = if digit == 0 { 8 } else { digit as usize - 1 };
    NUMBER_GRAHAS[idx]
}

/// The full 1-9 association table, keyed by digit.
pub fn planetary_associations() -> BTreeMap<u8, Graha> {
    NUMBER_GRAHAS
        .iter()
        .map(|&g| (g.ruling_number(), g))
        .collect()
}
