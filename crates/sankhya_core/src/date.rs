//! Validated birth date input.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Earliest accepted birth year.
pub const MIN_YEAR: u32 = 1900;

/// Latest accepted birth year.
pub const MAX_YEAR: u32 = 2100;

/// A birth date as three plain calendar components.
///
/// Only the component ranges are checked (day 1-31, month 1-12,
/// year 1900-2100); combinations such as 31 February are accepted, since
/// the numerology derivations operate on digits rather than real days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBirthDate")]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: u32,
}

impl BirthDate {
    /// Build a birth date, rejecting out-of-range components.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, NumerologyError> {
        Ok(Self {
            day: check("day", day, 1, 31)?,
            month: check("month", month, 1, 12)?,
            year: check("year", year, MIN_YEAR, MAX_YEAR)?,
        })
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn year(&self) -> u32 {
        self.year
    }
}

/// Unvalidated wire form; deserialization goes through [`BirthDate::new`].
#[derive(Deserialize)]
struct RawBirthDate {
    day: i64,
    month: i64,
    year: i64,
}

impl TryFrom<RawBirthDate> for BirthDate {
    type Error = NumerologyError;

    fn try_from(raw: RawBirthDate) -> Result<Self, Self::Error> {
        Self::new(raw.day, raw.month, raw.year)
    }
}

fn check(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, NumerologyError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(NumerologyError::InvalidInput {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as u32)
}

/// `DD/MM/YYYY`, with day and month zero-padded.
impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}
