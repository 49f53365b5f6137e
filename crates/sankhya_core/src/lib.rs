//! Deterministic Vedic numerology derived from a birth date.
//!
//! This crate provides:
//! - Digit reduction with and without master-number preservation
//! - Psychic and destiny numbers with their ruling grahas
//! - The Lo Shu (lusho) grid of present and missing digits
//! - Friendly/unfriendly numbers and the simplified mahadasha cycle
//! - Yoga (digit combination) detection
//! - Guidance helpers: compatibility, lucky dates, careers, health focus
//!
//! Everything here is pure: no I/O, no shared mutable state, and all
//! reference tables are compile-time constants.
//!
//! ```
//! let a = sankhya_core::analyze(7, 12, 1990).unwrap();
//! assert_eq!(a.destiny_number.number, 11);
//! assert_eq!(a.destiny_number.planet.english_name(), "Moon");
//! ```

pub mod analysis;
pub mod core_number;
pub mod date;
pub mod error;
pub mod graha;
pub mod grid;
pub mod guidance;
pub mod mahadasha;
pub mod reduce;
pub mod relationships;
pub mod yoga;

pub use analysis::{AnalysisRecord, analyze, analyze_date};
pub use core_number::{CoreNumber, destiny_number, psychic_number};
pub use date::{BirthDate, MAX_YEAR, MIN_YEAR};
pub use error::NumerologyError;
pub use graha::{Graha, NUMBER_GRAHAS, planet_for, planetary_associations};
pub use grid::{GridCell, LOSHU_LAYOUT, LushoGrid};
pub use guidance::{
    Compatibility, CompatibilityLevel, MAX_LUCKY_DATES, career_paths, compatibility,
    health_focus, lucky_dates,
};
pub use mahadasha::{MAHADASHA_PERIODS, MahadashaPeriod, mahadasha_sequence};
pub use reduce::{MASTER_NUMBERS, digit_sum, is_master, reduce, reduce_full};
pub use relationships::{FriendlyUnfriendly, Maitri, friendly_unfriendly};
pub use yoga::{YOGAS, YogaDefinition, YogaMatch, identify_yogas};
