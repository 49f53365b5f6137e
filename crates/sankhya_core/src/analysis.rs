//! Full numerology analysis of a birth date.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core_number::{CoreNumber, destiny_number, psychic_number};
use crate::date::BirthDate;
use crate::error::NumerologyError;
use crate::graha::{Graha, planetary_associations};
use crate::grid::LushoGrid;
use crate::mahadasha::{MahadashaPeriod, mahadasha_sequence};
use crate::relationships::{FriendlyUnfriendly, friendly_unfriendly};
use crate::yoga::{YogaMatch, identify_yogas};

/// Everything derived from one birth date.
///
/// Field names are the interchange names used by the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// `DD/MM/YYYY`.
    pub input_dob: String,
    pub psychic_number: CoreNumber,
    pub destiny_number: CoreNumber,
    pub planetary_associations: BTreeMap<u8, Graha>,
    pub lusho_grid: LushoGrid,
    pub friendly_unfriendly: FriendlyUnfriendly,
    pub simplified_mahadasha_sequence: Vec<MahadashaPeriod>,
    pub yogas_found: Vec<YogaMatch>,
}

/// Validate the components and analyze the resulting birth date.
pub fn analyze(day: i64, month: i64, year: i64) -> Result<AnalysisRecord, NumerologyError> {
    let date = BirthDate::new(day, month, year)?;
    Ok(analyze_date(date))
}

/// Analyze an already validated birth date. Infallible and deterministic.
pub fn analyze_date(date: BirthDate) -> AnalysisRecord {
    let (day, month, year) = (date.day(), date.month(), date.year());

    let psychic = psychic_number(day);
    let destiny = destiny_number(day, month, year);
    let lusho_grid = LushoGrid::from_date(day, month, year);
    let yogas_found = identify_yogas(&lusho_grid.present_numbers);

    tracing::trace!(
        %date,
        psychic,
        destiny,
        yogas = yogas_found.len(),
        "numerology analysis computed"
    );

    AnalysisRecord {
        input_dob: date.to_string(),
        psychic_number: CoreNumber::new(psychic),
        destiny_number: CoreNumber::new(destiny),
        planetary_associations: planetary_associations(),
        lusho_grid,
        friendly_unfriendly: friendly_unfriendly(psychic),
        simplified_mahadasha_sequence: mahadasha_sequence(destiny),
        yogas_found,
    }
}
