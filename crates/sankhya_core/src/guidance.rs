//! Practical guidance derived from an analysis: partner compatibility,
//! lucky dates, career paths and health focus areas.

use chrono::NaiveDate;

use crate::reduce::reduce_full;
use crate::relationships::{FriendlyUnfriendly, Maitri};

/// Maximum number of lucky dates reported for one month.
pub const MAX_LUCKY_DATES: usize = 10;

/// Compatibility grade between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityLevel {
    High,
    Medium,
    Low,
}

impl CompatibilityLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Compatibility with a partner born on a given day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    pub partner_psychic: u8,
    pub level: CompatibilityLevel,
}

/// Grade a partner by the psychic number of their birth day.
///
/// Friendly numbers are High, unfriendly numbers Low, anything else Medium.
pub fn compatibility(relations: &FriendlyUnfriendly, partner_day: u32) -> Compatibility {
    let rem = (partner_day % 9) as u8;
    let partner_psychic = if rem == 0 { 9 } else { rem };
    let level = match relations.maitri(partner_psychic) {
        Maitri::Friend => CompatibilityLevel::High,
        Maitri::Enemy => CompatibilityLevel::Low,
        Maitri::Neutral => CompatibilityLevel::Medium,
    };
    Compatibility {
        partner_psychic,
        level,
    }
}

/// Days of `month` in `year` whose reduced day is a friendly number.
///
/// At most [`MAX_LUCKY_DATES`] days, earliest first. An invalid month yields
/// an empty list.
pub fn lucky_dates(relations: &FriendlyUnfriendly, year: i32, month: u32) -> Vec<u32> {
    (1..=31)
        .map_while(|day| NaiveDate::from_ymd_opt(year, month, day).map(|_| day))
        .filter(|&day| relations.friendly.contains(&(reduce_full(day) as u8)))
        .take(MAX_LUCKY_DATES)
        .collect()
}

/// Suitable careers for each number 1-9, index 0 = number 1.
static CAREERS: [[&str; 4]; 9] = [
    ["Leadership", "Entrepreneurship", "Government", "Military"],
    ["Teaching", "Counseling", "Healthcare", "Social Work"],
    ["Arts", "Entertainment", "Writing", "Communications"],
    ["Engineering", "Construction", "Real Estate", "Planning"],
    ["Sales", "Marketing", "Travel", "Media"],
    ["Beauty", "Fashion", "Interior Design", "Hospitality"],
    ["Research", "Spirituality", "Psychology", "Analysis"],
    ["Business", "Finance", "Law", "Administration"],
    ["Sports", "Adventure", "Emergency Services", "Competition"],
];

/// Health focus for each missing number 1-9, index 0 = number 1.
const HEALTH: [&str; 9] = [
    "Heart and circulatory system - Regular cardio exercise recommended",
    "Digestive system - Focus on gut health and stress management",
    "Liver and metabolism - Maintain balanced diet and avoid excess",
    "Nervous system - Practice meditation and avoid overstimulation",
    "Respiratory system - Breathing exercises and avoid smoking",
    "Reproductive system - Regular health checkups important",
    "Mental health - Spiritual practices and avoid isolation",
    "Bone and joint health - Regular exercise and calcium intake",
    "Blood and energy - Iron-rich foods and avoid overexertion",
];

fn careers_for(number: u32) -> &'static [&'static str] {
    match number {
        1..=9 => &CAREERS[number as usize - 1],
        _ => &[],
    }
}

/// Careers for the psychic number followed by those for the destiny number,
/// without duplicates. Master destiny numbers add nothing.
pub fn career_paths(psychic: u32, destiny: u32) -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for &career in careers_for(psychic).iter().chain(careers_for(destiny)) {
        if !paths.contains(&career) {
            paths.push(career);
        }
    }
    paths
}

/// One health note per missing number, in the given order.
pub fn health_focus(missing_numbers: &[u8]) -> Vec<&'static str> {
    missing_numbers
        .iter()
        .filter(|&&n| (1..=9).contains(&n))
        .map(|&n| HEALTH[n as usize - 1])
        .collect()
}
