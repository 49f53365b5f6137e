//! Numerological yogas: named digit combinations found in the lusho grid.
//!
//! A yoga is present when every one of its digits appears in the birth date.
//! Extra digits never disqualify a match. Results keep table order.

use serde::{Deserialize, Serialize};

use crate::grid::digit_mask;

/// A yoga definition: required digits plus its name and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaDefinition {
    pub digits: &'static [u8],
    pub name: &'static str,
    pub description: &'static str,
}

impl YogaDefinition {
    /// Required digits as a bitmask (bit `d` for digit `d`).
    pub fn mask(&self) -> u16 {
        digit_mask(self.digits)
    }

    /// True if every required digit is set in `present_mask`.
    pub fn matches(&self, present_mask: u16) -> bool {
        let need = self.mask();
        present_mask & need == need
    }
}

/// A yoga found for a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaMatch {
    pub name: String,
    pub description: String,
}

impl From<&YogaDefinition> for YogaMatch {
    fn from(def: &YogaDefinition) -> Self {
        Self {
            name: def.name.to_string(),
            description: def.description.to_string(),
        }
    }
}

/// All 16 yogas, in reporting order.
pub const YOGAS: [YogaDefinition; 16] = [
    YogaDefinition {
        digits: &[3, 1, 9],
        name: "Raj Yog (Fame/Success)",
        description: "Indicates potential for Fame, Success, Wealth, Spiritual Path.",
    },
    YogaDefinition {
        digits: &[3, 7, 4],
        name: "Kalsarp Yog (Numerology)",
        description: "Indicates potential for high success, but possible cash flow problems.",
    },
    YogaDefinition {
        digits: &[9, 7, 2],
        name: "Courage Yog",
        description: "Indicates self-confidence, potential to be a 'real hero'.",
    },
    YogaDefinition {
        digits: &[3, 6, 2],
        name: "Education Yoga",
        description: "Indicates potential as a good teacher, high intelligence, possibly manipulative.",
    },
    YogaDefinition {
        digits: &[1, 7, 8],
        name: "Spiritual Success Yog",
        description: "Indicates potential for spiritual/socialist success, multiple income sources, possible legal issues, strong intuition.",
    },
    YogaDefinition {
        digits: &[2, 8, 4],
        name: "Hard Work Success Yog",
        description: "Indicates success through hard work, but potential proneness to accidents or chronic health issues.",
    },
    YogaDefinition {
        digits: &[6, 7, 5],
        name: "Business Success Yog",
        description: "Indicates potential for business success, creativity, skill, good money management, success in love/marriage.",
    },
    YogaDefinition {
        digits: &[9, 5, 4],
        name: "Bandhan Yog",
        description: "Indicates goal achievement, quick decisions, hard work, potential property disputes.",
    },
    YogaDefinition {
        digits: &[3, 9, 8],
        name: "Trine Yoga (3,9,8)",
        description: "Average education/family life, success after hard work.",
    },
    YogaDefinition {
        digits: &[6, 9, 4],
        name: "Trine Yoga (6,9,4)",
        description: "Potential for extra-marital affairs, strong will, materialism.",
    },
    YogaDefinition {
        digits: &[1, 2, 4],
        name: "Trine Yoga (1,2,4)",
        description: "Potential disturbances in education, life fluctuations.",
    },
    YogaDefinition {
        digits: &[9, 1, 7],
        name: "L-Shape Combination (9,1,7)",
        description: "Strong will, potentially aggressive nature.",
    },
    YogaDefinition {
        digits: &[1, 3, 6],
        name: "L-Shape Combination (1,3,6)",
        description: "Highly intellectual, knowledgeable, wise, potential as a good teacher.",
    },
    YogaDefinition {
        digits: &[7, 5, 4],
        name: "L-Shape Kalsarp (7,5,4)",
        description: "Hard work, potential poor communication skills.",
    },
    YogaDefinition {
        digits: &[6, 7],
        name: "Two Number Combination (6,7)",
        description: "Potential disinterest or less interest in luxury/love.",
    },
    YogaDefinition {
        digits: &[9, 5],
        name: "Two Number Combination (9,5)",
        description: "Action-oriented, motivated, tendency to act before thinking.",
    },
];

/// Yogas whose digits are all in `present_numbers`, in table order.
pub fn identify_yogas(present_numbers: &[u8]) -> Vec<YogaMatch> {
    let present = digit_mask(present_numbers);
    YOGAS
        .iter()
        .filter(|y| y.matches(present))
        .map(YogaMatch::from)
        .collect()
}
