//! Friendly and unfriendly numbers for each psychic number.
//!
//! Numbers appearing in neither list are neutral.

use serde::{Deserialize, Serialize};

/// (friendly, unfriendly) for psychic numbers 1..=9, index 0 = psychic 1.
const RELATIONSHIPS: [(&[u8], &[u8]); 9] = [
    (&[1, 2, 3, 4, 5, 7, 9], &[6, 8]),
    (&[1, 3, 4, 7, 8, 9], &[2, 5, 6]),
    (&[1, 2, 3, 5, 6, 8, 9], &[4, 7]),
    (&[1, 2, 5, 6, 7, 9], &[3, 4, 8]),
    (&[1, 3, 4, 5, 6, 7, 8, 9], &[2]),
    (&[3, 4, 5, 8, 9], &[1, 2, 6, 7]),
    (&[1, 2, 4, 5], &[3, 6, 7, 8, 9]),
    (&[2, 3, 5, 6], &[1, 4, 7, 8, 9]),
    (&[1, 2, 3, 4, 5, 6, 9], &[7, 8]),
];

/// Relationship of one number to a psychic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maitri {
    Friend,
    Enemy,
    Neutral,
}

/// Friendly and unfriendly numbers for one psychic number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendlyUnfriendly {
    pub based_on_psychic: u32,
    pub friendly: Vec<u8>,
    pub unfriendly: Vec<u8>,
}

impl FriendlyUnfriendly {
    /// How `number` relates to the psychic number this set was built for.
    pub fn maitri(&self, number: u8) -> Maitri {
        if self.friendly.contains(&number) {
            Maitri::Friend
        } else if self.unfriendly.contains(&number) {
            Maitri::Enemy
        } else {
            Maitri::Neutral
        }
    }
}

/// Table lookup. Psychic numbers outside 1-9 get two empty lists.
pub fn friendly_unfriendly(psychic: u32) -> FriendlyUnfriendly {
    let (friendly, unfriendly) = match psychic {
        1..=9 => RELATIONSHIPS[psychic as usize - 1],
        _ => (&[][..], &[][..]),
    };
    FriendlyUnfriendly {
        based_on_psychic: psychic,
        friendly: friendly.to_vec(),
        unfriendly: unfriendly.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psychic_seven() {
        let fu = friendly_unfriendly(7);
        assert_eq!(fu.based_on_psychic, 7);
        assert_eq!(fu.friendly, vec![1, 2, 4, 5]);
        assert_eq!(fu.unfriendly, vec![3, 6, 7, 8, 9]);
    }

    #[test]
    fn psychic_five_single_enemy() {
        let fu = friendly_unfriendly(5);
        assert_eq!(fu.unfriendly, vec![2]);
        assert_eq!(fu.friendly.len(), 8);
    }

    #[test]
    fn lists_are_disjoint() {
        for p in 1..=9 {
            let fu = friendly_unfriendly(p);
            for n in &fu.friendly {
                assert!(!fu.unfriendly.contains(n), "psychic {p}: {n} in both lists");
            }
        }
    }

    #[test]
    fn out_of_table_is_empty() {
        let fu = friendly_unfriendly(11);
        assert!(fu.friendly.is_empty());
        assert!(fu.unfriendly.is_empty());
        assert_eq!(fu.based_on_psychic, 11);
    }

    #[test]
    fn every_digit_classified_for_table_entries() {
        for p in 1..=9 {
            let fu = friendly_unfriendly(p);
            for n in 1..=9 {
                assert_ne!(fu.maitri(n), Maitri::Neutral, "psychic {p}, number {n}");
            }
        }
    }

    #[test]
    fn maitri_lookup() {
        let fu = friendly_unfriendly(6);
        assert_eq!(fu.maitri(3), Maitri::Friend);
        assert_eq!(fu.maitri(1), Maitri::Enemy);
        assert_eq!(friendly_unfriendly(0).maitri(1), Maitri::Neutral);
    }
}
