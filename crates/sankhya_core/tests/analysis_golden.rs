//! Golden tests for the full analysis pipeline and its JSON shape.

use sankhya_core::{Graha, NumerologyError, analyze, identify_yogas, mahadasha_sequence, reduce};
use serde_json::{Value, json};

/// 07/12/1990: digits 7,1,2,1,9,9,0 sum to 29 → destiny 11 (master).
#[test]
fn reference_date_core_numbers() {
    let a = analyze(7, 12, 1990).unwrap();
    assert_eq!(a.psychic_number.number, 7);
    assert_eq!(a.psychic_number.planet, Graha::Ketu);
    assert_eq!(a.destiny_number.number, 11);
    assert_eq!(a.destiny_number.planet, Graha::Chandra);
}

#[test]
fn reference_date_grid() {
    let a = analyze(7, 12, 1990).unwrap();
    let g = &a.lusho_grid;
    assert_eq!(g.present_numbers, vec![1, 2, 7, 9]);
    assert_eq!(g.missing_numbers, vec![3, 4, 5, 6, 8]);
    assert_eq!(g.number_counts[&1], 2);
    assert_eq!(g.number_counts[&9], 2);
    assert_eq!(g.number_counts[&2], 1);
    assert_eq!(g.number_counts[&7], 1);
    for missing in [3, 4, 5, 6, 8] {
        assert_eq!(g.number_counts[&missing], 0);
    }
}

#[test]
fn reference_date_yogas() {
    let a = analyze(7, 12, 1990).unwrap();
    let names: Vec<&str> = a.yogas_found.iter().map(|y| y.name.as_str()).collect();
    assert!(names.contains(&"L-Shape Combination (9,1,7)"));
    assert!(!names.contains(&"Raj Yog (Fame/Success)"));
    assert_eq!(a.yogas_found, identify_yogas(&a.lusho_grid.present_numbers));
}

#[test]
fn reference_date_mahadasha() {
    let a = analyze(7, 12, 1990).unwrap();
    let numbers: Vec<u32> = a
        .simplified_mahadasha_sequence
        .iter()
        .map(|p| p.number)
        .collect();
    assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8, 9, 1]);
    assert_eq!(a.simplified_mahadasha_sequence, mahadasha_sequence(11));
}

#[test]
fn master_preservation_asymmetry() {
    // Day 29 would reach 11, but the psychic number never keeps masters.
    let a = analyze(29, 2, 1980).unwrap();
    assert_eq!(a.psychic_number.number, 2);
    assert_eq!(reduce(29, true), 11);
}

#[test]
fn boundary_dates_accepted() {
    assert!(analyze(31, 1, 1900).is_ok());
    assert!(analyze(1, 12, 2100).is_ok());
}

#[test]
fn boundary_dates_rejected() {
    for (d, m, y) in [(32, 1, 2000), (1, 13, 2000), (1, 1, 0), (0, 1, 2000), (1, 1, 2101)] {
        assert!(
            matches!(analyze(d, m, y), Err(NumerologyError::InvalidInput { .. })),
            "{d}/{m}/{y} should be rejected"
        );
    }
}

#[test]
fn identical_inputs_identical_json() {
    let first = serde_json::to_string(&analyze(15, 8, 1947).unwrap()).unwrap();
    let second = serde_json::to_string(&analyze(15, 8, 1947).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn json_field_names() {
    let v: Value = serde_json::to_value(analyze(7, 12, 1990).unwrap()).unwrap();

    assert_eq!(v["input_dob"], "07/12/1990");
    assert_eq!(v["psychic_number"], json!({"number": 7, "planet": "Ketu"}));
    assert_eq!(v["destiny_number"], json!({"number": 11, "planet": "Moon"}));
    assert_eq!(v["planetary_associations"]["1"], "Sun");
    assert_eq!(v["planetary_associations"]["9"], "Mars");
    assert_eq!(v["lusho_grid"]["grid_population"]["1"], json!([1, 1]));
    assert_eq!(v["lusho_grid"]["grid_population"]["3"], json!([]));
    assert_eq!(v["lusho_grid"]["present_numbers"], json!([1, 2, 7, 9]));
    assert_eq!(v["lusho_grid"]["missing_numbers"], json!([3, 4, 5, 6, 8]));
    assert_eq!(v["lusho_grid"]["number_counts"]["9"], 2);
    assert_eq!(
        v["friendly_unfriendly"],
        json!({"based_on_psychic": 7, "friendly": [1, 2, 4, 5], "unfriendly": [3, 6, 7, 8, 9]})
    );
    assert_eq!(
        v["simplified_mahadasha_sequence"][0],
        json!({"number": 2, "planet": "Moon", "duration": 2})
    );
    assert_eq!(
        v["yogas_found"][1],
        json!({
            "name": "L-Shape Combination (9,1,7)",
            "description": "Strong will, potentially aggressive nature."
        })
    );
}

#[test]
fn json_round_trip_preserves_record() {
    let a = analyze(23, 6, 2001).unwrap();
    let text = serde_json::to_string(&a).unwrap();
    let back: sankhya_core::AnalysisRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(a, back);
}

#[test]
fn every_valid_date_is_well_formed() {
    for year in [1900, 1947, 1999, 2000, 2024, 2100] {
        for month in 1..=12 {
            for day in 1..=31 {
                let a = analyze(day, month, year).unwrap();
                assert!((1..=9).contains(&a.psychic_number.number));
                let d = a.destiny_number.number;
                assert!((1..=9).contains(&d) || [11, 22, 33].contains(&d));
                assert_eq!(a.simplified_mahadasha_sequence.len(), 9);
                assert_eq!(
                    a.lusho_grid.present_numbers.len() + a.lusho_grid.missing_numbers.len(),
                    9
                );
            }
        }
    }
}
