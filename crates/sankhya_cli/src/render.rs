//! Plain-text rendering of engine results.

use sankhya_core::{
    AnalysisRecord, Compatibility, CoreNumber, LushoGrid, MahadashaPeriod, YogaMatch,
};

pub fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn core(n: &CoreNumber) -> String {
    format!("{} ({} / {})", n.number, n.planet, n.planet.name())
}

fn cell(digit: u8, count: u32) -> String {
    if count == 0 {
        "-".to_string()
    } else {
        digit.to_string().repeat(count as usize)
    }
}

/// 3x3 grid, each cell showing its digit once per occurrence.
pub fn grid(g: &LushoGrid) -> String {
    g.rows()
        .into_iter()
        .map(|row| {
            let [a, b, c] = row.map(|gc| cell(gc.digit, gc.count));
            format!("| {a:^5} | {b:^5} | {c:^5} |\n")
        })
        .collect()
}

pub fn mahadasha(periods: &[MahadashaPeriod]) -> String {
    periods
        .iter()
        .scan(0, |age, p| {
            let start = *age;
            *age += p.duration;
            Some(format!(
                "{:>3}-{:<3} {} ({}) {} yr\n",
                start, *age, p.number, p.planet, p.duration
            ))
        })
        .collect()
}

pub fn yogas(found: &[YogaMatch]) -> String {
    if found.is_empty() {
        return "No yogas found\n".to_string();
    }
    found
        .iter()
        .map(|y| format!("{}: {}\n", y.name, y.description))
        .collect()
}

pub fn compatibility(c: &Compatibility) -> String {
    format!(
        "Partner psychic number {}: {} compatibility",
        c.partner_psychic,
        c.level.name()
    )
}

pub fn analysis(a: &AnalysisRecord) -> String {
    let summary = [
        format!("Birth date:      {}", a.input_dob),
        format!("Psychic number:  {}", core(&a.psychic_number)),
        format!("Destiny number:  {}", core(&a.destiny_number)),
        format!("Present:         {}", join(&a.lusho_grid.present_numbers)),
        format!("Missing:         {}", join(&a.lusho_grid.missing_numbers)),
        format!("Friendly:        {}", join(&a.friendly_unfriendly.friendly)),
        format!("Unfriendly:      {}", join(&a.friendly_unfriendly.unfriendly)),
    ]
    .join("\n");

    format!(
        "{summary}\n\nLo Shu grid:\n{}\nMahadasha:\n{}\nYogas:\n{}",
        grid(&a.lusho_grid),
        mahadasha(&a.simplified_mahadasha_sequence),
        yogas(&a.yogas_found),
    )
}

#[cfg(test)]
mod tests {
    use sankhya_core::{analyze, compatibility as grade};

    use super::*;

    #[test]
    fn grid_rows_follow_layout() {
        let a = analyze(7, 12, 1990).unwrap();
        let text = grid(&a.lusho_grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "|   -   |   -   |  99   |");
        assert_eq!(lines[1], "|   2   |   -   |   -   |");
        assert_eq!(lines[2], "|  11   |   -   |   7   |");
    }

    #[test]
    fn mahadasha_ages_accumulate() {
        let a = analyze(7, 12, 1990).unwrap();
        let text = mahadasha(&a.simplified_mahadasha_sequence);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "  0-2   2 (Moon) 2 yr");
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().last().unwrap().starts_with(" 44-45 "));
    }

    #[test]
    fn empty_lists() {
        assert_eq!(join::<u8>(&[]), "none");
        assert_eq!(yogas(&[]), "No yogas found\n");
    }

    #[test]
    fn full_report_mentions_everything() {
        let text = analysis(&analyze(7, 12, 1990).unwrap());
        assert!(text.contains("Psychic number:  7 (Ketu / Ketu)"));
        assert!(text.contains("Destiny number:  11 (Moon / Chandra)"));
        assert!(text.contains("Courage Yog"));
        assert!(text.contains("\n\nLo Shu grid:\n|   -   |"));
        assert!(text.contains("|   7   |\n\nMahadasha:\n  0-2 "));
        assert!(text.contains("\nYogas:\nCourage Yog: "));
        assert!(text.ends_with(
            "L-Shape Combination (9,1,7): Strong will, potentially aggressive nature.\n"
        ));
    }

    #[test]
    fn compatibility_line() {
        let a = analyze(7, 12, 1990).unwrap();
        let c = grade(&a.friendly_unfriendly, 10);
        assert_eq!(compatibility(&c), "Partner psychic number 1: High compatibility");
    }
}
