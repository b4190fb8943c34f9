//! Score and conditions display.

use skiscore_core::scoring::{
    SNOW_WEIGHT, ScoreCategory, SkiScore, TEMPERATURE_WEIGHT, VISIBILITY_WEIGHT, WIND_WEIGHT,
};

/// Traffic-light marker for a score.
pub const fn category_marker(category: ScoreCategory) -> &'static str {
    match category {
        ScoreCategory::Green => "🟢",
        ScoreCategory::Yellow => "🟡",
        ScoreCategory::Red => "🔴",
    }
}

/// Compact score cell such as `🟢 85 Eccellente`, or `--` when unscored.
pub fn score_cell(score: Option<&SkiScore>) -> String {
    score.map_or_else(
        || "--".to_string(),
        |s| format!("{} {:>3} {}", category_marker(s.category()), s.total, s.rating()),
    )
}

/// Print the total and weighted components of a score.
pub fn print_score_breakdown(score: &SkiScore) {
    println!(
        "SkiScore: {}/100 {} {}",
        score.total,
        category_marker(score.category()),
        score.rating()
    );
    for (label, value, weight) in [
        ("Neve", score.snow, SNOW_WEIGHT),
        ("Visibilità", score.visibility, VISIBILITY_WEIGHT),
        ("Vento", score.wind, WIND_WEIGHT),
        ("Temperatura", score.temperature, TEMPERATURE_WEIGHT),
    ] {
        println!("  {label:<12} {value:>5.1}/100  (peso {:.0}%)", weight * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(total: u8) -> SkiScore {
        SkiScore {
            total,
            snow: 80.0,
            visibility: 90.0,
            wind: 70.0,
            temperature: 60.0,
        }
    }

    #[test]
    fn test_score_cell() {
        assert_eq!(score_cell(Some(&score(85))), "🟢  85 Eccellente");
        assert_eq!(score_cell(Some(&score(45))), "🟡  45 Discreto");
        assert_eq!(score_cell(None), "--");
    }
}
