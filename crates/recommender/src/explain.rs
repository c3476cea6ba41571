//! Human-readable rendering of a recommendation.
//!
//! Pure formatting: every number printed here was computed by the scorer.

use data_loader::{Country, Factor};
use pipeline::ScoreBreakdown;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Render the explanation for one scored country.
///
/// Factor lines follow canonical factor order and show the display name,
/// the raw value and the weighted contribution; the total comes last.
pub fn explain(country: &Country, score: f64, breakdown: &ScoreBreakdown) -> String {
    Explanation {
        country,
        score,
        breakdown,
    }
    .to_string()
}

/// Borrowed view that formats like [`explain`], for use with `write!`
pub struct Explanation<'a> {
    pub country: &'a Country,
    pub score: f64,
    pub breakdown: &'a ScoreBreakdown,
}

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "Country: {}", self.country.name)?;
        writeln!(f, "Overall Score: {:.2}", self.score)?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;

        writeln!(f, "Score Breakdown:")?;
        writeln!(f, "{light}")?;
        for factor in Factor::all() {
            let Some(entry) = self.breakdown.get(factor) else {
                continue;
            };
            let raw = format!("{}{}", entry.raw_value, factor.def().unit);
            writeln!(
                f,
                "  {:.<34} {:>10} {:>10.2}",
                factor.display_name(),
                raw,
                entry.contribution
            )?;
        }
        writeln!(f, "  {:.<34} {:>21.2}", "Total", self.breakdown.total)?;
        writeln!(f)?;

        writeln!(f, "Key Statistics:")?;
        writeln!(f, "{light}")?;
        writeln!(
            f,
            "  Cost of Living Index: {}/100 (lower is cheaper)",
            self.country.cost_of_living_index
        )?;
        writeln!(f, "  Safety Index: {}/100", self.country.safety_index)?;
        writeln!(f, "  Healthcare Index: {}/100", self.country.healthcare_index)?;
        writeln!(
            f,
            "  Average Internet Speed: {} Mbps",
            self.country.internet_speed
        )?;
        writeln!(
            f,
            "  Expat Community: {}",
            self.country.expat_community_size
        )
    }
}
