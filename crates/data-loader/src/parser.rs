//! Parser for country catalog files.
//!
//! One country per line, fields separated by `::`:
//!
//! ```text
//! name::cost::quality_of_life::safety::healthcare::climate::job_market::english::visa::tax::internet_mbps::community
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

/// Number of `::`-separated fields in a country line
pub const FIELD_COUNT: usize = 12;

/// Numeric columns in file order, between the name and the community size
const NUMERIC_COLUMNS: [Factor; 10] = [
    Factor::CostOfLiving,
    Factor::QualityOfLife,
    Factor::Safety,
    Factor::Healthcare,
    Factor::Climate,
    Factor::JobMarket,
    Factor::EnglishProficiency,
    Factor::VisaEase,
    Factor::TaxFriendliness,
    Factor::InternetSpeed,
];

/// Parse a catalog file from disk
pub fn parse_countries(path: &Path) -> Result<Vec<Country>> {
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_countries_str(&content, &file)
}

/// Parse catalog content already held in memory.
///
/// `file` is only used to give errors some context.
pub fn parse_countries_str(content: &str, file: &str) -> Result<Vec<Country>> {
    let mut countries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        countries.push(parse_country_line(line_trimmed, file, line_no)?);
    }

    tracing::debug!("Parsed {} countries from {}", countries.len(), file);
    Ok(countries)
}

fn parse_country_line(line: &str, file: &str, line_no: usize) -> Result<Country> {
    let parts: Vec<&str> = line.split("::").map(str::trim).collect();
    if parts.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            file: file.to_string(),
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing country name".to_string(),
        });
    }

    let community = parts[FIELD_COUNT - 1].parse::<CommunitySize>()?;
    let mut country = Country::new(name, community);

    for (factor, raw) in NUMERIC_COLUMNS.iter().zip(&parts[1..FIELD_COUNT - 1]) {
        let value = parse_number(raw, *factor, file, line_no)?;
        country = country.with_value(*factor, value);
    }

    Ok(country)
}

fn parse_number(raw: &str, factor: Factor, file: &str, line_no: usize) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|_| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid {} '{}'", factor.key(), raw),
    })?;

    if !value.is_finite() {
        return Err(DataLoadError::InvalidValue {
            field: factor.key().to_string(),
            value: raw.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let content = "Portugal::45::75::82::72::85::60::65::75::60::95::Large\n";
        let countries = parse_countries_str(content, "test.dat").unwrap();

        assert_eq!(countries.len(), 1);
        let portugal = &countries[0];
        assert_eq!(portugal.name, "Portugal");
        assert_eq!(portugal.cost_of_living_index, 45.0);
        assert_eq!(portugal.tax_friendliness, 60.0);
        assert_eq!(portugal.internet_speed, 95.0);
        assert_eq!(portugal.expat_community_size, CommunitySize::Large);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let content = "# name::cost::...\n\nEstonia::48::72::82::70::55::72::75::80::75::150::Medium\n   \n";
        let countries = parse_countries_str(content, "test.dat").unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Estonia");
    }

    #[test]
    fn test_field_count_mismatch() {
        let content = "Spain::50::78::80\n";
        let err = parse_countries_str(content, "test.dat").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch {
                ref file,
                expected: 12,
                found: 4,
                line: 1
            } if file == "test.dat"
        ));
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let content = "\nSpain::50::78::eighty::78::88::58::60::72::55::110::Large\n";
        let err = parse_countries_str(content, "countries.dat").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "countries.dat");
                assert_eq!(line, 2);
                assert!(reason.contains("safety_index"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let content = "Spain::NaN::78::80::78::88::58::60::72::55::110::Large\n";
        let err = parse_countries_str(content, "test.dat").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_community_size() {
        let content = "Spain::50::78::80::78::88::58::60::72::55::110::Huge\n";
        let err = parse_countries_str(content, "test.dat").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { .. }));
    }
}
