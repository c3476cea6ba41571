//! The in-memory country catalog.
//!
//! A `Catalog` owns an ordered list of countries plus a name index for
//! lookups. Order matters: it is the tie-break order used when ranking.

use crate::builtin;
use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{Country, Factor};
use std::collections::HashMap;
use std::path::Path;

/// Ordered, immutable set of countries with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<Country>,
    /// Lowercased name -> position in `countries`
    name_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// Fails with `DuplicateCountry` if two records share a name
    /// (compared case-insensitively), and with `InvalidValue` if any factor
    /// value is NaN or infinite.
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        let mut name_index = HashMap::with_capacity(countries.len());
        for (position, country) in countries.iter().enumerate() {
            if let Some(factor) = Factor::all().find(|&f| !country.value(f).is_finite()) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("{}.{}", country.name, factor.key()),
                    value: country.value(factor).to_string(),
                });
            }

            let key = country.name.to_lowercase();
            if name_index.insert(key, position).is_some() {
                return Err(DataLoadError::DuplicateCountry {
                    name: country.name.clone(),
                });
            }
        }

        Ok(Self {
            countries,
            name_index,
        })
    }

    /// The twelve reference countries shipped with the crate
    pub fn builtin() -> Self {
        let countries = builtin::countries();
        let name_index = countries
            .iter()
            .enumerate()
            .map(|(position, country)| (country.name.to_lowercase(), position))
            .collect();

        Self {
            countries,
            name_index,
        }
    }

    /// Load a catalog from a `::`-delimited country file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let countries = parser::parse_countries(path)?;
        tracing::info!(
            "Loaded {} countries from {}",
            countries.len(),
            path.display()
        );
        Self::new(countries)
    }

    /// Get a country by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Country> {
        self.name_index
            .get(&name.trim().to_lowercase())
            .map(|&position| &self.countries[position])
    }

    /// All countries in catalog order
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommunitySize;

    #[test]
    fn test_catalog_keeps_order() {
        let catalog = Catalog::new(vec![
            Country::new("Zeta", CommunitySize::Small),
            Country::new("Alpha", CommunitySize::Large),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result = Catalog::new(vec![
            Country::new("Spain", CommunitySize::Large),
            Country::new("spain", CommunitySize::Small),
        ]);

        assert!(matches!(
            result,
            Err(DataLoadError::DuplicateCountry { ref name }) if name == "spain"
        ));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let result = Catalog::new(vec![
            Country::new("Low", CommunitySize::Small).with_value(Factor::Safety, 10.0),
            Country::new("Nan", CommunitySize::Small).with_value(Factor::Climate, f64::NAN),
        ]);
        match result {
            Err(DataLoadError::InvalidValue { field, .. }) => assert_eq!(field, "Nan.climate_score"),
            other => panic!("expected invalid value, got {other:?}"),
        }

        let infinite = Catalog::new(vec![
            Country::new("Far", CommunitySize::Large)
                .with_value(Factor::InternetSpeed, f64::INFINITY),
        ]);
        assert!(matches!(infinite, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::new(vec![
            Country::new("New Zealand", CommunitySize::Medium).with_value(Factor::Safety, 90.0),
        ])
        .unwrap();

        let country = catalog.get("new zealand").unwrap();
        assert_eq!(country.safety_index, 90.0);
        assert!(catalog.get("Atlantis").is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::load_from_file(Path::new("does/not/exist.dat"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
