//! Filter enforcing the user's hard minimum requirements.
//!
//! A country passes only if, for every `(factor, threshold)` pair in
//! `PreferenceSpec::min_requirements`, its raw value is `>= threshold`.
//! A requirement naming an unknown factor can never be met, so it
//! excludes every country.

use crate::preferences::PreferenceSpec;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Country, Factor};

/// Removes countries below any minimum requirement.
pub struct MinimumRequirementsFilter;

impl MinimumRequirementsFilter {
    /// Check one country against already-resolved requirements
    pub fn passes(country: &Country, requirements: &[(Option<Factor>, f64)]) -> bool {
        requirements.iter().all(|&(factor, threshold)| match factor {
            Some(factor) => country.value(factor) >= threshold,
            None => false,
        })
    }
}

impl Filter for MinimumRequirementsFilter {
    fn name(&self) -> &str {
        "MinimumRequirementsFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Country>,
        spec: &PreferenceSpec,
    ) -> Result<Vec<&'a Country>> {
        let requirements = spec.resolved_requirements();
        if requirements.is_empty() {
            return Ok(candidates);
        }

        for key in spec
            .min_requirements
            .keys()
            .filter(|key| Factor::from_key(key).is_none())
        {
            tracing::warn!(
                "Minimum requirement on unknown factor '{}' excludes every country",
                key
            );
        }

        let filtered: Vec<&Country> = candidates
            .into_iter()
            .filter(|country| Self::passes(country, &requirements))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::CommunitySize;

    fn countries() -> Vec<Country> {
        vec![
            Country::new("A", CommunitySize::Large)
                .with_value(Factor::CostOfLiving, 20.0)
                .with_value(Factor::Safety, 90.0),
            Country::new("B", CommunitySize::Large)
                .with_value(Factor::CostOfLiving, 80.0)
                .with_value(Factor::Safety, 40.0),
            Country::new("C", CommunitySize::Large)
                .with_value(Factor::CostOfLiving, 50.0)
                .with_value(Factor::Safety, 70.0),
        ]
    }

    #[test]
    fn test_threshold_excludes_lower_values() {
        let countries = countries();
        let spec = PreferenceSpec::new().with_min_requirement("safety_index", 75.0);

        let filtered = MinimumRequirementsFilter
            .apply(countries.iter().collect(), &spec)
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "A");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let countries = countries();
        let spec = PreferenceSpec::new().with_min_requirement("safety", 70.0);

        let filtered = MinimumRequirementsFilter
            .apply(countries.iter().collect(), &spec)
            .unwrap();

        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_no_requirements_keeps_everything() {
        let countries = countries();
        let filtered = MinimumRequirementsFilter
            .apply(countries.iter().collect(), &PreferenceSpec::new())
            .unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_cost_threshold_uses_raw_value() {
        let countries = countries();
        let spec = PreferenceSpec::new().with_min_requirement("cost", 50.0);

        let filtered = MinimumRequirementsFilter
            .apply(countries.iter().collect(), &spec)
            .unwrap();

        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_unknown_factor_excludes_all() {
        let countries = countries();
        let spec = PreferenceSpec::new().with_min_requirement("beaches", 0.0);

        let filtered = MinimumRequirementsFilter
            .apply(countries.iter().collect(), &spec)
            .unwrap();
        assert!(filtered.is_empty());
    }
}
