//! Filter to remove countries the user refuses outright.

use crate::preferences::PreferenceSpec;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Country;

/// Removes countries named in `PreferenceSpec::deal_breakers`.
pub struct DealBreakerFilter;

impl Filter for DealBreakerFilter {
    fn name(&self) -> &str {
        "DealBreakerFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Country>,
        spec: &PreferenceSpec,
    ) -> Result<Vec<&'a Country>> {
        if spec.deal_breakers.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<&Country> = candidates
            .into_iter()
            .filter(|country| !spec.is_deal_breaker(&country.name))
            .collect();
        Ok(filtered)
    }
}
