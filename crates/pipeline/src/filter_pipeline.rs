//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::preferences::PreferenceSpec;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::Country;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DealBreakerFilter)
///     .add_filter(MinimumRequirementsFilter);
///
/// let eligible = pipeline.apply(catalog.iter().collect(), &spec)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every recommendation runs through:
    /// deal-breakers first, then minimum requirements.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(crate::filters::DealBreakerFilter)
            .add_filter(crate::filters::MinimumRequirementsFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the countries.
    ///
    /// Each stage is logged with its input and output count.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a Country>,
        spec: &PreferenceSpec,
    ) -> Result<Vec<&'a Country>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, spec)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
