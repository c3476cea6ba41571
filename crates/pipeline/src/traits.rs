//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the country catalog.

use crate::preferences::PreferenceSpec;
use anyhow::Result;
use data_loader::Country;

/// Core trait for filtering countries.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters borrow countries from the catalog; nothing is cloned
/// - Filters must keep the relative order of the countries they retain,
///   since ranking ties fall back to catalog order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of countries.
    ///
    /// # Arguments
    /// * `candidates` - The countries still in the running (takes ownership)
    /// * `spec` - User preferences driving the filter
    ///
    /// # Returns
    /// * `Ok(Vec<&Country>)` - The countries that passed
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        candidates: Vec<&'a Country>,
        spec: &PreferenceSpec,
    ) -> Result<Vec<&'a Country>>;
}
