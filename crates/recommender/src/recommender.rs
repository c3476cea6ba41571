//! # Recommender
//!
//! This module coordinates a recommendation:
//! 1. Validate `top_n` and the preference spec
//! 2. Apply filters (deal-breakers, minimum requirements)
//! 3. Score the survivors against the effective weights
//! 4. Rank by total score, ties keeping catalog order
//! 5. Return the top N with their breakdowns
//!
//! Filtering strictly precedes scoring: a country that fails a filter is
//! never scored.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use data_loader::{Catalog, Country};
use pipeline::{FilterPipeline, PreferenceSpec, ScoreBreakdown, Scorer};

use crate::error::{RecommendError, Result};
use crate::explain::explain;

/// Number of recommendations returned when the caller has no preference
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked country
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub country: &'a Country,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl Recommendation<'_> {
    /// Human-readable explanation of this recommendation
    pub fn explain(&self) -> String {
        explain(self.country, self.score, &self.breakdown)
    }
}

/// Ranks a shared, immutable catalog against preference specs.
///
/// The catalog sits behind an `Arc`; to swap in new data, build a new
/// `Recommender` around a new catalog rather than mutating the old one.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl Recommender {
    /// Create a recommender over `catalog` using the standard filter pipeline
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_pipeline(catalog, FilterPipeline::standard())
    }

    /// Create a recommender with a custom filter pipeline
    pub fn with_pipeline(catalog: Arc<Catalog>, filter_pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            filter_pipeline: Arc::new(filter_pipeline),
        }
    }

    /// Recommender over the built-in reference catalog
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: rank the catalog for `spec`.
    ///
    /// # Arguments
    /// * `spec` - Weights, minimum requirements and deal-breakers
    /// * `top_n` - Maximum number of recommendations; must be at least 1
    ///
    /// # Returns
    /// At most `top_n` recommendations, highest score first
    pub fn recommend(&self, spec: &PreferenceSpec, top_n: usize) -> Result<Vec<Recommendation<'_>>> {
        rank(&self.filter_pipeline, self.catalog.countries(), spec, top_n)
    }
}

/// Rank `catalog` for `spec` with the standard filter pipeline.
///
/// Returns an empty vector for an empty catalog or when nothing passes the
/// filters. `top_n == 0` is rejected with [`RecommendError::InvalidTopN`].
/// The records are not checked up front the way [`Catalog::new`] checks them,
/// so a non-finite score fails with [`RecommendError::NonFiniteScore`].
pub fn recommend<'a>(
    catalog: &'a [Country],
    spec: &PreferenceSpec,
    top_n: usize,
) -> Result<Vec<Recommendation<'a>>> {
    rank(&FilterPipeline::standard(), catalog, spec, top_n)
}

fn rank<'a>(
    filter_pipeline: &FilterPipeline,
    countries: &'a [Country],
    spec: &PreferenceSpec,
    top_n: usize,
) -> Result<Vec<Recommendation<'a>>> {
    if top_n == 0 {
        return Err(RecommendError::InvalidTopN(top_n));
    }
    spec.validate()?;

    let unknown = spec.unknown_factors();
    if !unknown.is_empty() {
        warn!("Preferences name unknown factors: {}", unknown.join(", "));
    }

    let start_time = Instant::now();

    // Apply filters
    let eligible = filter_pipeline.apply(countries.iter().collect(), spec)?;
    info!(
        "Applied filters, countries remaining: {} of {}",
        eligible.len(),
        countries.len()
    );

    // Score
    let scorer = Scorer::new(spec.effective_weights());
    let breakdowns = scorer.score_all(&eligible);
    if let Some((country, breakdown)) = eligible
        .iter()
        .zip(&breakdowns)
        .find(|(_, breakdown)| !breakdown.total.is_finite())
    {
        return Err(RecommendError::NonFiniteScore {
            country: country.name.clone(),
            score: breakdown.total,
        });
    }

    // Rank and select top N; sort_by is stable so ties keep catalog order
    let mut ranked: Vec<Recommendation<'a>> = eligible
        .into_iter()
        .zip(breakdowns)
        .map(|(country, breakdown)| Recommendation {
            country,
            score: breakdown.total,
            breakdown,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);

    info!(
        "Selected top {} recommendations in {:.2?}",
        ranked.len(),
        start_time.elapsed()
    );
    Ok(ranked)
}
