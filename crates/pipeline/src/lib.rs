//! Pipeline for filtering and scoring country candidates.
//!
//! This crate provides:
//! - `PreferenceSpec`, the user's weights, requirements and deal-breakers
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - `Scorer`, which turns effective weights into per-factor breakdowns
//! - Preset `Profile`s
//!
//! ## Architecture
//! Countries flow through the pipeline in stages:
//! 1. Filters remove countries that are deal-breakers or miss a requirement
//! 2. The Scorer computes a weighted breakdown for each remaining country
//! 3. The recommender ranks the scored countries
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, PreferenceSpec, Scorer};
//!
//! let spec = PreferenceSpec::new()
//!     .with_weight("safety", 0.4)
//!     .with_min_requirement("internet_speed", 80.0);
//!
//! let eligible = FilterPipeline::standard().apply(catalog.iter().collect(), &spec)?;
//! let scores = Scorer::new(spec.effective_weights()).score_all(&eligible);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod preferences;
pub mod profiles;
pub mod scoring;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use preferences::{EffectiveWeights, PreferenceError, PreferenceSpec};
pub use profiles::Profile;
pub use scoring::{FactorScore, ScoreBreakdown, Scorer};
