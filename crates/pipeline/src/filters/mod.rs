//! Filter implementations for the country pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod deal_breaker;
pub mod minimum_requirements;

// Re-export for convenience
pub use deal_breaker::DealBreakerFilter;
pub use minimum_requirements::MinimumRequirementsFilter;
