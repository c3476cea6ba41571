//! Recommender crate for ranking relocation destinations.
//!
//! This crate ties the catalog and the pipeline together: it filters,
//! scores and ranks countries, and renders explanations for the results.
//!
//! ```ignore
//! use pipeline::PreferenceSpec;
//! use recommender::Recommender;
//!
//! let recommender = Recommender::builtin();
//! let spec = PreferenceSpec::new()
//!     .with_weight("cost", 0.4)
//!     .with_min_requirement("safety", 75.0);
//!
//! for rec in recommender.recommend(&spec, 3)? {
//!     println!("{}", rec.explain());
//! }
//! ```

pub mod error;
pub mod explain;
pub mod recommender;

pub use error::{RecommendError, Result};
pub use explain::{explain, Explanation};
pub use recommender::{recommend, Recommendation, Recommender, DEFAULT_TOP_N};
