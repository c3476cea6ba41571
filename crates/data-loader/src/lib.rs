//! # Data Loader Crate
//!
//! This crate owns the country records that the recommender ranks.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Country, Factor, the FACTORS table)
//! - **catalog**: Ordered catalog with unique names and name lookups
//! - **builtin**: The twelve reference countries
//! - **parser**: Parse `::`-delimited catalog files
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{Catalog, Factor};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/countries.dat"))?;
//! let estonia = catalog.get("Estonia").unwrap();
//! println!("{} Mbps", estonia.value(Factor::InternetSpeed));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;
pub mod builtin;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use catalog::Catalog;
pub use types::{CommunitySize, Country, Factor, FactorDef, FACTORS};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("Portugal").is_none());
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 12);

        let names: HashSet<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 12, "built-in names must be unique");

        let singapore = catalog.get("singapore").unwrap();
        assert_eq!(singapore.internet_speed, 200.0);
        assert_eq!(singapore.expat_community_size, CommunitySize::Large);
    }

    #[test]
    fn test_builtin_passes_catalog_validation() {
        assert!(Catalog::new(builtin::countries()).is_ok());
    }

    #[test]
    fn test_data_file_matches_builtin() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/countries.dat");
        let loaded = Catalog::load_from_file(&path).unwrap();
        let builtin = Catalog::builtin();

        assert_eq!(loaded.countries(), builtin.countries());
    }
}
