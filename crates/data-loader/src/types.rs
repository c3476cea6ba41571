//! Core domain types for the country catalog.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Factor` and the static `FACTORS` table describing every numeric attribute
//! - `Country`, one immutable catalog record
//! - `CommunitySize`, the informational expat community category

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataLoadError;

// =============================================================================
// Factors
// =============================================================================

/// A numeric country attribute that can be weighted or used as a requirement.
///
/// The declaration order is the canonical factor order: breakdowns iterate
/// and explanations render in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    CostOfLiving,
    QualityOfLife,
    Safety,
    Healthcare,
    Climate,
    JobMarket,
    EnglishProficiency,
    VisaEase,
    TaxFriendliness,
    InternetSpeed,
}

/// Static description of a factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorDef {
    pub factor: Factor,
    /// Canonical name used in preference maps and catalog files
    pub key: &'static str,
    /// Shorter names accepted in place of `key`
    pub aliases: &'static [&'static str],
    pub display_name: &'static str,
    /// When false the value is inverted (`100 - value`) before weighting
    pub higher_is_better: bool,
    /// Weight used when a preference spec does not mention the factor.
    /// `None` means the factor is only scored when named explicitly.
    pub default_weight: Option<f64>,
    pub unit: &'static str,
}

impl FactorDef {
    /// Map a raw attribute value onto the "higher is better" scale.
    pub fn normalize(&self, raw: f64) -> f64 {
        if self.higher_is_better {
            raw
        } else {
            100.0 - raw
        }
    }
}

/// The factor table, indexed by `Factor as usize`.
///
/// Adding an inverted factor is a data change here: set `higher_is_better`
/// to false.
pub static FACTORS: [FactorDef; 10] = [
    FactorDef {
        factor: Factor::CostOfLiving,
        key: "cost_of_living_index",
        aliases: &["cost_of_living", "cost"],
        display_name: "Cost of Living (inverted)",
        higher_is_better: false,
        default_weight: Some(0.15),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::QualityOfLife,
        key: "quality_of_life_index",
        aliases: &["quality_of_life", "qol"],
        display_name: "Quality of Life",
        higher_is_better: true,
        default_weight: Some(0.20),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::Safety,
        key: "safety_index",
        aliases: &["safety"],
        display_name: "Safety",
        higher_is_better: true,
        default_weight: Some(0.15),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::Healthcare,
        key: "healthcare_index",
        aliases: &["healthcare"],
        display_name: "Healthcare",
        higher_is_better: true,
        default_weight: Some(0.10),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::Climate,
        key: "climate_score",
        aliases: &["climate"],
        display_name: "Climate",
        higher_is_better: true,
        default_weight: Some(0.10),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::JobMarket,
        key: "job_market_score",
        aliases: &["job_market", "jobs"],
        display_name: "Job Market",
        higher_is_better: true,
        default_weight: Some(0.10),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::EnglishProficiency,
        key: "english_proficiency",
        aliases: &["english"],
        display_name: "English Proficiency",
        higher_is_better: true,
        default_weight: Some(0.05),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::VisaEase,
        key: "visa_ease",
        aliases: &["visa"],
        display_name: "Visa Accessibility",
        higher_is_better: true,
        default_weight: Some(0.10),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::TaxFriendliness,
        key: "tax_friendliness",
        aliases: &["tax"],
        display_name: "Tax Friendliness",
        higher_is_better: true,
        default_weight: Some(0.05),
        unit: "/100",
    },
    FactorDef {
        factor: Factor::InternetSpeed,
        key: "internet_speed",
        aliases: &["internet", "mbps"],
        display_name: "Internet Speed",
        higher_is_better: true,
        default_weight: None,
        unit: " Mbps",
    },
];

impl Factor {
    /// All factors in canonical order
    pub fn all() -> impl Iterator<Item = Factor> {
        FACTORS.iter().map(|def| def.factor)
    }

    /// Look up this factor's entry in the factor table
    pub fn def(self) -> &'static FactorDef {
        &FACTORS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn display_name(self) -> &'static str {
        self.def().display_name
    }

    /// Resolve a factor name (canonical key or alias, ASCII case-insensitive).
    ///
    /// Returns `None` for names that match no factor.
    pub fn from_key(name: &str) -> Option<Factor> {
        let name = name.trim();
        FACTORS
            .iter()
            .find(|def| {
                def.key.eq_ignore_ascii_case(name)
                    || def.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
            })
            .map(|def| def.factor)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Country
// =============================================================================

/// Size of a country's expat community. Informational only, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunitySize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for CommunitySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommunitySize::Small => "Small",
            CommunitySize::Medium => "Medium",
            CommunitySize::Large => "Large",
        };
        f.write_str(label)
    }
}

impl FromStr for CommunitySize {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(CommunitySize::Small),
            "medium" => Ok(CommunitySize::Medium),
            "large" => Ok(CommunitySize::Large),
            _ => Err(DataLoadError::InvalidValue {
                field: "expat_community_size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// One country record.
///
/// Index fields are on a 0-100 scale; `cost_of_living_index` is lower-is-better.
/// `internet_speed` is the raw average in Mbps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub cost_of_living_index: f64,
    pub quality_of_life_index: f64,
    pub safety_index: f64,
    pub healthcare_index: f64,
    pub climate_score: f64,
    pub job_market_score: f64,
    pub english_proficiency: f64,
    pub visa_ease: f64,
    pub tax_friendliness: f64,
    pub internet_speed: f64,
    pub expat_community_size: CommunitySize,
}

impl Country {
    /// Creates a country with every numeric attribute set to zero.
    ///
    /// Combine with [`Country::with_value`] to fill in attributes.
    pub fn new(name: impl Into<String>, expat_community_size: CommunitySize) -> Self {
        Self {
            name: name.into(),
            cost_of_living_index: 0.0,
            quality_of_life_index: 0.0,
            safety_index: 0.0,
            healthcare_index: 0.0,
            climate_score: 0.0,
            job_market_score: 0.0,
            english_proficiency: 0.0,
            visa_ease: 0.0,
            tax_friendliness: 0.0,
            internet_speed: 0.0,
            expat_community_size,
        }
    }

    /// Builder-style setter for a single factor
    pub fn with_value(mut self, factor: Factor, value: f64) -> Self {
        *self.value_mut(factor) = value;
        self
    }

    /// Raw value of a factor for this country
    pub fn value(&self, factor: Factor) -> f64 {
        match factor {
            Factor::CostOfLiving => self.cost_of_living_index,
            Factor::QualityOfLife => self.quality_of_life_index,
            Factor::Safety => self.safety_index,
            Factor::Healthcare => self.healthcare_index,
            Factor::Climate => self.climate_score,
            Factor::JobMarket => self.job_market_score,
            Factor::EnglishProficiency => self.english_proficiency,
            Factor::VisaEase => self.visa_ease,
            Factor::TaxFriendliness => self.tax_friendliness,
            Factor::InternetSpeed => self.internet_speed,
        }
    }

    /// Raw value looked up by factor name; `None` when the name matches no factor
    pub fn value_by_key(&self, key: &str) -> Option<f64> {
        Factor::from_key(key).map(|factor| self.value(factor))
    }

    fn value_mut(&mut self, factor: Factor) -> &mut f64 {
        match factor {
            Factor::CostOfLiving => &mut self.cost_of_living_index,
            Factor::QualityOfLife => &mut self.quality_of_life_index,
            Factor::Safety => &mut self.safety_index,
            Factor::Healthcare => &mut self.healthcare_index,
            Factor::Climate => &mut self.climate_score,
            Factor::JobMarket => &mut self.job_market_score,
            Factor::EnglishProficiency => &mut self.english_proficiency,
            Factor::VisaEase => &mut self.visa_ease,
            Factor::TaxFriendliness => &mut self.tax_friendliness,
            Factor::InternetSpeed => &mut self.internet_speed,
        }
    }
}
