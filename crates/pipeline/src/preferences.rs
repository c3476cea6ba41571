//! User preferences: weights, minimum requirements and deal-breakers.
//!
//! A `PreferenceSpec` is an open mapping keyed by factor *name*. Names are
//! resolved against the factor table only when the preferences are used, so they
//! can be deserialized from user input without rejecting unknown names.
//!
//! Unknown names are not an error:
//! - an unknown weight key contributes nothing
//! - an unknown requirement key excludes every country

use data_loader::{Factor, FACTORS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Problems that make a preference spec unusable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreferenceError {
    #[error("Weight for {factor} must be a non-negative finite number, got {weight}")]
    InvalidWeight { factor: String, weight: f64 },

    #[error("Minimum requirement for {factor} must be a finite number, got {threshold}")]
    InvalidThreshold { factor: String, threshold: f64 },

    /// Two keys (e.g. an alias and the canonical key) name the same factor
    #[error("Keys '{first}' and '{second}' both refer to {factor}")]
    ConflictingKeys {
        factor: Factor,
        first: String,
        second: String,
    },
}

/// What the user cares about and what they refuse to compromise on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSpec {
    /// Factor name -> relative importance. Missing factors fall back to the
    /// default weight from the factor table.
    pub weights: BTreeMap<String, f64>,
    /// Factor name -> minimum acceptable raw value
    pub min_requirements: BTreeMap<String, f64>,
    /// Country names that are excluded outright (case-insensitive)
    pub deal_breakers: Vec<String>,
}

impl PreferenceSpec {
    /// An empty spec: default weights, no requirements, no deal-breakers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, factor: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(factor.into(), weight);
        self
    }

    pub fn with_min_requirement(mut self, factor: impl Into<String>, threshold: f64) -> Self {
        self.min_requirements.insert(factor.into(), threshold);
        self
    }

    pub fn with_deal_breaker(mut self, country: impl Into<String>) -> Self {
        self.deal_breakers.push(country.into());
        self
    }

    /// Check weights and thresholds are usable numbers.
    ///
    /// Unknown factor names pass validation; see [`PreferenceSpec::unknown_factors`].
    pub fn validate(&self) -> Result<(), PreferenceError> {
        for (factor, &weight) in &self.weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PreferenceError::InvalidWeight {
                    factor: factor.clone(),
                    weight,
                });
            }
        }

        for (factor, &threshold) in &self.min_requirements {
            if !threshold.is_finite() {
                return Err(PreferenceError::InvalidThreshold {
                    factor: factor.clone(),
                    threshold,
                });
            }
        }

        check_conflicts(self.weights.keys())?;
        check_conflicts(self.min_requirements.keys())?;
        Ok(())
    }

    /// Default weights overridden by the explicit ones.
    ///
    /// Pure: `self` is left untouched. Unknown keys are skipped.
    pub fn effective_weights(&self) -> EffectiveWeights {
        let mut merged = EffectiveWeights::defaults();
        for (key, &weight) in &self.weights {
            match Factor::from_key(key) {
                Some(factor) => {
                    merged.0.insert(factor, weight);
                }
                None => tracing::debug!("Ignoring weight for unknown factor '{}'", key),
            }
        }
        merged
    }

    /// Minimum requirements with names resolved.
    ///
    /// Unknown names resolve to `None`; such a requirement can never be met.
    pub fn resolved_requirements(&self) -> Vec<(Option<Factor>, f64)> {
        self.min_requirements
            .iter()
            .map(|(key, &threshold)| (Factor::from_key(key), threshold))
            .collect()
    }

    /// Names in `weights` or `min_requirements` that match no factor
    pub fn unknown_factors(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .weights
            .keys()
            .chain(self.min_requirements.keys())
            .map(String::as_str)
            .filter(|key| Factor::from_key(key).is_none())
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    /// True if `name` is one of the deal-breakers
    pub fn is_deal_breaker(&self, name: &str) -> bool {
        let name = name.trim();
        self.deal_breakers
            .iter()
            .any(|excluded| excluded.trim().eq_ignore_ascii_case(name))
    }
}

fn check_conflicts<'a>(keys: impl Iterator<Item = &'a String>) -> Result<(), PreferenceError> {
    let mut seen: BTreeMap<Factor, &String> = BTreeMap::new();
    for key in keys {
        let Some(factor) = Factor::from_key(key) else {
            continue;
        };
        if let Some(first) = seen.insert(factor, key) {
            return Err(PreferenceError::ConflictingKeys {
                factor,
                first: first.clone(),
                second: key.clone(),
            });
        }
    }
    Ok(())
}

/// Fully resolved weights, one entry per scored factor, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveWeights(BTreeMap<Factor, f64>);

impl EffectiveWeights {
    /// Weights from the factor table for every factor that has a default
    pub fn defaults() -> Self {
        Self(
            FACTORS
                .iter()
                .filter_map(|def| def.default_weight.map(|weight| (def.factor, weight)))
                .collect(),
        )
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        self.0.get(&factor).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        self.0.iter().map(|(&factor, &weight)| (factor, weight))
    }

    /// Sum of all weights; not necessarily 1.0
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
