//! Weighted scoring of countries.
//!
//! Each weighted factor contributes `weight * normalized_value`, where the
//! normalized value is the raw value for higher-is-better factors and
//! `100 - value` for lower-is-better ones. The total is the plain sum of
//! contributions taken in canonical factor order.

use crate::preferences::EffectiveWeights;
use data_loader::{Country, Factor};
use serde::Serialize;
use std::collections::BTreeMap;

/// How a single factor contributed to a country's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScore {
    pub raw_value: f64,
    pub weight: f64,
    /// Raw value after polarity is applied
    pub normalized: f64,
    pub contribution: f64,
}

/// Per-factor detail of a country's total score.
///
/// Factors are keyed by `Factor`, so iteration is always in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: BTreeMap<Factor, FactorScore>,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, factor: Factor) -> Option<&FactorScore> {
        self.factors.get(&factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, &FactorScore)> + '_ {
        self.factors.iter().map(|(&factor, score)| (factor, score))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Scores countries against a fixed set of effective weights.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: EffectiveWeights,
}

impl Scorer {
    pub fn new(weights: EffectiveWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EffectiveWeights {
        &self.weights
    }

    /// Score every country, returning breakdowns in input order
    pub fn score_all(&self, countries: &[&Country]) -> Vec<ScoreBreakdown> {
        countries
            .iter()
            .map(|country| self.score(country))
            .collect()
    }

    /// Score a single country
    pub fn score(&self, country: &Country) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        for (factor, weight) in self.weights.iter() {
            let raw_value = country.value(factor);
            let normalized = factor.def().normalize(raw_value);
            let contribution = weight * normalized;

            breakdown.total += contribution;
            breakdown.factors.insert(
                factor,
                FactorScore {
                    raw_value,
                    weight,
                    normalized,
                    contribution,
                },
            );
        }

        breakdown
    }
}
