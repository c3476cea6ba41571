//! Preset preference profiles for common relocation scenarios.

use crate::preferences::PreferenceSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ready-made `PreferenceSpec`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Remote worker: cheap, sunny, fast internet
    DigitalNomad,
    /// Family: safety, healthcare and quality of life first
    Family,
    /// Retiree on a budget: cost, healthcare and climate
    Retiree,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::DigitalNomad, Profile::Family, Profile::Retiree];

    pub fn name(self) -> &'static str {
        match self {
            Profile::DigitalNomad => "Digital Nomad",
            Profile::Family => "Family Relocation",
            Profile::Retiree => "Budget-Conscious Retiree",
        }
    }

    /// Build the preference spec for this profile
    pub fn spec(self) -> PreferenceSpec {
        match self {
            Profile::DigitalNomad => PreferenceSpec::new()
                .with_weight("cost_of_living_index", 0.25)
                .with_weight("quality_of_life_index", 0.15)
                .with_weight("safety_index", 0.15)
                .with_weight("healthcare_index", 0.10)
                .with_weight("climate_score", 0.15)
                .with_weight("job_market_score", 0.02)
                .with_weight("english_proficiency", 0.08)
                .with_weight("visa_ease", 0.10)
                .with_weight("tax_friendliness", 0.00)
                .with_min_requirement("internet_speed", 80.0)
                .with_min_requirement("safety_index", 60.0),
            Profile::Family => PreferenceSpec::new()
                .with_weight("cost_of_living_index", 0.10)
                .with_weight("quality_of_life_index", 0.25)
                .with_weight("safety_index", 0.25)
                .with_weight("healthcare_index", 0.20)
                .with_weight("climate_score", 0.05)
                .with_weight("job_market_score", 0.10)
                .with_weight("english_proficiency", 0.05)
                .with_weight("visa_ease", 0.00)
                .with_weight("tax_friendliness", 0.00)
                .with_min_requirement("safety_index", 75.0)
                .with_min_requirement("healthcare_index", 70.0)
                .with_min_requirement("quality_of_life_index", 70.0),
            Profile::Retiree => PreferenceSpec::new()
                .with_weight("cost_of_living_index", 0.30)
                .with_weight("quality_of_life_index", 0.15)
                .with_weight("safety_index", 0.15)
                .with_weight("healthcare_index", 0.20)
                .with_weight("climate_score", 0.15)
                .with_weight("job_market_score", 0.00)
                .with_weight("english_proficiency", 0.05)
                .with_weight("visa_ease", 0.00)
                .with_weight("tax_friendliness", 0.00)
                .with_min_requirement("healthcare_index", 60.0)
                .with_min_requirement("safety_index", 65.0),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_valid_and_fully_known() {
        for profile in Profile::ALL {
            let spec = profile.spec();
            assert!(spec.validate().is_ok(), "{profile} failed validation");
            assert!(spec.unknown_factors().is_empty(), "{profile} has unknown keys");
        }
    }

    #[test]
    fn test_profile_weights_sum_to_one() {
        for profile in Profile::ALL {
            let sum = profile.spec().effective_weights().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{profile} sums to {sum}");
        }
    }

    #[test]
    fn test_nomad_requires_fast_internet() {
        let spec = Profile::DigitalNomad.spec();
        assert_eq!(spec.min_requirements.get("internet_speed"), Some(&80.0));
    }
}
