//! The built-in reference catalog of twelve countries.
//!
//! Index values are on a 0-100 scale and internet speed is in Mbps.
//! `data/countries.dat` carries the same records in catalog file format.

use crate::types::{CommunitySize, Country};

/// The reference countries, in catalog order
pub fn countries() -> Vec<Country> {
    vec![
        Country {
            name: "Portugal".to_string(),
            cost_of_living_index: 45.0,
            quality_of_life_index: 75.0,
            safety_index: 82.0,
            healthcare_index: 72.0,
            climate_score: 85.0,
            job_market_score: 60.0,
            english_proficiency: 65.0,
            visa_ease: 75.0,
            tax_friendliness: 60.0,
            internet_speed: 95.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Spain".to_string(),
            cost_of_living_index: 50.0,
            quality_of_life_index: 78.0,
            safety_index: 80.0,
            healthcare_index: 78.0,
            climate_score: 88.0,
            job_market_score: 58.0,
            english_proficiency: 60.0,
            visa_ease: 72.0,
            tax_friendliness: 55.0,
            internet_speed: 110.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Thailand".to_string(),
            cost_of_living_index: 30.0,
            quality_of_life_index: 68.0,
            safety_index: 70.0,
            healthcare_index: 65.0,
            climate_score: 75.0,
            job_market_score: 55.0,
            english_proficiency: 50.0,
            visa_ease: 85.0,
            tax_friendliness: 70.0,
            internet_speed: 85.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Germany".to_string(),
            cost_of_living_index: 65.0,
            quality_of_life_index: 85.0,
            safety_index: 85.0,
            healthcare_index: 88.0,
            climate_score: 65.0,
            job_market_score: 82.0,
            english_proficiency: 70.0,
            visa_ease: 60.0,
            tax_friendliness: 45.0,
            internet_speed: 120.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Mexico".to_string(),
            cost_of_living_index: 35.0,
            quality_of_life_index: 65.0,
            safety_index: 55.0,
            healthcare_index: 60.0,
            climate_score: 80.0,
            job_market_score: 60.0,
            english_proficiency: 45.0,
            visa_ease: 90.0,
            tax_friendliness: 65.0,
            internet_speed: 70.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Canada".to_string(),
            cost_of_living_index: 70.0,
            quality_of_life_index: 88.0,
            safety_index: 88.0,
            healthcare_index: 85.0,
            climate_score: 60.0,
            job_market_score: 80.0,
            english_proficiency: 95.0,
            visa_ease: 55.0,
            tax_friendliness: 50.0,
            internet_speed: 130.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Australia".to_string(),
            cost_of_living_index: 75.0,
            quality_of_life_index: 90.0,
            safety_index: 87.0,
            healthcare_index: 87.0,
            climate_score: 85.0,
            job_market_score: 78.0,
            english_proficiency: 100.0,
            visa_ease: 50.0,
            tax_friendliness: 55.0,
            internet_speed: 110.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Estonia".to_string(),
            cost_of_living_index: 48.0,
            quality_of_life_index: 72.0,
            safety_index: 82.0,
            healthcare_index: 70.0,
            climate_score: 55.0,
            job_market_score: 72.0,
            english_proficiency: 75.0,
            visa_ease: 80.0,
            tax_friendliness: 75.0,
            internet_speed: 150.0,
            expat_community_size: CommunitySize::Medium,
        },
        Country {
            name: "New Zealand".to_string(),
            cost_of_living_index: 72.0,
            quality_of_life_index: 87.0,
            safety_index: 90.0,
            healthcare_index: 82.0,
            climate_score: 82.0,
            job_market_score: 70.0,
            english_proficiency: 100.0,
            visa_ease: 52.0,
            tax_friendliness: 58.0,
            internet_speed: 105.0,
            expat_community_size: CommunitySize::Medium,
        },
        Country {
            name: "Costa Rica".to_string(),
            cost_of_living_index: 40.0,
            quality_of_life_index: 70.0,
            safety_index: 68.0,
            healthcare_index: 72.0,
            climate_score: 88.0,
            job_market_score: 58.0,
            english_proficiency: 52.0,
            visa_ease: 88.0,
            tax_friendliness: 68.0,
            internet_speed: 75.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Singapore".to_string(),
            cost_of_living_index: 85.0,
            quality_of_life_index: 92.0,
            safety_index: 95.0,
            healthcare_index: 92.0,
            climate_score: 70.0,
            job_market_score: 88.0,
            english_proficiency: 85.0,
            visa_ease: 65.0,
            tax_friendliness: 80.0,
            internet_speed: 200.0,
            expat_community_size: CommunitySize::Large,
        },
        Country {
            name: "Czech Republic".to_string(),
            cost_of_living_index: 42.0,
            quality_of_life_index: 74.0,
            safety_index: 80.0,
            healthcare_index: 75.0,
            climate_score: 68.0,
            job_market_score: 70.0,
            english_proficiency: 65.0,
            visa_ease: 70.0,
            tax_friendliness: 65.0,
            internet_speed: 115.0,
            expat_community_size: CommunitySize::Medium,
        },
    ]
}
