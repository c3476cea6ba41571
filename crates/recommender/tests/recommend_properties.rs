//! Behavioural properties of `recommend` over the built-in catalog.

use data_loader::{Catalog, Country, Factor};
use pipeline::filters::MinimumRequirementsFilter;
use pipeline::{PreferenceSpec, Profile};
use recommender::{recommend, RecommendError, Recommender};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A spread of specs: presets, defaults, skewed weights, hard thresholds
fn specs() -> Vec<PreferenceSpec> {
    let mut specs: Vec<PreferenceSpec> = Profile::ALL.iter().map(|p| p.spec()).collect();
    specs.push(PreferenceSpec::new());
    specs.push(PreferenceSpec::new().with_weight("cost", 1.0));
    specs.push(
        PreferenceSpec::new()
            .with_weight("internet_speed", 0.2)
            .with_weight("english", 0.4)
            .with_min_requirement("visa_ease", 60.0),
    );
    specs.push(
        PreferenceSpec::new()
            .with_min_requirement("safety", 85.0)
            .with_min_requirement("climate", 80.0),
    );
    specs.push(
        PreferenceSpec::new()
            .with_weight("tax", 3.0)
            .with_deal_breaker("Singapore")
            .with_deal_breaker("estonia"),
    );
    specs
}

fn passing_count(catalog: &Catalog, spec: &PreferenceSpec) -> usize {
    let requirements = spec.resolved_requirements();
    catalog
        .iter()
        .filter(|c| !spec.is_deal_breaker(&c.name))
        .filter(|c| MinimumRequirementsFilter::passes(c, &requirements))
        .count()
}

fn names<'a>(ranked: &[recommender::Recommendation<'a>]) -> Vec<&'a str> {
    ranked.iter().map(|r| r.country.name.as_str()).collect()
}

#[test]
fn every_result_meets_all_thresholds() {
    init_tracing();
    let recommender = Recommender::builtin();

    for spec in specs() {
        for rec in recommender.recommend(&spec, 12).unwrap() {
            for (key, &threshold) in &spec.min_requirements {
                let value = rec.country.value_by_key(key).unwrap();
                assert!(
                    value >= threshold,
                    "{} has {key}={value} below {threshold}",
                    rec.country.name
                );
            }
            assert!(!spec.is_deal_breaker(&rec.country.name));
        }
    }
}

#[test]
fn scores_are_non_increasing() {
    let recommender = Recommender::builtin();

    for spec in specs() {
        let ranked = recommender.recommend(&spec, 12).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let recommender = Recommender::builtin();

    for spec in specs() {
        let first = recommender.recommend(&spec, 12).unwrap();
        let second = recommender.recommend(&spec, 12).unwrap();

        assert_eq!(names(&first), names(&second));
        let first_scores: Vec<f64> = first.iter().map(|r| r.score).collect();
        let second_scores: Vec<f64> = second.iter().map(|r| r.score).collect();
        assert_eq!(first_scores, second_scores);
    }
}

#[test]
fn result_length_is_min_of_top_n_and_passing() {
    let recommender = Recommender::builtin();

    for spec in specs() {
        let passing = passing_count(recommender.catalog(), &spec);
        for top_n in 1..=15 {
            let ranked = recommender.recommend(&spec, top_n).unwrap();
            assert_eq!(ranked.len(), top_n.min(passing));
        }
    }
}

#[test]
fn no_requirements_excludes_nothing() {
    let recommender = Recommender::builtin();
    let ranked = recommender
        .recommend(&PreferenceSpec::new().with_weight("climate", 0.9), 100)
        .unwrap();
    assert_eq!(ranked.len(), 12);
}

#[test]
fn top_n_zero_is_rejected() {
    let recommender = Recommender::builtin();
    for spec in specs() {
        assert!(matches!(
            recommender.recommend(&spec, 0),
            Err(RecommendError::InvalidTopN(0))
        ));
    }
}

#[test]
fn unknown_requirement_yields_empty_result() {
    init_tracing();
    let recommender = Recommender::builtin();
    let spec = PreferenceSpec::new().with_min_requirement("nightlife", 0.0);

    let ranked = recommender.recommend(&spec, 5).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn cheapest_wins_when_only_cost_matters() {
    let catalog = Catalog::builtin();
    let spec = PreferenceSpec::new()
        .with_weight("cost", 1.0)
        .with_weight("quality_of_life", 0.0)
        .with_weight("safety", 0.0)
        .with_weight("healthcare", 0.0)
        .with_weight("climate", 0.0)
        .with_weight("job_market", 0.0)
        .with_weight("english", 0.0)
        .with_weight("visa", 0.0)
        .with_weight("tax", 0.0);

    let ranked = recommend(catalog.countries(), &spec, 3).unwrap();
    assert_eq!(names(&ranked), vec!["Thailand", "Mexico", "Costa Rica"]);
    assert!((ranked[0].score - 70.0).abs() < 1e-9);
}

#[test]
fn nomad_profile_ranking() {
    let recommender = Recommender::builtin();
    let ranked = recommender.recommend(&Profile::DigitalNomad.spec(), 3).unwrap();

    // Mexico (55 safety) and Costa Rica (75 Mbps) are filtered out
    let all = recommender
        .recommend(&Profile::DigitalNomad.spec(), 12)
        .unwrap();
    assert_eq!(all.len(), 10);
    assert!(names(&all).iter().all(|n| *n != "Mexico" && *n != "Costa Rica"));

    assert_eq!(ranked.len(), 3);
    assert_eq!(names(&ranked), names(&all[..3]));
}

#[test]
fn alternate_catalog_can_be_supplied() {
    let countries = vec![
        Country::new("Left", data_loader::CommunitySize::Small).with_value(Factor::Climate, 99.0),
        Country::new("Right", data_loader::CommunitySize::Small).with_value(Factor::Climate, 10.0),
    ];
    let ranked = recommend(&countries, &PreferenceSpec::new(), 5).unwrap();
    assert_eq!(names(&ranked), vec!["Left", "Right"]);
}

#[test]
fn recommendations_serialize_to_json() {
    let recommender = Recommender::builtin();
    let ranked = recommender.recommend(&Profile::Retiree.spec(), 2).unwrap();

    let json = serde_json::to_value(&ranked).unwrap();
    let first = &json[0];
    assert_eq!(first["country"]["name"], ranked[0].country.name.as_str());
    assert!(first["breakdown"]["factors"]["cost_of_living"]["contribution"].is_number());
}
