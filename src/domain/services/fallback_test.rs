use rand::rngs::StdRng;
use rand::SeedableRng;

use super::FallbackGenerator;
use crate::domain::models::AdviceRequest;
use crate::domain::models::Disease;
use crate::domain::models::Evidence;
use crate::domain::models::Language;
use crate::domain::models::Symptom;
use crate::domain::models::Treatment;
use crate::domain::services::classifier::IntentClassifier;

#[test]
fn it_answers_chat_with_the_classifier() {
    let req = AdviceRequest::new("rain forecast", Language::Hindi);
    let res = FallbackGenerator::chat(&req);

    assert_eq!(res, IntentClassifier::respond("rain forecast", Language::Hindi));
    assert_eq!(res.context, "weather_advice");
}

#[test]
fn it_simulates_image_detection() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let report = FallbackGenerator::image(&mut rng);

        assert!(report.confidence >= 85.0 && report.confidence <= 95.0);
        assert!(((report.confidence * 10.0).round() - report.confidence * 10.0).abs() < 1e-9);
        assert_eq!(
            report.evidence,
            Evidence::Image {
                processing_time: "1.2s".to_string()
            }
        );
        assert_eq!(report.treatment, report.disease.treatment());
    }
}

#[test]
fn it_matches_leaf_blight_symptoms() {
    let report = FallbackGenerator::symptoms(&[
        Symptom::BrownSpots,
        Symptom::Yellowing,
        Symptom::NormalGrowth,
    ]);

    assert_eq!(report.disease, Disease::LeafBlight);
    assert_eq!(report.confidence, 90.0);
    assert_eq!(report.evidence, Evidence::Symptoms { matched: 2 });
}

#[test]
fn it_matches_a_single_symptom() {
    let report = FallbackGenerator::symptoms(&[Symptom::OrangeSpots, Symptom::Normal]);

    assert_eq!(report.disease, Disease::RustDisease);
    assert_eq!(report.confidence, 75.0);
}

#[test]
fn it_keeps_the_earlier_pattern_on_ties() {
    let report = FallbackGenerator::symptoms(&[Symptom::WhitePowder, Symptom::LeafDrop]);

    assert_eq!(report.disease, Disease::PowderyMildew);
    assert_eq!(report.evidence, Evidence::Symptoms { matched: 1 });
}

#[test]
fn it_reports_healthy_without_matches() {
    let report = FallbackGenerator::symptoms(&[
        Symptom::NoSpots,
        Symptom::Normal,
        Symptom::HealthyGrowth,
    ]);

    assert_eq!(report.disease, Disease::Healthy);
    assert_eq!(report.confidence, 75.0);
    assert!(matches!(report.treatment, Treatment::Maintenance { .. }));
}
