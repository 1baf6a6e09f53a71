#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

use strum::IntoEnumIterator;

use super::responses;
use crate::domain::models::AdviceResponse;
use crate::domain::models::IntentCategory;
use crate::domain::models::Language;

/// Number of category keywords found in the already lowercased text.
fn score(category: IntentCategory, text: &str) -> usize {
    return category
        .keywords()
        .iter()
        .filter(|keyword| return text.contains(*keyword))
        .count();
}

pub struct IntentClassifier {}

impl IntentClassifier {
    /// Picks the category with the strictly highest keyword count. Ties and
    /// inputs without any keyword resolve to general.
    pub fn classify(text: &str) -> IntentCategory {
        let text = text.to_lowercase();
        let mut best = IntentCategory::General;
        let mut best_score = 0;
        let mut tied = false;

        for category in IntentCategory::iter() {
            let count = score(category, &text);
            if count == 0 {
                continue;
            }

            if count > best_score {
                best = category;
                best_score = count;
                tied = false;
            } else if count == best_score {
                tied = true;
            }
        }

        if tied {
            return IntentCategory::General;
        }

        return best;
    }

    pub fn respond(text: &str, language: Language) -> AdviceResponse {
        let category = IntentClassifier::classify(text);
        tracing::debug!(%category, %language, "Classified query");

        return AdviceResponse::from_category(
            category,
            responses::category_text(category, language),
        );
    }
}
