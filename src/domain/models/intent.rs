use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;

/// Topic buckets free text is routed into when no remote answer is
/// available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IntentCategory {
    Disease,
    Fertilizer,
    Weather,
    Crop,
    General,
}

impl IntentCategory {
    /// Lowercase keywords matched as substrings of the lowercased input.
    /// No keyword is a substring of another category's keyword.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            IntentCategory::Disease => {
                return &[
                    "disease", "sick", "spot", "yellow", "brown", "wilt", "blight", "mildew",
                    "rust", "fungus", "pest", "infect",
                ];
            }
            IntentCategory::Fertilizer => {
                return &[
                    "fertilizer",
                    "fertiliser",
                    "nutrient",
                    "growth",
                    "npk",
                    "urea",
                    "compost",
                    "manure",
                    "potash",
                ];
            }
            IntentCategory::Weather => {
                return &[
                    "weather",
                    "rain",
                    "temperature",
                    "forecast",
                    "humid",
                    "wind",
                    "monsoon",
                    "drought",
                ];
            }
            IntentCategory::Crop => {
                return &[
                    "crop", "seed", "sow", "harvest", "season", "kharif", "rabi", "cultivat",
                    "yield",
                ];
            }
            IntentCategory::General => return &[],
        }
    }

    /// Context tag attached to advice for this category.
    pub fn context(&self) -> &'static str {
        match self {
            IntentCategory::Disease => return "disease_detection",
            IntentCategory::Fertilizer => return "fertilizer_advice",
            IntentCategory::Weather => return "weather_advice",
            IntentCategory::Crop => return "crop_advice",
            IntentCategory::General => return "general_farming",
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            IntentCategory::Disease => return 0.9,
            IntentCategory::Fertilizer => return 0.85,
            IntentCategory::Weather => return 0.8,
            IntentCategory::Crop => return 0.75,
            IntentCategory::General => return 0.7,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        let labels: &[&str] = match self {
            IntentCategory::Disease => &[
                "Upload leaf image",
                "Take symptom quiz",
                "Get treatment advice",
            ],
            IntentCategory::Fertilizer => &[
                "NPK recommendations",
                "Organic options",
                "Application timing",
            ],
            IntentCategory::Weather => &[
                "Current conditions",
                "Farming forecast",
                "Seasonal advice",
            ],
            IntentCategory::Crop => &[
                "Crop recommendation",
                "Seasonal crops",
                "Soil suitability",
            ],
            IntentCategory::General => &["Disease detection", "Crop advice", "Weather updates"],
        };

        return labels.iter().map(|label| return label.to_string()).collect();
    }
}
