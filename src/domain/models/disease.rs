#[cfg(test)]
#[path = "disease_test.rs"]
mod tests;

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Disease {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Leaf_Blight")]
    LeafBlight,
    #[serde(rename = "Powdery_Mildew")]
    PowderyMildew,
    #[serde(rename = "Rust_Disease")]
    RustDisease,
}

impl Disease {
    pub fn all() -> Vec<Disease> {
        return Disease::iter().collect();
    }

    pub fn is_healthy(&self) -> bool {
        return *self == Disease::Healthy;
    }

    pub fn treatment(&self) -> Treatment {
        match self {
            Disease::LeafBlight => {
                return Treatment::Cure {
                    chemical: "Copper oxychloride 50% WP @ 2g/L".to_string(),
                    organic: "Neem oil spray (5ml/L) + Trichoderma".to_string(),
                    fertilizer: "Balanced NPK 19:19:19 @ 2g/L foliar".to_string(),
                    prevention: "Improve drainage, avoid overhead irrigation".to_string(),
                };
            }
            Disease::PowderyMildew => {
                return Treatment::Cure {
                    chemical: "Wettable sulfur 80% WP @ 2g/L".to_string(),
                    organic: "Baking soda solution (5g/L)".to_string(),
                    fertilizer: "Reduce nitrogen, increase potassium".to_string(),
                    prevention: "Ensure good air circulation".to_string(),
                };
            }
            Disease::RustDisease => {
                return Treatment::Cure {
                    chemical: "Propiconazole 25% EC @ 1ml/L".to_string(),
                    organic: "Garlic-chili extract spray + Copper sulfate solution".to_string(),
                    fertilizer: "Phosphorus-rich fertilizer (DAP @ 2g/L)".to_string(),
                    prevention: "Remove infected plant debris immediately".to_string(),
                };
            }
            Disease::Healthy => {
                return Treatment::Maintenance {
                    maintenance: "Continue current care practices".to_string(),
                    fertilizer: "Regular balanced NPK".to_string(),
                    prevention: "Weekly health monitoring".to_string(),
                };
            }
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Disease::Healthy => return write!(f, "Healthy"),
            Disease::LeafBlight => return write!(f, "Leaf Blight"),
            Disease::PowderyMildew => return write!(f, "Powdery Mildew"),
            Disease::RustDisease => return write!(f, "Rust Disease"),
        }
    }
}

/// Plan returned alongside a detection. Diseased plants get a cure plan,
/// healthy ones a maintenance plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Treatment {
    Cure {
        chemical: String,
        organic: String,
        fertilizer: String,
        prevention: String,
    },
    Maintenance {
        maintenance: String,
        fertilizer: String,
        prevention: String,
    },
}

/// Answers offered by the symptom quiz. Wire names are snake_case.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumVariantNames,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Symptom {
    BrownSpots,
    WhitePowder,
    OrangeSpots,
    NoSpots,
    Yellowing,
    LeafCurl,
    LeafDrop,
    Normal,
    StuntedGrowth,
    ReducedYield,
    NormalGrowth,
    HealthyGrowth,
}

impl Symptom {
    pub fn parse(text: &str) -> Option<Symptom> {
        let text = text.trim().to_lowercase().replace(['-', ' '], "_");
        return Symptom::iter().find(|symptom| return symptom.to_string() == text);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Evidence {
    /// Detection from a leaf photo.
    Image { processing_time: String },
    /// Detection from quiz answers, with the number of matching symptoms.
    Symptoms { matched: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiseaseReport {
    pub disease: Disease,
    pub confidence: f64,
    pub evidence: Evidence,
    pub treatment: Treatment,
}

/// Leaf photo ready to be sent, encoded as a data URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload {
    pub file_name: String,
    pub data_url: String,
}
