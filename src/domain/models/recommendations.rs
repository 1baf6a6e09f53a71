#[cfg(test)]
#[path = "recommendations_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropQuery {
    pub soil_type: String,
    pub climate: String,
    pub water_availability: String,
    pub season: String,
}

impl Default for CropQuery {
    fn default() -> CropQuery {
        return CropQuery {
            soil_type: "loamy".to_string(),
            climate: "subtropical".to_string(),
            water_availability: "medium".to_string(),
            season: "kharif".to_string(),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub recommended_crops: Vec<String>,
    pub primary_choice: String,
    pub reasoning: String,
    pub additional_tips: String,
}

impl CropRecommendation {
    /// Every recommended crop except the primary choice.
    pub fn alternatives(&self) -> Vec<String> {
        return self
            .recommended_crops
            .iter()
            .filter(|crop| return **crop != self.primary_choice)
            .cloned()
            .collect();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerQuery {
    pub crop: String,
    pub soil_type: String,
    pub growth_stage: String,
}

impl FertilizerQuery {
    pub fn validate(&self) -> Result<()> {
        if self.crop.trim().is_empty()
            || self.soil_type.trim().is_empty()
            || self.growth_stage.trim().is_empty()
        {
            bail!("Please fill all fields to get recommendation.");
        }

        return Ok(());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub application_method: String,
    pub precautions: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubsidyQuery {
    pub crop: String,
    pub category: String,
    pub land_size: f64,
}

impl SubsidyQuery {
    pub fn validate(&self) -> Result<()> {
        if self.crop.trim().is_empty() || self.category.trim().is_empty() {
            bail!("Please fill all details");
        }
        if !self.land_size.is_finite() || self.land_size < 0.0 {
            bail!("Land size must be a positive number of acres");
        }

        return Ok(());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsidyResult {
    pub subsidies: Vec<String>,
    pub total_schemes: usize,
}
