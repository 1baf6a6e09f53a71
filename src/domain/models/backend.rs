#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::AdviceRequest;
use super::AdviceResponse;
use super::CropQuery;
use super::CropRecommendation;
use super::DiseaseReport;
use super::FertilizerQuery;
use super::FertilizerRecommendation;
use super::Forecast;
use super::ImagePayload;
use super::SubsidyQuery;
use super::SubsidyResult;
use super::Symptom;
use super::WeatherReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    SoilSync,
    Offline,
}

impl BackendName {
    pub fn parse(text: String) -> Option<BackendName> {
        return BackendName::iter().find(|e| return e.to_string() == text);
    }
}

/// The advice API consumed by every feature. Any `Err` is either a
/// transport failure or a reply whose status is not `success`; callers
/// decide whether a local fallback exists.
#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Used at startup to verify the API is reachable.
    async fn health_check(&self) -> Result<()>;

    async fn query_chat(&self, request: &AdviceRequest) -> Result<AdviceResponse>;

    async fn detect_image(&self, image: &ImagePayload) -> Result<DiseaseReport>;

    async fn detect_symptoms(&self, symptoms: &[Symptom]) -> Result<DiseaseReport>;

    async fn recommend_crop(&self, query: &CropQuery) -> Result<CropRecommendation>;

    async fn recommend_fertilizer(
        &self,
        query: &FertilizerQuery,
    ) -> Result<FertilizerRecommendation>;

    async fn find_subsidies(&self, query: &SubsidyQuery) -> Result<SubsidyResult>;

    async fn current_weather(&self, city: &str) -> Result<WeatherReport>;

    async fn forecast(&self, city: &str) -> Result<Forecast>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

/// Parses the configured backend name, listing valid names on failure.
pub fn parse_backend_name(text: &str) -> Result<BackendName> {
    if let Some(name) = BackendName::parse(text.to_string()) {
        return Ok(name);
    }

    let valid = BackendName::iter()
        .map(|e| return e.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    bail!("Unknown backend {text}, expected one of: {valid}");
}
