#[cfg(test)]
#[path = "offline_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::AdviceRequest;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::CropQuery;
use crate::domain::models::CropRecommendation;
use crate::domain::models::DiseaseReport;
use crate::domain::models::FertilizerQuery;
use crate::domain::models::FertilizerRecommendation;
use crate::domain::models::Forecast;
use crate::domain::models::ImagePayload;
use crate::domain::models::SubsidyQuery;
use crate::domain::models::SubsidyResult;
use crate::domain::models::Symptom;
use crate::domain::models::WeatherReport;

const OFFLINE_MESSAGE: &str = "The offline backend does not reach the SoilSync API";

/// Never reaches the network, so chat and disease detection are always
/// answered locally.
#[derive(Default)]
pub struct Offline {}

#[async_trait]
impl Backend for Offline {
    fn name(&self) -> BackendName {
        return BackendName::Offline;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn query_chat(&self, _request: &AdviceRequest) -> Result<AdviceResponse> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn detect_image(&self, _image: &ImagePayload) -> Result<DiseaseReport> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn detect_symptoms(&self, _symptoms: &[Symptom]) -> Result<DiseaseReport> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn recommend_crop(&self, _query: &CropQuery) -> Result<CropRecommendation> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn recommend_fertilizer(
        &self,
        _query: &FertilizerQuery,
    ) -> Result<FertilizerRecommendation> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn find_subsidies(&self, _query: &SubsidyQuery) -> Result<SubsidyResult> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn current_weather(&self, _city: &str) -> Result<WeatherReport> {
        bail!(OFFLINE_MESSAGE);
    }

    #[allow(clippy::implicit_return)]
    async fn forecast(&self, _city: &str) -> Result<Forecast> {
        bail!(OFFLINE_MESSAGE);
    }
}
