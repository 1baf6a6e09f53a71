#[cfg(test)]
#[path = "features_test.rs"]
mod tests;

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD as b64;
use base64::Engine;
use tokio::fs;

use super::advisory;
use super::fallback::FallbackGenerator;
use crate::domain::models::BackendBox;
use crate::domain::models::CropQuery;
use crate::domain::models::CropRecommendation;
use crate::domain::models::DiseaseReport;
use crate::domain::models::FertilizerQuery;
use crate::domain::models::FertilizerRecommendation;
use crate::domain::models::ImagePayload;
use crate::domain::models::Language;
use crate::domain::models::SubsidyQuery;
use crate::domain::models::SubsidyResult;
use crate::domain::models::Symptom;
use crate::domain::models::WeatherOverview;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => return Some("image/png"),
        "jpg" | "jpeg" => return Some("image/jpeg"),
        "gif" => return Some("image/gif"),
        "webp" => return Some("image/webp"),
        "bmp" => return Some("image/bmp"),
        _ => return None,
    }
}

/// Validates a leaf photo and encodes it as a data URL. Nothing is sent
/// when validation fails.
pub async fn load_image(path: &Path) -> Result<ImagePayload> {
    if !path.is_file() {
        bail!("Image file {} does not exist", path.display());
    }

    let mime = match image_mime(path) {
        Some(mime) => mime,
        None => bail!("Please upload a valid image file (png, jpg, jpeg, gif, webp, bmp)"),
    };

    let size = fs::metadata(path).await?.len();
    if size > MAX_IMAGE_BYTES {
        bail!("Image size should be less than 5MB");
    }

    let bytes = fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|e| return e.to_string_lossy().to_string())
        .unwrap_or_default();

    return Ok(ImagePayload {
        file_name,
        data_url: format!("data:{mime};base64,{}", b64.encode(bytes)),
    });
}

/// Entry points for the one-shot features. Disease detection falls back to
/// local synthesis; the recommendation and weather flows surface errors.
pub struct FeaturesService {}

impl FeaturesService {
    pub async fn detect_image(backend: &BackendBox, path: &Path) -> Result<DiseaseReport> {
        let image = load_image(path).await?;

        match backend.detect_image(&image).await {
            Ok(report) => return Ok(report),
            Err(err) => {
                tracing::warn!(
                    error = ?err,
                    file_name = %image.file_name,
                    "Image detection failed, using local fallback"
                );
                return Ok(FallbackGenerator::image(&mut rand::thread_rng()));
            }
        }
    }

    pub async fn detect_symptoms(
        backend: &BackendBox,
        symptoms: &[Symptom],
    ) -> Result<DiseaseReport> {
        if symptoms.is_empty() {
            bail!("Please select at least one symptom");
        }

        match backend.detect_symptoms(symptoms).await {
            Ok(report) => return Ok(report),
            Err(err) => {
                tracing::warn!(error = ?err, "Symptom analysis failed, using local fallback");
                return Ok(FallbackGenerator::symptoms(symptoms));
            }
        }
    }

    pub async fn recommend_crop(
        backend: &BackendBox,
        query: &CropQuery,
    ) -> Result<CropRecommendation> {
        return backend.recommend_crop(query).await;
    }

    pub async fn recommend_fertilizer(
        backend: &BackendBox,
        query: &FertilizerQuery,
    ) -> Result<FertilizerRecommendation> {
        query.validate()?;
        return backend.recommend_fertilizer(query).await;
    }

    pub async fn find_subsidies(
        backend: &BackendBox,
        query: &SubsidyQuery,
    ) -> Result<SubsidyResult> {
        query.validate()?;
        return backend.find_subsidies(query).await;
    }

    /// Fetches current conditions and the forecast together. Both must
    /// succeed.
    pub async fn weather(
        backend: &BackendBox,
        city: &str,
        language: Language,
    ) -> Result<WeatherOverview> {
        let city = city.trim();
        if city.is_empty() {
            bail!("Please enter a city name");
        }

        let (report, forecast) =
            tokio::try_join!(backend.current_weather(city), backend.forecast(city))?;
        let advice = advisory::farming_advice(&report, language);

        return Ok(WeatherOverview {
            report,
            forecast,
            advice,
        });
    }
}
