#[cfg(test)]
#[path = "soilsync_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AdviceRequest;
use crate::domain::models::AdviceResponse;
use crate::domain::models::AdviceStatus;
use crate::domain::models::Backend;
use crate::domain::models::BackendName;
use crate::domain::models::CropQuery;
use crate::domain::models::CropRecommendation;
use crate::domain::models::Disease;
use crate::domain::models::DiseaseReport;
use crate::domain::models::Evidence;
use crate::domain::models::FertilizerQuery;
use crate::domain::models::FertilizerRecommendation;
use crate::domain::models::Forecast;
use crate::domain::models::ImagePayload;
use crate::domain::models::Role;
use crate::domain::models::SubsidyQuery;
use crate::domain::models::SubsidyResult;
use crate::domain::models::Symptom;
use crate::domain::models::Treatment;
use crate::domain::models::WeatherReport;
use crate::domain::services::classifier::IntentClassifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContextTurn {
    role: Role,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    query: String,
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    context: Vec<ContextTurn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatReply {
    text: String,
    confidence: Option<f64>,
    #[serde(default)]
    suggestions: Vec<String>,
    context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatResponse {
    response: ChatReply,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ImageRequest {
    image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Prediction {
    disease: Disease,
    confidence: f64,
    #[serde(default)]
    processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ImageResponse {
    prediction: Prediction,
    treatment: Treatment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SymptomsRequest {
    symptoms: Vec<Symptom>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Analysis {
    disease: Disease,
    confidence: f64,
    #[serde(default)]
    matched_symptoms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SymptomsResponse {
    analysis: Analysis,
    treatment: Treatment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RecommendationResponse<T> {
    recommendation: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CityRequest {
    city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WeatherResponse {
    weather: WeatherReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ForecastResponse {
    forecast: Forecast,
}

/// Reads the error message out of a failed reply body, if there is one.
fn error_message(body: &serde_json::Value) -> String {
    return ["message", "error"]
        .iter()
        .find_map(|key| return body.get(key).and_then(|e| return e.as_str()))
        .unwrap_or("unknown error")
        .to_string();
}

pub struct SoilSync {
    url: String,
    chat_endpoint: String,
    timeout: String,
}

impl Default for SoilSync {
    fn default() -> SoilSync {
        return SoilSync::new(
            &Config::get(ConfigKey::ApiURL),
            &Config::get(ConfigKey::ChatEndpoint),
            &Config::get(ConfigKey::BackendHealthCheckTimeout),
        );
    }
}

impl SoilSync {
    pub fn new(url: &str, chat_endpoint: &str, timeout: &str) -> SoilSync {
        return SoilSync {
            url: url.to_string(),
            chat_endpoint: chat_endpoint.to_string(),
            timeout: timeout.to_string(),
        };
    }

    /// Posts `body` to `path` and decodes the reply. Non 2xx statuses and
    /// replies whose `status` is not `success` are errors.
    async fn post<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{url}{path}", url = self.url.trim_end_matches('/'));
        let res = reqwest::Client::new().post(url).json(body).send().await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                path,
                "Failed to make request to SoilSync"
            );
            bail!(
                "SoilSync request to {path} failed with status {}",
                res.status().as_u16()
            );
        }

        let body = res.json::<serde_json::Value>().await?;
        tracing::debug!(path, body = ?body, "SoilSync response");

        let status = body
            .get("status")
            .and_then(|e| return e.as_str())
            .unwrap_or_default();
        if status != "success" {
            let message = error_message(&body);
            tracing::error!(path, status, message = %message, "SoilSync returned an error");
            bail!("SoilSync request to {path} returned an error: {message}");
        }

        return Ok(serde_json::from_value::<T>(body)?);
    }
}

#[async_trait]
impl Backend for SoilSync {
    fn name(&self) -> BackendName {
        return BackendName::SoilSync;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("SoilSync API URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "SoilSync is not reachable");
                bail!("SoilSync is not reachable at {}", self.url);
            }
        };

        // The API has no index route, so only server errors count as unhealthy.
        let status = res.status().as_u16();
        if status >= 500 {
            tracing::error!(status, "SoilSync health check failed");
            bail!("SoilSync health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn query_chat(&self, request: &AdviceRequest) -> Result<AdviceResponse> {
        let req = ChatRequest {
            query: request.query.to_string(),
            language: request.language.to_string(),
            session_id: request.session_id.clone(),
            context: request
                .history
                .iter()
                .map(|turn| {
                    return ContextTurn {
                        role: turn.role,
                        text: turn.text.to_string(),
                    };
                })
                .collect(),
        };

        let res: ChatResponse = self.post(&self.chat_endpoint, &req).await?;
        let context = res.response.context.unwrap_or_else(|| {
            return IntentClassifier::classify(&request.query)
                .context()
                .to_string();
        });

        return Ok(AdviceResponse {
            status: AdviceStatus::Success,
            text: res.response.text,
            confidence: res.response.confidence,
            suggestions: res.response.suggestions,
            context,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn detect_image(&self, image: &ImagePayload) -> Result<DiseaseReport> {
        let req = ImageRequest {
            image: image.data_url.to_string(),
        };
        let res: ImageResponse = self.post("/api/disease/detect-image", &req).await?;

        return Ok(DiseaseReport {
            disease: res.prediction.disease,
            confidence: res.prediction.confidence,
            evidence: Evidence::Image {
                processing_time: res.prediction.processing_time,
            },
            treatment: res.treatment,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn detect_symptoms(&self, symptoms: &[Symptom]) -> Result<DiseaseReport> {
        let req = SymptomsRequest {
            symptoms: symptoms.to_vec(),
        };
        let res: SymptomsResponse = self.post("/api/disease/detect-symptoms", &req).await?;

        return Ok(DiseaseReport {
            disease: res.analysis.disease,
            confidence: res.analysis.confidence,
            evidence: Evidence::Symptoms {
                matched: res.analysis.matched_symptoms,
            },
            treatment: res.treatment,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn recommend_crop(&self, query: &CropQuery) -> Result<CropRecommendation> {
        let res: RecommendationResponse<CropRecommendation> =
            self.post("/api/crop/recommend", query).await?;
        return Ok(res.recommendation);
    }

    #[allow(clippy::implicit_return)]
    async fn recommend_fertilizer(
        &self,
        query: &FertilizerQuery,
    ) -> Result<FertilizerRecommendation> {
        let res: RecommendationResponse<FertilizerRecommendation> =
            self.post("/api/fertilizer/recommend", query).await?;
        return Ok(res.recommendation);
    }

    #[allow(clippy::implicit_return)]
    async fn find_subsidies(&self, query: &SubsidyQuery) -> Result<SubsidyResult> {
        return self.post("/api/subsidy/find", query).await;
    }

    #[allow(clippy::implicit_return)]
    async fn current_weather(&self, city: &str) -> Result<WeatherReport> {
        let req = CityRequest {
            city: city.to_string(),
        };
        let res: WeatherResponse = self.post("/api/weather/current", &req).await?;
        return Ok(res.weather);
    }

    #[allow(clippy::implicit_return)]
    async fn forecast(&self, city: &str) -> Result<Forecast> {
        let req = CityRequest {
            city: city.to_string(),
        };
        let res: ForecastResponse = self.post("/api/weather/forecast", &req).await?;
        return Ok(res.forecast);
    }
}
