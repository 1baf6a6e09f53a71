use anyhow::Result;

use super::Offline;
use crate::domain::models::AdviceRequest;
use crate::domain::models::Backend;
use crate::domain::models::Language;

#[tokio::test]
async fn it_successfully_health_checks() -> Result<()> {
    Offline::default().health_check().await?;
    return Ok(());
}

#[tokio::test]
async fn it_always_fails_requests() {
    let backend = Offline::default();

    let err = backend
        .query_chat(&AdviceRequest::new("hello", Language::English))
        .await
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"The offline backend does not reach the SoilSync API");

    assert!(backend.current_weather("Pune").await.is_err());
    assert!(backend.detect_symptoms(&[]).await.is_err());
}
