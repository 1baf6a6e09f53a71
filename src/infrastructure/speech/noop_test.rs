use anyhow::Result;

use super::NoopSpeech;
use crate::domain::models::Language;
use crate::domain::models::Recognizer;
use crate::domain::models::Synthesizer;

#[tokio::test]
async fn it_speaks_silently() -> Result<()> {
    NoopSpeech::default()
        .speak("Hello", Language::English)
        .await?;
    return Ok(());
}

#[tokio::test]
async fn it_returns_an_error_listening() {
    let err = NoopSpeech::default()
        .listen(Language::English)
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Voice input is not available with the 'none' speech engine. Consider setting speech to 'command' with a listen-command instead");
}
