#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Language;
use crate::domain::models::Recognizer;
use crate::domain::models::SpeechName;
use crate::domain::models::Synthesizer;

#[derive(Default)]
pub struct NoopSpeech {}

#[async_trait]
impl Synthesizer for NoopSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn speak(&self, _text: &str, _language: Language) -> Result<()> {
        return Ok(());
    }
}

#[async_trait]
impl Recognizer for NoopSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn listen(&self, _language: Language) -> Result<Option<String>> {
        bail!("Voice input is not available with the 'none' speech engine. Consider setting speech to 'command' with a listen-command instead");
    }
}
