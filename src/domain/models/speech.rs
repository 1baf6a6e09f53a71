use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpeechName {
    None,
    Command,
}

impl SpeechName {
    pub fn parse(text: String) -> Option<SpeechName> {
        return SpeechName::iter().find(|e| return e.to_string() == text);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum VoiceState {
    Idle,
    Listening,
    Speaking,
}

/// Text to speech. Dropping the future must stop playback.
#[async_trait]
pub trait Synthesizer {
    fn name(&self) -> SpeechName;

    async fn speak(&self, text: &str, language: Language) -> Result<()>;
}

/// Speech to text for a single utterance.
#[async_trait]
pub trait Recognizer {
    fn name(&self) -> SpeechName;

    /// Returns `None` when the capture ended without any speech.
    async fn listen(&self, language: Language) -> Result<Option<String>>;
}

pub type SynthesizerBox = Arc<dyn Synthesizer + Send + Sync>;
pub type RecognizerBox = Arc<dyn Recognizer + Send + Sync>;
