pub mod command;
pub mod noop;

use std::sync::Arc;

use crate::domain::models::RecognizerBox;
use crate::domain::models::SpeechName;
use crate::domain::models::SynthesizerBox;

pub struct SpeechManager {}

impl SpeechManager {
    pub fn get(name: SpeechName) -> (SynthesizerBox, RecognizerBox) {
        match name {
            SpeechName::None => {
                let engine = Arc::new(noop::NoopSpeech::default());
                return (engine.clone(), engine);
            }
            SpeechName::Command => {
                let engine = Arc::new(command::CommandSpeech::default());
                return (engine.clone(), engine);
            }
        }
    }
}
