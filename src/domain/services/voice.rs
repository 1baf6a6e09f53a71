#[cfg(test)]
#[path = "voice_test.rs"]
mod tests;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::view::speakable;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::RecognizerBox;
use crate::domain::models::SynthesizerBox;
use crate::domain::models::VoiceState;

fn is_running(handle: &Option<JoinHandle<()>>) -> bool {
    return handle
        .as_ref()
        .map(|handle| return !handle.is_finished())
        .unwrap_or(false);
}

fn abort(handle: &mut Option<JoinHandle<()>>) -> bool {
    let running = is_running(handle);
    if let Some(handle) = handle.take() {
        handle.abort();
    }

    return running;
}

/// Drives speech output and single utterance capture. At most one utterance
/// plays and at most one capture runs at any time.
pub struct VoiceService {
    synthesizer: SynthesizerBox,
    recognizer: RecognizerBox,
    speaking: Option<JoinHandle<()>>,
    listening: Option<JoinHandle<()>>,
}

impl VoiceService {
    pub fn new(synthesizer: SynthesizerBox, recognizer: RecognizerBox) -> VoiceService {
        return VoiceService {
            synthesizer,
            recognizer,
            speaking: None,
            listening: None,
        };
    }

    pub fn state(&self) -> VoiceState {
        if is_running(&self.listening) {
            return VoiceState::Listening;
        }
        if is_running(&self.speaking) {
            return VoiceState::Speaking;
        }

        return VoiceState::Idle;
    }

    /// Starts speaking `text`, cutting off whatever was playing.
    pub fn speak(&mut self, text: &str, language: Language) {
        if self.stop_speaking() {
            tracing::debug!("Interrupted previous utterance");
        }

        let text = speakable(text);
        if text.is_empty() {
            return;
        }

        let synthesizer = self.synthesizer.clone();
        self.speaking = Some(tokio::spawn(async move {
            if let Err(err) = synthesizer.speak(&text, language).await {
                tracing::warn!(error = ?err, engine = %synthesizer.name(), "Speech synthesis failed");
            }
        }));
    }

    pub fn stop_speaking(&mut self) -> bool {
        return abort(&mut self.speaking);
    }

    /// Captures one utterance and reports it as `Event::VoiceTranscript`, or
    /// `Event::VoiceFailed` when the recognizer errors. A capture already in
    /// progress is stopped first.
    pub fn listen(&mut self, language: Language, tx: mpsc::UnboundedSender<Event>) {
        if abort(&mut self.listening) {
            tracing::debug!("Stopped previous voice capture");
        }
        self.stop_speaking();

        let recognizer = self.recognizer.clone();
        self.listening = Some(tokio::spawn(async move {
            let event = match recognizer.listen(language).await {
                Ok(transcript) => Event::VoiceTranscript(transcript),
                Err(err) => {
                    tracing::warn!(error = ?err, engine = %recognizer.name(), "Voice capture failed");
                    Event::VoiceFailed(err.to_string())
                }
            };

            if tx.send(event).is_err() {
                tracing::debug!("Voice transcript receiver closed");
            }
        }));
    }

    pub fn stop(&mut self) {
        abort(&mut self.listening);
        abort(&mut self.speaking);
    }
}

impl Drop for VoiceService {
    fn drop(&mut self) {
        self.stop();
    }
}
