use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::VoiceService;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::Recognizer;
use crate::domain::models::SpeechName;
use crate::domain::models::Synthesizer;
use crate::domain::models::VoiceState;
use crate::infrastructure::speech::noop::NoopSpeech;

#[derive(Default)]
struct SlowSynthesizer {
    started: AtomicUsize,
    finished: AtomicUsize,
    spoken: Mutex<Vec<String>>,
}

#[async_trait]
impl Synthesizer for SlowSynthesizer {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn speak(&self, text: &str, _language: Language) -> Result<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.spoken.lock().unwrap().push(text.to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        return Ok(());
    }
}

struct SlowRecognizer {
    transcript: Option<String>,
}

#[async_trait]
impl Recognizer for SlowRecognizer {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn listen(&self, _language: Language) -> Result<Option<String>> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        return Ok(self.transcript.clone());
    }
}

struct BrokenRecognizer {}

#[async_trait]
impl Recognizer for BrokenRecognizer {
    fn name(&self) -> SpeechName {
        return SpeechName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn listen(&self, _language: Language) -> Result<Option<String>> {
        bail!("microphone unavailable");
    }
}

fn service(synthesizer: Arc<SlowSynthesizer>, transcript: Option<&str>) -> VoiceService {
    return VoiceService::new(
        synthesizer,
        Arc::new(SlowRecognizer {
            transcript: transcript.map(|e| return e.to_string()),
        }),
    );
}

#[tokio::test]
async fn it_starts_idle() {
    let voice = service(Arc::new(SlowSynthesizer::default()), None);
    assert_eq!(voice.state(), VoiceState::Idle);
}

#[tokio::test]
async fn it_speaks_sanitized_text() {
    let synthesizer = Arc::new(SlowSynthesizer::default());
    let mut voice = service(synthesizer.clone(), None);

    voice.speak("**Rain** expected 🌧", Language::English);
    assert_eq!(voice.state(), VoiceState::Speaking);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(voice.state(), VoiceState::Idle);
    assert_eq!(synthesizer.finished.load(Ordering::SeqCst), 1);
    assert_eq!(
        *synthesizer.spoken.lock().unwrap(),
        vec!["Rain expected".to_string()]
    );
}

#[tokio::test]
async fn it_interrupts_the_previous_utterance() {
    let synthesizer = Arc::new(SlowSynthesizer::default());
    let mut voice = service(synthesizer.clone(), None);

    voice.speak("first", Language::English);
    tokio::time::sleep(Duration::from_millis(10)).await;
    voice.speak("second", Language::English);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(synthesizer.started.load(Ordering::SeqCst), 2);
    assert_eq!(synthesizer.finished.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn it_skips_empty_utterances() {
    let synthesizer = Arc::new(SlowSynthesizer::default());
    let mut voice = service(synthesizer.clone(), None);

    voice.speak(" 🌱 ✅ ", Language::English);

    assert_eq!(voice.state(), VoiceState::Idle);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(synthesizer.started.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn it_reports_a_single_transcript() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut voice = service(Arc::new(SlowSynthesizer::default()), Some("rain today"));

    voice.listen(Language::English, tx.clone());
    assert_eq!(voice.state(), VoiceState::Listening);
    voice.listen(Language::English, tx);

    match rx.recv().await {
        Some(Event::VoiceTranscript(Some(text))) => assert_eq!(text, "rain today"),
        _ => bail!("Expected a transcript"),
    }

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(voice.state(), VoiceState::Idle);

    return Ok(());
}

#[tokio::test]
async fn it_reports_why_a_capture_failed() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut voice = VoiceService::new(
        Arc::new(SlowSynthesizer::default()),
        Arc::new(BrokenRecognizer {}),
    );

    voice.listen(Language::Hindi, tx);

    match rx.recv().await {
        Some(Event::VoiceFailed(reason)) => assert_eq!(reason, "microphone unavailable"),
        _ => bail!("Expected a failed capture"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_explains_when_voice_input_is_unavailable() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let engine = Arc::new(NoopSpeech::default());
    let mut voice = VoiceService::new(engine.clone(), engine);

    voice.listen(Language::English, tx);

    match rx.recv().await {
        Some(Event::VoiceFailed(reason)) => {
            assert!(reason.starts_with("Voice input is not available"));
        }
        _ => bail!("Expected a failed capture"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_stops_speaking_to_listen() {
    let synthesizer = Arc::new(SlowSynthesizer::default());
    let mut voice = service(synthesizer.clone(), None);
    let (tx, _rx) = mpsc::unbounded_channel::<Event>();

    voice.speak("long answer", Language::English);
    tokio::time::sleep(Duration::from_millis(10)).await;
    voice.listen(Language::English, tx);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(synthesizer.finished.load(Ordering::SeqCst), 0);
}
