use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::run;
use super::Chat;
use crate::domain::models::Action;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Event;
use crate::domain::models::IntentCategory;
use crate::domain::models::Language;
use crate::domain::models::Recognizer;
use crate::domain::models::SpeechName;
use crate::domain::services::actions::ActionsService;
use crate::domain::services::conversation::Conversation;
use crate::domain::services::events::EventsService;
use crate::domain::services::responses;
use crate::domain::services::view::ConversationView;
use crate::domain::services::voice::VoiceService;
use crate::infrastructure::backends::offline::Offline;
use crate::infrastructure::speech::noop::NoopSpeech;

struct SlowRecognizer {}

#[async_trait]
impl Recognizer for SlowRecognizer {
    fn name(&self) -> SpeechName {
        return SpeechName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn listen(&self, _language: Language) -> Result<Option<String>> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        return Ok(Some("old question".to_string()));
    }
}

fn voice() -> VoiceService {
    let engine = Arc::new(NoopSpeech::default());
    return VoiceService::new(engine.clone(), engine);
}

fn chat(
    auto_submit_voice: bool,
) -> (
    Chat<Vec<u8>>,
    mpsc::UnboundedReceiver<Action>,
    mpsc::UnboundedReceiver<Event>,
) {
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let chat = Chat::new(
        Conversation::new(Language::English),
        ConversationView::new(vec![], "Asha", false),
        voice(),
        action_tx,
        event_tx,
        auto_submit_voice,
    );

    return (chat, action_rx, event_rx);
}

fn input(text: &str) -> Event {
    return Event::UserInput(text.to_string());
}

fn reply(category: IntentCategory, text: &str) -> AdviceResponse {
    return AdviceResponse::from_category(category, text);
}

fn next_query(rx: &mut mpsc::UnboundedReceiver<Action>) -> (u64, String, Language) {
    match rx.try_recv() {
        Ok(Action::AdviceRequest(request_id, request)) => {
            return (request_id, request.query, request.language);
        }
        other => panic!("expected an advice request, got {other:?}"),
    }
}

#[tokio::test]
async fn it_submits_queries_with_a_typing_indicator() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    assert!(chat.handle(input("Which fertilizer for wheat?"))?);
    assert_eq!(
        next_query(&mut action_rx),
        (1, "Which fertilizer for wheat?".to_string(), Language::English)
    );

    let out = String::from_utf8(chat.into_output())?;
    assert_eq!(out, "SoilSync I am analyzing your query...");

    return Ok(());
}

#[tokio::test]
async fn it_ignores_blank_input() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    assert!(chat.handle(input("   "))?);
    assert!(action_rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_renders_only_the_latest_reply() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    chat.handle(input("first question"))?;
    chat.handle(input("second question"))?;
    assert_eq!(next_query(&mut action_rx).0, 1);
    assert_eq!(next_query(&mut action_rx).0, 2);

    chat.handle(Event::AdviceReady(1, reply(IntentCategory::General, "stale answer")))?;
    chat.handle(Event::AdviceReady(2, reply(IntentCategory::General, "fresh answer")))?;

    let out = String::from_utf8(chat.into_output())?;
    assert!(!out.contains("stale answer"));
    assert!(out.contains("SoilSync:\n  fresh answer\n"));
    assert_eq!(out.matches("\r\x1b[2K").count(), 2);

    return Ok(());
}

#[tokio::test]
async fn it_resolves_suggestion_numbers() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    chat.handle(input("will it rain?"))?;
    next_query(&mut action_rx);
    chat.handle(Event::AdviceReady(
        1,
        reply(IntentCategory::Weather, "Rain expected today."),
    ))?;

    chat.handle(input("2"))?;
    assert_eq!(next_query(&mut action_rx).1, "Farming forecast");

    chat.handle(input("7"))?;
    assert_eq!(next_query(&mut action_rx).1, "7");

    let out = String::from_utf8(chat.into_output())?;
    assert!(out.contains("[1] Current conditions  [2] Farming forecast  [3] Seasonal advice\n"));
    assert!(out.contains("Asha:\n  Farming forecast\n"));
    assert!(!out.contains("Asha:\n  7\n"));

    return Ok(());
}

#[tokio::test]
async fn it_switches_languages() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    chat.handle(input("/lang hi-IN"))?;
    chat.handle(input("/lang fr-FR"))?;
    chat.handle(input("/l"))?;
    chat.handle(input("rain?"))?;
    assert_eq!(next_query(&mut action_rx).2, Language::Hindi);

    let out = String::from_utf8(chat.into_output())?;
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(responses::language_changed(Language::Hindi)));
    assert_eq!(
        lines.next(),
        Some("Error: Unknown language fr-FR, expected one of: en-IN, hi-IN, mr-IN")
    );
    assert_eq!(lines.next(), Some("Current language: hi-IN"));

    return Ok(());
}

#[tokio::test]
async fn it_quits_on_command() -> Result<()> {
    let (mut chat, _action_rx, _event_rx) = chat(true);

    assert!(chat.handle(input("/help"))?);
    assert!(!chat.handle(input("/quit"))?);

    let out = String::from_utf8(chat.into_output())?;
    assert!(out.starts_with("COMMANDS:\n"));

    return Ok(());
}

#[tokio::test]
async fn it_resets_and_cancels_pending_requests() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);
    let session_id = chat.conversation.session_id().to_string();

    chat.handle(input("brown spots"))?;
    next_query(&mut action_rx);
    chat.handle(input("/reset"))?;

    assert!(matches!(action_rx.try_recv(), Ok(Action::AdviceAbort())));
    assert!(chat.conversation.pending().is_none());
    assert!(chat.conversation.turns().is_empty());
    assert_ne!(chat.conversation.session_id(), session_id);

    chat.handle(Event::AdviceReady(1, reply(IntentCategory::Disease, "late answer")))?;

    let out = String::from_utf8(chat.into_output())?;
    assert!(!out.contains("late answer"));
    assert!(out.ends_with("SoilSync:\n  How can I help you?\n\n"));

    return Ok(());
}

#[tokio::test]
async fn it_waits_for_the_pending_reply_when_input_closes() -> Result<()> {
    let (mut chat, _action_rx, _event_rx) = chat(true);

    chat.handle(input("rain forecast"))?;
    assert!(chat.handle(Event::InputClosed())?);
    assert!(!chat.handle(Event::AdviceReady(1, reply(IntentCategory::Weather, "Sunny")))?);

    let (mut idle, _action_rx, _event_rx) = self::chat(true);
    assert!(!idle.handle(Event::InputClosed())?);

    return Ok(());
}

#[tokio::test]
async fn it_auto_submits_voice_transcripts() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    chat.handle(Event::VoiceTranscript(Some(" rain tomorrow ".to_string())))?;
    assert_eq!(next_query(&mut action_rx).1, "rain tomorrow");

    chat.handle(Event::VoiceTranscript(None))?;

    let out = String::from_utf8(chat.into_output())?;
    assert!(out.starts_with("Asha:\n  rain tomorrow\n"));
    assert!(out.ends_with(&format!("{}\n", responses::nothing_heard(Language::English))));

    return Ok(());
}

#[tokio::test]
async fn it_holds_voice_transcripts_until_confirmed() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(false);

    chat.handle(Event::VoiceTranscript(Some("rain tomorrow".to_string())))?;
    assert!(action_rx.try_recv().is_err());

    chat.handle(input(""))?;
    assert_eq!(next_query(&mut action_rx).1, "rain tomorrow");

    let out = String::from_utf8(chat.into_output())?;
    assert!(out.starts_with("Heard: \"rain tomorrow\". Press Enter to send it.\n"));

    return Ok(());
}

#[tokio::test]
async fn it_shows_why_voice_capture_failed() -> Result<()> {
    let (mut chat, mut action_rx, _event_rx) = chat(true);

    chat.handle(Event::VoiceFailed("microphone unavailable".to_string()))?;
    assert!(action_rx.try_recv().is_err());

    let out = String::from_utf8(chat.into_output())?;
    assert_eq!(out, "Error: microphone unavailable\n");

    return Ok(());
}

#[tokio::test]
async fn it_stops_listening_on_reset() -> Result<()> {
    let (action_tx, _action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut chat = Chat::new(
        Conversation::new(Language::English),
        ConversationView::new(vec![], "Asha", false),
        VoiceService::new(Arc::new(NoopSpeech::default()), Arc::new(SlowRecognizer {})),
        action_tx,
        event_tx,
        true,
    );

    chat.handle(input("/voice"))?;
    chat.handle(input("/reset"))?;

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(event_rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_runs_a_session_against_the_fallback() -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let worker_tx = event_tx.clone();
    tokio::spawn(async move {
        return ActionsService::start(Box::<Offline>::default(), worker_tx, &mut action_rx).await;
    });

    let mut chat = Chat::new(
        Conversation::new(Language::English),
        ConversationView::new(vec![], "Asha", false),
        voice(),
        action_tx,
        event_tx,
        true,
    );
    let mut events = EventsService::new("rain forecast\n".as_bytes(), event_rx);

    run(&mut chat, &mut events).await?;

    let out = String::from_utf8(chat.into_output())?;
    assert!(out.starts_with("SoilSync:\n  How can I help you?\n\n"));
    assert_eq!(out.matches("\r\x1b[2K").count(), 1);
    assert_eq!(out.matches("SoilSync:\n").count(), 2);
    assert!(out.contains("[1] Current conditions  [2] Farming forecast  [3] Seasonal advice\n"));

    return Ok(());
}
