use anyhow::Result;

use super::Conversation;
use super::HISTORY_WINDOW;
use crate::domain::models::AdviceResponse;
use crate::domain::models::IntentCategory;
use crate::domain::models::Language;
use crate::domain::models::Role;

fn reply(text: &str) -> AdviceResponse {
    return AdviceResponse::from_category(IntentCategory::Disease, text);
}

#[test]
fn it_creates_session_ids() {
    let conversation = Conversation::new(Language::English);

    assert!(conversation.session_id().starts_with("session_"));
    assert_eq!(conversation.session_id().len(), 20);
    assert_ne!(
        conversation.session_id(),
        Conversation::new(Language::English).session_id()
    );
}

#[test]
fn it_rejects_empty_input() {
    let mut conversation = Conversation::new(Language::English);

    assert!(conversation.submit("").is_none());
    assert!(conversation.submit("   \n").is_none());
    assert!(conversation.turns().is_empty());
    assert!(conversation.pending().is_none());
}

#[test]
fn it_submits_with_session_and_language() -> Result<()> {
    let mut conversation = Conversation::new(Language::Marathi);
    let (request_id, request) = conversation.submit("  rain today? ").unwrap();

    assert_eq!(request_id, 1);
    assert_eq!(request.query, "rain today?");
    assert_eq!(request.language, Language::Marathi);
    assert_eq!(
        request.session_id.as_deref(),
        Some(conversation.session_id())
    );
    assert!(request.history.is_empty());
    assert_eq!(conversation.turns().len(), 1);
    assert_eq!(conversation.turns()[0].role, Role::User);
    assert_eq!(conversation.pending(), Some(1));

    return Ok(());
}

#[test]
fn it_sends_a_bounded_history_window() {
    let mut conversation = Conversation::new(Language::English);
    for idx in 0..4 {
        let (request_id, _) = conversation.submit(&format!("question {idx}")).unwrap();
        conversation.accept(request_id, reply(&format!("answer {idx}")));
    }

    let (_, request) = conversation.submit("question 4").unwrap();

    assert_eq!(request.history.len(), HISTORY_WINDOW);
    assert_eq!(request.history[0].text, "answer 1");
    assert_eq!(request.history[4].text, "answer 3");
    assert_eq!(conversation.turns().len(), 9);
}

#[test]
fn it_accepts_the_pending_reply() {
    let mut conversation = Conversation::new(Language::English);
    let (request_id, _) = conversation.submit("brown spots").unwrap();

    let res = conversation.accept(request_id, reply("Use neem oil"));

    assert_eq!(res.unwrap().text, "Use neem oil");
    assert!(conversation.pending().is_none());
    assert_eq!(conversation.turns()[1].role, Role::Assistant);
    assert_eq!(conversation.suggestions().len(), 3);
}

#[test]
fn it_drops_stale_replies() {
    let mut conversation = Conversation::new(Language::English);
    let (first, _) = conversation.submit("first").unwrap();
    let (second, _) = conversation.submit("second").unwrap();

    assert!(conversation.accept(first, reply("slow answer")).is_none());
    assert_eq!(conversation.turns().len(), 2);

    assert!(conversation.accept(second, reply("fast answer")).is_some());
    assert!(conversation.accept(second, reply("duplicate")).is_none());
    assert_eq!(conversation.turns().len(), 3);
    assert_eq!(conversation.turns()[2].text, "fast answer");
}

#[test]
fn it_resolves_chip_numbers() {
    let mut conversation = Conversation::new(Language::English);
    let (request_id, _) = conversation.submit("disease").unwrap();
    conversation.accept(request_id, reply("..."));

    assert_eq!(conversation.resolve_input("2"), "Take symptom quiz");
    assert_eq!(conversation.resolve_input(" 1 "), "Upload leaf image");
    assert_eq!(conversation.resolve_input("4"), "4");
    assert_eq!(conversation.resolve_input("0"), "0");
    assert_eq!(conversation.resolve_input("wheat"), "wheat");
}

#[test]
fn it_submits_chips_like_typed_text() {
    let mut typed = Conversation::new(Language::English);
    let mut clicked = Conversation::new(Language::English);
    for conversation in [&mut typed, &mut clicked] {
        let (request_id, _) = conversation.submit("disease").unwrap();
        conversation.accept(request_id, reply("..."));
    }

    let chip = clicked.resolve_input("3");
    let (_, from_chip) = clicked.submit(&chip).unwrap();
    let (_, from_text) = typed.submit("Get treatment advice").unwrap();

    assert_eq!(from_chip.query, from_text.query);
    assert_eq!(from_chip.language, from_text.language);
    assert_eq!(from_chip.history.len(), from_text.history.len());
}

#[test]
fn it_cancels_pending_requests() {
    let mut conversation = Conversation::new(Language::English);
    let (request_id, _) = conversation.submit("question").unwrap();

    assert!(conversation.cancel());
    assert!(!conversation.cancel());
    assert!(conversation.accept(request_id, reply("late")).is_none());
}

#[test]
fn it_resets_the_session() {
    let mut conversation = Conversation::new(Language::Hindi);
    let session_id = conversation.session_id().to_string();
    let (first, _) = conversation.submit("question").unwrap();

    conversation.reset();

    assert!(conversation.turns().is_empty());
    assert!(conversation.suggestions().is_empty());
    assert_ne!(conversation.session_id(), session_id);
    assert_eq!(conversation.language(), Language::Hindi);
    assert!(conversation.accept(first, reply("late")).is_none());

    let (second, _) = conversation.submit("again").unwrap();
    assert!(second > first);
}
