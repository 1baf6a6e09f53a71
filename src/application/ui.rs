#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;
use std::io::Write;

use anyhow::Result;
use tokio::io::AsyncBufRead;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::SlashCommand;
use crate::domain::models::SpeechName;
use crate::domain::models::Turn;
use crate::domain::services::conversation::Conversation;
use crate::domain::services::events::EventsService;
use crate::domain::services::responses;
use crate::domain::services::view::ConversationView;
use crate::domain::services::voice::VoiceService;
use crate::infrastructure::speech::SpeechManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /lang (/l) [en-IN,hi-IN,mr-IN] - Switches the reply language. Without a code, prints the current one.
- /voice (/v) - Captures a single spoken question with the configured listen-command.
- /reset (/r) - Starts a new session and forgets the conversation.
- /quit /exit (/q) - Exit SoilSync.
- /help (/h) - Provides this help menu.

SUGGESTIONS:
Replies end with numbered suggestions. Enter the number alone to ask about it.
        "#;

    return text.trim().to_string();
}

/// Interactive chat session. Owns the transcript state and reacts to one
/// event at a time.
pub struct Chat<W: Write> {
    conversation: Conversation,
    view: ConversationView<W>,
    voice: VoiceService,
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    auto_submit_voice: bool,
    draft: Option<String>,
    closing: bool,
}

impl<W: Write> Chat<W> {
    pub fn new(
        conversation: Conversation,
        view: ConversationView<W>,
        voice: VoiceService,
        action_tx: mpsc::UnboundedSender<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        auto_submit_voice: bool,
    ) -> Chat<W> {
        return Chat {
            conversation,
            view,
            voice,
            action_tx,
            event_tx,
            auto_submit_voice,
            draft: None,
            closing: false,
        };
    }

    pub fn greet(&mut self) -> Result<()> {
        let greeting = responses::greeting(self.conversation.language());
        return self.view.render_turn(&Turn::assistant(greeting));
    }

    /// Handles one event. Returns false once the session should end.
    pub fn handle(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::UserInput(line) => return self.handle_input(&line),
            Event::InputClosed() => {
                if self.conversation.pending().is_none() {
                    return Ok(false);
                }
                self.closing = true;
            }
            Event::AdviceReady(request_id, res) => {
                self.handle_reply(request_id, res)?;
                if self.closing && self.conversation.pending().is_none() {
                    return Ok(false);
                }
            }
            Event::VoiceFailed(reason) => self.view.render_error(&reason)?,
            Event::VoiceTranscript(transcript) => self.handle_transcript(transcript)?,
        }

        return Ok(true);
    }

    fn handle_input(&mut self, line: &str) -> Result<bool> {
        let text = line.trim();
        if text.is_empty() {
            if let Some(draft) = self.draft.take() {
                self.submit(&draft, true)?;
            }
            return Ok(true);
        }
        self.draft = None;

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return Ok(false);
            }
            if command.is_help() {
                self.view.render_notice(&help_text())?;
            }
            if command.is_reset() {
                self.reset()?;
            }
            if command.is_language() {
                self.change_language(command.args.first())?;
            }
            if command.is_voice() {
                let language = self.conversation.language();
                self.view.render_notice(responses::listening(language))?;
                self.voice.listen(language, self.event_tx.clone());
            }

            return Ok(true);
        }

        let resolved = self.conversation.resolve_input(text);
        let echo = resolved != text;
        self.submit(&resolved, echo)?;

        return Ok(true);
    }

    fn submit(&mut self, text: &str, echo: bool) -> Result<()> {
        let (request_id, request) = match self.conversation.submit(text) {
            Some(submission) => submission,
            None => return Ok(()),
        };

        self.voice.stop_speaking();
        if echo {
            self.view.render_turn(&Turn::user(&request.query))?;
        }
        self.view.show_typing(request.language)?;

        tracing::debug!(request_id, session_id = %self.conversation.session_id(), "Submitting query");
        self.action_tx
            .send(Action::AdviceRequest(request_id, request))?;

        return Ok(());
    }

    fn handle_reply(&mut self, request_id: u64, res: AdviceResponse) -> Result<()> {
        let res = match self.conversation.accept(request_id, res) {
            Some(res) => res,
            None => return Ok(()),
        };

        self.view.render_reply(&res)?;
        self.voice.speak(&res.text, self.conversation.language());

        return Ok(());
    }

    fn handle_transcript(&mut self, transcript: Option<String>) -> Result<()> {
        let language = self.conversation.language();
        let text = match transcript {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => {
                return self.view.render_notice(responses::nothing_heard(language));
            }
        };

        if self.auto_submit_voice {
            return self.submit(&text, true);
        }

        self.view
            .render_notice(&format!("Heard: \"{text}\". Press Enter to send it."))?;
        self.draft = Some(text);

        return Ok(());
    }

    fn change_language(&mut self, code: Option<&String>) -> Result<()> {
        let code = match code {
            Some(code) => code,
            None => {
                let current = self.conversation.language();
                return self
                    .view
                    .render_notice(&format!("Current language: {current}"));
            }
        };

        match Language::parse(code) {
            Some(language) => {
                self.conversation.set_language(language);
                self.view.render_notice(responses::language_changed(language))?;
            }
            None => {
                self.view.render_error(&format!(
                    "Unknown language {code}, expected one of: {}",
                    Language::codes().join(", ")
                ))?;
            }
        }

        return Ok(());
    }

    fn reset(&mut self) -> Result<()> {
        if self.conversation.cancel() {
            self.action_tx.send(Action::AdviceAbort())?;
        }
        self.voice.stop();
        self.conversation.reset();
        self.draft = None;

        self.view.clear_typing()?;
        return self.greet();
    }

    pub fn into_output(self) -> W {
        return self.view.into_inner();
    }
}

pub async fn run<R: AsyncBufRead + Unpin, W: Write>(
    chat: &mut Chat<W>,
    events: &mut EventsService<R>,
) -> Result<()> {
    chat.greet()?;

    loop {
        let event = events.next().await?;
        if !chat.handle(event)? {
            return Ok(());
        }
    }
}

pub async fn start(
    action_tx: mpsc::UnboundedSender<Action>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let language = Language::parse_or_default(&Config::get(ConfigKey::Language));
    let speech = SpeechName::parse(Config::get(ConfigKey::Speech)).unwrap_or(SpeechName::None);
    let (synthesizer, recognizer) = SpeechManager::get(speech);

    let mut chat = Chat::new(
        Conversation::new(language),
        ConversationView::new(
            io::stdout(),
            &Config::get(ConfigKey::Username),
            Paint::is_enabled(),
        ),
        VoiceService::new(synthesizer, recognizer),
        action_tx,
        event_tx,
        Config::get_bool(ConfigKey::AutoSubmitVoice),
    );
    let mut events = EventsService::new(BufReader::new(tokio::io::stdin()), event_rx);

    return run(&mut chat, &mut events).await;
}
