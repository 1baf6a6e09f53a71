use super::AdviceResponse;

#[derive(Debug)]
pub enum Event {
    /// Reply for the request with the given id, already downgraded to a
    /// local fallback when the API failed.
    AdviceReady(u64, AdviceResponse),
    InputClosed(),
    UserInput(String),
    /// Voice capture could not run, with the reason to show the user.
    VoiceFailed(String),
    /// Result of a single voice capture. `None` when nothing was heard.
    VoiceTranscript(Option<String>),
}
