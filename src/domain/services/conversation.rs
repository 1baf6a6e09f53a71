#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use uuid::Uuid;

use crate::domain::models::AdviceRequest;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Language;
use crate::domain::models::Turn;

/// Number of most recent turns sent along with a query.
pub const HISTORY_WINDOW: usize = 5;

fn new_session_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    return format!("session_{}", &id[..12]);
}

/// Owns every piece of mutable chat state for one terminal session. Created
/// when the chat starts and cleared with `reset`.
pub struct Conversation {
    session_id: String,
    language: Language,
    turns: Vec<Turn>,
    suggestions: Vec<String>,
    next_request_id: u64,
    pending: Option<u64>,
}

impl Conversation {
    pub fn new(language: Language) -> Conversation {
        return Conversation {
            session_id: new_session_id(),
            language,
            turns: vec![],
            suggestions: vec![],
            next_request_id: 1,
            pending: None,
        };
    }

    pub fn session_id(&self) -> &str {
        return &self.session_id;
    }

    pub fn language(&self) -> Language {
        return self.language;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn turns(&self) -> &[Turn] {
        return &self.turns;
    }

    pub fn suggestions(&self) -> &[String] {
        return &self.suggestions;
    }

    pub fn pending(&self) -> Option<u64> {
        return self.pending;
    }

    /// Maps a chip number to its label. Anything else is returned as typed.
    pub fn resolve_input(&self, text: &str) -> String {
        if let Ok(idx) = text.trim().parse::<usize>() {
            if idx >= 1 && idx <= self.suggestions.len() {
                return self.suggestions[idx - 1].to_string();
            }
        }

        return text.to_string();
    }

    /// Records the user turn and builds the request for it. Blank input is
    /// rejected without touching any state.
    pub fn submit(&mut self, text: &str) -> Option<(u64, AdviceRequest)> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }

        let start = self.turns.len().saturating_sub(HISTORY_WINDOW);
        let history = self.turns[start..].to_vec();
        self.turns.push(Turn::user(query));

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        if let Some(prev) = self.pending.replace(request_id) {
            tracing::debug!(prev, request_id, "Superseding in-flight request");
        }

        let request = AdviceRequest {
            query: query.to_string(),
            language: self.language,
            session_id: Some(self.session_id.to_string()),
            history,
        };

        return Some((request_id, request));
    }

    /// Accepts the reply only when it answers the pending request. Stale
    /// replies are dropped and `None` is returned.
    pub fn accept(&mut self, request_id: u64, response: AdviceResponse) -> Option<AdviceResponse> {
        if self.pending != Some(request_id) {
            tracing::debug!(
                request_id,
                pending = ?self.pending,
                "Dropping stale advice reply"
            );
            return None;
        }

        self.pending = None;
        self.turns.push(Turn::assistant(&response.text));
        self.suggestions = response.suggestions.clone();

        return Some(response);
    }

    /// Forgets the pending request. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        return self.pending.take().is_some();
    }

    pub fn reset(&mut self) {
        self.session_id = new_session_id();
        self.turns.clear();
        self.suggestions.clear();
        self.pending = None;
    }
}
