#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

use std::io::Write;

use anyhow::Result;
use yansi::Paint;

use super::responses;
use crate::domain::models::AdviceResponse;
use crate::domain::models::Language;
use crate::domain::models::Role;
use crate::domain::models::Turn;

pub const ASSISTANT_NAME: &str = "SoilSync";
const ERASE_LINE: &str = "\r\x1b[2K";
const LINE_WIDTH: usize = 80;

/// Symbols dropped before text is handed to a speech engine.
const DECORATIVE_SYMBOLS: [char; 20] = [
    '🌱', '🌾', '🌿', '💧', '🌡', '☀', '🌧', '⛅', '🦠', '🧪', '🤖', '✅', '⚠', '❌', '💡', '📋',
    '•', '→', '✓', '\u{fe0f}',
];

const MARKUP_SYMBOLS: [char; 5] = ['*', '_', '#', '`', '~'];

/// Plain text suitable for speech synthesis: tags, markdown markers and
/// decorative symbols are removed and whitespace is collapsed.
pub fn speakable(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];

        // A lone `<` is text, only complete tags are dropped.
        if c == '<' {
            if let Some(end) = rest.find('>') {
                rest = &rest[end + 1..];
                res.push(' ');
                continue;
            }
        }
        if MARKUP_SYMBOLS.contains(&c) || DECORATIVE_SYMBOLS.contains(&c) {
            continue;
        }
        res.push(c);
    }

    return res.split_whitespace().collect::<Vec<&str>>().join(" ");
}

/// Line oriented transcript renderer. Anything implementing `Write` works,
/// which is stdout in the app and a byte buffer in tests.
pub struct ConversationView<W: Write> {
    out: W,
    color: bool,
    username: String,
    typing: bool,
}

impl<W: Write> ConversationView<W> {
    pub fn new(out: W, username: &str, color: bool) -> ConversationView<W> {
        return ConversationView {
            out,
            color,
            username: username.to_string(),
            typing: false,
        };
    }

    pub fn is_typing(&self) -> bool {
        return self.typing;
    }

    fn label(&self, role: Role) -> String {
        let name = match role {
            Role::User => self.username.to_string(),
            Role::Assistant => ASSISTANT_NAME.to_string(),
        };

        if !self.color {
            return format!("{name}:");
        }

        match role {
            Role::User => return Paint::cyan(format!("{name}:")).bold().to_string(),
            Role::Assistant => return Paint::green(format!("{name}:")).bold().to_string(),
        }
    }

    pub fn render_turn(&mut self, turn: &Turn) -> Result<()> {
        self.clear_typing()?;

        let label = self.label(turn.role);
        let indent = " ".repeat(2);
        writeln!(self.out, "{label}")?;
        for line in turn.as_string_lines(LINE_WIDTH - indent.len()) {
            if line.is_empty() {
                writeln!(self.out)?;
                continue;
            }
            writeln!(self.out, "{indent}{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        return Ok(());
    }

    /// Renders a reply the same way no matter which path produced it.
    pub fn render_reply(&mut self, response: &AdviceResponse) -> Result<()> {
        self.render_turn(&Turn::assistant(&response.text))?;
        self.render_chips(&response.suggestions)?;

        return Ok(());
    }

    pub fn render_chips(&mut self, suggestions: &[String]) -> Result<()> {
        if suggestions.is_empty() {
            return Ok(());
        }

        let chips = suggestions
            .iter()
            .enumerate()
            .map(|(idx, label)| return format!("[{}] {label}", idx + 1))
            .collect::<Vec<String>>()
            .join("  ");

        if self.color {
            writeln!(self.out, "{}", Paint::yellow(chips))?;
        } else {
            writeln!(self.out, "{chips}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        return Ok(());
    }

    /// Shows the transient placeholder. It stays on a single unterminated
    /// line so it can be erased in place.
    pub fn show_typing(&mut self, language: Language) -> Result<()> {
        self.clear_typing()?;

        let text = format!("{} {}", ASSISTANT_NAME, responses::typing(language));
        if self.color {
            write!(self.out, "{}", Paint::new(text).dimmed())?;
        } else {
            write!(self.out, "{text}")?;
        }
        self.out.flush()?;
        self.typing = true;

        return Ok(());
    }

    /// Removes the placeholder if it is showing. Returns whether anything was
    /// erased.
    pub fn clear_typing(&mut self) -> Result<bool> {
        if !self.typing {
            return Ok(false);
        }

        write!(self.out, "{ERASE_LINE}")?;
        self.out.flush()?;
        self.typing = false;

        return Ok(true);
    }

    pub fn render_notice(&mut self, text: &str) -> Result<()> {
        self.clear_typing()?;

        if self.color {
            writeln!(self.out, "{}", Paint::blue(text))?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()?;

        return Ok(());
    }

    pub fn render_error(&mut self, text: &str) -> Result<()> {
        self.clear_typing()?;

        if self.color {
            writeln!(self.out, "{}", Paint::red(text))?;
        } else {
            writeln!(self.out, "Error: {text}")?;
        }
        self.out.flush()?;

        return Ok(());
    }

    pub fn into_inner(self) -> W {
        return self.out;
    }
}
