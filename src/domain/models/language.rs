#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;
use strum::IntoEnumIterator;

/// Display languages supported by the assistant. Every localized lookup is
/// keyed on this, and anything unknown resolves to English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-IN")]
    English,
    #[serde(rename = "hi-IN")]
    Hindi,
    #[serde(rename = "mr-IN")]
    Marathi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => return "en-IN",
            Language::Hindi => return "hi-IN",
            Language::Marathi => return "mr-IN",
        }
    }

    /// Short voice name understood by most speech engines.
    pub fn voice(&self) -> &'static str {
        match self {
            Language::English => return "en",
            Language::Hindi => return "hi",
            Language::Marathi => return "mr",
        }
    }

    pub fn codes() -> Vec<&'static str> {
        return Language::iter().map(|lang| return lang.code()).collect();
    }

    pub fn parse(text: &str) -> Option<Language> {
        let text = text.trim();
        return Language::iter().find(|lang| {
            return lang.code().eq_ignore_ascii_case(text) || lang.voice() == text;
        });
    }

    pub fn parse_or_default(text: &str) -> Language {
        return Language::parse(text).unwrap_or_default();
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.code());
    }
}
