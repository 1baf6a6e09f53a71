#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, text: &str) -> Turn {
        return Turn {
            role,
            text: text.trim_end().replace('\t', "  "),
            timestamp: Utc::now(),
        };
    }

    pub fn user(text: &str) -> Turn {
        return Turn::new(Role::User, text);
    }

    pub fn assistant(text: &str) -> Turn {
        return Turn::new(Role::Assistant, text);
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push("".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if !current_lines.is_empty() && char_count + word_len > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word_len + 1;
                } else {
                    current_lines.push(word);
                    char_count += word_len + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
