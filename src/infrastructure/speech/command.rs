#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::process::Stdio;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::Recognizer;
use crate::domain::models::SpeechName;
use crate::domain::models::Synthesizer;

/// Splits a command template on whitespace and substitutes `{lang}` with the
/// short voice name of the language. The child is killed when dropped.
fn build_command(template: &str, language: Language) -> Result<Command> {
    let mut parts = template
        .split_whitespace()
        .map(|part| return part.replace("{lang}", language.voice()));

    let program = match parts.next() {
        Some(program) => program,
        None => bail!("No speech command configured"),
    };

    let mut cmd = Command::new(program);
    cmd.args(parts).kill_on_drop(true);

    return Ok(cmd);
}

/// Speech through external programs, such as `espeak-ng` for output and any
/// recognizer that prints a transcript to stdout for input.
pub struct CommandSpeech {
    speak_command: String,
    listen_command: String,
}

impl Default for CommandSpeech {
    fn default() -> CommandSpeech {
        return CommandSpeech {
            speak_command: Config::get(ConfigKey::SpeechCommand),
            listen_command: Config::get(ConfigKey::ListenCommand),
        };
    }
}

#[async_trait]
impl Synthesizer for CommandSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn speak(&self, text: &str, language: Language) -> Result<()> {
        let mut child = build_command(&self.speak_command, language)?
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            tracing::error!(status = ?status, command = %self.speak_command, "Speech command failed");
            bail!("Speech command exited with {status}");
        }

        return Ok(());
    }
}

#[async_trait]
impl Recognizer for CommandSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::Command;
    }

    #[allow(clippy::implicit_return)]
    async fn listen(&self, language: Language) -> Result<Option<String>> {
        if self.listen_command.trim().is_empty() {
            bail!("No listen-command configured for voice input");
        }

        let output = build_command(&self.listen_command, language)?
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            tracing::error!(status = ?output.status, command = %self.listen_command, "Listen command failed");
            bail!("Listen command exited with {}", output.status);
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Ok(None);
        }

        return Ok(Some(transcript));
    }
}
