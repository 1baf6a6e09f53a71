#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .split_whitespace()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_reset()
            || cmd.is_language()
            || cmd.is_voice()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_reset(&self) -> bool {
        return ["/r", "/reset"].contains(&self.command.as_str());
    }

    pub fn is_language(&self) -> bool {
        return ["/l", "/lang", "/language"].contains(&self.command.as_str());
    }

    pub fn is_voice(&self) -> bool {
        return ["/v", "/voice"].contains(&self.command.as_str());
    }
}
