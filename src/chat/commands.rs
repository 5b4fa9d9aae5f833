//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the session without sending messages to the
//! relay.

/// A parsed chat command.
///
/// These commands control the chat session and are never sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Initiate a session against a target URL.
    Connect(String),

    /// Display session state (status, session id, target, message count).
    Status,

    /// Replay the conversation log.
    History,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use uplink::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/connect http://example.com").is_some());
/// assert!(parse_command("State your query.").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "connect" => match argument {
            Some(target) => ChatCommand::Connect(target.to_string()),
            None => ChatCommand::Invalid("/connect requires a target URL".to_string()),
        },
        "status" => ChatCommand::Status,
        "history" => ChatCommand::History,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /connect <url>         Establish a session against a target URL
  /status                Show session status and id
  /history               Replay the conversation log
  /help                  Show this help message
  /quit                  Exit the chat"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_connect() {
        assert_eq!(
            parse_command("/connect http://example.com"),
            Some(ChatCommand::Connect("http://example.com".to_string()))
        );
        assert_eq!(
            parse_command("/connect   http://example.com  "),
            Some(ChatCommand::Connect("http://example.com".to_string()))
        );
        assert_eq!(
            parse_command("/connect"),
            Some(ChatCommand::Invalid(
                "/connect requires a target URL".to_string()
            ))
        );
    }

    #[test]
    fn parse_status_and_history() {
        assert_eq!(parse_command("/status"), Some(ChatCommand::Status));
        assert_eq!(parse_command("/STATUS"), Some(ChatCommand::Status));
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/teleport"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("/teleport")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("State your query."), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/connect"));
        assert!(help.contains("/quit"));
    }
}
