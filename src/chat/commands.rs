//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to inspect dashboard state without sending messages
//! to the navigator.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Show the current user profile.
    Profile,

    /// Show the quest catalog.
    Quests,

    /// Complete a quest by id.
    CompleteQuest(u32),

    /// Show the goal catalog.
    Goals,

    /// Show the career path catalog.
    Paths,

    /// Select a career path by name.
    SelectPath(String),

    /// Start a fresh conversation (empty transcript).
    Reset,

    /// Display session statistics (message count, session id, base URL).
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use cosmos::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/profile").is_some());
/// assert!(parse_command("I want to become a Team Lead").is_none());
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
        "profile" | "me" => ChatCommand::Profile,
        "quests" | "missions" => ChatCommand::Quests,
        "complete" => match argument {
            Some(arg) => match arg.parse::<u32>() {
                Ok(quest_id) => ChatCommand::CompleteQuest(quest_id),
                Err(_) => ChatCommand::Invalid("/complete expects a quest id".to_string()),
            },
            None => ChatCommand::Invalid("/complete requires a quest id".to_string()),
        },
        "goals" => ChatCommand::Goals,
        "paths" => ChatCommand::Paths,
        "select" => match argument {
            Some(path) => ChatCommand::SelectPath(path.to_string()),
            None => ChatCommand::Invalid("/select requires a career path name".to_string()),
        },
        "reset" => ChatCommand::Reset,
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /profile               Show your level, XP, coins, and skills
  /quests                List available quests
  /complete <id>         Complete a quest and collect its rewards
  /goals                 List short- and medium-term goals
  /paths                 List career paths
  /select <path>         Select a career path (e.g., /select Data Scientist)
  /reset                 Start a fresh conversation
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the chat

Answer a navigator question by typing the number of an option, or just
type your message to talk to the navigator."#
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
    fn parse_catalog_commands() {
        assert_eq!(parse_command("/profile"), Some(ChatCommand::Profile));
        assert_eq!(parse_command("/me"), Some(ChatCommand::Profile));
        assert_eq!(parse_command("/quests"), Some(ChatCommand::Quests));
        assert_eq!(parse_command("/goals"), Some(ChatCommand::Goals));
        assert_eq!(parse_command("/paths"), Some(ChatCommand::Paths));
    }

    #[test]
    fn parse_select() {
        assert_eq!(
            parse_command("/select Data Scientist"),
            Some(ChatCommand::SelectPath("Data Scientist".to_string()))
        );
        assert!(matches!(
            parse_command("/select"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
    }

    #[test]
    fn parse_complete_quest() {
        assert_eq!(
            parse_command("/complete 3"),
            Some(ChatCommand::CompleteQuest(3))
        );
        assert!(matches!(
            parse_command("/complete"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
        assert!(matches!(
            parse_command("/complete python"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("expects")
        ));
    }

    #[test]
    fn parse_reset_and_stats() {
        assert_eq!(parse_command("/reset"), Some(ChatCommand::Reset));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/warp"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("/warp")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("I want to become a Team Lead"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("1"), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/profile"));
        assert!(help.contains("/select"));
    }
}
