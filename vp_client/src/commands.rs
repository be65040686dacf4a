use std::fmt;
use virtual_poker::TableEvent;

/// Commands accepted at the table prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCommand {
    /// Deal a new hand.
    Deal,
    /// Change the human-count input; the raw value is kept so the table can
    /// normalize it.
    Humans(String),
    /// Show or hide the share link QR panel.
    Qr,
    Help,
    Quit,
}

impl TableCommand {
    /// The table event this command triggers, if any.
    pub fn to_event(&self) -> Option<TableEvent> {
        match self {
            Self::Deal => Some(TableEvent::NewHand),
            Self::Humans(count) => Some(TableEvent::ChangeHumanCount(count.clone())),
            Self::Qr => Some(TableEvent::ToggleQr),
            Self::Help | Self::Quit => None,
        }
    }
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `humans` given without a count.
    HumansMissingCount,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HumansMissingCount => {
                write!(f, "Humans requires a count (e.g., 'humans 3')")
            }
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Press Tab to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a TableCommand.
///
/// # Examples
///
/// ```
/// use vp_client::commands::{TableCommand, parse_command};
///
/// assert_eq!(parse_command("deal"), Ok(TableCommand::Deal));
/// assert_eq!(parse_command("humans 3"), Ok(TableCommand::Humans("3".into())));
/// assert_eq!(parse_command("qr"), Ok(TableCommand::Qr));
/// ```
pub fn parse_command(input: &str) -> Result<TableCommand, ParseError> {
    let trimmed = input.trim();
    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (trimmed, ""),
    };

    match cmd.to_lowercase().as_str() {
        "deal" | "new" | "n" => Ok(TableCommand::Deal),
        "humans" | "h" => {
            if rest.is_empty() {
                Err(ParseError::HumansMissingCount)
            } else {
                Ok(TableCommand::Humans(rest.to_string()))
            }
        }
        "qr" | "share" => Ok(TableCommand::Qr),
        "help" | "?" => Ok(TableCommand::Help),
        "quit" | "exit" | "q" => Ok(TableCommand::Quit),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_commands() {
        assert_eq!(parse_command("deal"), Ok(TableCommand::Deal));
        assert_eq!(parse_command("  NEW "), Ok(TableCommand::Deal));
        assert_eq!(parse_command("qr"), Ok(TableCommand::Qr));
        assert_eq!(parse_command("help"), Ok(TableCommand::Help));
        assert_eq!(parse_command("quit"), Ok(TableCommand::Quit));
    }

    #[test]
    fn test_humans_keeps_raw_value() {
        assert_eq!(parse_command("humans 4"), Ok(TableCommand::Humans("4".into())));
        assert_eq!(parse_command("humans  abc "), Ok(TableCommand::Humans("abc".into())));
        assert_eq!(parse_command("h 12"), Ok(TableCommand::Humans("12".into())));
    }

    #[test]
    fn test_humans_missing_count() {
        assert_eq!(parse_command("humans"), Err(ParseError::HumansMissingCount));
        assert_eq!(parse_command("humans   "), Err(ParseError::HumansMissingCount));
    }

    #[test]
    fn test_unrecognized() {
        let err = parse_command("raise 100").unwrap_err();
        assert_eq!(err, ParseError::UnrecognizedCommand("raise 100".into()));
        assert!(err.to_string().contains("raise 100"));
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_to_event() {
        assert_eq!(TableCommand::Deal.to_event(), Some(TableEvent::NewHand));
        assert_eq!(
            TableCommand::Humans("2".into()).to_event(),
            Some(TableEvent::ChangeHumanCount("2".into()))
        );
        assert_eq!(TableCommand::Qr.to_event(), Some(TableEvent::ToggleQr));
        assert_eq!(TableCommand::Help.to_event(), None);
        assert_eq!(TableCommand::Quit.to_event(), None);
    }
}
