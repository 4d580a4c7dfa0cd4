//! Owner-only toggle commands.

use std::str::FromStr;

use strum::{Display, EnumString};

/// Direct-message commands that flip the global active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ToggleCommand {
    #[strum(serialize = "ativar bot")]
    Enable,
    #[strum(serialize = "desativar bot")]
    Disable,
}

impl ToggleCommand {
    /// Parses a raw message, ignoring surrounding whitespace and letter case.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::from_str(text.trim()).ok()
    }

    /// Value of the active flag after this command runs.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, ToggleCommand::Enable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_case_and_padding() {
        assert_eq!(
            ToggleCommand::parse("  Desativar Bot \n"),
            Some(ToggleCommand::Disable)
        );
        assert_eq!(ToggleCommand::parse("ATIVAR BOT"), Some(ToggleCommand::Enable));
    }

    #[test]
    fn rejects_other_text() {
        assert_eq!(ToggleCommand::parse("ativar o bot"), None);
        assert_eq!(ToggleCommand::parse("ativar bot agora"), None);
        assert_eq!(ToggleCommand::parse(""), None);
    }

    #[test]
    fn display_uses_command_keyword() {
        assert_eq!(ToggleCommand::Disable.to_string(), "desativar bot");
        assert!(ToggleCommand::Enable.activates());
        assert!(!ToggleCommand::Disable.activates());
    }
}
