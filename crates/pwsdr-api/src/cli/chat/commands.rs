//! Slash commands for the console conversation.
//!
//! Typed lines that do not start with `/` are user utterances. Commands
//! stand in for the LLM side of the call: setting lead fields, reading the
//! draft back and saving it.

use std::io::Write;

use console::style;

/// Available slash commands.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Show the lead collected so far.
    Draft,
    /// Print the read-back summary without closing.
    Summary,
    /// Save the draft as a lead.
    Save,
    /// Overwrite one lead field.
    Set { field: String, value: String },
    /// A known command used wrongly; carries the usage line.
    Usage(String),
    /// Unknown command; carries the command name.
    Unknown(String),
}

const SET_USAGE: &str = "Usage: /set <field> <value>";

/// Parse user input as a slash command. `None` if it is not one.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd.to_lowercase(), arg.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/draft" | "/lead" => Some(ChatCommand::Draft),
        "/summary" => Some(ChatCommand::Summary),
        "/save" => Some(ChatCommand::Save),
        "/set" => match arg.split_once(char::is_whitespace) {
            Some((field, value)) if !value.trim().is_empty() => Some(ChatCommand::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            }),
            _ => Some(ChatCommand::Usage(SET_USAGE.to_string())),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Write a usage hint for a mistyped command.
pub fn print_usage(out: &mut impl Write, usage: &str) -> std::io::Result<()> {
    writeln!(out, "  {} {}", style("!").yellow().bold(), usage)
}

/// Write the command list to `out`.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    let rows = [
        ("/set <field> <value>", "Set name, email, role, interest or timeline"),
        ("/draft", "Show the lead collected so far"),
        ("/summary", "Read the lead summary back"),
        ("/save", "Save the lead and end the call"),
        ("/clear", "Clear the screen"),
        ("/help", "Show this help message"),
        ("/exit", "End the session without saving"),
    ];

    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    for (cmd, desc) in rows {
        writeln!(out, "  {:<22} {}", style(cmd).cyan(), desc)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Anything else is said to the agent. Saying \"thanks\" or \"that's all\" ends the call.")
            .dim()
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help_and_exit() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /EXIT  "), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_set_keeps_multiword_value() {
        assert_eq!(
            parse("/set name Asha Sharma"),
            Some(ChatCommand::Set {
                field: "name".to_string(),
                value: "Asha Sharma".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_set_requires_value() {
        assert_eq!(
            parse("/set email"),
            Some(ChatCommand::Usage("Usage: /set <field> <value>".to_string()))
        );
        assert!(matches!(parse("/set"), Some(ChatCommand::Usage(_))));
    }

    #[test]
    fn test_usage_hint_is_not_reported_as_unknown() {
        let Some(ChatCommand::Usage(usage)) = parse("/set name") else {
            panic!("expected a usage hint");
        };
        let mut buf = Vec::new();
        print_usage(&mut buf, &usage).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("/set <field> <value>"));
        assert!(!text.contains("Unknown command"));
    }

    #[test]
    fn test_parse_set_does_not_validate_field() {
        // Field names are checked when applied to the conversation.
        assert_eq!(
            parse("/set phone 12345"),
            Some(ChatCommand::Set {
                field: "phone".to_string(),
                value: "12345".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_lead_commands() {
        assert_eq!(parse("/draft"), Some(ChatCommand::Draft));
        assert_eq!(parse("/lead"), Some(ChatCommand::Draft));
        assert_eq!(parse("/summary"), Some(ChatCommand::Summary));
        assert_eq!(parse("/save"), Some(ChatCommand::Save));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("what courses do you offer?"), None);
        assert_eq!(parse("thanks, that's all"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }

    #[test]
    fn test_help_lists_set() {
        let mut buf = Vec::new();
        print_help(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("/set <field> <value>"));
        assert!(text.contains("/save"));
    }
}
