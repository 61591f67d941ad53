//! Line commands understood by the driver.

use radiogroup::{ConfigError, SelectionMode};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  add [n]                 add n new buttons (default 1)
  remove <index>          remove the member at index
  press <index>           request a state change on the member at index
  set <index> on|off      set the member's state, bypassing vetoes
  veto <index> on|off     deny or allow state change requests for a member
  defaults [index...]     seed exactly these members as pressed
  mode single|multiple    change the selection mode
  keep on|off             keep at least one member pressed
  show                    print members and pressed indexes
  help                    print this message
  quit                    exit";

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(usize),
    Remove(usize),
    Press(usize),
    Set(usize, bool),
    Veto(usize, bool),
    Defaults(Vec<usize>),
    Mode(SelectionMode),
    Keep(bool),
    Show,
    Help,
    Quit,
}

/// Errors produced while parsing or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid {argument} '{value}'")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No member at index {index} (group has {len})")]
    NoSuchMember { index: usize, len: usize },
}

impl Command {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let command = match name {
            "add" => Command::Add(match words.next() {
                Some(count) => parse_count(count)?,
                None => 1,
            }),
            "remove" => Command::Remove(parse_index(required(&mut words, "remove", "index")?)?),
            "press" => Command::Press(parse_index(required(&mut words, "press", "index")?)?),
            "set" => {
                let index = parse_index(required(&mut words, "set", "index")?)?;
                Command::Set(index, parse_switch(required(&mut words, "set", "on|off")?)?)
            }
            "veto" => {
                let index = parse_index(required(&mut words, "veto", "index")?)?;
                Command::Veto(index, parse_switch(required(&mut words, "veto", "on|off")?)?)
            }
            "defaults" => Command::Defaults(words.map(parse_index).collect::<Result<Vec<_>, _>>()?),
            "mode" => Command::Mode(required(&mut words, "mode", "single|multiple")?.parse::<SelectionMode>()?),
            "keep" => Command::Keep(parse_switch(required(&mut words, "keep", "on|off")?)?),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    words
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn parse_index(value: &str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        argument: "index",
        value: value.to_string(),
    })
}

fn parse_count(value: &str) -> Result<usize, CommandError> {
    match value.parse() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(CommandError::InvalidArgument {
            argument: "count",
            value: value.to_string(),
        }),
    }
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CommandError::InvalidArgument {
            argument: "switch",
            value: value.to_string(),
        }),
    }
}
