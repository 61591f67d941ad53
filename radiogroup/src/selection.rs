//! Selection mode for radio groups.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How many members of a group may be pressed at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Pressing a member unpresses every other member (radio-button style).
    #[default]
    Single,
    /// Members are pressed and unpressed independently (checkbox style).
    Multiple,
}

impl SelectionMode {
    /// Check if this mode allows at most one pressed member.
    pub fn is_exclusive(self) -> bool {
        matches!(self, SelectionMode::Single)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Multiple => write!(f, "multiple"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multiple" | "multi" => Ok(SelectionMode::Multiple),
            _ => Err(ConfigError::UnknownSelectionMode(s.to_string())),
        }
    }
}
