//! Configuration errors.
//!
//! Group and button operations never fail; misuse is ignored and rejected
//! transitions are silent. Only parsing configuration values can error.

use thiserror::Error;

/// Errors produced while parsing group configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The string does not name a selection mode.
    #[error("Unknown selection mode '{0}' (expected 'single' or 'multiple')")]
    UnknownSelectionMode(String),
}
