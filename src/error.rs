//! Error types for autotag

use crate::domain::rules::ParseError;
use thiserror::Error;

/// Main error type for the autotag engine
#[derive(Debug, Error)]
pub enum AutotagError {
    #[error("invalid regular expression '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
    RuleSyntax(Vec<ParseError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AutotagError {
    /// The collected rule parse errors, if this error came from the parser
    pub fn parse_errors(&self) -> Option<&[ParseError]> {
        match self {
            AutotagError::RuleSyntax(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type using AutotagError
pub type Result<T> = std::result::Result<T, AutotagError>;
