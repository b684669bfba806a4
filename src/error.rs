//! Error types for the onerepmax application.

use thiserror::Error;

/// Errors that can occur when resolving a formula identifier.
#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("unknown formula: {0}")]
    Unknown(String),
}

/// Errors that can occur when parsing an interactive command.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    #[error("invalid repetitions value: {0}")]
    InvalidReps(String),
}

/// Errors that can occur when copying to the terminal clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this output")]
    Unavailable,

    #[error("failed to write clipboard sequence: {0}")]
    Io(#[from] std::io::Error),
}
