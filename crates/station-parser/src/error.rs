//! Error types for the station-parser crate.

use thiserror::Error;

/// Errors that can occur while reading a station file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read station file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Station file is empty (expected a header line)")]
    EmptyFile,

    #[error("Line {line}: expected at least {expected} columns, found {found}")]
    ShortLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid numeric value '{value}' in column {column}")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Unknown observation variable: {0}")]
    UnknownVariable(String),
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
