//! Errors.

use std::io;

use thiserror::Error;

/// Error loading a board file.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Failed to read the board file.
    #[error("File error: {0}")]
    Read(#[source] io::Error),

    /// Board file is not valid JSON or does not match the board layout.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// A route refers to a destination missing from the destination list.
    #[error("Route {start} - {end} refers to unknown destination [{key}]")]
    UnknownDestination { start: String, end: String, key: String },
}

/// Error parsing a `start:end` restricted edge.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum RestrictionParseError {
    #[error("Restricted edge must look like `start:end`, got [{0}]")]
    BadFormat(String),
}
