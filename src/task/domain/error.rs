//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing task statuses from their wire tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
