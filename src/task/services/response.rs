//! Uniform response envelope for use-case operations.

use serde::{Deserialize, Serialize};

/// Outcome wrapper returned by every use-case operation.
///
/// Failures are reported through the envelope rather than an error type;
/// callers branch on [`UseCaseResponse::success`]. `data` and `error` are
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseResponse<T> {
    /// Numeric status code describing the outcome.
    pub status: u16,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation result, present on success for data-bearing operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> UseCaseResponse<T> {
    /// Wraps a successful result.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            status: 200,
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Reports success without a payload.
    #[must_use]
    pub const fn ok_empty() -> Self {
        Self {
            status: 200,
            success: true,
            data: None,
            error: None,
        }
    }

    /// Reports a failure with the given status code and message.
    #[must_use]
    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
