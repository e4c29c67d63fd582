use serde::{Deserialize, Serialize};

/// Centralized error type for everything the remote quiz service can throw
/// at us. Mirrors the `{message, code}` pair the UI layer displays.
///
/// `Clone` because the store keeps the most recent error in its transient
/// error slot alongside the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Non-2xx response from the quiz service; `code` is the numeric HTTP
    /// status rendered as a string.
    #[error("API Error: {message}")]
    Http { message: String, code: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered 2xx but the body did not decode.
    #[error("Invalid response from quiz service: {0}")]
    InvalidResponse(String),

    /// Local condition surfaced to the user, e.g. reaching the results view
    /// with nothing computed. No code.
    #[error("{0}")]
    Message(String),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Http {
            message: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            code: status.as_u16().to_string(),
        }
    }

    /// Human-readable message for display in the UI error slot.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Optional machine-readable code (HTTP status for `Http` errors).
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Http { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::from_status(status)
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
