//! Error type for every API and session operation.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("not signed in")]
    Unauthenticated,
}

/// Error payload the API sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

impl ApiError {
    /// Text to show the user: the server's own message or validation text
    /// when there is one, else `fallback` ("Login failed", ...).
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(
            ApiError::Network("timeout".to_string()).user_message("Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 401,
            message: None,
        };
        assert_eq!(err.to_string(), "server returned 401: no details");
    }
}
