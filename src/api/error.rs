//! Normalized failure shape of every API operation.

use reqwest::StatusCode;

pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown for failures the user cannot act on beyond retrying.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network or server error. Please try again later.";

/// Client-side API errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Clinic backend is not reachable at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("HTTP client error: {0}")]
    Http(String),
    #[error("Backend returned error (status {status}): {message}")]
    Status { status: u16, message: String },
    #[error("Response parsing error: {0}")]
    Parse(String),
    #[error("Login response carried no token")]
    MissingToken,
}

impl ApiError {
    /// Message suitable for a blocking notification.
    ///
    /// Status failures carry the backend's own message; everything else
    /// collapses to a generic network message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::MissingToken => "Login failed: no session token was issued.".to_string(),
            Self::Connection(_) | Self::Timeout(_) | Self::Http(_) | Self::Parse(_) => {
                NETWORK_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// True when the backend answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Build a status error from a response body.
    ///
    /// JSON bodies contribute their `message` or `error` field; plain-text
    /// bodies are used verbatim; empty bodies fall back to the reason phrase.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: status_message(status, body),
        }
    }
}

fn status_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
        if let Some(text) = value.as_str() {
            if !text.trim().is_empty() {
                return text.trim().to_string();
            }
        }
    } else if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_message_field_is_preferred() {
        let err = ApiError::from_status(
            StatusCode::CONFLICT,
            r#"{"message": "Doctor already exists"}"#,
        );
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Doctor already exists".into()
            }
        );
        assert_eq!(err.user_message(), "Doctor already exists");
    }

    #[test]
    fn json_error_field_is_used() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "Invalid token or unauthorized"}"#,
        );
        assert_eq!(err.user_message(), "Invalid token or unauthorized");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, "Unauthorized\n");
        assert_eq!(err.user_message(), "Unauthorized");
    }

    #[test]
    fn empty_body_falls_back_to_reason_phrase() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(err.user_message(), "Not Found");
    }

    #[test]
    fn transport_failures_share_generic_message() {
        for err in [
            ApiError::Connection("http://localhost:8080".into()),
            ApiError::Timeout(30),
            ApiError::Parse("expected value".into()),
        ] {
            assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
            assert!(!err.is_status());
        }
    }
}
