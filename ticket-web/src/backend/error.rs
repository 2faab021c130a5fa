//! Backend API error types.

/// Errors that can occur when talking to the ticketing backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error status
    #[error("backend error {status}: {}", .msg.as_deref().unwrap_or("(no message)"))]
    Api { status: u16, msg: Option<String> },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl BackendError {
    /// The human-readable message carried by the backend's error body, if any.
    ///
    /// Transport and decode failures have no server-supplied message.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            BackendError::Api { msg, .. } => msg.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BackendError::Api {
            status: 503,
            msg: Some("station service down".into()),
        };
        assert_eq!(err.to_string(), "backend error 503: station service down");

        let err = BackendError::Api {
            status: 500,
            msg: None,
        };
        assert_eq!(err.to_string(), "backend error 500: (no message)");

        let err = BackendError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }

    #[test]
    fn user_message_only_from_api_errors() {
        let err = BackendError::Api {
            status: 503,
            msg: Some("station service down".into()),
        };
        assert_eq!(err.user_message(), Some("station service down"));

        let err = BackendError::Api {
            status: 500,
            msg: None,
        };
        assert_eq!(err.user_message(), None);

        let err = BackendError::Json {
            message: "bad json".into(),
        };
        assert_eq!(err.user_message(), None);
    }
}
