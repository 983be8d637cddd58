//! Errors returned by [`ApiClient`](crate::ApiClient) calls.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed: DNS, TLS, refused connection, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a status error, pulling `detail` out of the JSON body if the
    /// backend sent one. Validation errors carry a list; the first message
    /// is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| match v.get("detail")? {
                Value::String(s) => Some(s.clone()),
                Value::Array(items) => items
                    .first()
                    .and_then(|i| i.get("msg"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Text for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Cannot reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { status: 429, .. } => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            ApiError::Status {
                status: 401 | 403, ..
            } => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Status { status: 404, .. } => {
                "The requested item could not be found.".to_string()
            }
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { status, .. } => format!("Something went wrong (HTTP {status})."),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_extracted() {
        let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(err.to_string(), "HTTP 400: Email already registered");
    }

    #[test]
    fn test_validation_detail_uses_first_message() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.user_message(), "value is not a valid email address");
    }

    #[test]
    fn test_status_messages() {
        assert!(ApiError::from_status(429, "").user_message().contains("Too many requests"));
        assert!(ApiError::from_status(401, "{}").is_unauthorized());
        assert!(ApiError::from_status(403, r#"{"detail":"x"}"#)
            .user_message()
            .contains("sign in again"));
        assert!(ApiError::from_status(404, "")
            .user_message()
            .contains("could not be found"));
        assert_eq!(
            ApiError::from_status(500, "<html>").user_message(),
            "Something went wrong (HTTP 500)."
        );
        assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500: no detail");
    }
}
