//! NetBox client errors

use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox API returned an error
    #[error("NetBox API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid token, expired, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (e.g., bad base URL, missing required fields)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NetBoxError {
    /// True when the API answered 404 for the requested object
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetBoxError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(NetBoxError::NotFound("Prefix 1 not found".to_string()).is_not_found());
        assert!(!NetBoxError::Api("500 Internal Server Error".to_string()).is_not_found());
    }

    #[test]
    fn test_error_messages_carry_detail() {
        let err = NetBoxError::Api("POST /ipam/prefixes/ failed: 400 - {\"prefix\":[\"invalid\"]}".to_string());
        assert_eq!(
            err.to_string(),
            "NetBox API error: POST /ipam/prefixes/ failed: 400 - {\"prefix\":[\"invalid\"]}"
        );
    }
}
