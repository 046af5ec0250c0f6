//! JSON request and response models for the HTTP API

use serde::{Deserialize, Serialize};

/// Request body for `POST /translate`
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    /// The design prompt; an absent field reads as empty and is
    /// rejected the same way
    #[serde(default)]
    pub prompt: String,
}

/// Success body for `POST /translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Always "ok"
    pub status: String,
    /// Number of commands appended to the delivery queue
    pub queued_count: usize,
}

/// Error body: `{"status": "error", "msg": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            msg: msg.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Commands currently waiting in the delivery queue
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prompt_field_reads_empty() {
        let req: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_empty());
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse::new("Prompt missing")).unwrap();
        assert_eq!(json, r#"{"status":"error","msg":"Prompt missing"}"#);
    }
}
