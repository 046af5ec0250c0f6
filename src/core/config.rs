//! Service configuration loaded from the environment
//!
//! All runtime knobs live here: where the server binds and how the
//! generative backend is reached. Absent variables fall back to defaults
//! so the service always starts; a missing API key only disables the
//! generative translator (the rule-based fallback still works offline).

/// Runtime configuration for the bridge service
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: String,

    /// API key for the generative backend (None = rule-based only)
    pub api_key: Option<String>,

    /// Endpoint URL of the generative backend
    pub api_url: String,

    /// Model identifier sent to the backend
    pub model: String,
}

impl BridgeConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized: DESIGNGEN_ADDR, LLM_API_KEY, LLM_API_URL, LLM_MODEL.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("DESIGNGEN_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".into()),
            api_key: std::env::var("LLM_API_KEY").ok(),
            api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".into()),
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "claude-3-haiku-20240307".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only checks the fields that env vars are unlikely to override in CI
        let config = BridgeConfig::from_env();
        assert!(!config.bind_addr.is_empty());
        assert!(!config.api_url.is_empty());
        assert!(!config.model.is_empty());
    }
}
