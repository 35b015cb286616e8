//! LLM error types.

use thiserror::Error;

/// Errors that can occur when making LLM API calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Fatal configuration problems found while resolving a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The credential variable required by the resolved provider is unset.
    #[error("Missing {0}.")]
    MissingCredential(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_message() {
        let err = ConfigurationError::MissingCredential("ANTHROPIC_API_KEY");
        assert_eq!(err.to_string(), "Missing ANTHROPIC_API_KEY.");
    }

    #[test]
    fn api_error_display() {
        let err = LLMError::Api {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "api error (status 401): invalid key");
    }
}
