use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while requesting keyword ideas.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response; `message` is the provider-supplied
    /// detail, or "Unknown error" when the body carried none.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response body.
    Parse(String),
    /// The response parsed but held no usable candidate text.
    NoCandidates,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::NoCandidates => write!(f, "response contained no candidates"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    /// Maps the error onto the message shown in the error banner.
    ///
    /// A missing candidate shape gets its own verbatim message; everything
    /// else is prefixed as a generation failure.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::NoCandidates => {
                "Could not generate keyword ideas. Please try again.".to_string()
            }
            other => format!("Failed to generate ideas: {other}"),
        }
    }
}

/// Everything a provider needs to fulfill one generation request.
pub struct SuggestionRequest<'a> {
    pub seed: &'a str,
    pub model: &'a str,
}

/// A backend that turns a seed keyword into raw suggestion text.
///
/// Implementations own prompt construction and the wire format; callers split
/// the returned text into the idea list.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Performs one generation call and returns the first candidate's text.
    async fn generate(&self, request: SuggestionRequest<'_>) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_api_error_carries_status_and_message() {
        let err = ProviderError::Api {
            status: 500,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn test_user_message_no_candidates_is_verbatim() {
        assert_eq!(
            ProviderError::NoCandidates.user_message(),
            "Could not generate keyword ideas. Please try again."
        );
    }

    #[test]
    fn test_user_message_prefixes_other_failures() {
        let err = ProviderError::Network("connection refused".to_string());
        let msg = err.user_message();
        assert!(msg.starts_with("Failed to generate ideas: "));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_user_message_api_error_keeps_status_and_detail() {
        let err = ProviderError::Api {
            status: 500,
            message: "quota exceeded".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("500"));
        assert!(msg.contains("quota exceeded"));
    }
}
