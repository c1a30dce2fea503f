//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::suggest::{ProviderError, SuggestionProvider, SuggestionRequest};

/// A provider that returns a fixed response for tests that don't need
/// real API calls.
pub struct StaticProvider {
    pub text: String,
}

impl StaticProvider {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl SuggestionProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate(&self, _request: SuggestionRequest<'_>) -> Result<String, ProviderError> {
        Ok(self.text.clone())
    }
}

/// A provider that always fails with the given error.
pub struct FailingProvider {
    pub error: ProviderError,
}

#[async_trait]
impl SuggestionProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: SuggestionRequest<'_>) -> Result<String, ProviderError> {
        Err(match &self.error {
            ProviderError::Network(m) => ProviderError::Network(m.clone()),
            ProviderError::Api { status, message } => ProviderError::Api {
                status: *status,
                message: message.clone(),
            },
            ProviderError::Parse(m) => ProviderError::Parse(m.clone()),
            ProviderError::NoCandidates => ProviderError::NoCandidates,
        })
    }
}

/// Creates a test App with a StaticProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(StaticProvider::new("alpha, beta, gamma")),
        "test-model".to_string(),
    )
}
