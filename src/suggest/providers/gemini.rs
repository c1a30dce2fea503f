//! Gemini provider implementation using the generateContent API.
//!
//! One awaited POST per generation request; no streaming.
//! The endpoint is `/v1beta/models/{model}:generateContent` with the API key
//! passed as a `key` query parameter, which is why request logging here never
//! prints the full URL.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::suggest::prompt::build_prompt;
use crate::suggest::{ProviderError, SuggestionProvider, SuggestionRequest};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ============================================================================
// Gemini generateContent Wire Types
// ============================================================================

/// The request body for generateContent.
#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// A single content turn in the request.
#[derive(Serialize, Debug)]
struct Content {
    role: &'static str, // always "user", the prompt is single-turn
    parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug)]
struct RequestPart {
    text: String,
}

/// Response envelope. Everything is optional: error handling downstream
/// decides what a missing shape means.
#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

/// Error body shape: `{"error": {"message": "..."}}`.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Wraps a prompt into the single-turn generateContent body.
fn prompt_to_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
    }
}

/// Extracts `candidates[0].content.parts[0].text`, treating an empty string
/// the same as a missing field.
fn extract_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .clone()
        .filter(|text| !text.is_empty())
}

/// Pulls the provider-supplied message out of an error body, falling back to
/// "Unknown error" when the body is absent, unparseable, or blank.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Gemini generative-language provider.
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key
    /// * `base_url` - Optional custom base URL (defaults to Google's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Sends one generateContent request and returns the raw response.
    async fn send_request(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let path = format!("/v1beta/models/{model}:generateContent");
        info!("Gemini request: POST {path}");
        debug!(
            "Gemini request body: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {} - {}", status, body);
            return Err(ProviderError::Api {
                status,
                message: error_message_from_body(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: SuggestionRequest<'_>) -> Result<String, ProviderError> {
        let prompt = build_prompt(request.seed);
        let body = prompt_to_request(prompt);

        let response = self.send_request(request.model, &body).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        match extract_candidate_text(&parsed) {
            Some(text) => {
                info!("Gemini response: {} candidate bytes", text.len());
                Ok(text)
            }
            None => {
                warn!("Gemini response carried no candidate text");
                Err(ProviderError::NoCandidates)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_contents_shape() {
        let request = prompt_to_request("list some keywords".to_string());
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""contents":[{"role":"user","parts":[{"text":"list some keywords"}]}]"#));
    }

    #[test]
    fn test_extract_candidate_text_happy_path() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "a, b, c"}], "role": "model"}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_candidate_text(&response).as_deref(), Some("a, b, c"));
    }

    #[test]
    fn test_extract_candidate_text_uses_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_candidate_text(&response).as_deref(), Some("first"));
    }

    #[test]
    fn test_extract_candidate_text_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_candidate_text(&response).is_none());
    }

    #[test]
    fn test_extract_candidate_text_empty_parts() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(extract_candidate_text(&response).is_none());
    }

    #[test]
    fn test_extract_candidate_text_empty_string_counts_as_missing() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(extract_candidate_text(&response).is_none());
    }

    #[test]
    fn test_error_message_from_body_extracts_detail() {
        let body = r#"{"error":{"code":500,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_message_from_body(body), "quota exceeded");
    }

    #[test]
    fn test_error_message_from_body_falls_back_on_garbage() {
        assert_eq!(error_message_from_body("not json"), "Unknown error");
        assert_eq!(error_message_from_body(""), "Unknown error");
        assert_eq!(error_message_from_body(r#"{"error":{"message":""}}"#), "Unknown error");
    }

    #[test]
    fn test_default_base_url() {
        let provider = GeminiProvider::new("key".to_string(), None);
        assert_eq!(provider.base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
