//! Gemini `generateContent` REST client.

use serde::{Deserialize, Serialize};

use super::{
    config::GenerationConfig,
    service::{GenerationError, TextGenerationFuture, TextGenerationService},
};

/// Text returned when the backend answers without any candidate text.
pub const EMPTY_RESPONSE_TEXT: &str = "No response generated";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One text part of a content block.
pub struct Part {
    /// Part text.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Content block made of parts.
pub struct Content {
    /// Ordered parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sampling parameters sent with each request.
pub struct GenerationParameters {
    /// Sampling temperature.
    pub temperature: f64,
    /// Top-k cutoff.
    pub top_k: u32,
    /// Nucleus cutoff.
    pub top_p: f64,
    /// Response length cap.
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// `generateContent` request body.
pub struct GenerateContentRequest {
    /// Single-turn prompt content.
    pub contents: Vec<Content>,
    /// Sampling parameters.
    pub generation_config: GenerationParameters,
}

impl GenerateContentRequest {
    /// Builds a single-prompt request using the sampling parameters in `config`.
    pub fn new(prompt: &str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationParameters {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One response candidate.
pub struct Candidate {
    /// Candidate content; absent when the candidate was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// `generateContent` response body.
pub struct GenerateContentResponse {
    /// Ranked candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, or [`EMPTY_RESPONSE_TEXT`].
    pub fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_string())
    }
}

#[derive(Debug, Clone)]
/// [`TextGenerationService`] backed by the Gemini REST API.
pub struct GeminiTextService {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl GeminiTextService {
    /// Creates a client for `config`.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    async fn request(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;
        let body = GenerateContentRequest::new(prompt, &self.config);
        let response = self
            .client
            .post(self.config.request_url(api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Decode(err.to_string()))?;
        Ok(decoded.into_text())
    }
}

impl TextGenerationService for GeminiTextService {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
        Box::pin(self.request(prompt))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = GenerateContentRequest::new("dream of glass", &GenerationConfig::default());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{ "parts": [{ "text": "dream of glass" }] }],
                "generationConfig": {
                    "temperature": 0.8,
                    "topK": 40,
                    "topP": 0.95,
                    "maxOutputTokens": 1024
                }
            })
        );
    }

    #[test]
    fn response_text_comes_from_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "first");
    }

    #[test]
    fn empty_response_yields_placeholder_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), EMPTY_RESPONSE_TEXT);

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{}] })).unwrap();
        assert_eq!(blocked.into_text(), EMPTY_RESPONSE_TEXT);
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let service = GeminiTextService::new(GenerationConfig::default());
        assert_eq!(
            block_on(service.generate("hello")),
            Err(GenerationError::MissingApiKey)
        );
    }
}
