//! Text-generation configuration.

use serde::{Deserialize, Serialize};

/// Default Gemini REST base path.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Endpoint, credentials, and sampling parameters for the language-model client.
pub struct GenerationConfig {
    /// REST base path; the model and `:generateContent` are appended.
    pub endpoint: String,
    /// Model name.
    pub model: String,
    /// API key; `None` selects simulated responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Top-k sampling cutoff.
    pub top_k: u32,
    /// Nucleus sampling cutoff.
    pub top_p: f64,
    /// Response length cap.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: None,
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

impl GenerationConfig {
    /// Builds the configuration from variables captured at compile time.
    ///
    /// `DREAMLOG_GEMINI_API_KEY` supplies the key and `DREAMLOG_GEMINI_MODEL` overrides the model.
    /// Empty values count as unset.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DREAMLOG_GEMINI_API_KEY"),
            option_env!("DREAMLOG_GEMINI_MODEL"),
        )
    }

    fn from_values(api_key: Option<&str>, model: Option<&str>) -> Self {
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let mut config = Self {
            api_key: non_empty(api_key),
            ..Self::default()
        };
        if let Some(model) = non_empty(model) {
            config.model = model;
        }
        config
    }

    /// Whether a real client can be built from this configuration.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` URL for `api_key`.
    pub fn request_url(&self, api_key: &str) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_joins_endpoint_model_and_key() {
        let config = GenerationConfig::default();
        assert_eq!(
            config.request_url("abc"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent?key=abc"
        );
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = GenerationConfig::from_values(Some("  "), Some(""));
        assert!(!config.has_api_key());
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);

        let config = GenerationConfig::from_values(Some("key"), Some("gemini-pro"));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.model, "gemini-pro");
    }
}
