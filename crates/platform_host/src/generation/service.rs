//! Text-generation service contract plus simulated and fallback adapters.

use std::{future::Future, pin::Pin, rc::Rc};

use leptos::logging::warn;
use thiserror::Error;

use super::{config::GenerationConfig, gemini::GeminiTextService};

/// Object-safe boxed future used by [`TextGenerationService`].
pub type TextGenerationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by a text-generation backend.
pub enum GenerationError {
    /// The backend needs a key and none is configured.
    #[error("no API key configured")]
    MissingApiKey,
    /// The request never produced an HTTP response.
    #[error("generation request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("generation backend returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
    /// The response body did not match the expected shape.
    #[error("generation response could not be decoded: {0}")]
    Decode(String),
}

/// Host service that turns a prompt into generated text.
pub trait TextGenerationService {
    /// Generates a completion for `prompt`.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> TextGenerationFuture<'a, Result<String, GenerationError>>;
}

/// Canned continuations used when no backend is reachable.
pub const SIMULATED_COMPLETIONS: [&str; 4] = [
    "...and suddenly I found myself floating above a vast ocean of memories, each wave carrying fragments of forgotten moments...",
    "...the mirror showed not my reflection, but the person I might have been in another life, beckoning me to step through...",
    "...in the garden of sleeping thoughts, every flower bloomed with the face of someone I once knew...",
    "...the stairs descended infinitely, each step echoing with the sound of my own heartbeat growing fainter...",
];

/// Canned analysis used when no backend is reachable.
pub const SIMULATED_ANALYSIS: &str = "🔮 DREAM ANALYSIS

Symbols Detected:
• Water: Represents transformation and unconscious wisdom
• Flying: Symbolizes liberation and transcendence
• Doors: Gateways to new experiences and opportunities

Emotional Undertones:
• Wonder: Intensity level 85%
• Curiosity: Intensity level 70%
• Nostalgia: Intensity level 90%

Archetypal Presence:
• Shadow Self: Guiding you toward integration
• Wise Guide: Offering hidden knowledge

Interpretation:
This dream speaks to your journey of self-discovery. The recurring themes suggest a deep desire for transformation and the courage to face hidden aspects of yourself.";

/// Reply for prompts that are neither completions nor analyses.
pub const SIMULATED_GENERIC: &str = "The dream realm whispers secrets only you can understand...";

/// Picks a canned response by prompt keywords (case-insensitive).
///
/// Completion prompts get one of [`SIMULATED_COMPLETIONS`], chosen by prompt length so the
/// output is stable for a given prompt.
pub fn simulate_response(prompt: &str) -> String {
    let lowered = prompt.to_lowercase();
    if lowered.contains("complete") || lowered.contains("continue") {
        let index = prompt.len() % SIMULATED_COMPLETIONS.len();
        return SIMULATED_COMPLETIONS[index].to_string();
    }
    if lowered.contains("analyze") || lowered.contains("interpretation") {
        return SIMULATED_ANALYSIS.to_string();
    }
    SIMULATED_GENERIC.to_string()
}

#[derive(Debug, Clone, Copy, Default)]
/// Offline responder backed by [`simulate_response`].
pub struct SimulatedTextService;

impl TextGenerationService for SimulatedTextService {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move { Ok(simulate_response(prompt)) })
    }
}

#[derive(Debug, Clone, Default)]
/// Wraps a primary backend and answers with simulated text whenever it fails.
pub struct FallbackTextService<P> {
    primary: P,
}

impl<P> FallbackTextService<P> {
    /// Wraps `primary`.
    pub fn new(primary: P) -> Self {
        Self { primary }
    }
}

impl<P: TextGenerationService> TextGenerationService for FallbackTextService<P> {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            match self.primary.generate(prompt).await {
                Ok(text) => Ok(text),
                Err(err) => {
                    warn!("generation: {err}; using simulated response");
                    Ok(simulate_response(prompt))
                }
            }
        })
    }
}

/// Builds the session text service for `config`.
///
/// With a key the Gemini client is wrapped in [`FallbackTextService`]; without one the
/// simulated responder is used and a warning is logged.
pub fn build_text_service(config: GenerationConfig) -> Rc<dyn TextGenerationService> {
    if config.has_api_key() {
        Rc::new(FallbackTextService::new(GeminiTextService::new(config)))
    } else {
        warn!("generation: API key not found, AI features will be simulated");
        Rc::new(SimulatedTextService)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingService;

    impl TextGenerationService for FailingService {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
            Box::pin(async {
                Err(GenerationError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            })
        }
    }

    #[test]
    fn simulated_responses_follow_prompt_keywords() {
        assert!(SIMULATED_COMPLETIONS.contains(&simulate_response("Continue the dream:").as_str()));
        assert_eq!(
            simulate_response("Psychological interpretation please"),
            SIMULATED_ANALYSIS
        );
        assert_eq!(simulate_response("hello"), SIMULATED_GENERIC);
    }

    #[test]
    fn simulated_completion_is_stable_per_prompt() {
        let prompt = "please complete this";
        assert_eq!(simulate_response(prompt), simulate_response(prompt));
    }

    #[test]
    fn fallback_service_masks_primary_failures() {
        let service = FallbackTextService::new(FailingService);
        let text = block_on(service.generate("analyze this")).unwrap();
        assert_eq!(text, SIMULATED_ANALYSIS);
    }

    #[test]
    fn missing_key_builds_the_simulated_service() {
        let service = build_text_service(GenerationConfig::default());
        assert_eq!(block_on(service.generate("hi")), Ok(SIMULATED_GENERIC.to_string()));
    }
}
