//! Dream-specific prompts layered over a [`TextGenerationService`].

use std::rc::Rc;

use leptos::logging::warn;

use super::service::{GenerationError, TextGenerationService};
use crate::journal::DreamEntry;

/// Shown in place of an analysis when generation fails.
pub const ANALYSIS_UNAVAILABLE: &str =
    "The dream realm is currently unreachable. Please try again later.";
/// Appended in place of a continuation when generation fails.
pub const COMPLETION_FADES: &str = "...the dream fades into whispers of the unconscious...";
/// Subject used when a generated email carries no `SUBJECT:` line.
pub const DEFAULT_EMAIL_SUBJECT: &str = "Message from the Dream Realm";

const MAX_EMOTIONS: usize = 5;
const MAX_SYMBOLS: usize = 7;
const MAX_CHARACTERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Email written in the voice of a dream character.
pub struct DreamEmail {
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Tags detected for a journal entry.
pub struct DreamTags {
    /// Up to five emotions.
    pub emotions: Vec<String>,
    /// Up to seven symbols.
    pub symbols: Vec<String>,
    /// Up to five characters.
    pub characters: Vec<String>,
}

/// Splits a comma-separated model reply into at most `limit` trimmed, non-empty items.
pub fn parse_list(response: &str, limit: usize) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Extracts `SUBJECT:` / `CONTENT:` sections from a model reply.
///
/// Without a `SUBJECT:` line the whole reply becomes the body under [`DEFAULT_EMAIL_SUBJECT`].
pub fn parse_email(response: &str) -> DreamEmail {
    let lines: Vec<&str> = response.split('\n').collect();
    for (index, line) in lines.iter().enumerate() {
        if let Some(subject) = line.strip_prefix("SUBJECT:") {
            let content = lines[index + 1..]
                .join("\n")
                .replacen("CONTENT:", "", 1)
                .trim()
                .to_string();
            return DreamEmail {
                subject: subject.trim().to_string(),
                content,
            };
        }
    }
    DreamEmail {
        subject: DEFAULT_EMAIL_SUBJECT.to_string(),
        content: response.to_string(),
    }
}

/// Maps an analysis result to display text, logging failures.
pub fn analysis_or_fallback(result: Result<String, GenerationError>) -> String {
    result.unwrap_or_else(|err| {
        warn!("oracle: analysis failed: {err}");
        ANALYSIS_UNAVAILABLE.to_string()
    })
}

/// Maps a completion result to display text, logging failures.
pub fn completion_or_fallback(result: Result<String, GenerationError>) -> String {
    result.unwrap_or_else(|err| {
        warn!("oracle: completion failed: {err}");
        COMPLETION_FADES.to_string()
    })
}

#[derive(Clone)]
/// Dream-interpretation prompts over a shared text service.
pub struct DreamOracle {
    service: Rc<dyn TextGenerationService>,
}

impl DreamOracle {
    /// Wraps `service`.
    pub fn new(service: Rc<dyn TextGenerationService>) -> Self {
        Self { service }
    }

    async fn ask(&self, prompt: String) -> Result<String, GenerationError> {
        self.service.generate(&prompt).await
    }

    /// Continues a partially written dream.
    pub async fn complete_dream(&self, dream_text: &str) -> Result<String, GenerationError> {
        self.ask(format!(
            "You are a mystical dream interpreter with deep knowledge of Jungian psychology and surreal symbolism.\n\n\
             The user has started writing this dream:\n\"{dream_text}\"\n\n\
             Continue this dream in a poetic, surreal, and slightly mysterious tone. Use vivid imagery, symbolic elements, \
             and maintain the dreamlike quality. The continuation should flow naturally from the original text and explore \
             deeper psychological themes. Keep it between 50-150 words.\n\nContinue the dream:"
        ))
        .await
    }

    /// Produces a sectioned interpretation of a dream.
    pub async fn analyze_dream(&self, dream_text: &str) -> Result<String, GenerationError> {
        self.ask(format!(
            "You are a wise dream analyst versed in Jungian psychology, symbolism, and the language of the unconscious mind.\n\n\
             Analyze this dream:\n\"{dream_text}\"\n\n\
             Provide a mystical yet insightful analysis that includes:\n\
             1. Key symbols and their meanings\n\
             2. Emotional undertones and their intensity\n\
             3. Archetypal figures or themes present\n\
             4. Psychological interpretation\n\
             5. Guidance for the dreamer\n\n\
             Format your response with emojis and clear sections. Be poetic but meaningful, mysterious but helpful."
        ))
        .await
    }

    /// Writes an email from `character` referencing `themes`.
    pub async fn generate_dream_email(
        &self,
        themes: &[String],
        character: &str,
    ) -> Result<DreamEmail, GenerationError> {
        let themes = themes.join(", ");
        let response = self
            .ask(format!(
                "You are {character}, a mysterious character from someone's dreams. Based on these dream themes: {themes}\n\n\
                 Write a cryptic, poetic email that this dream character would send. The email should be mysterious and \
                 slightly eerie, reference the dream themes subtly, feel like it comes from the subconscious, be 100-200 words \
                 and have a compelling subject line.\n\n\
                 Respond in this format:\nSUBJECT: [subject line]\nCONTENT: [email content]"
            ))
            .await?;
        Ok(parse_email(&response))
    }

    /// Detects up to five primary emotions.
    pub async fn detect_emotions(&self, dream_text: &str) -> Result<Vec<String>, GenerationError> {
        let response = self
            .ask(format!(
                "Identify the emotional content of this dream and return only the primary emotions present:\n\n\"{dream_text}\"\n\n\
                 Return only a comma-separated list of emotions (max 5). Choose from: wonder, anxiety, joy, fear, nostalgia, \
                 love, anger, sadness, excitement, confusion, peace, dread, euphoria, melancholy, curiosity.\n\n\
                 Example response: wonder, nostalgia, anxiety"
            ))
            .await?;
        Ok(parse_list(&response, MAX_EMOTIONS))
    }

    /// Detects up to seven archetypal symbols.
    pub async fn detect_symbols(&self, dream_text: &str) -> Result<Vec<String>, GenerationError> {
        let response = self
            .ask(format!(
                "Identify the key symbolic elements in this dream:\n\n\"{dream_text}\"\n\n\
                 Return only a comma-separated list of symbols (max 7). Focus on archetypal symbols like: water, fire, \
                 flying, falling, doors, mirrors, animals, death, birth, houses, roads, bridges, mountains, forests.\n\n\
                 Example response: water, flying, mirrors, doors"
            ))
            .await?;
        Ok(parse_list(&response, MAX_SYMBOLS))
    }

    /// Detects up to five significant dream characters.
    pub async fn detect_characters(
        &self,
        dream_text: &str,
    ) -> Result<Vec<String>, GenerationError> {
        let response = self
            .ask(format!(
                "Identify the significant characters or figures in this dream:\n\n\"{dream_text}\"\n\n\
                 Return only a comma-separated list of character types (max 5). Use archetypal descriptions like: \
                 shadow self, wise guide, inner child, anima, animus, mother figure, father figure, stranger, past love, \
                 future self.\n\nExample response: shadow self, wise guide, stranger"
            ))
            .await?;
        Ok(parse_list(&response, MAX_CHARACTERS))
    }

    /// Writes an image-generation prompt capturing the dream's visuals.
    pub async fn image_prompt(&self, dream_text: &str) -> Result<String, GenerationError> {
        self.ask(format!(
            "Create a detailed image generation prompt for this dream:\n\n\"{dream_text}\"\n\n\
             Generate a prompt suitable for AI image generation that captures the essence, mood, and key visual elements \
             of this dream. Make it surreal, artistic, and dreamlike. Include style descriptors like \"surreal digital art\", \
             \"dreamscape\", \"ethereal\".\n\nKeep it under 100 words and focus on visual elements."
        ))
        .await
    }

    /// Detects every tag list for an entry; failed detections yield empty lists.
    pub async fn enhance_entry(&self, entry: &DreamEntry) -> DreamTags {
        let recover = |kind: &str, result: Result<Vec<String>, GenerationError>| {
            result.unwrap_or_else(|err| {
                warn!("oracle: {kind} detection failed for `{}`: {err}", entry.id);
                Vec::new()
            })
        };
        DreamTags {
            emotions: recover("emotion", self.detect_emotions(&entry.content).await),
            symbols: recover("symbol", self.detect_symbols(&entry.content).await),
            characters: recover("character", self.detect_characters(&entry.content).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::generation::service::TextGenerationFuture;

    #[derive(Default)]
    struct ScriptedService {
        replies: RefCell<VecDeque<Result<String, GenerationError>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedService {
        fn with(replies: Vec<Result<String, GenerationError>>) -> Rc<Self> {
            Rc::new(Self {
                replies: RefCell::new(replies.into()),
                prompts: RefCell::default(),
            })
        }
    }

    impl TextGenerationService for ScriptedService {
        fn generate<'a>(
            &'a self,
            prompt: &'a str,
        ) -> TextGenerationFuture<'a, Result<String, GenerationError>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(GenerationError::Transport("script exhausted".into())));
            Box::pin(async move { reply })
        }
    }

    #[test]
    fn lists_are_trimmed_and_capped() {
        assert_eq!(
            parse_list(" water, fire ,, flying, doors, mirrors, roads, bridges, forests", 7),
            vec!["water", "fire", "flying", "doors", "mirrors", "roads", "bridges"]
        );
    }

    #[test]
    fn email_sections_are_extracted() {
        let email = parse_email("Preamble\nSUBJECT:  The Door Remembers \nCONTENT: Come back.\nSoon.");
        assert_eq!(
            email,
            DreamEmail {
                subject: "The Door Remembers".to_string(),
                content: "Come back.\nSoon.".to_string(),
            }
        );
    }

    #[test]
    fn email_without_subject_uses_default() {
        let email = parse_email("just a whisper");
        assert_eq!(email.subject, DEFAULT_EMAIL_SUBJECT);
        assert_eq!(email.content, "just a whisper");
    }

    #[test]
    fn failures_map_to_fallback_text() {
        let err = || Err(GenerationError::Transport("offline".into()));
        assert_eq!(analysis_or_fallback(err()), ANALYSIS_UNAVAILABLE);
        assert_eq!(completion_or_fallback(err()), COMPLETION_FADES);
        assert_eq!(completion_or_fallback(Ok("more".into())), "more");
    }

    #[test]
    fn prompts_embed_the_dream_text() {
        let service = ScriptedService::with(vec![Ok("...".into())]);
        let oracle = DreamOracle::new(service.clone());
        block_on(oracle.complete_dream("a house of doors")).unwrap();
        assert!(service.prompts.borrow()[0].contains("\"a house of doors\""));
    }

    #[test]
    fn enhance_entry_keeps_successful_detections() {
        let service = ScriptedService::with(vec![
            Ok("wonder, joy".into()),
            Err(GenerationError::Decode("bad".into())),
            Ok("wise guide".into()),
        ]);
        let oracle = DreamOracle::new(service);
        let entry = DreamEntry::new("dream-1", "t", "c", 0);

        let tags = block_on(oracle.enhance_entry(&entry));
        assert_eq!(
            tags,
            DreamTags {
                emotions: vec!["wonder".to_string(), "joy".to_string()],
                symbols: Vec::new(),
                characters: vec!["wise guide".to_string()],
            }
        );
    }
}
