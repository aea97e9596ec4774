//! Typed host-domain contracts shared by the desktop runtime and the applications.
//!
//! This crate owns the dream-journal store, the text-generation service boundary (Gemini client,
//! simulated responder, and prompt helpers), and small time helpers. It has no UI.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod generation;
pub mod journal;
pub mod time;

pub use generation::config::GenerationConfig;
pub use generation::gemini::{GeminiTextService, GenerateContentRequest, GenerateContentResponse};
pub use generation::oracle::{
    analysis_or_fallback, completion_or_fallback, parse_email, parse_list, DreamEmail,
    DreamOracle, DreamTags, ANALYSIS_UNAVAILABLE, COMPLETION_FADES, DEFAULT_EMAIL_SUBJECT,
};
pub use generation::service::{
    build_text_service, simulate_response, FallbackTextService, GenerationError,
    SimulatedTextService, TextGenerationFuture, TextGenerationService, SIMULATED_ANALYSIS,
    SIMULATED_COMPLETIONS, SIMULATED_GENERIC,
};
pub use journal::{
    sort_entries, DreamCategory, DreamEntry, DreamFilter, DreamJournal, DreamSort, EmotionTrend,
    JournalError, TagFrequency, TagKind, Trend,
};
pub use time::{format_clock, format_date, unix_time_ms_now, DAY_MS};
