//! Language-model text generation: service contract, Gemini client, offline responder, and the
//! dream-oracle prompt layer used by the applications.

pub mod config;
pub mod gemini;
pub mod oracle;
pub mod service;
