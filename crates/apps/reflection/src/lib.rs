//! Reflection apps: Lucid Mode training and Shadow Work prompts.
//!
//! Both read the shared journal and keep their own state for the session only.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod lucid;
mod shadow;

pub use lucid::{LucidModeApp, LucidStats, EXERCISES};
pub use shadow::{shadow_insights, ReflectionLog, ShadowWorkApp, ARCHETYPES, PROMPTS};

/// Steps a carousel index forward or back, wrapping at both ends.
pub(crate) fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// First `limit` characters, with an ellipsis when cut.
pub(crate) fn truncate(content: &str, limit: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Uniform sample in `[0, 1)` for reminder rolls.
pub(crate) fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or_default();
        f64::from(nanos % 1_000) / 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(0, 5, false), 4);
        assert_eq!(cycle(4, 5, true), 0);
        assert_eq!(cycle(2, 6, true), 3);
        assert_eq!(cycle(0, 0, true), 0);
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
