//! Shared dream-journal store read and written by the desktop applications.
//!
//! The store is plain data: apps hold it behind a reactive signal owned by the desktop session
//! and mutate it through the methods here. Deleting an entry moves it to the trash so the
//! recycle view can restore it; purging removes it for good.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{format_date, DAY_MS};

/// Window used by [`DreamFilter::Recent`].
pub const RECENT_WINDOW_MS: u64 = 7 * DAY_MS;
/// Maximum number of rows returned by [`DreamJournal::emotional_analysis`].
pub const EMOTION_ANALYSIS_LIMIT: usize = 6;

const LUCID_KEYWORDS: [&str; 4] = ["lucid", "control", "realize", "aware"];
const NIGHTMARE_KEYWORDS: [&str; 4] = ["nightmare", "scary", "terrifying", "fear"];
const EMOTIONAL_KEYWORDS: [&str; 5] = ["love", "sad", "happy", "cry", "emotional"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Keyword-derived dream category.
pub enum DreamCategory {
    /// The dreamer noticed they were dreaming.
    Lucid,
    /// Frightening dream.
    Nightmare,
    /// Emotionally charged dream.
    Emotional,
    /// Anything else.
    #[default]
    Normal,
}

impl DreamCategory {
    /// Classifies dream text; the first matching keyword group wins in declaration order.
    pub fn classify(content: &str) -> Self {
        let content = content.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|word| content.contains(word));
        if has_any(&LUCID_KEYWORDS) {
            Self::Lucid
        } else if has_any(&NIGHTMARE_KEYWORDS) {
            Self::Nightmare
        } else if has_any(&EMOTIONAL_KEYWORDS) {
            Self::Emotional
        } else {
            Self::Normal
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lucid => "Lucid",
            Self::Nightmare => "Nightmare",
            Self::Emotional => "Emotional",
            Self::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One journal entry.
pub struct DreamEntry {
    /// Stable entry id.
    pub id: String,
    /// Entry title.
    pub title: String,
    /// Free-form dream text.
    pub content: String,
    /// Creation time in unix milliseconds.
    pub recorded_at_ms: u64,
    /// Detected emotions.
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Detected symbols.
    #[serde(default)]
    pub symbols: Vec<String>,
    /// Detected dream characters.
    #[serde(default)]
    pub characters: Vec<String>,
    /// Category assigned when the entry was added.
    #[serde(default)]
    pub category: DreamCategory,
}

impl DreamEntry {
    /// Creates an untagged entry.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        recorded_at_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            recorded_at_ms,
            emotions: Vec::new(),
            symbols: Vec::new(),
            characters: Vec::new(),
            category: DreamCategory::Normal,
        }
    }

    /// `YYYY-MM-DD` label for list views.
    pub fn date_label(&self) -> String {
        format_date(self.recorded_at_ms)
    }

    /// Case-insensitive match against title or content.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.content.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Folder-style views over the live entries.
pub enum DreamFilter {
    /// Every live entry.
    All,
    /// Entries recorded within [`RECENT_WINDOW_MS`] of `now_ms`.
    Recent {
        /// Reference time.
        now_ms: u64,
    },
    /// Entries in one category.
    Category(DreamCategory),
}

impl DreamFilter {
    fn accepts(self, entry: &DreamEntry) -> bool {
        match self {
            Self::All => true,
            Self::Recent { now_ms } => {
                entry.recorded_at_ms > now_ms.saturating_sub(RECENT_WINDOW_MS)
            }
            Self::Category(category) => entry.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Sort keys offered by the file browser.
pub enum DreamSort {
    /// Newest first.
    #[default]
    Date,
    /// Alphabetical, case-insensitive.
    Title,
    /// Longest content first.
    Length,
}

/// Sorts entry references in place.
pub fn sort_entries(entries: &mut [&DreamEntry], sort: DreamSort) {
    match sort {
        DreamSort::Date => entries.sort_by(|a, b| b.recorded_at_ms.cmp(&a.recorded_at_ms)),
        DreamSort::Title => entries.sort_by_key(|entry| entry.title.to_lowercase()),
        DreamSort::Length => entries.sort_by(|a, b| b.content.len().cmp(&a.content.len())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Direction of an emotion across the journal.
pub enum Trend {
    /// Present in more than 30% of dreams.
    Increasing,
    /// Present in more than 10% of dreams.
    Stable,
    /// Rare.
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Row of [`DreamJournal::emotional_analysis`].
pub struct EmotionTrend {
    /// Emotion name.
    pub emotion: String,
    /// Rounded share of dreams containing the emotion.
    pub percentage: u32,
    /// Derived trend bucket.
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tag lists carried by each entry.
pub enum TagKind {
    /// [`DreamEntry::emotions`].
    Emotions,
    /// [`DreamEntry::symbols`].
    Symbols,
    /// [`DreamEntry::characters`].
    Characters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Aggregated tag occurrence.
pub struct TagFrequency {
    /// Tag text.
    pub tag: String,
    /// Number of occurrences across live entries.
    pub count: usize,
    /// `count` relative to the number of live entries, rounded.
    pub percentage: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Journal operation errors.
pub enum JournalError {
    /// No live or trashed entry carries the id.
    #[error("dream entry `{0}` not found")]
    EntryNotFound(String),
    /// Export/import payload could not be encoded or decoded.
    #[error("journal payload invalid: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Live entries plus the trash.
pub struct DreamJournal {
    entries: Vec<DreamEntry>,
    trash: Vec<DreamEntry>,
    next_id: u64,
}

fn rounded_percentage(count: usize, total: usize) -> u32 {
    ((count as f64 / total.max(1) as f64) * 100.0).round() as u32
}

impl DreamJournal {
    /// Live entries in insertion order.
    pub fn entries(&self) -> &[DreamEntry] {
        &self.entries
    }

    /// Trashed entries in deletion order.
    pub fn trash(&self) -> &[DreamEntry] {
        &self.trash
    }

    /// Looks up a live entry.
    pub fn get(&self, id: &str) -> Option<&DreamEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns an id not used by any live or trashed entry.
    pub fn allocate_id(&mut self) -> String {
        loop {
            self.next_id = self.next_id.saturating_add(1);
            let id = format!("dream-{}", self.next_id);
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().chain(self.trash.iter()).any(|e| e.id == id)
    }

    /// Categorises and appends an entry, returning the stored copy.
    pub fn add(&mut self, mut entry: DreamEntry) -> &DreamEntry {
        entry.category = DreamCategory::classify(&entry.content);
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// Replaces the detected tags of a live entry.
    pub fn set_tags(
        &mut self,
        id: &str,
        emotions: Vec<String>,
        symbols: Vec<String>,
        characters: Vec<String>,
    ) -> Result<(), JournalError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))?;
        entry.emotions = emotions;
        entry.symbols = symbols;
        entry.characters = characters;
        Ok(())
    }

    /// Moves a live entry to the trash.
    pub fn remove(&mut self, id: &str) -> Result<(), JournalError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))?;
        let entry = self.entries.remove(index);
        self.trash.push(entry);
        Ok(())
    }

    /// Moves a trashed entry back to the end of the live list.
    pub fn restore(&mut self, id: &str) -> Result<(), JournalError> {
        let index = self
            .trash
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))?;
        let entry = self.trash.remove(index);
        self.entries.push(entry);
        Ok(())
    }

    /// Permanently deletes a trashed entry.
    pub fn purge(&mut self, id: &str) -> Result<(), JournalError> {
        let before = self.trash.len();
        self.trash.retain(|entry| entry.id != id);
        if self.trash.len() == before {
            return Err(JournalError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Permanently deletes every trashed entry.
    pub fn empty_trash(&mut self) -> usize {
        let purged = self.trash.len();
        self.trash.clear();
        purged
    }

    /// First live entry whose title contains `query`, case-insensitively.
    pub fn find_by_title(&self, query: &str) -> Option<&DreamEntry> {
        let query = query.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_lowercase().contains(&query))
    }

    /// Live entries accepted by `filter`, in insertion order.
    pub fn filtered(&self, filter: DreamFilter) -> Vec<&DreamEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.accepts(entry))
            .collect()
    }

    /// Number of live entries accepted by `filter`.
    pub fn count(&self, filter: DreamFilter) -> usize {
        self.entries.iter().filter(|entry| filter.accepts(entry)).count()
    }

    fn tag_counts(&self, kind: TagKind) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            let tags = match kind {
                TagKind::Emotions => &entry.emotions,
                TagKind::Symbols => &entry.symbols,
                TagKind::Characters => &entry.characters,
            };
            for tag in tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Most frequent tags of `kind`, highest count first, ties alphabetical.
    pub fn tag_frequencies(&self, kind: TagKind, limit: usize) -> Vec<TagFrequency> {
        let total = self.entries.len();
        let mut rows: Vec<TagFrequency> = self
            .tag_counts(kind)
            .into_iter()
            .map(|(tag, count)| TagFrequency {
                tag: tag.to_string(),
                count,
                percentage: rounded_percentage(count, total),
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.truncate(limit);
        rows
    }

    /// Emotion share and trend across live entries.
    pub fn emotional_analysis(&self) -> Vec<EmotionTrend> {
        let total = self.entries.len().max(1);
        let mut rows: Vec<EmotionTrend> = self
            .tag_counts(TagKind::Emotions)
            .into_iter()
            .map(|(emotion, count)| {
                let share = count as f64 / total as f64;
                let trend = if share > 0.3 {
                    Trend::Increasing
                } else if share > 0.1 {
                    Trend::Stable
                } else {
                    Trend::Decreasing
                };
                EmotionTrend {
                    emotion: emotion.to_string(),
                    percentage: rounded_percentage(count, total),
                    trend,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        rows.truncate(EMOTION_ANALYSIS_LIMIT);
        rows
    }

    /// Pretty JSON of the live entries.
    pub fn export_json(&self) -> Result<String, JournalError> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|err| JournalError::Payload(err.to_string()))
    }

    /// Appends entries from an exported JSON array, skipping ids that already exist.
    ///
    /// Returns the number of entries imported.
    pub fn import_json(&mut self, raw: &str) -> Result<usize, JournalError> {
        let incoming: Vec<DreamEntry> =
            serde_json::from_str(raw).map_err(|err| JournalError::Payload(err.to_string()))?;
        let mut imported = 0;
        for entry in incoming {
            if self.contains_id(&entry.id) {
                continue;
            }
            self.add(entry);
            imported += 1;
        }
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(journal: &mut DreamJournal, title: &str, content: &str, at: u64) -> String {
        let id = journal.allocate_id();
        journal.add(DreamEntry::new(id.clone(), title, content, at));
        id
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn add_categorises_by_first_matching_keyword_group() {
        let mut journal = DreamJournal::default();
        entry(&mut journal, "a", "I became aware and felt fear", 1);
        entry(&mut journal, "b", "A terrifying hallway", 2);
        entry(&mut journal, "c", "I was so happy", 3);
        entry(&mut journal, "d", "A quiet beach", 4);

        let categories: Vec<_> = journal.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                DreamCategory::Lucid,
                DreamCategory::Nightmare,
                DreamCategory::Emotional,
                DreamCategory::Normal,
            ]
        );
    }

    #[test]
    fn remove_restore_and_purge_move_entries_between_lists() {
        let mut journal = DreamJournal::default();
        let first = entry(&mut journal, "Flying", "over the sea", 1);
        let second = entry(&mut journal, "Falling", "down the stairs", 2);

        journal.remove(&first).unwrap();
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.trash()[0].id, first);

        journal.restore(&first).unwrap();
        assert_eq!(journal.entries().last().unwrap().id, first);
        assert!(journal.trash().is_empty());

        journal.remove(&second).unwrap();
        journal.purge(&second).unwrap();
        assert!(journal.trash().is_empty());
        assert_eq!(
            journal.restore(&second),
            Err(JournalError::EntryNotFound(second.clone()))
        );
    }

    #[test]
    fn recent_filter_uses_a_seven_day_window() {
        let mut journal = DreamJournal::default();
        let now = 100 * DAY_MS;
        entry(&mut journal, "old", "x", now - 8 * DAY_MS);
        entry(&mut journal, "new", "x", now - DAY_MS);

        let recent = journal.filtered(DreamFilter::Recent { now_ms: now });
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "new");
    }

    #[test]
    fn emotional_analysis_reports_share_and_trend() {
        let mut journal = DreamJournal::default();
        for index in 0..10 {
            let id = entry(&mut journal, &format!("d{index}"), "plain", index);
            let emotions = match index {
                0..=3 => tags(&["wonder", "joy"]),
                4 => tags(&["wonder"]),
                _ => Vec::new(),
            };
            journal.set_tags(&id, emotions, Vec::new(), Vec::new()).unwrap();
        }

        let analysis = journal.emotional_analysis();
        assert_eq!(
            analysis,
            vec![
                EmotionTrend {
                    emotion: "wonder".to_string(),
                    percentage: 50,
                    trend: Trend::Increasing,
                },
                EmotionTrend {
                    emotion: "joy".to_string(),
                    percentage: 40,
                    trend: Trend::Increasing,
                },
            ]
        );
    }

    #[test]
    fn find_by_title_is_case_insensitive_substring() {
        let mut journal = DreamJournal::default();
        entry(&mut journal, "The Glass Ocean", "waves", 1);
        assert_eq!(
            journal.find_by_title("glass").map(|e| e.title.as_str()),
            Some("The Glass Ocean")
        );
        assert!(journal.find_by_title("desert").is_none());
    }

    #[test]
    fn sort_orders_by_requested_key() {
        let mut journal = DreamJournal::default();
        entry(&mut journal, "beta", "short", 1);
        entry(&mut journal, "Alpha", "a much longer dream", 2);
        let mut rows = journal.filtered(DreamFilter::All);

        sort_entries(&mut rows, DreamSort::Title);
        assert_eq!(rows[0].title, "Alpha");
        sort_entries(&mut rows, DreamSort::Date);
        assert_eq!(rows[0].title, "Alpha");
        sort_entries(&mut rows, DreamSort::Length);
        assert_eq!(rows[1].title, "beta");
    }

    #[test]
    fn import_skips_existing_ids() {
        let mut journal = DreamJournal::default();
        entry(&mut journal, "one", "x", 1);
        let exported = journal.export_json().unwrap();

        assert_eq!(journal.import_json(&exported), Ok(0));
        let mut other = DreamJournal::default();
        assert_eq!(other.import_json(&exported), Ok(1));
        assert!(matches!(
            other.import_json("{not json"),
            Err(JournalError::Payload(_))
        ));
    }
}
