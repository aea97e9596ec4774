//! Folder, search, sort and selection state for the dream browser.

use std::collections::BTreeSet;

use platform_host::{
    format_date, sort_entries, DreamCategory, DreamEntry, DreamFilter, DreamJournal, DreamSort,
};

const PREVIEW_CHARS: usize = 200;
const EMOTION_BADGES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Sidebar folders.
pub enum Folder {
    /// Everything.
    #[default]
    All,
    /// Recorded in the last week.
    Recent,
    /// Lucid category.
    Lucid,
    /// Nightmare category.
    Nightmares,
    /// Emotional category.
    Emotional,
}

impl Folder {
    /// Sidebar order.
    pub const ALL: [Folder; 5] = [
        Folder::All,
        Folder::Recent,
        Folder::Lucid,
        Folder::Nightmares,
        Folder::Emotional,
    ];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Dreams",
            Self::Recent => "Recent",
            Self::Lucid => "Lucid Dreams",
            Self::Nightmares => "Nightmares",
            Self::Emotional => "Emotional",
        }
    }

    /// Journal view backing the folder.
    pub const fn filter(self, now_ms: u64) -> DreamFilter {
        match self {
            Self::All => DreamFilter::All,
            Self::Recent => DreamFilter::Recent { now_ms },
            Self::Lucid => DreamFilter::Category(DreamCategory::Lucid),
            Self::Nightmares => DreamFilter::Category(DreamCategory::Nightmare),
            Self::Emotional => DreamFilter::Category(DreamCategory::Emotional),
        }
    }
}

/// Select value for a sort key.
pub const fn sort_key(sort: DreamSort) -> &'static str {
    match sort {
        DreamSort::Date => "date",
        DreamSort::Title => "title",
        DreamSort::Length => "length",
    }
}

/// Parses a select value; unknown values fall back to date order.
pub fn parse_sort(raw: &str) -> DreamSort {
    match raw {
        "title" => DreamSort::Title,
        "length" => DreamSort::Length,
        _ => DreamSort::Date,
    }
}

/// File name offered for an export made at `now_ms`.
pub fn export_file_name(now_ms: u64) -> String {
    format!("dreams_export_{}.json", format_date(now_ms))
}

/// Card text: the first 200 characters, with an ellipsis when cut.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Tags shown under a card.
pub fn badges(entry: &DreamEntry) -> Vec<String> {
    let content = entry.content.to_lowercase();
    let mut badges = Vec::new();
    if entry.category != DreamCategory::Normal {
        badges.push(entry.category.label().to_string());
    }
    if content.contains("flying") {
        badges.push("Flying".to_string());
    }
    if content.contains("water") {
        badges.push("Water".to_string());
    }
    badges.extend(entry.emotions.iter().take(EMOTION_BADGES).cloned());
    badges
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Display data for one entry.
pub struct DreamCard {
    /// Entry id.
    pub id: String,
    /// Entry title.
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Truncated content.
    pub preview: String,
    /// Category, motif and emotion tags.
    pub badges: Vec<String>,
}

impl From<&DreamEntry> for DreamCard {
    fn from(entry: &DreamEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            date: entry.date_label(),
            preview: preview(&entry.content),
            badges: badges(entry),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Browser view settings plus the checked entries.
pub struct BrowserState {
    /// Open folder.
    pub folder: Folder,
    /// Search text.
    pub search: String,
    /// Sort key.
    pub sort: DreamSort,
    /// Cards laid out in a grid instead of a list.
    pub grid: bool,
    selection: BTreeSet<String>,
}

impl BrowserState {
    /// Entries of the open folder matching the search, sorted.
    pub fn visible<'a>(&self, journal: &'a DreamJournal, now_ms: u64) -> Vec<&'a DreamEntry> {
        let mut entries: Vec<&DreamEntry> = journal
            .filtered(self.folder.filter(now_ms))
            .into_iter()
            .filter(|entry| entry.matches_search(&self.search))
            .collect();
        sort_entries(&mut entries, self.sort);
        entries
    }

    /// Message for an empty listing.
    pub fn empty_message(&self) -> String {
        if self.search.trim().is_empty() {
            "No dreams found in this category".to_string()
        } else {
            format!("No dreams found matching \"{}\"", self.search)
        }
    }

    /// Whether `id` is checked.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Number of checked entries.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Checks or unchecks one entry.
    pub fn toggle(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Checks every listed id.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.selection.extend(ids.into_iter().map(str::to_string));
    }

    /// Flips every listed id; checked ids outside the listing are dropped.
    pub fn invert<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let previous = std::mem::take(&mut self.selection);
        self.selection = ids
            .into_iter()
            .filter(|id| !previous.contains(*id))
            .map(str::to_string)
            .collect();
    }

    /// Empties the selection and hands back the ids.
    pub fn take_selection(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selection).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::DAY_MS;
    use pretty_assertions::assert_eq;

    use super::*;

    fn journal() -> DreamJournal {
        let mut journal = DreamJournal::default();
        journal.add(DreamEntry::new("a", "Zephyr", "I realized I was flying", 0));
        journal.add(DreamEntry::new(
            "b",
            "Abyss",
            "a terrifying fall into black water, over and over",
            9 * DAY_MS,
        ));
        journal.add(DreamEntry::new("c", "Meadow", "grass", 10 * DAY_MS));
        journal
    }

    fn ids(entries: Vec<&DreamEntry>) -> Vec<&str> {
        entries.into_iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn folders_map_to_journal_views() {
        let journal = journal();
        let now = 10 * DAY_MS;
        let mut state = BrowserState::default();
        assert_eq!(ids(state.visible(&journal, now)), vec!["c", "b", "a"]);

        state.folder = Folder::Recent;
        assert_eq!(ids(state.visible(&journal, now)), vec!["c", "b"]);
        state.folder = Folder::Lucid;
        assert_eq!(ids(state.visible(&journal, now)), vec!["a"]);
        state.folder = Folder::Nightmares;
        assert_eq!(ids(state.visible(&journal, now)), vec!["b"]);
    }

    #[test]
    fn search_and_sort_compose() {
        let journal = journal();
        let mut state = BrowserState {
            sort: parse_sort("title"),
            ..BrowserState::default()
        };
        assert_eq!(ids(state.visible(&journal, 0)), vec!["b", "c", "a"]);

        state.sort = parse_sort("length");
        state.search = "A".to_string();
        assert_eq!(ids(state.visible(&journal, 0)), vec!["b", "a", "c"]);

        state.search = "castle".to_string();
        assert!(state.visible(&journal, 0).is_empty());
        assert_eq!(state.empty_message(), "No dreams found matching \"castle\"");
    }

    #[test]
    fn selection_toggles_inverts_and_drains() {
        let mut state = BrowserState::default();
        state.toggle("a");
        state.toggle("b");
        state.toggle("a");
        assert_eq!(state.selected_count(), 1);

        state.invert(["a", "b", "c"]);
        assert!(state.is_selected("a") && state.is_selected("c") && !state.is_selected("b"));

        state.select_all(["b"]);
        assert_eq!(state.take_selection(), vec!["a", "b", "c"]);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn cards_truncate_and_tag() {
        let long = "w".repeat(250);
        assert_eq!(preview(&long).chars().count(), 203);
        assert_eq!(preview("short"), "short");

        let journal = journal();
        let mut card = DreamCard::from(journal.get("b").unwrap());
        assert_eq!(card.badges, vec!["Nightmare", "Water"]);
        card = DreamCard::from(journal.get("a").unwrap());
        assert_eq!(card.badges, vec!["Lucid", "Flying"]);
        assert_eq!(export_file_name(0), "dreams_export_1970-01-01.json");
    }
}
