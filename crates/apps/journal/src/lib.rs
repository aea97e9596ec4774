//! Dream Journal app: a notepad-style editor that records dreams into the shared journal.
//!
//! Saving hands the draft to [`AppServices::record_dream`], which stores it immediately and
//! tags it with detected emotions, symbols, and characters. The oracle can also continue the
//! draft or append an interpretation.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{
    analysis_or_fallback, completion_or_fallback, format_clock, format_date, unix_time_ms_now,
    DreamEntry,
};
use system_ui::prelude::*;

/// Separator inserted before an appended interpretation.
pub const ANALYSIS_HEADER: &str = "--- Dream Analysis ---";

#[derive(Debug, Clone, PartialEq, Eq)]
struct JournalDraft {
    title: String,
    content: String,
    word_wrap: bool,
}

impl Default for JournalDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            word_wrap: true,
        }
    }
}

impl JournalDraft {
    fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Hands out title and content for saving and clears the editor; both must be non-blank.
    fn take_for_save(&mut self) -> Option<(String, String)> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return None;
        }
        let title = std::mem::take(&mut self.title);
        let content = std::mem::take(&mut self.content);
        Some((title, content))
    }

    fn append_completion(&mut self, completion: &str) {
        self.content.push_str(completion);
    }

    fn append_analysis(&mut self, analysis: &str) {
        self.content = format!("{}\n\n{ANALYSIS_HEADER}\n{analysis}", self.content);
    }

    fn append_timestamp(&mut self, now_ms: u64) {
        self.content
            .push_str(&format!("{} {}", format_clock(now_ms), format_date(now_ms)));
    }

    fn load(&mut self, entry: &DreamEntry) {
        self.title = entry.title.clone();
        self.content = entry.content.clone();
    }

    fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[component]
/// Dream Journal editor window contents.
pub fn DreamJournalApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let services = store_value(services);
    let draft = create_rw_signal(JournalDraft::default());
    let completing = create_rw_signal(false);
    let analyzing = create_rw_signal(false);
    let notice = create_rw_signal(None::<String>);

    let save = move || {
        let Some((title, content)) = draft.try_update(JournalDraft::take_for_save).flatten() else {
            notice.set(Some("A dream needs a title and a description".to_string()));
            return;
        };
        notice.set(Some(format!("Saved \"{title}\"")));
        let services = services.get_value();
        spawn_local(async move {
            services.record_dream(title, content).await;
        });
    };

    let complete = move || {
        if completing.get_untracked() {
            return;
        }
        completing.set(true);
        let text = draft.with_untracked(|draft| draft.content.clone());
        let oracle = services.with_value(|services| services.oracle.clone());
        spawn_local(async move {
            let completion = completion_or_fallback(oracle.complete_dream(&text).await);
            draft.update(|draft| draft.append_completion(&completion));
            completing.set(false);
        });
    };

    let analyze = move || {
        let text = draft.with_untracked(|draft| draft.content.clone());
        if text.trim().is_empty() || analyzing.get_untracked() {
            return;
        }
        analyzing.set(true);
        let oracle = services.with_value(|services| services.oracle.clone());
        spawn_local(async move {
            let analysis = analysis_or_fallback(oracle.analyze_dream(&text).await);
            draft.update(|draft| draft.append_analysis(&analysis));
            analyzing.set(false);
        });
    };

    let saved = Signal::derive(move || {
        journal.with(|journal| {
            journal
                .entries()
                .iter()
                .rev()
                .map(|entry| (entry.id.clone(), entry.title.clone(), entry.date_label()))
                .collect::<Vec<_>>()
        })
    });
    let dream_count = Signal::derive(move || journal.with(|journal| journal.entries().len()));

    view! {
        <AppShell layout_class="app-journal-shell">
            <MenuBar>
                <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| {
                    if draft.with_untracked(JournalDraft::is_blank) {
                        return;
                    }
                    draft.update(JournalDraft::clear);
                    notice.set(None);
                })>
                    "New"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| draft.update(|d| d.append_timestamp(unix_time_ms_now())))
                >
                    "Time/Date"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| draft.update(|d| d.word_wrap = !d.word_wrap))
                >
                    {move || if draft.with(|d| d.word_wrap) { "Word Wrap: On" } else { "Word Wrap: Off" }}
                </Button>
            </MenuBar>

            <ToolBar aria_label="Journal actions">
                <Button leading_icon=IconName::Save on_click=Callback::new(move |_| save())>
                    "Save"
                </Button>
                <Button
                    leading_icon=IconName::Sparkle
                    disabled=completing
                    on_click=Callback::new(move |_| complete())
                >
                    {move || if completing.get() { "Channeling..." } else { "AI Complete" }}
                </Button>
                <Button
                    leading_icon=IconName::Moon
                    disabled=analyzing
                    on_click=Callback::new(move |_| analyze())
                >
                    {move || if analyzing.get() { "Analyzing..." } else { "Analyze" }}
                </Button>
            </ToolBar>

            <div class="journal-layout">
                <div class="journal-editor">
                    <TextField
                        placeholder="Dream Title..."
                        aria_label="Dream title"
                        value=Signal::derive(move || draft.with(|d| d.title.clone()))
                        on_input=Callback::new(move |ev| {
                            let title = event_target_value(&ev);
                            draft.update(|d| d.title = title);
                        })
                    />
                    <div data-ui-slot="editor" data-ui-wrap=move || draft.with(|d| d.word_wrap).to_string()>
                        <TextArea
                            placeholder="Describe your dream... Let the images and emotions flow freely..."
                            aria_label="Dream description"
                            value=Signal::derive(move || draft.with(|d| d.content.clone()))
                            on_input=Callback::new(move |ev| {
                                let content = event_target_value(&ev);
                                draft.update(|d| d.content = content);
                            })
                        />
                    </div>
                </div>

                <Pane ui_slot="saved-dreams" aria_label="Saved dreams">
                    <PaneHeader title="Saved Dreams" />
                    <Show
                        when=move || { dream_count.get() > 0 }
                        fallback=|| view! { <EmptyState>"No saved dreams found."</EmptyState> }
                    >
                        <ListSurface aria_label="Saved dreams">
                            <For each=move || saved.get() key=|(id, title, _)| (id.clone(), title.clone()) let:row>
                                {
                                    let (id, title, date) = row;
                                    let open_id = id.clone();
                                    view! {
                                        <div class="journal-saved-row" data-ui-slot="row">
                                            <Button
                                                variant=ButtonVariant::Quiet
                                                on_click=Callback::new(move |_| {
                                                    if let Some(entry) = journal.entry(&open_id) {
                                                        draft.update(|d| d.load(&entry));
                                                    }
                                                })
                                            >
                                                {title}
                                            </Button>
                                            <Text role=TextRole::Caption tone=TextTone::Secondary>{date}</Text>
                                            <Button
                                                size=ButtonSize::Sm
                                                variant=ButtonVariant::Danger
                                                aria_label="Move to Forgotten Dreams"
                                                on_click=Callback::new(move |_| {
                                                    if let Err(err) = journal.remove(&id) {
                                                        logging::warn!("journal: delete failed: {err}");
                                                    }
                                                })
                                            >
                                                "Delete"
                                            </Button>
                                        </div>
                                    }
                                }
                            </For>
                        </ListSurface>
                    </Show>
                </Pane>
            </div>

            <StatusBar>
                <StatusBarItem>{move || format!("Dreams logged: {}", dream_count.get())}</StatusBarItem>
                <StatusBarItem>
                    {move || {
                        if completing.get() {
                            "Channeling dream wisdom...".to_string()
                        } else if analyzing.get() {
                            "Analyzing symbols...".to_string()
                        } else {
                            notice.get().unwrap_or_default()
                        }
                    }}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(title: &str, content: &str) -> JournalDraft {
        JournalDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..JournalDraft::default()
        }
    }

    #[test]
    fn save_requires_title_and_content_and_clears_the_editor() {
        let mut missing_title = draft("   ", "I was flying");
        assert_eq!(missing_title.take_for_save(), None);
        assert_eq!(missing_title.content, "I was flying");

        let mut complete = draft("Flight", "I was flying");
        assert_eq!(
            complete.take_for_save(),
            Some(("Flight".to_string(), "I was flying".to_string()))
        );
        assert!(complete.is_blank());
        assert!(complete.word_wrap);
    }

    #[test]
    fn analysis_is_appended_under_a_header() {
        let mut d = draft("Tide", "The sea rose");
        d.append_analysis("Water speaks of feeling.");
        assert_eq!(
            d.content,
            "The sea rose\n\n--- Dream Analysis ---\nWater speaks of feeling."
        );
    }

    #[test]
    fn completion_continues_the_text_in_place() {
        let mut d = draft("Tide", "The sea rose");
        d.append_completion(" and the moon followed.");
        assert_eq!(d.content, "The sea rose and the moon followed.");
    }

    #[test]
    fn loading_an_entry_replaces_the_draft() {
        let mut d = draft("old", "old text");
        d.load(&DreamEntry::new("dream-1", "Mirror", "a silver mirror", 0));
        assert_eq!((d.title.as_str(), d.content.as_str()), ("Mirror", "a silver mirror"));
    }

    #[test]
    fn timestamp_uses_clock_then_date() {
        let mut d = draft("", "");
        d.append_timestamp(0);
        assert_eq!(d.content, "00:00 1970-01-01");
    }
}
