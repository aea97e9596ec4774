//! Forgotten Dreams app: the recycle bin for journal entries.
//!
//! Entries land here when deleted from the journal or the browser. They can be restored, or
//! purged after an inline confirmation.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::BTreeSet;

use desktop_app_contract::{AppServices, JournalService};
use leptos::*;
use platform_host::{DreamEntry, DreamJournal};
use system_ui::prelude::*;

const PREVIEW_CHARS: usize = 150;

/// Card text: the first 150 characters, with an ellipsis when cut.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Destructive action waiting for confirmation.
pub enum PendingPurge {
    /// One entry.
    Entry {
        /// Entry id.
        id: String,
    },
    /// The checked entries.
    Selected(Vec<String>),
    /// Everything in the bin.
    All,
}

impl PendingPurge {
    /// Question shown before purging.
    pub fn prompt(&self) -> String {
        match self {
            Self::Entry { .. } => {
                "Permanently delete this dream? This action cannot be undone.".to_string()
            }
            Self::Selected(ids) => format!(
                "Permanently delete {} dreams? This action cannot be undone.",
                ids.len()
            ),
            Self::All => {
                "Empty the recycle bin? All forgotten dreams will be permanently deleted."
                    .to_string()
            }
        }
    }

    /// Carries out the purge; returns how many entries were deleted.
    pub fn apply(&self, journal: &JournalService) -> usize {
        let purge = |id: &str| match journal.purge(id) {
            Ok(()) => 1,
            Err(err) => {
                logging::warn!("recycle: purge failed: {err}");
                0
            }
        };
        match self {
            Self::Entry { id } => purge(id),
            Self::Selected(ids) => ids.iter().map(|id| purge(id)).sum(),
            Self::All => journal.empty_trash(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Search text and checked entries.
pub struct TrashView {
    /// Search text.
    pub search: String,
    selection: BTreeSet<String>,
}

impl TrashView {
    /// Trashed entries matching the search, in deletion order.
    pub fn visible<'a>(&self, journal: &'a DreamJournal) -> Vec<&'a DreamEntry> {
        journal
            .trash()
            .iter()
            .filter(|entry| entry.matches_search(&self.search))
            .collect()
    }

    /// Text under the empty-bin heading.
    pub fn empty_message(&self, trash_len: usize) -> String {
        if trash_len == 0 {
            "Your dreams are safe. No dreams have been deleted.".to_string()
        } else {
            format!("No dreams match \"{}\"", self.search)
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

    /// Forgets one id, e.g. after it was restored individually.
    pub fn forget(&mut self, id: &str) {
        self.selection.remove(id);
    }

    /// Empties the selection and hands back the ids.
    pub fn take_selection(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selection).into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TrashCard {
    id: String,
    title: String,
    date: String,
    preview: String,
}

#[component]
/// Forgotten Dreams window contents.
pub fn ForgottenDreamsApp(
    /// Session services.
    services: AppServices,
) -> impl IntoView {
    let journal = services.journal;
    let view_state = create_rw_signal(TrashView::default());
    let pending = create_rw_signal(None::<PendingPurge>);

    let cards = create_memo(move |_| {
        view_state.with(|view_state| {
            journal.with(|journal| {
                view_state
                    .visible(journal)
                    .into_iter()
                    .map(|entry| TrashCard {
                        id: entry.id.clone(),
                        title: entry.title.clone(),
                        date: entry.date_label(),
                        preview: preview(&entry.content),
                    })
                    .collect::<Vec<_>>()
            })
        })
    });
    let trash_len = Signal::derive(move || journal.with(|journal| journal.trash().len()));
    let selected_count = Signal::derive(move || view_state.with(TrashView::selected_count));

    let restore = move |id: &str| {
        view_state.update(|v| v.forget(id));
        if let Err(err) = journal.restore(id) {
            logging::warn!("recycle: restore failed: {err}");
        }
    };
    let restore_selected = move || {
        for id in view_state.try_update(TrashView::take_selection).unwrap_or_default() {
            restore(&id);
        }
    };
    let confirm = move || {
        if let Some(purge) = pending.get_untracked() {
            if let PendingPurge::Entry { id } = &purge {
                view_state.update(|v| v.forget(id));
            }
            purge.apply(&journal);
        }
        pending.set(None);
    };

    view! {
        <AppShell layout_class="app-recycle-shell">
            <ToolBar aria_label="Forgotten dreams actions">
                <Icon icon=IconName::Trash size=IconSize::Sm />
                <Heading role=TextRole::Label>"Forgotten Dreams - Recycle Bin"</Heading>
                <TextField
                    placeholder="Search forgotten dreams..."
                    aria_label="Search forgotten dreams"
                    value=Signal::derive(move || view_state.with(|v| v.search.clone()))
                    on_input=Callback::new(move |ev| {
                        let search = event_target_value(&ev);
                        view_state.update(|v| v.search = search);
                    })
                />
                <Show when=move || { selected_count.get() > 0 } fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Undo
                        on_click=Callback::new(move |_| restore_selected())
                    >
                        {move || format!("Restore ({})", selected_count.get())}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        leading_icon=IconName::Dismiss
                        on_click=Callback::new(move |_| {
                            let ids = view_state.try_update(TrashView::take_selection).unwrap_or_default();
                            pending.set(Some(PendingPurge::Selected(ids)));
                        })
                    >
                        {move || format!("Delete Forever ({})", selected_count.get())}
                    </Button>
                </Show>
                <Button
                    leading_icon=IconName::Trash
                    disabled=Signal::derive(move || trash_len.get() == 0)
                    on_click=Callback::new(move |_| pending.set(Some(PendingPurge::All)))
                >
                    "Empty Recycle Bin"
                </Button>
            </ToolBar>

            {move || {
                pending.get().map(|purge| {
                    view! {
                        <Panel ui_slot="confirm">
                            <Text tone=TextTone::Danger>{purge.prompt()}</Text>
                            <Button variant=ButtonVariant::Danger on_click=Callback::new(move |_| confirm())>"Yes"</Button>
                            <Button on_click=Callback::new(move |_| pending.set(None))>"No"</Button>
                        </Panel>
                    }
                })
            }}

            <Show
                when=move || cards.with(|cards| !cards.is_empty())
                fallback=move || view! {
                    <EmptyState>
                        <Icon icon=IconName::Trash size=IconSize::Lg />
                        <Heading>"No Forgotten Dreams"</Heading>
                        <Text>{move || view_state.with(|v| v.empty_message(trash_len.get()))}</Text>
                    </EmptyState>
                }
            >
                <ListSurface aria_label="Forgotten dreams" grid=true>
                    <For each=move || cards.get() key=|card| card.clone() let:card>
                        {
                            let TrashCard { id, title, date, preview } = card;
                            let (check_id, toggle_id, restore_id, dbl_id, purge_id) =
                                (id.clone(), id.clone(), id.clone(), id.clone(), id);
                            view! {
                                <div
                                    class="recycle-card"
                                    data-ui-slot="card"
                                    on:dblclick=move |_| restore(&dbl_id)
                                >
                                    <div class="recycle-card-header">
                                        <CheckboxField
                                            aria_label=format!("Select {title}")
                                            checked=Signal::derive(move || view_state.with(|v| v.is_selected(&check_id)))
                                            on_change=Callback::new(move |_| view_state.update(|v| v.toggle(&toggle_id)))
                                        />
                                        <Icon icon=IconName::Journal size=IconSize::Sm />
                                        <Heading role=TextRole::Label>{title.clone()}</Heading>
                                    </div>
                                    <Text role=TextRole::Caption>{preview}</Text>
                                    <div class="recycle-card-meta">
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>{date}</Text>
                                        <Badge tone=TextTone::Danger>"Deleted"</Badge>
                                    </div>
                                    <Button
                                        size=ButtonSize::Sm
                                        leading_icon=IconName::Undo
                                        on_click=Callback::new(move |_| restore(&restore_id))
                                    >
                                        "Restore"
                                    </Button>
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=ButtonVariant::Danger
                                        leading_icon=IconName::Dismiss
                                        on_click=Callback::new(move |_| {
                                            pending.set(Some(PendingPurge::Entry { id: purge_id.clone() }))
                                        })
                                    >
                                        "Delete Forever"
                                    </Button>
                                </div>
                            }
                        }
                    </For>
                </ListSurface>
            </Show>

            <StatusBar>
                <StatusBarItem>{move || format!("{} forgotten dreams", cards.with(Vec::len))}</StatusBarItem>
                <StatusBarItem>"Double-click to restore, or use toolbar actions"</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use leptos::create_rw_signal;
    use pretty_assertions::assert_eq;

    use super::*;

    fn trashed_journal() -> JournalService {
        let _ = leptos::create_runtime();
        let journal = JournalService::new(create_rw_signal(DreamJournal::default()));
        for (title, content) in [("Tide", "the sea rose"), ("Stairs", "endless stairs"), ("Fog", "grey")] {
            let id = journal.add(title, content);
            journal.remove(&id).unwrap();
        }
        journal
    }

    #[test]
    fn search_filters_the_bin() {
        let journal = trashed_journal();
        let view = TrashView {
            search: "STAIR".into(),
            ..TrashView::default()
        };
        let titles = journal.with(|journal| {
            view.visible(journal)
                .into_iter()
                .map(|entry| entry.title.clone())
                .collect::<Vec<_>>()
        });
        assert_eq!(titles, vec!["Stairs"]);
        assert_eq!(view.empty_message(3), "No dreams match \"STAIR\"");
        assert_eq!(
            TrashView::default().empty_message(0),
            "Your dreams are safe. No dreams have been deleted."
        );
    }

    #[test]
    fn purges_count_what_was_deleted() {
        let journal = trashed_journal();
        let ids = journal.with(|journal| {
            journal
                .trash()
                .iter()
                .map(|entry| entry.id.clone())
                .collect::<Vec<_>>()
        });

        let single = PendingPurge::Entry { id: ids[0].clone() };
        assert_eq!(single.apply(&journal), 1);
        assert_eq!(single.apply(&journal), 0);

        let selected = PendingPurge::Selected(vec![ids[1].clone(), "missing".into()]);
        assert_eq!(selected.prompt(), "Permanently delete 2 dreams? This action cannot be undone.");
        assert_eq!(selected.apply(&journal), 1);

        assert_eq!(PendingPurge::All.apply(&journal), 1);
        assert!(journal.with(|journal| journal.trash().is_empty()));
    }

    #[test]
    fn selection_toggles_and_drains() {
        let mut view = TrashView::default();
        view.toggle("a");
        view.toggle("b");
        view.forget("a");
        assert!(!view.is_selected("a"));
        assert_eq!(view.take_selection(), vec!["b"]);
        assert_eq!(preview(&"x".repeat(151)).len(), 153);
    }
}
