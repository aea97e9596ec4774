//! Shared contract between the desktop window manager and the windowed dream applications.
//!
//! The runtime mounts each application through an [`AppModule`], handing it an
//! [`AppMountContext`] that carries the session-scoped [`AppServices`]: the shared dream
//! journal and the dream oracle backed by the text-generation service.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::logging::warn;
use leptos::{RwSignal, SignalGetUntracked, SignalUpdate, SignalWith, SignalWithUntracked, View};
use platform_host::{
    unix_time_ms_now, DreamEntry, DreamJournal, DreamOracle, DreamTags, JournalError,
    TextGenerationService,
};

#[derive(Clone, Copy)]
/// Reactive handle to the session's dream journal.
///
/// Reads through [`JournalService::with`] are tracked, so views re-render when any app
/// mutates the journal.
pub struct JournalService {
    store: RwSignal<DreamJournal>,
}

impl JournalService {
    /// Wraps an existing journal signal.
    pub fn new(store: RwSignal<DreamJournal>) -> Self {
        Self { store }
    }

    /// Underlying signal.
    pub fn signal(&self) -> RwSignal<DreamJournal> {
        self.store
    }

    /// Tracked read access.
    pub fn with<R>(&self, f: impl FnOnce(&DreamJournal) -> R) -> R {
        self.store.with(f)
    }

    /// Untracked snapshot of one live entry.
    pub fn entry(&self, id: &str) -> Option<DreamEntry> {
        self.store.with_untracked(|journal| journal.get(id).cloned())
    }

    /// Untracked snapshot of the whole journal.
    pub fn snapshot(&self) -> DreamJournal {
        self.store.get_untracked()
    }

    fn mutate<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut DreamJournal) -> Result<T, JournalError>,
    ) -> Result<T, JournalError> {
        self.store
            .try_update(f)
            .unwrap_or_else(|| Err(JournalError::EntryNotFound(id.to_string())))
    }

    /// Adds an untagged entry recorded now and returns its id.
    pub fn add(&self, title: impl Into<String>, content: impl Into<String>) -> String {
        let (title, content) = (title.into(), content.into());
        let mut id = String::new();
        self.store.update(|journal| {
            id = journal.allocate_id();
            journal.add(DreamEntry::new(id.clone(), title, content, unix_time_ms_now()));
        });
        id
    }

    /// Replaces the detected tags of an entry.
    pub fn set_tags(&self, id: &str, tags: DreamTags) -> Result<(), JournalError> {
        self.mutate(id, |journal| {
            journal.set_tags(id, tags.emotions, tags.symbols, tags.characters)
        })
    }

    /// Moves an entry to the trash.
    pub fn remove(&self, id: &str) -> Result<(), JournalError> {
        self.mutate(id, |journal| journal.remove(id))
    }

    /// Moves a trashed entry back to the journal.
    pub fn restore(&self, id: &str) -> Result<(), JournalError> {
        self.mutate(id, |journal| journal.restore(id))
    }

    /// Deletes a trashed entry permanently.
    pub fn purge(&self, id: &str) -> Result<(), JournalError> {
        self.mutate(id, |journal| journal.purge(id))
    }

    /// Deletes every trashed entry.
    pub fn empty_trash(&self) -> usize {
        self.store
            .try_update(|journal| journal.empty_trash())
            .unwrap_or_default()
    }

    /// Merges an exported JSON array into the journal; returns how many entries were new.
    pub fn import_json(&self, raw: &str) -> Result<usize, JournalError> {
        self.store
            .try_update(|journal| journal.import_json(raw))
            .unwrap_or(Ok(0))
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Shared dream journal.
    pub journal: JournalService,
    /// Dream-interpretation prompts over the session text service.
    pub oracle: DreamOracle,
}

impl AppServices {
    /// Creates service handles for one desktop session.
    pub fn new(journal: RwSignal<DreamJournal>, text: Rc<dyn TextGenerationService>) -> Self {
        Self {
            journal: JournalService::new(journal),
            oracle: DreamOracle::new(text),
        }
    }

    /// Saves a new dream, then tags it with detected emotions, symbols, and characters.
    ///
    /// The entry is visible immediately; tags arrive once detection finishes. Returns the id.
    pub async fn record_dream(&self, title: String, content: String) -> String {
        let id = self.journal.add(title, content);
        if let Some(entry) = self.journal.entry(&id) {
            let tags = self.oracle.enhance_entry(&entry).await;
            if let Err(err) = self.journal.set_tags(&id, tags) {
                warn!("journal: tagging `{id}` skipped: {err}");
            }
        }
        id
    }
}

#[derive(Clone)]
/// Mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Application key the window was opened with.
    pub app_key: String,
    /// Registry id of the hosting window.
    pub window_id: String,
    /// Session service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime dispatch table.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use leptos::create_rw_signal;
    use platform_host::{DreamCategory, SimulatedTextService, SIMULATED_GENERIC};
    use pretty_assertions::assert_eq;

    use super::*;

    fn services() -> AppServices {
        let _ = leptos::create_runtime();
        AppServices::new(
            create_rw_signal(DreamJournal::default()),
            Rc::new(SimulatedTextService),
        )
    }

    #[test]
    fn journal_service_round_trips_through_the_trash() {
        let services = services();
        let journal = services.journal;
        let id = journal.add("Tide", "the sea was terrifying");

        assert_eq!(
            journal.entry(&id).map(|entry| entry.category),
            Some(DreamCategory::Nightmare)
        );
        journal.remove(&id).unwrap();
        assert!(journal.entry(&id).is_none());
        journal.restore(&id).unwrap();
        assert!(journal.entry(&id).is_some());
        assert_eq!(
            journal.purge(&id),
            Err(JournalError::EntryNotFound(id.clone()))
        );
    }

    #[test]
    fn imports_skip_entries_already_present() {
        let services = services();
        let journal = services.journal;
        journal.add("Tide", "the sea rose");
        let exported = journal.snapshot().export_json().unwrap();

        assert_eq!(journal.import_json(&exported), Ok(0));
        assert!(matches!(
            journal.import_json("not json"),
            Err(JournalError::Payload(_))
        ));
    }

    #[test]
    fn record_dream_applies_detected_tags() {
        let services = services();
        let id = block_on(services.record_dream("Glass".into(), "a glass city".into()));

        let entry = services.journal.entry(&id).unwrap();
        assert_eq!(entry.emotions, vec![SIMULATED_GENERIC.to_string()]);
        assert_eq!(
            services.journal.signal().with(|journal| journal.entries().len()),
            1
        );
    }
}
