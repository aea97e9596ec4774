//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the live pointer
//! subscription, and the session services handed to applications. UI composition stays in
//! [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::{build_text_service, DreamJournal, GenerationConfig, TextGenerationService};

use crate::{
    effect_executor,
    pointer::PointerSubscription,
    reducer::{reduce_desktop, DesktopAction, DesktopState, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Session services injected into every mounted application.
    pub services: StoredValue<AppServices>,
    /// Pointer listeners held for the window whose gesture is live.
    pub pointer: StoredValue<Option<PointerSubscription>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Text-generation backend; defaults to the build-configured Gemini client with simulated
    /// fallback.
    #[prop(optional)]
    text_service: Option<Rc<dyn TextGenerationService>>,
    /// Journal the session starts with.
    #[prop(optional)]
    journal: Option<DreamJournal>,
    children: Children,
) -> impl IntoView {
    let text_service =
        text_service.unwrap_or_else(|| build_text_service(GenerationConfig::from_build_env()));
    let journal = create_rw_signal(journal.unwrap_or_default());
    let services = store_value(AppServices::new(journal, text_service));
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let pointer = store_value(None::<PointerSubscription>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        effects,
        dispatch,
        services,
        pointer,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || {
        pointer.try_update_value(|subscription| *subscription = None);
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
