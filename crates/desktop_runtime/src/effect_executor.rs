//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    pointer::PointerSubscription, reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

/// Executes a single [`RuntimeEffect`].
pub fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::TrackPointer(window_id) => {
            let subscription = PointerSubscription::acquire(window_id, runtime.dispatch);
            // Replacing the slot drops the previous subscription.
            runtime.pointer.set_value(Some(subscription));
        }
        RuntimeEffect::ReleasePointer(window_id) => {
            runtime.pointer.update_value(|slot| {
                let held_by_window = slot
                    .as_ref()
                    .is_some_and(|subscription| subscription.window_id() == &window_id);
                if held_by_window {
                    *slot = None;
                } else {
                    logging::warn!("pointer release for `{window_id}` without a subscription");
                }
            });
        }
    }
}
