//! Typewriter boot screen shown before the desktop mounts.

use std::time::Duration;

use leptos::*;

/// How long the boot screen stays up.
pub const BOOT_DURATION: Duration = Duration::from_secs(3);
/// One character (or line break) is typed per tick.
pub const TYPE_TICK: Duration = Duration::from_millis(50);
/// Cursor blink half-period.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Boot messages, typed in order.
pub const BOOT_LINES: [&str; 5] = [
    "Starting DreamLog 98...",
    "Loading dream analysis modules...",
    "Initializing subconscious interface...",
    "Connecting to the collective unconscious...",
    "Ready to explore your dreams.",
];

/// Text visible after `ticks` typing steps; each line costs its length plus one for the newline.
pub fn boot_transcript(ticks: usize) -> String {
    let mut remaining = ticks;
    let mut out = String::new();
    for line in BOOT_LINES {
        let len = line.chars().count();
        if remaining <= len {
            out.extend(line.chars().take(remaining));
            return out;
        }
        out.push_str(line);
        out.push('\n');
        remaining -= len + 1;
    }
    out
}

fn total_ticks() -> usize {
    BOOT_LINES.iter().map(|line| line.chars().count() + 1).sum()
}

#[component]
pub fn BootScreen() -> impl IntoView {
    let ticks = create_rw_signal(0usize);
    let cursor = create_rw_signal(true);

    if let Ok(interval) = set_interval_with_handle(
        move || {
            if ticks.get_untracked() < total_ticks() {
                ticks.update(|ticks| *ticks += 1);
            }
        },
        TYPE_TICK,
    ) {
        on_cleanup(move || interval.clear());
    }
    if let Ok(interval) = set_interval_with_handle(move || cursor.update(|on| *on = !*on), CURSOR_BLINK) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="boot-screen" role="status" aria-live="polite">
            <div class="boot-title">"DreamLog 98"</div>
            <div class="boot-subtitle">"A Journey Into Your Subconscious"</div>
            <pre class="boot-console">
                {move || boot_transcript(ticks.get())}
                <span class="boot-cursor" data-ui-visible=move || cursor.get().to_string()>"\u{2588}"</span>
            </pre>
        </div>
    }
}
