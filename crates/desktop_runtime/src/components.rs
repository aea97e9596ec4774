//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    apps::{self, DesktopIcon},
    host,
    model::WindowId,
    reducer::{DesktopAction, DesktopState},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// How often the desktop rolls for a glitch.
pub const GLITCH_INTERVAL: Duration = Duration::from_secs(30);
/// How long a glitch overlay stays up.
pub const GLITCH_DURATION: Duration = Duration::from_secs(2);
/// Chance that a roll starts a glitch.
pub const GLITCH_PROBABILITY: f64 = 0.1;
/// Banner shown while glitching.
pub const GLITCH_BANNER: &str = "DREAM.EXE HAS ENCOUNTERED AN ERROR";

/// Whether a `[0, 1)` sample starts a glitch.
pub fn glitch_roll(sample: f64) -> bool {
    sample < GLITCH_PROBABILITY
}

/// Ids of windows the layer renders, in open order; minimized windows are skipped.
pub fn visible_window_ids(state: &DesktopState) -> Vec<WindowId> {
    state
        .registry
        .windows()
        .iter()
        .filter(|window| !window.geometry().is_minimized())
        .map(|window| window.id().clone())
        .collect()
}

fn is_activation_key(ev: &web_sys::KeyboardEvent) -> bool {
    matches!(ev.key().as_str(), "Enter" | " ")
}

#[component]
/// Renders the full desktop shell: wallpaper, launcher icons, windows, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let glitching = create_rw_signal(false);

    if let Ok(interval) = set_interval_with_handle(
        move || {
            if glitching.get_untracked() || !glitch_roll(host::random_unit()) {
                return;
            }
            glitching.set(true);
            set_timeout(move || glitching.set(false), GLITCH_DURATION);
        },
        GLITCH_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <DesktopRoot id="desktop" glitching=glitching>
            <DesktopBackdrop>
                <div data-ui-slot="wallpaper-pattern" aria-hidden="true"></div>
            </DesktopBackdrop>
            <DesktopIcons />
            <WindowLayer />
            <DesktopTaskbar />
            <Show when=move || glitching.get() fallback=|| ()>
                <div class="desktop-glitch-overlay" role="alert" data-ui-slot="glitch">
                    <div data-ui-slot="glitch-banner">{GLITCH_BANNER}</div>
                </div>
            </Show>
        </DesktopRoot>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launch = move |icon: &DesktopIcon| {
        runtime.dispatch_action(DesktopAction::Open(icon.descriptor()));
    };

    view! {
        <DesktopIconGrid>
            {apps::desktop_icons()
                .iter()
                .map(|icon| {
                    let app_id = icon.app_id();
                    view! {
                        <DesktopIconButton
                            style=format!("left:{}px;top:{}px;", icon.position.x, icon.position.y)
                            title=icon.label
                            data_app=icon.app_key
                            on_dblclick=Callback::new(move |_| launch(icon))
                            on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                                if is_activation_key(&ev) {
                                    ev.prevent_default();
                                    launch(icon);
                                }
                            })
                        >
                            <Icon icon=apps::app_icon_name(&app_id) size=IconSize::Lg />
                            <span data-ui-slot="label">{icon.label}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}

#[component]
fn WindowLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let visible = create_memo(move |_| runtime.state.with(visible_window_ids));

    view! {
        <DesktopWindowLayer>
            <For each=move || visible.get() key=|window_id| window_id.clone() let:window_id>
                <DesktopWindow window_id />
            </For>
        </DesktopWindowLayer>
    }
}
