use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;

use crate::{
    apps, host,
    model::{AppId, WindowId},
    reducer::{DesktopAction, DesktopState},
    runtime_context::use_desktop_runtime,
};

/// Header printed down the side of the start menu.
pub const START_MENU_HEADER: &str = "DreamLog 98";

/// Decorative start menu entries; `None` marks a separator.
pub const START_MENU_ITEMS: &[Option<&str>] = &[
    Some("Programs"),
    Some("Documents"),
    Some("Settings"),
    Some("Find"),
    None,
    Some("Run..."),
    None,
    Some("Shut Down..."),
];

/// Tray indicators, left to right.
pub const TRAY_ITEMS: &[(&str, &str)] = &[
    ("activity", "Dream Activity Monitor"),
    ("network", "Network Connection"),
    ("volume", "Volume"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub app_id: AppId,
    pub active: bool,
}

/// One button per open window in open order, minimized windows included.
pub(crate) fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .registry
        .windows()
        .iter()
        .map(|window| TaskbarEntry {
            window_id: window.id().clone(),
            title: window.title().to_string(),
            app_id: window.descriptor().app_id.clone(),
            active: state.registry.is_active(window.id()),
        })
        .collect()
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let start_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(host::clock_label());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(host::clock_label()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    // Presses inside the start anchor stop propagation, so anything reaching the window is outside.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if start_menu_open.get_untracked() {
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && start_menu_open.get_untracked() {
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let entries = create_memo(move |_| runtime.state.with(taskbar_entries));

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <div
                    data-ui-slot="start-anchor"
                    on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <TaskbarButton
                        ui_slot="start-button"
                        title="Start"
                        aria_expanded=start_menu_open
                        pressed=start_menu_open
                        on_click=Callback::new(move |_| start_menu_open.update(|open| *open = !*open))
                    >
                        <Icon icon=IconName::Moon size=IconSize::Sm />
                        <span>"Start"</span>
                    </TaskbarButton>
                    <Show when=move || start_menu_open.get() fallback=|| ()>
                        <StartMenu on_pick=Callback::new(move |_| start_menu_open.set(false)) />
                    </Show>
                </div>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id.clone(), entry.active)
                    let:entry
                >
                    {
                        let window_id = entry.window_id.clone();
                        view! {
                            <TaskbarButton
                                title=entry.title.clone()
                                data_app=entry.app_id.key().to_string()
                                pressed=entry.active
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarButton {
                                        window_id: window_id.clone(),
                                    });
                                })
                            >
                                <Icon icon=apps::app_icon_name(&entry.app_id) size=IconSize::Sm />
                                <span>{entry.title.clone()}</span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <TrayList>
                    {TRAY_ITEMS
                        .iter()
                        .map(|(slot, title)| view! { <TrayButton ui_slot=*slot title=*title /> })
                        .collect_view()}
                    <ClockButton title=Signal::derive(move || clock.get())>
                        {move || clock.get()}
                    </ClockButton>
                </TrayList>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn StartMenu(on_pick: Callback<()>) -> impl IntoView {
    view! {
        <MenuSurface aria_label="Start menu">
            <div data-ui-slot="start-menu-header" aria-hidden="true">{START_MENU_HEADER}</div>
            {START_MENU_ITEMS
                .iter()
                .map(|item| match item {
                    Some(label) => view! {
                        <MenuItem on_click=Callback::new(move |_| on_pick.call(()))>{*label}</MenuItem>
                    }
                    .into_view(),
                    None => view! { <MenuSeparator /> }.into_view(),
                })
                .collect_view()}
        </MenuSurface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::WindowDescriptor, reducer::reduce_desktop};

    fn open(state: &mut DesktopState, key: &str) {
        reduce_desktop(
            state,
            DesktopAction::Open(WindowDescriptor::for_app(AppId::from_key(key))),
        )
        .unwrap();
    }

    #[test]
    fn taskbar_lists_every_window_including_minimized() {
        let mut state = DesktopState::default();
        open(&mut state, "notepad");
        open(&mut state, "outlook");
        reduce_desktop(
            &mut state,
            DesktopAction::Minimize {
                window_id: WindowId::new("notepad"),
            },
        )
        .unwrap();

        let entries = taskbar_entries(&state);
        assert_eq!(
            entries
                .iter()
                .map(|entry| (entry.title.as_str(), entry.active))
                .collect::<Vec<_>>(),
            vec![("Dream Journal", false), ("Dream Mail", true)]
        );
    }

    #[test]
    fn start_menu_keeps_its_classic_layout() {
        let labels: Vec<_> = START_MENU_ITEMS.iter().map(|item| item.unwrap_or("-")).collect();
        assert_eq!(
            labels,
            vec!["Programs", "Documents", "Settings", "Find", "-", "Run...", "-", "Shut Down..."]
        );
    }
}
