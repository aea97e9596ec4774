use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    apps, host,
    model::WindowId,
    pointer::pointer_position,
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowControl {
    Minimize,
    ToggleMaximize,
    Close,
}

/// Actions for a title-bar control press; the window takes focus before the control acts.
fn control_actions(window_id: &WindowId, control: WindowControl) -> [DesktopAction; 2] {
    let window_id = window_id.clone();
    let action = match control {
        WindowControl::Minimize => DesktopAction::Minimize {
            window_id: window_id.clone(),
        },
        WindowControl::ToggleMaximize => DesktopAction::ToggleMaximize {
            window_id: window_id.clone(),
            screen: host::screen_size(),
        },
        WindowControl::Close => DesktopAction::Close {
            window_id: window_id.clone(),
        },
    };
    [DesktopAction::Focus { window_id }, action]
}

#[derive(Clone, PartialEq)]
struct WindowView {
    style: String,
    focused: bool,
    maximized: bool,
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);

    let Some(descriptor) = runtime.state.with_untracked(|state| {
        state
            .window(&window_id.get_value())
            .map(|window| window.descriptor().clone())
    }) else {
        return ().into_view();
    };

    let view_state = create_memo(move |_| {
        runtime.state.with(|state| {
            let id = window_id.get_value();
            let window = state.window(&id)?;
            let geometry = window.geometry();
            let position = geometry.position();
            let size = geometry.size();
            Some(WindowView {
                style: format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    position.x,
                    position.y,
                    size.width,
                    size.height,
                    state.registry.z_index(&id)
                ),
                focused: state.registry.is_active(&id),
                maximized: geometry.is_maximized(),
            })
        })
    });
    let focused = Signal::derive(move || view_state.get().is_some_and(|view| view.focused));
    let maximized = Signal::derive(move || view_state.get().is_some_and(|view| view.maximized));

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::Focus {
                window_id: window_id.get_value(),
            });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id: window_id.get_value(),
            pointer: pointer_position(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
        });
    };
    let press = move |control: WindowControl| {
        for action in control_actions(&window_id.get_value(), control) {
            runtime.dispatch_action(action);
        }
    };

    // The app view is built once per window; geometry updates only restyle the frame.
    let body = apps::mount_app(
        &descriptor.app_id,
        AppMountContext {
            app_key: descriptor.app_id.key().to_string(),
            window_id: descriptor.id.to_string(),
            services: runtime.services.get_value(),
        },
    );
    let title = descriptor.title.clone();
    let app_icon = apps::app_icon_name(&descriptor.app_id);

    view! {
        <WindowFrame
            style=Signal::derive(move || view_state.get().map(|view| view.style).unwrap_or_default())
            aria_label=title.clone()
            data_app=descriptor.app_id.key().to_string()
            focused=focused
            maximized=maximized
            on_pointerdown=Callback::new(focus)
        >
            <WindowTitleBar
                draggable=Signal::derive(move || !maximized.get())
                on_pointerdown=Callback::new(begin_drag)
                on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    press(WindowControl::ToggleMaximize);
                })
            >
                <WindowTitle>
                    <Icon icon=app_icon size=IconSize::Sm />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=Callback::new(move |_| press(WindowControl::Minimize))
                    />
                    {move || {
                        let (icon, label) = if maximized.get() {
                            (IconName::WindowRestore, "Restore window")
                        } else {
                            (IconName::WindowMaximize, "Maximize window")
                        };
                        view! {
                            <WindowControlButton
                                icon=icon
                                aria_label=label
                                on_click=Callback::new(move |_| press(WindowControl::ToggleMaximize))
                            />
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        on_click=Callback::new(move |_| press(WindowControl::Close))
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{body}</WindowBody>
            <Show when=move || !maximized.get() fallback=|| ()>
                <ResizeHandle on_pointerdown=Callback::new(begin_resize) />
            </Show>
        </WindowFrame>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, WindowDescriptor},
        reducer::{reduce_desktop, DesktopState},
    };

    fn desktop_with(apps: &[AppId]) -> DesktopState {
        let mut state = DesktopState::default();
        for app in apps {
            reduce_desktop(&mut state, DesktopAction::Open(WindowDescriptor::for_app(app.clone())))
                .unwrap();
        }
        state
    }

    fn press(state: &mut DesktopState, id: &WindowId, control: WindowControl) {
        for action in control_actions(id, control) {
            reduce_desktop(state, action).unwrap();
        }
    }

    #[test]
    fn minimizing_an_inactive_window_focuses_it_first() {
        let mut state = desktop_with(&[AppId::Journal, AppId::Paint]);
        let journal = WindowId::new(AppId::Journal.key());

        press(&mut state, &journal, WindowControl::Minimize);

        assert_eq!(state.registry.active_window_id(), Some(&journal));
        assert!(state.window(&journal).unwrap().geometry().is_minimized());
    }

    #[test]
    fn closing_through_the_title_bar_focuses_then_closes() {
        let mut state = desktop_with(&[AppId::Journal, AppId::Paint]);
        let journal = WindowId::new(AppId::Journal.key());

        press(&mut state, &journal, WindowControl::Close);

        assert!(state.window(&journal).is_none());
        assert_eq!(state.registry.active_window_id(), None);
    }

    #[test]
    fn every_control_leads_with_focus() {
        let id = WindowId::new("w");
        for control in [
            WindowControl::Minimize,
            WindowControl::ToggleMaximize,
            WindowControl::Close,
        ] {
            let [first, _] = control_actions(&id, control);
            assert_eq!(first, DesktopAction::Focus { window_id: id.clone() });
        }
    }
}
