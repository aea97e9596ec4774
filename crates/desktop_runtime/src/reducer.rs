//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    model::{LaunchRequest, Point, Size, WindowDescriptor, WindowId},
    registry::{OpenWindow, WindowRegistry},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Session state owned by the desktop provider.
pub struct DesktopState {
    /// Open windows and focus.
    pub registry: WindowRegistry,
    /// Window whose drag or resize currently owns the pointer.
    pub pointer_owner: Option<WindowId>,
}

impl DesktopState {
    /// Entry for `id`.
    pub fn window(&self, id: &WindowId) -> Option<&OpenWindow> {
        self.registry.get(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or focus it if the id is already open.
    Open(WindowDescriptor),
    /// Close a window; unknown ids are ignored.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus a window; unknown ids are ignored.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Taskbar button press: restore if minimized, then focus.
    ActivateTaskbarButton {
        /// Window behind the button.
        window_id: WindowId,
    },
    /// Hide a window until its taskbar button is pressed.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize, or restore a maximized window.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Full screen size; the taskbar strip is subtracted.
        screen: Size,
    },
    /// Title-bar pointer-down.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: Point,
    },
    /// Resize-handle pointer-down.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
    },
    /// Pointer motion while a gesture owns the pointer.
    PointerMove {
        /// Current pointer position.
        pointer: Point,
    },
    /// Pointer release while a gesture owns the pointer.
    PointerUp {
        /// Release position.
        pointer: Point,
    },
    /// Abandon the live gesture (Escape or pointer cancel).
    CancelGesture,
}

impl From<LaunchRequest> for DesktopAction {
    fn from(request: LaunchRequest) -> Self {
        Self::Open(request.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Subscribe to desktop-wide pointer motion on behalf of this window's gesture.
    TrackPointer(WindowId),
    /// Drop the pointer subscription held for this window.
    ReleasePointer(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for window-scoped actions naming a window that is not open.
pub enum ReducerError {
    /// The target window id was not found in the registry.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Registry operations (`Open`, `Close`, `Focus`) never fail. Geometry actions address a
/// specific window and fail when it is not open. Pointer motion and release are routed to
/// [`DesktopState::pointer_owner`] and ignored when no gesture is live.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when a geometry action references a missing window.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Open(descriptor) => {
            state.registry.open(descriptor);
        }
        DesktopAction::Close { window_id } => {
            if state.registry.close(&window_id).is_some() {
                release_if_owner(state, &window_id, &mut effects);
            }
        }
        DesktopAction::Focus { window_id } => {
            state.registry.focus(&window_id);
        }
        DesktopAction::ActivateTaskbarButton { window_id } => {
            window_mut(state, &window_id)?.geometry_mut().restore();
            state.registry.focus(&window_id);
        }
        DesktopAction::Minimize { window_id } => {
            window_mut(state, &window_id)?.geometry_mut().minimize();
            release_if_owner(state, &window_id, &mut effects);
        }
        DesktopAction::ToggleMaximize { window_id, screen } => {
            window_mut(state, &window_id)?
                .geometry_mut()
                .toggle_maximize(screen);
            release_if_owner(state, &window_id, &mut effects);
            state.registry.focus(&window_id);
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            state.registry.focus(&window_id);
            abandon_foreign_gesture(state, &window_id, &mut effects);
            if window_mut(state, &window_id)?
                .geometry_mut()
                .begin_drag(pointer)
            {
                take_pointer(state, window_id, &mut effects);
            }
        }
        DesktopAction::BeginResize { window_id } => {
            state.registry.focus(&window_id);
            abandon_foreign_gesture(state, &window_id, &mut effects);
            if window_mut(state, &window_id)?.geometry_mut().begin_resize() {
                take_pointer(state, window_id, &mut effects);
            }
        }
        DesktopAction::PointerMove { pointer } => {
            if let Some(window) = pointer_owner_mut(state) {
                window.geometry_mut().pointer_move(pointer);
            }
        }
        DesktopAction::PointerUp { pointer } => {
            if let Some(window) = pointer_owner_mut(state) {
                window.geometry_mut().pointer_up(pointer);
            }
            if let Some(owner) = state.pointer_owner.take() {
                effects.push(RuntimeEffect::ReleasePointer(owner));
            }
        }
        DesktopAction::CancelGesture => {
            if let Some(window) = pointer_owner_mut(state) {
                window.geometry_mut().cancel_gesture();
            }
            if let Some(owner) = state.pointer_owner.take() {
                effects.push(RuntimeEffect::ReleasePointer(owner));
            }
        }
    }

    Ok(effects)
}

fn window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut OpenWindow, ReducerError> {
    state
        .registry
        .get_mut(window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn pointer_owner_mut(state: &mut DesktopState) -> Option<&mut OpenWindow> {
    let owner = state.pointer_owner.as_ref()?;
    state.registry.get_mut(owner)
}

fn take_pointer(state: &mut DesktopState, window_id: WindowId, effects: &mut Vec<RuntimeEffect>) {
    state.pointer_owner = Some(window_id.clone());
    effects.push(RuntimeEffect::TrackPointer(window_id));
}

fn release_if_owner(
    state: &mut DesktopState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.pointer_owner.as_ref() == Some(window_id) {
        state.pointer_owner = None;
        effects.push(RuntimeEffect::ReleasePointer(window_id.clone()));
    }
}

// Only one window may own the pointer; a stray gesture on another window is rolled back.
fn abandon_foreign_gesture(
    state: &mut DesktopState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(owner) = state.pointer_owner.clone() else {
        return;
    };
    if &owner == window_id {
        return;
    }
    if let Some(window) = state.registry.get_mut(&owner) {
        window.geometry_mut().cancel_gesture();
    }
    state.pointer_owner = None;
    effects.push(RuntimeEffect::ReleasePointer(owner));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::AppId, window_manager::Gesture};

    fn open(state: &mut DesktopState, key: &str) -> WindowId {
        let descriptor = WindowDescriptor::for_app(AppId::from_key(key));
        let id = descriptor.id.clone();
        reduce_desktop(state, DesktopAction::Open(descriptor)).expect("open window");
        id
    }

    #[test]
    fn drag_gesture_tracks_and_releases_the_pointer() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "cmd");

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: win.clone(),
                pointer: Point::new(120, 110),
            },
        )
        .unwrap();
        assert_eq!(effects, vec![RuntimeEffect::TrackPointer(win.clone())]);
        assert_eq!(state.pointer_owner, Some(win.clone()));

        reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                pointer: Point::new(220, 160),
            },
        )
        .unwrap();
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::PointerUp {
                pointer: Point::new(220, 160),
            },
        )
        .unwrap();

        assert_eq!(effects, vec![RuntimeEffect::ReleasePointer(win.clone())]);
        assert_eq!(state.pointer_owner, None);
        let geometry = state.window(&win).unwrap().geometry();
        assert_eq!(geometry.position(), Point::new(200, 150));
        assert_eq!(geometry.gesture(), Gesture::Idle);
    }

    #[test]
    fn pointer_events_without_a_live_gesture_are_ignored() {
        let mut state = DesktopState::default();
        open(&mut state, "paint");
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                pointer: Point::new(9, 9),
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::PointerUp {
                pointer: Point::new(9, 9),
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn closing_the_dragged_window_releases_the_pointer() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "outlook");
        reduce_desktop(
            &mut state,
            DesktopAction::BeginResize {
                window_id: win.clone(),
            },
        )
        .unwrap();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::Close {
                window_id: win.clone(),
            },
        )
        .unwrap();

        assert_eq!(effects, vec![RuntimeEffect::ReleasePointer(win)]);
        assert_eq!(state.pointer_owner, None);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn escape_cancel_rolls_back_a_resize() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "paint");
        reduce_desktop(
            &mut state,
            DesktopAction::BeginResize {
                window_id: win.clone(),
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                pointer: Point::new(1200, 900),
            },
        )
        .unwrap();

        let effects = reduce_desktop(&mut state, DesktopAction::CancelGesture).unwrap();

        assert_eq!(effects, vec![RuntimeEffect::ReleasePointer(win.clone())]);
        assert_eq!(
            state.window(&win).unwrap().geometry().size(),
            Size::new(600, 400)
        );
    }

    #[test]
    fn maximized_window_refuses_drag_without_taking_the_pointer() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "lucid");
        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: win.clone(),
                screen: Size::new(1024, 768),
            },
        )
        .unwrap();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: win.clone(),
                pointer: Point::new(50, 10),
            },
        )
        .unwrap();

        assert!(effects.is_empty());
        assert_eq!(state.pointer_owner, None);
        assert_eq!(
            state.window(&win).unwrap().geometry().size(),
            Size::new(1024, 728)
        );
    }

    #[test]
    fn begin_drag_focuses_the_window_first() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "notepad");
        open(&mut state, "paint");

        reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: first.clone(),
                pointer: Point::new(150, 105),
            },
        )
        .unwrap();

        assert_eq!(state.registry.active_window_id(), Some(&first));
    }

    #[test]
    fn taskbar_button_restores_a_minimized_window() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "recycle");
        reduce_desktop(
            &mut state,
            DesktopAction::Minimize {
                window_id: win.clone(),
            },
        )
        .unwrap();
        assert!(state.window(&win).unwrap().geometry().is_minimized());

        reduce_desktop(
            &mut state,
            DesktopAction::ActivateTaskbarButton {
                window_id: win.clone(),
            },
        )
        .unwrap();

        assert!(!state.window(&win).unwrap().geometry().is_minimized());
        assert_eq!(state.registry.active_window_id(), Some(&win));
    }

    #[test]
    fn focus_leaves_a_minimized_window_hidden() {
        let mut state = DesktopState::default();
        let win = open(&mut state, "nightmare");
        reduce_desktop(
            &mut state,
            DesktopAction::Minimize {
                window_id: win.clone(),
            },
        )
        .unwrap();

        reduce_desktop(
            &mut state,
            DesktopAction::Focus {
                window_id: win.clone(),
            },
        )
        .unwrap();

        assert!(state.window(&win).unwrap().geometry().is_minimized());
    }

    #[test]
    fn geometry_actions_on_missing_windows_report_the_id() {
        let mut state = DesktopState::default();
        let ghost = WindowId::new("ghost");

        let err = reduce_desktop(
            &mut state,
            DesktopAction::Minimize {
                window_id: ghost.clone(),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::WindowNotFound(ghost));
        assert_eq!(err.to_string(), "window `ghost` not found");
    }

    #[test]
    fn starting_a_second_gesture_rolls_back_the_first() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "notepad");
        let second = open(&mut state, "paint");
        reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: first.clone(),
                pointer: Point::new(110, 110),
            },
        )
        .unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                pointer: Point::new(400, 400),
            },
        )
        .unwrap();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::BeginResize {
                window_id: second.clone(),
            },
        )
        .unwrap();

        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ReleasePointer(first.clone()),
                RuntimeEffect::TrackPointer(second.clone()),
            ]
        );
        assert_eq!(
            state.window(&first).unwrap().geometry().position(),
            Point::new(100, 100)
        );
        assert_eq!(state.pointer_owner, Some(second));
    }
}
