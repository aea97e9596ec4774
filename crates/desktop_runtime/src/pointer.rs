//! Scoped desktop-wide pointer subscription for a live drag or resize gesture.

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, window_event_listener, Callable, Callback};

use crate::{
    model::{Point, WindowId},
    reducer::DesktopAction,
};

/// Reads the viewport-relative pointer position from a mouse or pointer event.
pub fn pointer_position(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

/// Window-level `pointermove`, `pointerup`, `pointercancel`, and Escape listeners forwarding to
/// the reducer for one window's gesture.
///
/// Listeners are removed when the subscription is dropped, whichever path ends the gesture.
pub struct PointerSubscription {
    window_id: WindowId,
    handles: Vec<WindowListenerHandle>,
}

impl PointerSubscription {
    /// Attaches the listeners.
    pub fn acquire(window_id: WindowId, dispatch: Callback<DesktopAction>) -> Self {
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            dispatch.call(DesktopAction::PointerMove {
                pointer: pointer_position(&ev),
            });
        });
        let on_up = window_event_listener(ev::pointerup, move |ev| {
            dispatch.call(DesktopAction::PointerUp {
                pointer: pointer_position(&ev),
            });
        });
        let on_cancel = window_event_listener(ev::pointercancel, move |_| {
            dispatch.call(DesktopAction::CancelGesture);
        });
        let on_escape = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                dispatch.call(DesktopAction::CancelGesture);
            }
        });

        Self {
            window_id,
            handles: vec![on_move, on_up, on_cancel, on_escape],
        }
    }

    /// Window whose gesture holds the subscription.
    pub fn window_id(&self) -> &WindowId {
        &self.window_id
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}
