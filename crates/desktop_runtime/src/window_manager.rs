//! Per-window geometry and pointer-gesture state machine.
//!
//! Each open window owns one [`WindowGeometry`]. It tracks position, size, the minimized and
//! maximized flags, and the drag/resize gesture in flight. It knows nothing about other windows;
//! stacking and focus belong to [`crate::registry::WindowRegistry`].

use crate::model::{
    FrameSnapshot, Point, Size, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, RESIZE_PADDING,
    TASKBAR_HEIGHT_PX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pointer gesture currently driving a window.
pub enum Gesture {
    /// No gesture; pointer moves and releases are ignored.
    #[default]
    Idle,
    /// Title-bar drag.
    Dragging {
        /// Pointer position relative to the window's top-left corner at drag start.
        offset: Point,
        /// Frame at drag start, restored on cancel.
        origin: FrameSnapshot,
    },
    /// Bottom-right resize.
    Resizing {
        /// Frame at resize start, restored on cancel.
        origin: FrameSnapshot,
    },
}

impl Gesture {
    /// Whether a drag or resize is in flight.
    pub fn is_live(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Geometry and interaction state of one window.
pub struct WindowGeometry {
    position: Point,
    size: Size,
    minimized: bool,
    pre_maximize: Option<FrameSnapshot>,
    gesture: Gesture,
}

impl WindowGeometry {
    /// Idle, restored geometry at the given frame.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            minimized: false,
            pre_maximize: None,
            gesture: Gesture::Idle,
        }
    }

    /// Current top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current outer size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current frame.
    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            position: self.position,
            size: self.size,
        }
    }

    /// Whether the window is hidden from the window layer.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Whether the window fills the screen above the taskbar.
    pub fn is_maximized(&self) -> bool {
        self.pre_maximize.is_some()
    }

    /// Frame captured when the window was maximized; `Some` exactly while maximized.
    pub fn pre_maximize(&self) -> Option<FrameSnapshot> {
        self.pre_maximize
    }

    /// Gesture in flight.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Starts a title-bar drag at `pointer`.
    ///
    /// Returns `false` (and stays put) while maximized or when a gesture is already in flight.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.is_maximized() || self.gesture.is_live() {
            return false;
        }
        self.gesture = Gesture::Dragging {
            offset: pointer.offset_from(self.position),
            origin: self.frame(),
        };
        true
    }

    /// Starts a bottom-right resize.
    ///
    /// Returns `false` while maximized or when a gesture is already in flight.
    pub fn begin_resize(&mut self) -> bool {
        if self.is_maximized() || self.gesture.is_live() {
            return false;
        }
        self.gesture = Gesture::Resizing {
            origin: self.frame(),
        };
        true
    }

    /// Tracks pointer motion for the live gesture. Returns whether the frame changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let before = self.frame();
        match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { offset, .. } => {
                self.position = pointer.offset_from(offset);
            }
            Gesture::Resizing { .. } => {
                self.size = resized_to_pointer(self.position, pointer);
            }
        }
        self.frame() != before
    }

    /// Commits the live gesture at the release position and returns to idle.
    ///
    /// Returns whether a gesture ended.
    pub fn pointer_up(&mut self, pointer: Point) -> bool {
        if !self.gesture.is_live() {
            return false;
        }
        self.pointer_move(pointer);
        self.gesture = Gesture::Idle;
        true
    }

    /// Abandons the live gesture, restoring the frame it started from.
    pub fn cancel_gesture(&mut self) -> bool {
        let origin = match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { origin, .. } | Gesture::Resizing { origin } => origin,
        };
        self.position = origin.position;
        self.size = origin.size;
        self.gesture = Gesture::Idle;
        true
    }

    /// Maximizes into `screen` minus the taskbar, or restores the pre-maximize frame verbatim.
    pub fn toggle_maximize(&mut self, screen: Size) {
        self.gesture = Gesture::Idle;
        match self.pre_maximize.take() {
            Some(snapshot) => {
                self.position = snapshot.position;
                self.size = snapshot.size;
            }
            None => {
                self.pre_maximize = Some(self.frame());
                self.position = Point::new(0, 0);
                self.size = maximized_size(screen);
            }
        }
    }

    /// Hides the window until [`WindowGeometry::restore`].
    pub fn minimize(&mut self) {
        self.gesture = Gesture::Idle;
        self.minimized = true;
    }

    /// Shows a minimized window again; maximized state is kept.
    pub fn restore(&mut self) {
        self.minimized = false;
    }
}

/// Frame size of a maximized window on a `screen`-sized desktop.
pub fn maximized_size(screen: Size) -> Size {
    Size::new(screen.width, screen.height - TASKBAR_HEIGHT_PX)
}

/// Size that puts the bottom-right corner just past `pointer`, floored at the minimum size.
pub fn resized_to_pointer(position: Point, pointer: Point) -> Size {
    Size::new(
        (pointer.x - position.x + RESIZE_PADDING).max(MIN_WINDOW_WIDTH),
        (pointer.y - position.y + RESIZE_PADDING).max(MIN_WINDOW_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn geometry() -> WindowGeometry {
        WindowGeometry::new(Point::new(80, 80), Size::new(600, 400))
    }

    #[test]
    fn drag_keeps_the_pointer_to_corner_offset() {
        let mut window = geometry();
        assert!(window.begin_drag(Point::new(100, 100)));

        window.pointer_move(Point::new(130, 140));
        assert_eq!(window.position(), Point::new(110, 120));

        assert!(window.pointer_up(Point::new(130, 140)));
        assert_eq!(window.position(), Point::new(110, 120));
        assert_eq!(window.gesture(), Gesture::Idle);
    }

    #[test]
    fn drag_is_not_clamped_to_the_screen() {
        let mut window = geometry();
        window.begin_drag(Point::new(90, 90));
        window.pointer_move(Point::new(-500, -300));
        assert_eq!(window.position(), Point::new(-510, -310));
    }

    #[test]
    fn resize_floors_at_minimum_even_above_and_left_of_origin() {
        let mut window = geometry();
        assert!(window.begin_resize());

        window.pointer_move(Point::new(0, 0));
        assert_eq!(window.size(), Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));

        window.pointer_move(Point::new(480, 330));
        assert_eq!(window.size(), Size::new(410, 260));
        assert_eq!(window.position(), Point::new(80, 80));

        window.pointer_up(Point::new(81, 81));
        assert_eq!(window.size(), Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn idle_window_ignores_pointer_motion_and_release() {
        let mut window = geometry();
        let before = window.clone();

        assert!(!window.pointer_move(Point::new(500, 500)));
        assert!(!window.pointer_up(Point::new(500, 500)));
        assert!(!window.cancel_gesture());
        assert_eq!(window, before);
    }

    #[test]
    fn maximize_twice_restores_the_exact_frame() {
        let mut window = WindowGeometry::new(Point::new(37, -12), Size::new(333, 222));
        let screen = Size::new(1280, 800);

        window.toggle_maximize(screen);
        assert!(window.is_maximized());
        assert_eq!(window.position(), Point::new(0, 0));
        assert_eq!(window.size(), Size::new(1280, 760));
        assert_eq!(
            window.pre_maximize(),
            Some(FrameSnapshot {
                position: Point::new(37, -12),
                size: Size::new(333, 222),
            })
        );

        window.toggle_maximize(screen);
        assert!(!window.is_maximized());
        assert_eq!(window.pre_maximize(), None);
        assert_eq!(window.position(), Point::new(37, -12));
        assert_eq!(window.size(), Size::new(333, 222));
    }

    #[test]
    fn gestures_are_refused_while_maximized() {
        let mut window = geometry();
        window.toggle_maximize(Size::new(1024, 768));

        assert!(!window.begin_drag(Point::new(10, 10)));
        assert!(!window.begin_resize());
        assert!(!window.pointer_move(Point::new(300, 300)));
        assert_eq!(window.position(), Point::new(0, 0));
    }

    #[test]
    fn cancel_restores_the_frame_at_gesture_start() {
        let mut window = geometry();
        window.begin_drag(Point::new(100, 100));
        window.pointer_move(Point::new(400, 250));
        assert!(window.cancel_gesture());
        assert_eq!(window.position(), Point::new(80, 80));

        window.begin_resize();
        window.pointer_move(Point::new(900, 900));
        assert!(window.cancel_gesture());
        assert_eq!(window.size(), Size::new(600, 400));
        assert_eq!(window.gesture(), Gesture::Idle);
    }

    #[test]
    fn minimize_ends_the_gesture_and_restore_keeps_maximized_state() {
        let mut window = geometry();
        window.toggle_maximize(Size::new(1024, 768));
        window.minimize();
        assert!(window.is_minimized());

        window.restore();
        assert!(!window.is_minimized());
        assert!(window.is_maximized());
    }
}
