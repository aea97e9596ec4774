//! Desktop-wide registry of open windows and the focused window.

use crate::{
    model::{WindowDescriptor, WindowId, ACTIVE_WINDOW_Z_INDEX, INACTIVE_WINDOW_Z_INDEX},
    window_manager::WindowGeometry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One registry entry: the immutable descriptor plus the window's own geometry machine.
pub struct OpenWindow {
    descriptor: WindowDescriptor,
    geometry: WindowGeometry,
}

impl OpenWindow {
    fn new(descriptor: WindowDescriptor) -> Self {
        let geometry = WindowGeometry::new(descriptor.initial_position, descriptor.initial_size);
        Self {
            descriptor,
            geometry,
        }
    }

    /// Window id.
    pub fn id(&self) -> &WindowId {
        &self.descriptor.id
    }

    /// Creation-time parameters.
    pub fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    /// Title bar caption.
    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    /// Geometry state, read-only.
    pub fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    /// Geometry state for the window's own gesture handling.
    pub fn geometry_mut(&mut self) -> &mut WindowGeometry {
        &mut self.geometry
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered open windows (insertion order) and the active window id.
///
/// The active id, when set, always names an entry in the list.
pub struct WindowRegistry {
    windows: Vec<OpenWindow>,
    active: Option<WindowId>,
}

impl WindowRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a window unless its id is already open, then focuses it.
    ///
    /// Returns `true` when a new entry was created.
    pub fn open(&mut self, descriptor: WindowDescriptor) -> bool {
        let id = descriptor.id.clone();
        let created = !self.contains(&id);
        if created {
            self.windows.push(OpenWindow::new(descriptor));
        }
        self.active = Some(id);
        created
    }

    /// Removes a window, discarding its geometry. Unknown ids are ignored.
    pub fn close(&mut self, id: &WindowId) -> Option<OpenWindow> {
        let index = self.windows.iter().position(|window| window.id() == id)?;
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Some(self.windows.remove(index))
    }

    /// Makes `id` the active window. Unknown ids are ignored; returns whether focus moved to it.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active = Some(id.clone());
        true
    }

    /// Open windows in open order.
    pub fn windows(&self) -> &[OpenWindow] {
        &self.windows
    }

    /// Active window id.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// Whether `id` is the active window.
    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Stacking priority: the active window sits above all others.
    pub fn z_index(&self, id: &WindowId) -> u32 {
        if self.is_active(id) {
            ACTIVE_WINDOW_Z_INDEX
        } else {
            INACTIVE_WINDOW_Z_INDEX
        }
    }

    /// Whether `id` is open.
    pub fn contains(&self, id: &WindowId) -> bool {
        self.windows.iter().any(|window| window.id() == id)
    }

    /// Entry for `id`.
    pub fn get(&self, id: &WindowId) -> Option<&OpenWindow> {
        self.windows.iter().find(|window| window.id() == id)
    }

    /// Mutable entry for `id`.
    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut OpenWindow> {
        self.windows.iter_mut().find(|window| window.id() == id)
    }

    /// Number of open windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, Point, Size};

    fn descriptor(id: &str) -> WindowDescriptor {
        WindowDescriptor {
            id: WindowId::new(id),
            title: id.to_uppercase(),
            app_id: AppId::from_key(id),
            initial_position: Point::new(100, 100),
            initial_size: Size::new(600, 400),
        }
    }

    fn ids(registry: &WindowRegistry) -> Vec<&str> {
        registry
            .windows()
            .iter()
            .map(|window| window.id().as_str())
            .collect()
    }

    #[test]
    fn open_appends_in_order_and_focuses_the_newest() {
        let mut registry = WindowRegistry::new();
        assert!(registry.open(descriptor("notepad")));
        assert!(registry.open(descriptor("paint")));

        assert_eq!(ids(&registry), vec!["notepad", "paint"]);
        assert_eq!(registry.active_window_id(), Some(&WindowId::new("paint")));
        assert_eq!(registry.z_index(&WindowId::new("paint")), ACTIVE_WINDOW_Z_INDEX);
        assert_eq!(
            registry.z_index(&WindowId::new("notepad")),
            INACTIVE_WINDOW_Z_INDEX
        );
    }

    #[test]
    fn duplicate_open_only_transfers_focus() {
        let mut registry = WindowRegistry::new();
        registry.open(descriptor("cmd"));
        registry.open(descriptor("paint"));

        let mut moved = descriptor("cmd");
        moved.initial_position = Point::new(5, 5);
        assert!(!registry.open(moved));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_window_id(), Some(&WindowId::new("cmd")));
        let cmd = registry.get(&WindowId::new("cmd")).expect("cmd open");
        assert_eq!(cmd.geometry().position(), Point::new(100, 100));
    }

    #[test]
    fn closing_the_active_window_clears_focus() {
        let mut registry = WindowRegistry::new();
        registry.open(descriptor("cmd"));

        let closed = registry.close(&WindowId::new("cmd"));
        assert!(closed.is_some());
        assert!(registry.is_empty());
        assert_eq!(registry.active_window_id(), None);
    }

    #[test]
    fn unknown_ids_are_ignored_by_close_and_focus() {
        let mut registry = WindowRegistry::new();
        registry.open(descriptor("cmd"));
        let before = registry.clone();

        assert!(registry.close(&WindowId::new("ghost")).is_none());
        assert!(!registry.focus(&WindowId::new("ghost")));
        assert_eq!(registry, before);
    }

    #[test]
    fn focus_does_not_reorder_windows() {
        let mut registry = WindowRegistry::new();
        registry.open(descriptor("a"));
        registry.open(descriptor("b"));

        assert!(registry.focus(&WindowId::new("a")));
        assert_eq!(ids(&registry), vec!["a", "b"]);
        assert!(registry.is_active(&WindowId::new("a")));
    }
}
