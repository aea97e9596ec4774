//! Window-manager data model: ids, geometry primitives, descriptors, and application keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest width a resize gesture may produce.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Smallest height a resize gesture may produce.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Slack added between the pointer and the bottom-right corner while resizing.
pub const RESIZE_PADDING: i32 = 10;
/// Height reserved for the taskbar when a window is maximized.
pub const TASKBAR_HEIGHT_PX: i32 = 40;
/// Stacking priority of the active window.
pub const ACTIVE_WINDOW_Z_INDEX: u32 = 50;
/// Stacking priority of every other window.
pub const INACTIVE_WINDOW_Z_INDEX: u32 = 10;
/// Top-left corner used by desktop launchers.
pub const DEFAULT_LAUNCH_POSITION: Point = Point::new(100, 100);
/// Window size used by desktop launchers.
pub const DEFAULT_LAUNCH_SIZE: Size = Size::new(600, 400);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque window identifier; unique among simultaneously open windows.
pub struct WindowId(pub String);

impl WindowId {
    /// Wraps an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrowed id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
/// Pixel coordinate in desktop space.
pub struct Point {
    /// Horizontal offset from the desktop's left edge.
    pub x: i32,
    /// Vertical offset from the desktop's top edge.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub const fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
/// Width and height in pixels.
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Applies the [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`] floor.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Position and size captured together, used for maximize and gesture snapshots.
pub struct FrameSnapshot {
    /// Top-left corner.
    pub position: Point,
    /// Outer size.
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Applications the dispatch table knows how to mount.
///
/// Keys that match none of the known applications are kept verbatim in [`AppId::Unknown`] so a
/// stale or future launcher still opens a window, with the fallback view in its body.
pub enum AppId {
    /// Dream Journal (`notepad`).
    Journal,
    /// Dream Canvas (`paint`).
    Paint,
    /// Dream Mail (`outlook`).
    Mail,
    /// Dream Terminal (`cmd`).
    Terminal,
    /// My Dreams browser (`mycomputer`).
    Explorer,
    /// Forgotten Dreams trash (`recycle`).
    Recycle,
    /// Lucid Mode trainer (`lucid`).
    LucidMode,
    /// Shadow Work reflection (`nightmare`).
    ShadowWork,
    /// Any other key.
    Unknown(String),
}

impl AppId {
    /// Resolves a launcher key.
    pub fn from_key(key: &str) -> Self {
        match key {
            "notepad" => Self::Journal,
            "paint" => Self::Paint,
            "outlook" => Self::Mail,
            "cmd" => Self::Terminal,
            "mycomputer" => Self::Explorer,
            "recycle" => Self::Recycle,
            "lucid" => Self::LucidMode,
            "nightmare" => Self::ShadowWork,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Launcher key; the inverse of [`AppId::from_key`].
    pub fn key(&self) -> &str {
        match self {
            Self::Journal => "notepad",
            Self::Paint => "paint",
            Self::Mail => "outlook",
            Self::Terminal => "cmd",
            Self::Explorer => "mycomputer",
            Self::Recycle => "recycle",
            Self::LucidMode => "lucid",
            Self::ShadowWork => "nightmare",
            Self::Unknown(key) => key,
        }
    }

    /// Display name used by launchers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Journal => "Dream Journal",
            Self::Paint => "Dream Canvas",
            Self::Mail => "Dream Mail",
            Self::Terminal => "Dream Terminal",
            Self::Explorer => "My Dreams",
            Self::Recycle => "Forgotten Dreams",
            Self::LucidMode => "Lucid Mode",
            Self::ShadowWork => "Shadow Work",
            Self::Unknown(_) => "Unknown Application",
        }
    }

    /// Whether the key resolved to a known application.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::from_key(value)
    }
}

impl From<AppId> for String {
    fn from(value: AppId) -> Self {
        match value {
            AppId::Unknown(key) => key,
            known => known.key().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Creation-time parameters of a window; never changes after `open`.
pub struct WindowDescriptor {
    /// Deduplication and lookup key.
    pub id: WindowId,
    /// Title bar and taskbar caption.
    pub title: String,
    /// Application mounted in the window body.
    pub app_id: AppId,
    /// Initial top-left corner.
    pub initial_position: Point,
    /// Initial outer size.
    pub initial_size: Size,
}

impl WindowDescriptor {
    /// Descriptor for `app_id` at the default launcher geometry, keyed and titled by the app.
    pub fn for_app(app_id: AppId) -> Self {
        Self {
            id: WindowId::new(app_id.key()),
            title: app_id.title().to_string(),
            app_id,
            initial_position: DEFAULT_LAUNCH_POSITION,
            initial_size: DEFAULT_LAUNCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Wire form of an open request as issued by launch surfaces.
pub struct LaunchRequest {
    /// Window id.
    pub id: String,
    /// Window title.
    pub title: String,
    /// Application key, resolved through [`AppId::from_key`].
    pub application_id: String,
    /// Initial top-left corner.
    pub position: Point,
    /// Initial outer size.
    pub size: Size,
}

impl From<LaunchRequest> for WindowDescriptor {
    fn from(request: LaunchRequest) -> Self {
        Self {
            id: WindowId(request.id),
            title: request.title,
            app_id: AppId::from_key(&request.application_id),
            initial_position: request.position,
            initial_size: request.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn app_keys_round_trip_and_unknown_keys_are_preserved() {
        for key in [
            "notepad",
            "paint",
            "outlook",
            "cmd",
            "mycomputer",
            "recycle",
            "lucid",
            "nightmare",
        ] {
            let app = AppId::from_key(key);
            assert!(app.is_known(), "{key} should be known");
            assert_eq!(app.key(), key);
        }

        let unknown = AppId::from_key("solitaire");
        assert_eq!(unknown, AppId::Unknown("solitaire".to_string()));
        assert_eq!(String::from(unknown), "solitaire");
    }

    #[test]
    fn launch_request_uses_camel_case_wire_names() {
        let request: LaunchRequest = serde_json::from_value(json!({
            "id": "cmd",
            "title": "Dream Terminal",
            "applicationId": "cmd",
            "position": { "x": 100, "y": 100 },
            "size": { "width": 600, "height": 400 },
        }))
        .expect("launch request");

        let descriptor = WindowDescriptor::from(request);
        assert_eq!(descriptor, WindowDescriptor::for_app(AppId::Terminal));
    }

    #[test]
    fn size_floor_applies_to_both_axes() {
        assert_eq!(Size::new(-40, 90).clamped_min(), Size::new(200, 150));
        assert_eq!(Size::new(640, 480).clamped_min(), Size::new(640, 480));
    }
}
