//! Glyph icon set for desktop icons, window chrome, and app toolbars.
//!
//! Every glyph is a small stroked SVG body drawn on a 24px grid so shell and app components
//! never embed raw markup.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Dream journal document.
    Journal,
    /// Paint brush.
    Brush,
    /// Envelope.
    Mail,
    /// Terminal prompt.
    Terminal,
    /// Drive / dream archive.
    Drive,
    /// Trash can.
    Trash,
    /// Open eye (lucid mode).
    Eye,
    /// Crescent moon (shadow work).
    Moon,
    /// Closed folder.
    Folder,
    /// Star outline.
    Star,
    /// Curved reply arrow.
    Reply,
    /// Straight forward arrow.
    Forward,
    /// Counter-clockwise undo arrow.
    Undo,
    /// Magnifier.
    Search,
    /// Sparkle used for AI actions.
    Sparkle,
    /// Floppy disk.
    Save,
    /// Window minimize bar.
    WindowMinimize,
    /// Window maximize square.
    WindowMaximize,
    /// Window restore double square.
    WindowRestore,
    /// Close cross.
    Dismiss,
}

impl IconName {
    /// Stable DOM token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Brush => "brush",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
            Self::Drive => "drive",
            Self::Trash => "trash",
            Self::Eye => "eye",
            Self::Moon => "moon",
            Self::Folder => "folder",
            Self::Star => "star",
            Self::Reply => "reply",
            Self::Forward => "forward",
            Self::Undo => "undo",
            Self::Search => "search",
            Self::Sparkle => "sparkle",
            Self::Save => "save",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Journal => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/><path d="M8 13h8M8 17h8M8 9h2"/>"#
            }
            Self::Brush => {
                r#"<path d="M18.4 2.6a2 2 0 0 1 2.9 2.9L11 15.8 8.2 13z"/><path d="M7 14c-1.7 0-3 1.3-3 3 0 1.3-1 2-2 2 1 1.5 2.5 2 4 2a4 4 0 0 0 4-4z"/>"#
            }
            Self::Mail => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 6-10 7L2 6"/>"#
            }
            Self::Terminal => r#"<path d="m4 17 6-6-6-6"/><path d="M12 19h8"/>"#,
            Self::Drive => {
                r#"<path d="M22 12H2"/><path d="M5.5 5.1 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.5-6.9A2 2 0 0 0 16.8 4H7.2a2 2 0 0 0-1.7 1.1z"/><path d="M6 16h.01M10 16h.01"/>"#
            }
            Self::Trash => {
                r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/><path d="M10 11v6M14 11v6"/>"#
            }
            Self::Eye => {
                r#"<path d="M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"/>"#,
            Self::Folder => {
                r#"<path d="M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-8l-2-3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2z"/>"#
            }
            Self::Star => {
                r#"<path d="m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z"/>"#
            }
            Self::Reply => r#"<path d="m9 17-5-5 5-5"/><path d="M20 18v-2a4 4 0 0 0-4-4H4"/>"#,
            Self::Forward => r#"<path d="m15 17 5-5-5-5"/><path d="M4 18v-2a4 4 0 0 1 4-4h12"/>"#,
            Self::Undo => r#"<path d="M3 7v6h6"/><path d="M21 17a9 9 0 0 0-15-6.7L3 13"/>"#,
            Self::Search => r#"<circle cx="11" cy="11" r="7"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Sparkle => {
                r#"<path d="M12 3v4M12 17v4M3 12h4M17 12h4"/><path d="m12 8 1.5 2.5L16 12l-2.5 1.5L12 16l-1.5-2.5L8 12l2.5-1.5z"/>"#
            }
            Self::Save => {
                r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><path d="M17 21v-8H7v8M7 3v5h8"/>"#
            }
            Self::WindowMinimize => r#"<path d="M5 18h14"/>"#,
            Self::WindowMaximize => r#"<rect x="4" y="4" width="16" height="16"/><path d="M4 7h16"/>"#,
            Self::WindowRestore => {
                r#"<rect x="3" y="8" width="13" height="13"/><path d="M8 8V3h13v13h-5"/>"#
            }
            Self::Dismiss => r#"<path d="M18 6 6 18M6 6l12 12"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Rendered icon size.
pub enum IconSize {
    /// 12px glyph for window chrome.
    Xs,
    /// 16px glyph.
    #[default]
    Sm,
    /// 24px glyph.
    Md,
    /// 32px glyph for desktop icons.
    Lg,
}

impl IconSize {
    /// Pixel edge length.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 32,
        }
    }

    /// Stable DOM token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Inline SVG glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            inner_html=icon.svg_body()
        ></svg>
    }
}
