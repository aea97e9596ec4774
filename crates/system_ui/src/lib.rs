//! Shared Win98-style UI primitives for the desktop shell and the bundled dream applications.
//!
//! The crate owns reusable Leptos primitives, the glyph icon set, and the stable `data-ui-*`
//! DOM contract consumed by the shell stylesheet. Apps compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Badge, Button, ButtonSize, ButtonVariant, CheckboxField, ClockButton,
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    EmptyState, FieldVariant, Heading, LayoutGap, LayoutPadding, ListSurface, MenuBar, MenuItem,
    MenuSeparator, MenuSurface, Pane, PaneHeader, Panel, ProgressBar, RangeField, ResizeHandle,
    SelectField, StatusBar, StatusBarItem, Swatch, Taskbar, TaskbarButton, TaskbarSection,
    TerminalLine, TerminalPrompt, TerminalSurface, TerminalTranscript, Text, TextArea, TextField,
    TextRole, TextTone, ToolBar, TrayButton, TrayList, Tree, TreeItem, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Badge, Button, ButtonSize, ButtonVariant, CheckboxField, ClockButton,
        DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
        EmptyState, FieldVariant, Heading, Icon, IconName, IconSize, LayoutGap, LayoutPadding,
        ListSurface, MenuBar, MenuItem, MenuSeparator, MenuSurface, Pane, PaneHeader, Panel,
        ProgressBar, RangeField, ResizeHandle, SelectField, StatusBar, StatusBarItem, Swatch,
        Taskbar, TaskbarButton, TaskbarSection, TerminalLine, TerminalPrompt, TerminalSurface,
        TerminalTranscript, Text, TextArea, TextField, TextRole, TextTone, ToolBar, TrayButton,
        TrayList, Tree, TreeItem, WindowBody, WindowControlButton, WindowControls, WindowFrame,
        WindowTitle, WindowTitleBar,
    };
}
