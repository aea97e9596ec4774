//! Application dispatch table and desktop launcher catalog.

use desktop_app_contract::{AppModule, AppMountContext, AppMountFn};
use desktop_app_explorer::MyDreamsApp;
use desktop_app_journal::DreamJournalApp;
use desktop_app_mail::DreamMailApp;
use desktop_app_paint::DreamCanvasApp;
use desktop_app_recycle::ForgottenDreamsApp;
use desktop_app_reflection::{LucidModeApp, ShadowWorkApp};
use desktop_app_terminal::DreamTerminalApp;
use leptos::*;
use system_ui::prelude::*;

use crate::model::{AppId, Point, WindowDescriptor, DEFAULT_LAUNCH_POSITION, DEFAULT_LAUNCH_SIZE};

/// Body text of the fallback view for unresolved application keys.
pub const APP_NOT_FOUND_TEXT: &str = "Application not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Desktop shortcut that opens one application.
pub struct DesktopIcon {
    /// Application key; also used as the window id so each app opens at most once.
    pub app_key: &'static str,
    /// Caption under the icon and the window title.
    pub label: &'static str,
    /// Fixed desktop coordinate.
    pub position: Point,
}

impl DesktopIcon {
    /// Application behind the shortcut.
    pub fn app_id(&self) -> AppId {
        AppId::from_key(self.app_key)
    }

    /// Window descriptor issued on double-activation.
    pub fn descriptor(&self) -> WindowDescriptor {
        WindowDescriptor {
            id: self.app_key.into(),
            title: self.label.to_string(),
            app_id: self.app_id(),
            initial_position: DEFAULT_LAUNCH_POSITION,
            initial_size: DEFAULT_LAUNCH_SIZE,
        }
    }
}

const fn icon(app_key: &'static str, label: &'static str, x: i32, y: i32) -> DesktopIcon {
    DesktopIcon {
        app_key,
        label,
        position: Point::new(x, y),
    }
}

const DESKTOP_ICONS: [DesktopIcon; 8] = [
    icon("notepad", "Dream Journal", 20, 20),
    icon("paint", "Dream Canvas", 20, 120),
    icon("outlook", "Dream Mail", 20, 220),
    icon("cmd", "Dream Terminal", 20, 320),
    icon("mycomputer", "My Dreams", 20, 420),
    icon("recycle", "Forgotten Dreams", 20, 520),
    icon("lucid", "Lucid Mode", 120, 20),
    icon("nightmare", "Shadow Work", 120, 120),
];

/// Shortcuts rendered on the desktop, in tab order.
pub fn desktop_icons() -> &'static [DesktopIcon] {
    &DESKTOP_ICONS
}

/// Glyph shown on launchers and title bars.
pub fn app_icon_name(app_id: &AppId) -> IconName {
    match app_id {
        AppId::Journal => IconName::Journal,
        AppId::Paint => IconName::Brush,
        AppId::Mail => IconName::Mail,
        AppId::Terminal => IconName::Terminal,
        AppId::Explorer => IconName::Drive,
        AppId::Recycle => IconName::Trash,
        AppId::LucidMode => IconName::Eye,
        AppId::ShadowWork => IconName::Moon,
        AppId::Unknown(_) => IconName::Folder,
    }
}

fn mount_journal(context: AppMountContext) -> View {
    view! { <DreamJournalApp services=context.services /> }.into_view()
}

fn mount_paint(context: AppMountContext) -> View {
    view! { <DreamCanvasApp services=context.services /> }.into_view()
}

fn mount_mail(context: AppMountContext) -> View {
    view! { <DreamMailApp services=context.services /> }.into_view()
}

fn mount_terminal(context: AppMountContext) -> View {
    view! { <DreamTerminalApp services=context.services /> }.into_view()
}

fn mount_explorer(context: AppMountContext) -> View {
    view! { <MyDreamsApp services=context.services /> }.into_view()
}

fn mount_recycle(context: AppMountContext) -> View {
    view! { <ForgottenDreamsApp services=context.services /> }.into_view()
}

fn mount_lucid_mode(context: AppMountContext) -> View {
    view! { <LucidModeApp services=context.services /> }.into_view()
}

fn mount_shadow_work(context: AppMountContext) -> View {
    view! { <ShadowWorkApp services=context.services /> }.into_view()
}

/// Resolves the module mounted for `app_id`; `None` selects the not-found view.
pub fn app_module(app_id: &AppId) -> Option<AppModule> {
    let mount_fn: AppMountFn = match app_id {
        AppId::Journal => mount_journal,
        AppId::Paint => mount_paint,
        AppId::Mail => mount_mail,
        AppId::Terminal => mount_terminal,
        AppId::Explorer => mount_explorer,
        AppId::Recycle => mount_recycle,
        AppId::LucidMode => mount_lucid_mode,
        AppId::ShadowWork => mount_shadow_work,
        AppId::Unknown(_) => return None,
    };
    Some(AppModule::new(mount_fn))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the fallback view shows for a key with no registered application.
pub struct AppNotFoundNotice {
    /// Body text.
    pub text: &'static str,
    /// The unresolved key, shown as the caption.
    pub app_key: String,
}

/// Resolves a window body: the app's module, or the notice for an unknown key.
///
/// # Errors
///
/// Returns [`AppNotFoundNotice`] when `app_id` is [`AppId::Unknown`].
pub fn resolve_app(app_id: &AppId, app_key: &str) -> Result<AppModule, AppNotFoundNotice> {
    app_module(app_id).ok_or_else(|| AppNotFoundNotice {
        text: APP_NOT_FOUND_TEXT,
        app_key: app_key.to_string(),
    })
}

/// Mounts the view for `app_id`, or the labelled fallback when the key is unknown.
pub fn mount_app(app_id: &AppId, context: AppMountContext) -> View {
    match resolve_app(app_id, &context.app_key) {
        Ok(module) => module.mount(context),
        Err(notice) => {
            logging::warn!("no application registered for `{}`", notice.app_key);
            view! { <AppNotFound notice=notice /> }.into_view()
        }
    }
}

#[component]
fn AppNotFound(notice: AppNotFoundNotice) -> impl IntoView {
    view! {
        <EmptyState layout_class="app-not-found">
            <Text>{notice.text}</Text>
            <Text role=TextRole::Caption tone=TextTone::Secondary>{notice.app_key}</Text>
        </EmptyState>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_desktop_icon_resolves_to_a_mounted_app() {
        for icon in desktop_icons() {
            let app_id = icon.app_id();
            assert!(app_id.is_known(), "{} should be known", icon.app_key);
            assert!(app_module(&app_id).is_some());
            assert_eq!(app_id.title(), icon.label);
        }
    }

    #[test]
    fn unknown_application_keys_select_the_fallback() {
        assert!(app_module(&AppId::from_key("nonexistent")).is_none());
        assert!(resolve_app(&AppId::Paint, "paint").is_ok());
    }

    #[test]
    fn desktop_icons_have_unique_ids_and_two_columns() {
        let keys: HashSet<_> = desktop_icons().iter().map(|icon| icon.app_key).collect();
        assert_eq!(keys.len(), desktop_icons().len());

        let first_column: Vec<_> = desktop_icons()
            .iter()
            .filter(|icon| icon.position.x == 20)
            .map(|icon| icon.position.y)
            .collect();
        assert_eq!(first_column, vec![20, 120, 220, 320, 420, 520]);
    }

    #[test]
    fn icon_descriptor_uses_launcher_geometry() {
        let descriptor = desktop_icons()[3].descriptor();
        assert_eq!(descriptor.id.as_str(), "cmd");
        assert_eq!(descriptor.title, "Dream Terminal");
        assert_eq!(descriptor.app_id, AppId::Terminal);
        assert_eq!(descriptor.initial_position, Point::new(100, 100));
        assert_eq!(descriptor.initial_size, DEFAULT_LAUNCH_SIZE);
    }
}
