mod boot;
mod web_app;

pub use boot::{boot_transcript, BootScreen, BOOT_DURATION, BOOT_LINES};
pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
