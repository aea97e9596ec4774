use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

use crate::boot::{BootScreen, BOOT_DURATION};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let booting = create_rw_signal(true);
    set_timeout(move || booting.set(false), BOOT_DURATION);

    view! {
        <Title text="DreamLog 98" />
        <Meta name="description" content="A retro desktop for recording and exploring your dreams." />

        <main class="site-root">
            <Show when=move || !booting.get() fallback=|| view! { <BootScreen /> }>
                <DesktopEntry />
            </Show>
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
