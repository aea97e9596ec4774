//! Browser environment queries used by the shell: screen size, wall clock, and randomness.
//!
//! Native builds (unit tests, tooling) get fixed fallbacks so the reducer-facing code never
//! touches `web_sys` outside wasm.

use crate::model::Size;

/// Screen size assumed when no browser window is available.
pub const FALLBACK_SCREEN: Size = Size::new(1024, 768);

/// Full browser viewport size; the taskbar strip is not subtracted.
pub fn screen_size() -> Size {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback| {
                value
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(fallback)
            };
            return Size::new(
                read(window.inner_width(), FALLBACK_SCREEN.width),
                read(window.inner_height(), FALLBACK_SCREEN.height),
            );
        }
    }

    FALLBACK_SCREEN
}

/// Local wall-clock `HH:MM` for the tray.
pub fn clock_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        platform_host::format_clock(platform_host::unix_time_ms_now())
    }
}

/// Uniform sample in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or_default();
        f64::from(nanos % 1_000) / 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_screen_falls_back_to_xga() {
        assert_eq!(screen_size(), FALLBACK_SCREEN);
    }

    #[test]
    fn clock_label_is_hours_and_minutes() {
        let label = clock_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn random_unit_stays_in_range() {
        let sample = random_unit();
        assert!((0.0..1.0).contains(&sample));
    }
}
