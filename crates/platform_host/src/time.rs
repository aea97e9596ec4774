//! Time helpers shared across host contracts and app views.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds in one day.
pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// UTC calendar date broken out of a unix millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    /// Full year.
    pub year: i64,
    /// Month in `1..=12`.
    pub month: u32,
    /// Day of month in `1..=31`.
    pub day: u32,
}

impl CalendarDate {
    /// Converts a unix millisecond timestamp to a UTC civil date.
    pub fn from_unix_ms(ms: u64) -> Self {
        // days-from-civil inverse, proleptic Gregorian
        let days = (ms / DAY_MS) as i64 + 719_468;
        let era = days.div_euclid(146_097);
        let doe = days.rem_euclid(146_097);
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self { year, month, day }
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Formats a unix millisecond timestamp as `YYYY-MM-DD` (UTC).
pub fn format_date(ms: u64) -> String {
    CalendarDate::from_unix_ms(ms).to_string()
}

/// Wall-clock `HH:MM` for the taskbar tray.
pub fn format_clock(ms: u64) -> String {
    let minutes_of_day = (ms % DAY_MS) / 60_000;
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}
