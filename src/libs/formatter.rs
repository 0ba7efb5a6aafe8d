//! Planned-duration formatting for kanban cards.
//!
//! Planned durations are stored in seconds but shown to people in work days,
//! hours and minutes. A "day" here is a work day whose length comes from the
//! configured `work_hours_per_day`, not a 24-hour calendar day, so the same
//! 8 hours of effort reads `1d 1h` under a 7-hour calendar and `1d` under an
//! 8-hour one.
//!
//! ## Format Specifications
//!
//! - Components are emitted in day → hour → minute order: `"2d 3h 15min"`
//! - Zero components are omitted: `"1d 45min"`, `"3h"`
//! - Leftover seconds below a minute are dropped
//! - A positive duration shorter than one minute reads `"< 1min"`
//! - Zero and negative durations produce the empty string (nothing to show)
//!
//! ## Examples
//!
//! ```rust
//! use klg::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(7 * 3600, 7), "1d");
//! assert_eq!(format_duration(7 * 3600 + 2700, 7), "1d 45min");
//! assert_eq!(format_duration(10800, 8), "3h");
//! assert_eq!(format_duration(59, 7), "< 1min");
//! assert_eq!(format_duration(0, 7), "");
//! ```

use super::config::{normalize_work_hours, Configuration};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Label used for positive durations that round down to zero minutes.
pub const UNDER_ONE_MINUTE: &str = "< 1min";

/// Formats a duration in seconds as a compact work-calendar string.
///
/// `hours_per_day` sets the length of a work day. Values outside `1..=24`
/// are repaired to the default work day, so the function is total and never
/// panics.
///
/// # Returns
///
/// An empty string when `seconds <= 0`, otherwise a non-empty label such as
/// `"1d 2h 30min"` or `"< 1min"`.
pub fn format_duration(seconds: i64, hours_per_day: u8) -> String {
    if seconds <= 0 {
        return String::new();
    }

    let seconds_per_day = i64::from(normalize_work_hours(i64::from(hours_per_day))) * SECONDS_PER_HOUR;

    let days = seconds / seconds_per_day;
    let remainder = seconds % seconds_per_day;

    let hours = remainder / SECONDS_PER_HOUR;
    let remainder = remainder % SECONDS_PER_HOUR;

    let minutes = remainder / SECONDS_PER_MINUTE;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "min")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if parts.is_empty() {
        return UNDER_ONE_MINUTE.to_string();
    }

    parts.join(" ")
}

/// Formats a planned duration, taking the work-day length from `config`
/// unless `hours_per_day` is given explicitly.
pub fn format_planned_duration(seconds: i64, hours_per_day: Option<u8>, config: &Configuration) -> String {
    format_duration(seconds, hours_per_day.unwrap_or(config.work_hours_per_day))
}
