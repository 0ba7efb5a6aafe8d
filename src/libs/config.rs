//! Card decoration settings: shape, defaults and validation.
//!
//! The application keeps exactly one configuration record with three fields:
//!
//! | Field                | Type    | Default | Valid range |
//! |----------------------|---------|---------|-------------|
//! | `show_priority`      | boolean | `true`  |             |
//! | `show_duration`      | boolean | `true`  |             |
//! | `work_hours_per_day` | integer | `7`     | `1..=24`    |
//!
//! Values arrive loosely typed, either as a stored row or as a submitted form,
//! and are turned into a strongly typed [`Configuration`] at one boundary. None
//! of the functions here fail: anything out of range or unreadable is silently
//! replaced by the default.
//!
//! ## Two Reading Rules
//!
//! - [`Configuration::resolve`] reads a stored record. Flags are truthy when
//!   their integer value is non-zero; no record at all means all defaults.
//! - [`Configuration::validate_for_save`] reads a form submission. A flag is
//!   `true` only when its value is exactly `1`; a missing key is `false`.
//!
//! Both apply the same repair to `work_hours_per_day`.
//!
//! ## Usage
//!
//! ```rust
//! use klg::libs::config::{Configuration, ConfigInput};
//! use serde_json::json;
//!
//! let input: ConfigInput = json!({"show_priority": "1", "work_hours_per_day": 30})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let config = Configuration::validate_for_save(&input);
//! assert!(config.show_priority);
//! assert!(!config.show_duration);
//! assert_eq!(config.work_hours_per_day, 7);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely typed key/value input, as submitted by a form or loaded from storage.
pub type ConfigInput = Map<String, Value>;

pub const KEY_SHOW_PRIORITY: &str = "show_priority";
pub const KEY_SHOW_DURATION: &str = "show_duration";
pub const KEY_WORK_HOURS_PER_DAY: &str = "work_hours_per_day";

pub const DEFAULT_SHOW_PRIORITY: bool = true;
pub const DEFAULT_SHOW_DURATION: bool = true;
pub const DEFAULT_WORK_HOURS_PER_DAY: u8 = 7;
pub const MIN_WORK_HOURS_PER_DAY: i64 = 1;
pub const MAX_WORK_HOURS_PER_DAY: i64 = 24;

/// Resolved card decoration settings.
///
/// Every instance is valid: `work_hours_per_day` is always within `1..=24`
/// when built through [`Configuration::resolve`] or
/// [`Configuration::validate_for_save`]. Deserializing goes through `resolve`
/// as well.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(from = "ConfigInput")]
pub struct Configuration {
    /// Show the priority badge and priority colors on project cards.
    pub show_priority: bool,

    /// Show the planned duration on project and task cards.
    pub show_duration: bool,

    /// Length of one work day in hours, used when expressing durations in days.
    pub work_hours_per_day: u8,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            show_priority: DEFAULT_SHOW_PRIORITY,
            show_duration: DEFAULT_SHOW_DURATION,
            work_hours_per_day: DEFAULT_WORK_HOURS_PER_DAY,
        }
    }
}

impl Configuration {
    /// Builds the effective configuration from a stored record.
    ///
    /// With no record the defaults `(true, true, 7)` are returned. A record's
    /// flags are coerced to integers and read as truthy when non-zero; a key
    /// missing from the record keeps its default. `work_hours_per_day` is
    /// repaired to `7` when out of range or unreadable.
    pub fn resolve(record: Option<&ConfigInput>) -> Self {
        let defaults = Self::default();
        let Some(record) = record else {
            return defaults;
        };

        let flag = |key: &str, default: bool| match record.get(key).and_then(coerce_int) {
            Some(value) => value != 0,
            None => default,
        };

        Self {
            show_priority: flag(KEY_SHOW_PRIORITY, defaults.show_priority),
            show_duration: flag(KEY_SHOW_DURATION, defaults.show_duration),
            work_hours_per_day: work_hours_from(record),
        }
    }

    /// Normalizes an untrusted form submission into a configuration ready to persist.
    ///
    /// Flags are `true` only when their coerced value equals `1`; anything else,
    /// including a missing key, is `false`. Never fails.
    pub fn validate_for_save(input: &ConfigInput) -> Self {
        let flag = |key: &str| input.get(key).and_then(coerce_int) == Some(1);

        Self {
            show_priority: flag(KEY_SHOW_PRIORITY),
            show_duration: flag(KEY_SHOW_DURATION),
            work_hours_per_day: work_hours_from(input),
        }
    }

    /// Re-encodes the configuration the way a form or stored row carries it
    /// (flags as `1`/`0`).
    pub fn to_input(&self) -> ConfigInput {
        let mut input = ConfigInput::new();
        input.insert(KEY_SHOW_PRIORITY.to_string(), Value::from(i64::from(self.show_priority)));
        input.insert(KEY_SHOW_DURATION.to_string(), Value::from(i64::from(self.show_duration)));
        input.insert(KEY_WORK_HOURS_PER_DAY.to_string(), Value::from(self.work_hours_per_day));
        input
    }

    /// True when neither decoration is enabled, so no card needs any work.
    pub fn is_disabled(&self) -> bool {
        !self.show_priority && !self.show_duration
    }
}

impl From<ConfigInput> for Configuration {
    fn from(record: ConfigInput) -> Self {
        Self::resolve(Some(&record))
    }
}

/// Host-facing entry point for persisting a submitted configuration change.
pub fn validate_and_normalize_config(form_input: &ConfigInput) -> Configuration {
    Configuration::validate_for_save(form_input)
}

/// Keeps `hours` when it is a valid work-day length, otherwise returns the default.
pub fn normalize_work_hours(hours: i64) -> u8 {
    if (MIN_WORK_HOURS_PER_DAY..=MAX_WORK_HOURS_PER_DAY).contains(&hours) {
        hours as u8
    } else {
        DEFAULT_WORK_HOURS_PER_DAY
    }
}

fn work_hours_from(input: &ConfigInput) -> u8 {
    match input.get(KEY_WORK_HOURS_PER_DAY).and_then(coerce_int) {
        Some(hours) => normalize_work_hours(hours),
        None => DEFAULT_WORK_HOURS_PER_DAY,
    }
}

/// Coerces a loosely typed value to an integer.
///
/// Numbers are truncated toward zero, booleans map to `1`/`0`, and strings
/// contribute their leading signed digits (`"12abc"` → 12, `"abc"` → 0).
/// `null`, arrays and objects count as absent.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().map(truncate_float)),
        Value::String(text) => Some(leading_int(text)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn truncate_float(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));

    if negative {
        -value
    } else {
        value
    }
}
