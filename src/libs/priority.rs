//! Priority levels: built-in colors and names, plus host overrides.
//!
//! Projects carry a priority level from 1 (very low) to 6 (major); 0 means
//! the priority is unset. Each level has a built-in color and name, and the
//! host may override either:
//!
//! - **Colors**: a color supplied with the item wins, then the session's
//!   configured colors ([`PriorityColors`]), then the built-in palette.
//! - **Names**: the host's localized naming ([`PriorityNaming`]) wins over the
//!   built-in table.
//!
//! ```rust
//! use klg::libs::priority::PriorityResolver;
//! use std::collections::HashMap;
//!
//! let session: HashMap<i32, String> = HashMap::from([(5, "#aa0000".to_string())]);
//! let resolver = PriorityResolver::new().with_colors(&session);
//!
//! assert_eq!(resolver.color(5, None).as_deref(), Some("#aa0000"));
//! assert_eq!(resolver.color(1, None).as_deref(), Some("#5cb85c"));
//! assert_eq!(resolver.name(6).as_deref(), Some("Major"));
//! ```

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 6;

/// Built-in colors for levels 1 to 6.
pub const DEFAULT_PRIORITY_COLORS: [&str; 6] = ["#5cb85c", "#5bc0de", "#f0ad4e", "#ff9800", "#d9534f", "#c9302c"];

/// Built-in names for levels 1 to 6.
pub const DEFAULT_PRIORITY_NAMES: [&str; 6] = ["Very low", "Low", "Medium", "High", "Very high", "Major"];

/// Source of per-level priority colors configured outside the card item,
/// typically the user's session preferences.
pub trait PriorityColors {
    fn priority_color(&self, level: i32) -> Option<String>;
}

/// The host's own (usually localized) priority names.
pub trait PriorityNaming {
    fn priority_name(&self, level: i32) -> Option<String>;
}

impl PriorityColors for HashMap<i32, String> {
    fn priority_color(&self, level: i32) -> Option<String> {
        self.get(&level).cloned()
    }
}

impl PriorityColors for BTreeMap<i32, String> {
    fn priority_color(&self, level: i32) -> Option<String> {
        self.get(&level).cloned()
    }
}

impl PriorityNaming for HashMap<i32, String> {
    fn priority_name(&self, level: i32) -> Option<String> {
        self.get(&level).cloned()
    }
}

impl PriorityNaming for BTreeMap<i32, String> {
    fn priority_name(&self, level: i32) -> Option<String> {
        self.get(&level).cloned()
    }
}

fn table_index(level: i32) -> Option<usize> {
    (MIN_PRIORITY..=MAX_PRIORITY).contains(&level).then(|| (level - MIN_PRIORITY) as usize)
}

/// Built-in color for `level`, or `None` outside `1..=6`.
pub fn default_priority_color(level: i32) -> Option<&'static str> {
    table_index(level).map(|index| DEFAULT_PRIORITY_COLORS[index])
}

/// Built-in name for `level`, or `None` outside `1..=6`.
pub fn default_priority_name(level: i32) -> Option<&'static str> {
    table_index(level).map(|index| DEFAULT_PRIORITY_NAMES[index])
}

/// Resolves display colors and names for priority levels with host overrides applied.
#[derive(Clone, Copy, Default)]
pub struct PriorityResolver<'a> {
    colors: Option<&'a dyn PriorityColors>,
    naming: Option<&'a dyn PriorityNaming>,
}

impl<'a> PriorityResolver<'a> {
    /// A resolver that only knows the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: &'a dyn PriorityColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_naming(mut self, naming: &'a dyn PriorityNaming) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Display color for `level`. Empty strings from any source are ignored.
    pub fn color(&self, level: i32, item_color: Option<&str>) -> Option<String> {
        if let Some(color) = item_color.filter(|c| !c.trim().is_empty()) {
            return Some(color.trim().to_string());
        }

        if let Some(color) = self.colors.and_then(|colors| colors.priority_color(level)).filter(|c| !c.trim().is_empty()) {
            debug!(level, color = %color, "using session priority color");
            return Some(color.trim().to_string());
        }

        default_priority_color(level).map(str::to_string)
    }

    /// Display name for `level`, preferring the host's naming.
    pub fn name(&self, level: i32) -> Option<String> {
        if let Some(name) = self.naming.and_then(|naming| naming.priority_name(level)).filter(|n| !n.is_empty()) {
            return Some(name);
        }

        default_priority_name(level).map(str::to_string)
    }
}
