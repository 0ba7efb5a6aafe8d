//! Card metadata composition.
//!
//! Given the resolved [`Configuration`] and the raw fields of one kanban card,
//! decides what decorations the card gets: a priority badge with matching
//! background colors (projects only) and a planned-duration label (projects
//! and tasks).
//!
//! ## Composition Rules
//!
//! 1. Only `Project` and `ProjectTask` cards with a positive id are decorated.
//! 2. With both decorations disabled nothing is computed.
//! 3. Priority: enabled, project card, level above 0. The badge carries the
//!    resolved color and name; with a color the card also gets background
//!    hints (the color lightened 80% toward white for the body, unmodified
//!    for the header). A name without a color yields a text-only badge.
//! 4. Duration: enabled and the planned duration is positive. Task cards use
//!    their own planned duration, project cards the total over their tasks.
//!
//! Every field of [`CardMetadata`] is optional; an absent field means "do not
//! render", never an error. Composition is a pure function of its inputs.
//!
//! ```rust
//! use klg::libs::card::{compose_card_metadata, CardFields};
//! use klg::libs::config::Configuration;
//! use klg::libs::priority::PriorityResolver;
//!
//! let fields = CardFields { priority_level: 5, planned_duration_seconds: Some(9 * 3600), ..Default::default() };
//! let metadata = compose_card_metadata("Project", 12, &fields, &Configuration::default(), &PriorityResolver::new());
//!
//! let badge = metadata.priority_badge.unwrap();
//! assert_eq!(badge.label, "Very high");
//! assert_eq!(badge.color_hex.as_deref(), Some("#d9534f"));
//! assert_eq!(metadata.duration_label.as_deref(), Some("1d 2h"));
//! ```

use super::color::{Rgb, CARD_BACKGROUND_LIGHTEN};
use super::config::Configuration;
use super::formatter::format_planned_duration;
use super::priority::PriorityResolver;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Kinds of kanban items that can be decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Project,
    ProjectTask,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported item type '{0}'")]
pub struct ItemTypeError(pub String);

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Project => "Project",
            ItemType::ProjectTask => "ProjectTask",
        }
    }
}

impl FromStr for ItemType {
    type Err = ItemTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Project" => Ok(ItemType::Project),
            "ProjectTask" => Ok(ItemType::ProjectTask),
            other => Err(ItemTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-card values supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    /// Priority level, `0` when unset. Only used for projects.
    pub priority_level: i32,
    /// Priority color already resolved by the host, if any.
    pub priority_color: Option<String>,
    /// Planned duration in seconds; for projects, the total across their tasks.
    pub planned_duration_seconds: Option<i64>,
}

/// One kanban card as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    pub item_type: ItemType,
    pub item_id: i64,
    #[serde(flatten)]
    pub fields: CardFields,
}

impl CardItem {
    pub fn new(item_type: ItemType, item_id: i64, fields: CardFields) -> Self {
        Self { item_type, item_id, fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBadge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundHints {
    /// Card body color in CSS `rgb()` notation.
    pub card_background: String,
    /// Card header color, the priority color itself.
    pub header_background: String,
}

/// Decorations computed for one card. Absent fields are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_badge: Option<PriorityBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_hints: Option<BackgroundHints>,
}

impl CardMetadata {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.priority_badge.is_none() && self.duration_label.is_none() && self.background_hints.is_none()
    }
}

/// Host entry point: decorates the card `item_type`/`item_id` from its raw fields.
///
/// Unknown item types and non-positive ids yield empty metadata.
pub fn compose_card_metadata(
    item_type: &str,
    item_id: i64,
    fields: &CardFields,
    config: &Configuration,
    priorities: &PriorityResolver,
) -> CardMetadata {
    let item_type = match item_type.parse::<ItemType>() {
        Ok(item_type) => item_type,
        Err(e) => {
            debug!("{}", e);
            return CardMetadata::empty();
        }
    };

    compose(&CardItem::new(item_type, item_id, fields.clone()), config, priorities)
}

/// Decorates an already typed card item.
pub fn compose(item: &CardItem, config: &Configuration, priorities: &PriorityResolver) -> CardMetadata {
    if item.item_id <= 0 || config.is_disabled() {
        return CardMetadata::empty();
    }

    let mut metadata = CardMetadata::empty();

    if config.show_priority && item.item_type == ItemType::Project && item.fields.priority_level > 0 {
        let (badge, hints) = priority_decoration(item, priorities);
        metadata.priority_badge = badge;
        metadata.background_hints = hints;
    }

    if config.show_duration {
        let seconds = item.fields.planned_duration_seconds.unwrap_or(0);
        if seconds > 0 {
            metadata.duration_label = Some(format_planned_duration(seconds, None, config));
        }
    }

    metadata
}

fn priority_decoration(item: &CardItem, priorities: &PriorityResolver) -> (Option<PriorityBadge>, Option<BackgroundHints>) {
    let level = item.fields.priority_level;
    let color = priorities.color(level, item.fields.priority_color.as_deref());
    let Some(label) = priorities.name(level) else {
        return (None, None);
    };

    let Some(color) = color else {
        return (Some(PriorityBadge { color_hex: None, label }), None);
    };

    let hints = match Rgb::from_hex(&color) {
        Ok(rgb) => Some(BackgroundHints {
            card_background: rgb.lighten(CARD_BACKGROUND_LIGHTEN).to_css_rgb(),
            header_background: color.clone(),
        }),
        Err(e) => {
            warn!(item_type = %item.item_type, item_id = item.item_id, "no background for priority color: {}", e);
            None
        }
    };

    (Some(PriorityBadge { color_hex: Some(color), label }), hints)
}
