//! HTML fragment rendering of card metadata.
//!
//! Produces the markup injected into a kanban card: style rules tinting the
//! card and its header, a priority badge block and a duration block with a
//! clock icon. Every interpolated value is HTML-escaped. Empty metadata
//! renders to an empty string.

use super::card::{CardMetadata, ItemType};

pub const METADATA_CLASS: &str = "kanbanlooksgood-metadata";
pub const PRIORITY_CLASS: &str = "kanbanlooksgood-priority";
pub const DURATION_CLASS: &str = "kanbanlooksgood-duration";

pub struct Html {}

impl Html {
    /// Renders the fragment for the card `item_type`-`item_id`.
    pub fn card(item_type: ItemType, item_id: i64, metadata: &CardMetadata) -> String {
        let mut html = String::new();
        if metadata.is_empty() {
            return html;
        }

        let selector = format!(".kanban-item#{}-{}", item_type, item_id);

        if let Some(hints) = &metadata.background_hints {
            html.push_str(&format!(
                "<style>{} {{ background-color: {} !important; }}</style>",
                selector,
                escape(&hints.card_background)
            ));
            html.push_str(&format!(
                "<style>{} .kanban-item-header {{ background-color: {} !important; }}</style>",
                selector,
                escape(&hints.header_background)
            ));
        }

        if metadata.priority_badge.is_none() && metadata.duration_label.is_none() {
            return html;
        }

        html.push_str(&format!("<div class='{}'>", METADATA_CLASS));

        if let Some(badge) = &metadata.priority_badge {
            html.push_str(&format!("<div class='{}'>", PRIORITY_CLASS));
            match &badge.color_hex {
                Some(color) => {
                    let color = escape(color);
                    html.push_str(&format!(
                        "<div class='priority_block' style='border-color: {}'><span style='background: {}'></span>&nbsp;{}</div>",
                        color,
                        color,
                        escape(&badge.label)
                    ));
                }
                None => html.push_str(&format!("<div class='priority_block'>{}</div>", escape(&badge.label))),
            }
            html.push_str("</div>");
        }

        if let Some(duration) = &metadata.duration_label {
            html.push_str(&format!(
                "<div class='{}'><i class='ti ti-clock'></i>&nbsp;{}</div>",
                DURATION_CLASS,
                escape(duration)
            ));
        }

        html.push_str("</div>");
        html
    }
}

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
