//! Loading card items from the host before composing their metadata.
//!
//! [`card_metadata_for`] is what a board renderer calls once per card. It
//! applies the cheap checks first (supported item type, positive id, at least
//! one decoration enabled) so disabled boards never touch the item store,
//! then loads the item and composes its metadata.

use super::card::{compose, CardItem, CardMetadata, ItemType};
use super::config::Configuration;
use super::priority::PriorityResolver;
use anyhow::Result;
use tracing::{debug, error};

/// Host-side access to card items.
pub trait ItemLookup {
    /// Loads the item, or `None` when no such item exists. For projects the
    /// planned duration is the total across the project's tasks.
    fn load(&mut self, item_type: ItemType, item_id: i64) -> Result<Option<CardItem>>;
}

/// Loads and decorates one card. Never fails: unsupported, missing or
/// unreadable items produce empty metadata.
pub fn card_metadata_for(
    item_type: &str,
    item_id: i64,
    config: &Configuration,
    lookup: &mut dyn ItemLookup,
    priorities: &PriorityResolver,
) -> CardMetadata {
    let Ok(item_type) = item_type.parse::<ItemType>() else {
        return CardMetadata::empty();
    };
    if item_id <= 0 {
        return CardMetadata::empty();
    }

    if config.is_disabled() {
        debug!("priority and duration are both disabled");
        return CardMetadata::empty();
    }

    match lookup.load(item_type, item_id) {
        Ok(Some(item)) => compose(&item, config, priorities),
        Ok(None) => {
            debug!(%item_type, item_id, "card item not found");
            CardMetadata::empty()
        }
        Err(e) => {
            error!(%item_type, item_id, "failed to load card item: {:#}", e);
            CardMetadata::empty()
        }
    }
}
