//! Core library modules for the klg application.
//!
//! - **Settings**: [`config`] resolves and validates the configuration record
//! - **Card decoration**: [`card`] composes metadata, using [`formatter`],
//!   [`priority`] and [`color`]; [`lookup`] loads items before composing
//! - **Output**: [`render`] produces card HTML, [`view`] prints tables
//! - **Infrastructure**: [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use klg::libs::card::{compose_card_metadata, CardFields};
//! use klg::libs::config::Configuration;
//! use klg::libs::priority::PriorityResolver;
//!
//! let fields = CardFields { planned_duration_seconds: Some(5400), ..Default::default() };
//! let metadata = compose_card_metadata("ProjectTask", 3, &fields, &Configuration::default(), &PriorityResolver::new());
//! assert_eq!(metadata.duration_label.as_deref(), Some("1h 30min"));
//! ```

pub mod card;
pub mod color;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod lookup;
pub mod messages;
pub mod priority;
pub mod render;
pub mod view;
