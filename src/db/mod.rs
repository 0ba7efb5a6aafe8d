//! SQLite persistence for the klg application.
//!
//! Holds the single configuration record and the projects and tasks whose
//! cards get decorated. Opening [`db::Db`] applies pending schema migrations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use klg::db::{configs::ConfigStore, items::{Items, Project}};
//!
//! let config = ConfigStore::new()?.get_config()?;
//! let mut items = Items::new()?;
//! let project_id = items.insert_project(&Project::new("Website relaunch", 4))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The single configuration row: load, save, install and uninstall.
pub mod configs;

/// Projects and project tasks, and card item lookup.
pub mod items;
