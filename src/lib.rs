//! # Klg - Kanban Looks Good
//!
//! Decorates kanban cards of projects and project tasks with a priority
//! badge and a human-readable planned duration.
//!
//! ## Features
//!
//! - **Duration Formatting**: seconds to `"1d 2h 30min"` under a configurable work day
//! - **Priority Badges**: per-level colors and names with host overrides
//! - **Card Tinting**: background colors derived from the priority color
//! - **Configuration**: one validated settings record persisted in SQLite
//!
//! ## Usage
//!
//! ```rust,no_run
//! use klg::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
