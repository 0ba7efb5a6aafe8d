//! Human-readable text for [`Message`] variants.

use super::types::Message;
use crate::libs::config::{MAX_WORK_HOURS_PER_DAY, MIN_WORK_HOURS_PER_DAY};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === INSTALL MESSAGES ===
            Message::Installed => "Kanban Looks Good is installed and ready".to_string(),
            Message::Uninstalled => "Kanban Looks Good data has been removed".to_string(),
            Message::TableDropped(table) => format!("Dropped table '{}'", table),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSaveError => "Error saving configuration".to_string(),
            Message::ConfigHeader => "Kanban Looks Good - Configuration".to_string(),
            Message::ConfigWizardHeader => {
                "Configure how priority and duration information is displayed on Project Kanban cards".to_string()
            }
            Message::PromptShowPriority => "Show Priority Badge".to_string(),
            Message::PromptShowDuration => "Show Planned Duration".to_string(),
            Message::PromptWorkHoursPerDay => {
                format!("Work Hours per Day ({}-{})", MIN_WORK_HOURS_PER_DAY, MAX_WORK_HOURS_PER_DAY)
            }
            Message::WorkHoursOutOfRange(hours) => format!(
                "{} is not between {} and {} hours",
                hours, MIN_WORK_HOURS_PER_DAY, MAX_WORK_HOURS_PER_DAY
            ),

            // === PROJECT AND TASK MESSAGES ===
            Message::ProjectCreated(id, name) => format!("Project '{}' created with id {}", name, id),
            Message::ProjectNotFound(id) => format!("Project {} not found", id),
            Message::ProjectsHeader => "Projects".to_string(),
            Message::NoProjectsFound => "No projects found".to_string(),
            Message::TaskCreated(id, name) => format!("Task '{}' created with id {}", name, id),

            // === CARD MESSAGES ===
            Message::CardHeader(item_type, id) => format!("Card {}-{}", item_type, id),
            Message::CardNothingToShow(item_type, id) => format!("Nothing to show on card {}-{}", item_type, id),
            Message::InvalidPriorityColorOverride(value) => {
                format!("Invalid priority color override '{}', expected LEVEL=#RRGGBB", value)
            }
            Message::NoDurationToShow => "No duration to show".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
