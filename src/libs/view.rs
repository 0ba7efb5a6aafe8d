use super::card::CardMetadata;
use super::config::Configuration;
use super::formatter::format_duration;
use crate::db::items::ProjectSummary;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn config(config: &Configuration) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["Show priority badge", yes_no(config.show_priority)]);
        table.add_row(row!["Show planned duration", yes_no(config.show_duration)]);
        table.add_row(row!["Work hours per day", config.work_hours_per_day]);
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[ProjectSummary], hours_per_day: u8) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PRIORITY", "TASKS", "PLANNED"]);
        for summary in projects {
            table.add_row(row![
                summary.project.id.unwrap_or(0),
                summary.project.name,
                summary.project.priority,
                summary.task_count,
                format_duration(summary.planned_duration, hours_per_day)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn card(metadata: &CardMetadata) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "VALUE"]);
        if let Some(badge) = &metadata.priority_badge {
            table.add_row(row!["Priority", badge.label]);
            table.add_row(row!["Priority color", badge.color_hex.as_deref().unwrap_or("-")]);
        }
        if let Some(hints) = &metadata.background_hints {
            table.add_row(row!["Card background", hints.card_background]);
            table.add_row(row!["Header background", hints.header_background]);
        }
        if let Some(duration) = &metadata.duration_label {
            table.add_row(row!["Planned duration", duration]);
        }
        table.printstd();

        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
