//! Configuration commands: show, set from flags, or edit interactively.
//!
//! `set` behaves like submitting the settings form: every value goes through
//! [`Configuration::validate_for_save`], so a missing flag means "off" and an
//! out-of-range work day falls back to the default.

use crate::{
    db::configs::ConfigStore,
    libs::{
        config::{ConfigInput, Configuration, KEY_SHOW_DURATION, KEY_SHOW_PRIORITY, KEY_WORK_HOURS_PER_DAY, MAX_WORK_HOURS_PER_DAY, MIN_WORK_HOURS_PER_DAY},
        messages::Message,
        view::View,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde_json::Value;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Show the current configuration
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save new settings; values are normalized like a form submission
    Set {
        /// Show priority badge (1 = yes, anything else = no)
        #[arg(long)]
        show_priority: Option<String>,
        /// Show planned duration (1 = yes, anything else = no)
        #[arg(long)]
        show_duration: Option<String>,
        /// Work hours per day, 1-24
        #[arg(long)]
        work_hours_per_day: Option<String>,
    },
    /// Edit the settings interactively
    Edit,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    match args.command {
        None => handle_show(false),
        Some(ConfigCommand::Show { json }) => handle_show(json),
        Some(ConfigCommand::Set {
            show_priority,
            show_duration,
            work_hours_per_day,
        }) => {
            let mut input = ConfigInput::new();
            for (key, value) in [
                (KEY_SHOW_PRIORITY, show_priority),
                (KEY_SHOW_DURATION, show_duration),
                (KEY_WORK_HOURS_PER_DAY, work_hours_per_day),
            ] {
                if let Some(value) = value {
                    input.insert(key.to_string(), Value::String(value));
                }
            }
            handle_save(&input)
        }
        Some(ConfigCommand::Edit) => handle_edit(),
    }
}

fn handle_show(json: bool) -> Result<()> {
    let config = ConfigStore::new()?.get_config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    msg_print!(Message::ConfigHeader, true);
    View::config(&config)
}

fn handle_save(input: &ConfigInput) -> Result<()> {
    let mut store = ConfigStore::new()?;

    if store.save_input(input) {
        msg_success!(Message::ConfigSaved);
        View::config(&store.get_config()?)?;
    } else {
        msg_error!(Message::ConfigSaveError);
    }
    Ok(())
}

fn handle_edit() -> Result<()> {
    let mut store = ConfigStore::new()?;
    let current = store.get_config()?;

    msg_print!(Message::ConfigWizardHeader, true);

    let show_priority = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptShowPriority.to_string())
        .default(current.show_priority)
        .interact()?;

    let show_duration = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptShowDuration.to_string())
        .default(current.show_duration)
        .interact()?;

    let work_hours_per_day: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWorkHoursPerDay.to_string())
        .default(u32::from(current.work_hours_per_day))
        .validate_with(|hours: &u32| -> Result<(), String> {
            if (MIN_WORK_HOURS_PER_DAY..=MAX_WORK_HOURS_PER_DAY).contains(&i64::from(*hours)) {
                Ok(())
            } else {
                Err(Message::WorkHoursOutOfRange(*hours).to_string())
            }
        })
        .interact_text()?;

    let input = Configuration {
        show_priority,
        show_duration,
        work_hours_per_day: u8::try_from(work_hours_per_day).unwrap_or(0),
    }
    .to_input();

    handle_save(&input)
}
