//! Card command: compose and print the decorations of one stored card.

use crate::{
    db::{configs::ConfigStore, items::Items},
    libs::{
        card::ItemType,
        lookup::card_metadata_for,
        messages::Message,
        priority::PriorityResolver,
        render::Html,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Html,
}

#[derive(Debug, Args)]
pub struct CardArgs {
    /// Item type: Project or ProjectTask
    item_type: String,
    /// Item id
    #[arg(allow_negative_numbers = true)]
    item_id: i64,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Session priority color override, e.g. 5=#aa0000 (repeatable)
    #[arg(long = "priority-color", value_name = "LEVEL=HEX")]
    priority_colors: Vec<String>,
}

pub fn cmd(args: CardArgs) -> Result<()> {
    let session_colors = parse_priority_colors(&args.priority_colors)?;
    let config = ConfigStore::new()?.get_config()?;
    let mut items = Items::new()?;
    let priorities = PriorityResolver::new().with_colors(&session_colors);

    let metadata = card_metadata_for(&args.item_type, args.item_id, &config, &mut items, &priorities);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metadata)?),
        OutputFormat::Html => {
            if let Ok(item_type) = args.item_type.parse::<ItemType>() {
                println!("{}", Html::card(item_type, args.item_id, &metadata));
            }
        }
        OutputFormat::Table => {
            if metadata.is_empty() {
                msg_info!(Message::CardNothingToShow(args.item_type, args.item_id));
                return Ok(());
            }
            msg_print!(Message::CardHeader(args.item_type, args.item_id), true);
            View::card(&metadata)?;
        }
    }

    Ok(())
}

fn parse_priority_colors(values: &[String]) -> Result<BTreeMap<i32, String>> {
    let mut colors = BTreeMap::new();
    for value in values {
        let Some((level, color)) = value.split_once('=') else {
            msg_bail_anyhow!(Message::InvalidPriorityColorOverride(value.clone()));
        };
        let Ok(level) = level.trim().parse::<i32>() else {
            msg_bail_anyhow!(Message::InvalidPriorityColorOverride(value.clone()));
        };
        colors.insert(level, color.trim().to_string());
    }
    Ok(colors)
}
