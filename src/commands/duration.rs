use crate::{
    db::configs::ConfigStore,
    libs::{formatter::format_planned_duration, messages::Message},
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Duration in seconds
    #[arg(allow_negative_numbers = true)]
    seconds: i64,
    /// Work hours per day; defaults to the configured value
    #[arg(long)]
    hours_per_day: Option<u8>,
}

pub fn cmd(args: DurationArgs) -> Result<()> {
    let config = match args.hours_per_day {
        Some(_) => Default::default(),
        None => ConfigStore::new()?.get_config()?,
    };

    let label = format_planned_duration(args.seconds, args.hours_per_day, &config);
    if label.is_empty() {
        msg_info!(Message::NoDurationToShow);
    } else {
        println!("{}", label);
    }
    Ok(())
}
