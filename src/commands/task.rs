use crate::{
    db::items::{Items, ProjectTask},
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Id of the project the task belongs to
    project_id: i64,
    /// Task name
    name: String,
    /// Planned duration in seconds
    #[arg(short, long, default_value_t = 0)]
    duration: i64,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let task = ProjectTask::new(args.project_id, &args.name, args.duration);
    let id = Items::new()?.insert_task(&task)?;

    msg_success!(Message::TaskCreated(id, args.name));
    Ok(())
}
