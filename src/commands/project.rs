use crate::{
    db::{
        configs::ConfigStore,
        items::{Items, Project},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// Create a project
    Add {
        /// Project name
        name: String,
        /// Priority level: 0 (unset) or 1 (very low) to 6 (major)
        #[arg(short, long, default_value_t = 0)]
        priority: i32,
    },
    /// List projects with their total planned duration
    List,
}

pub fn cmd(args: ProjectArgs) -> Result<()> {
    match args.command {
        ProjectCommand::Add { name, priority } => {
            let id = Items::new()?.insert_project(&Project::new(&name, priority))?;
            msg_success!(Message::ProjectCreated(id, name));
            Ok(())
        }
        ProjectCommand::List => {
            let projects = Items::new()?.list_projects()?;
            if projects.is_empty() {
                msg_info!(Message::NoProjectsFound);
                return Ok(());
            }

            let config = ConfigStore::new()?.get_config()?;
            msg_print!(Message::ProjectsHeader, true);
            View::projects(&projects, config.work_hours_per_day)
        }
    }
}
