pub mod card;
pub mod config;
pub mod duration;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod project;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Install the database and default configuration")]
    Init(init::InitArgs),
    #[command(about = "Show or change the card configuration")]
    Config(config::ConfigArgs),
    #[command(about = "Format a duration in seconds", arg_required_else_help = true)]
    Duration(duration::DurationArgs),
    #[command(about = "Manage projects")]
    Project(project::ProjectArgs),
    #[command(about = "Add a task to a project", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Show the decorations of a kanban card", arg_required_else_help = true)]
    Card(card::CardArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Config(args) => config::cmd(args),
            Commands::Duration(args) => duration::cmd(args),
            Commands::Project(args) => project::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Card(args) => card::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
