//! Installation command.
//!
//! Creates the database schema and the default configuration row, or with
//! `--delete` removes the configuration table again.

use crate::{
    db::configs::ConfigStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the stored configuration instead of installing
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut store = ConfigStore::new()?;

    if init_args.delete {
        store.uninstall()?;
        msg_success!(Message::Uninstalled);
        return Ok(());
    }

    store.install()?;
    msg_success!(Message::Installed);
    Ok(())
}
