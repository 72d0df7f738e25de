use anyhow::{Context, Result};

use gumshoe::store::LocalStore;

use crate::{
    Commands, ConfigCommands, RemoteCommands, SettingsCommands, ShowCommands, require_client,
};

mod dispatch;
mod format;
mod remote_admin;
mod settings;
mod shows;

pub(super) async fn handle_command(store: &LocalStore, command: Commands) -> Result<()> {
    dispatch::handle_command(store, command).await
}
