use super::remote_admin::{handle_config_command, handle_remote_command, handle_status_command};
use super::settings::handle_settings_command;
use super::shows::handle_show_command;
use super::*;

pub(super) async fn handle_command(store: &LocalStore, command: Commands) -> Result<()> {
    match command {
        Commands::Remote { command } => handle_remote_command(store, command)?,
        Commands::Config { command } => handle_config_command(store, command)?,
        Commands::Status => handle_status_command(store).await?,
        Commands::Settings { command } => handle_settings_command(store, command).await?,
        Commands::Shows { command } => handle_show_command(store, command).await?,
    }
    Ok(())
}
