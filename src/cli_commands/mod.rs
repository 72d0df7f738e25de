use clap::Subcommand;

use crate::{ConfigCommands, RemoteCommands, SettingsCommands, ShowCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Configure or show the daemon this console talks to
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Console options
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Check that the daemon is up
    Status,

    /// Read and edit the daemon settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Manage tracked shows
    Shows {
        #[command(subcommand)]
        command: ShowCommands,
    },
}
