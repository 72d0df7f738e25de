use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Show the daemon settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List editable fields and their current values
    Fields,

    /// Show directory options as full paths
    Dirs,

    /// Edit fields and submit them
    Set {
        /// `section.field=value`, e.g. operations.enable_web=true
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}
