use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ShowCommands {
    /// List tracked shows
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Track a new show
    Add {
        #[arg(long)]
        title: String,
        /// "true" for episodic releases, "false" for season packs
        #[arg(long)]
        episodal: String,
        #[arg(long, default_value = "")]
        quality: String,
    },

    /// Edit the show at INDEX (as printed by `shows list`)
    Edit {
        index: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        quality: Option<String>,
        #[arg(long)]
        episodal: Option<String>,
    },

    /// Stop tracking the show at INDEX
    Delete {
        index: usize,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}
