use clap::{Subcommand, ValueEnum};

use gumshoe::model::{DEFAULT_TIMEOUT_SECS, SavePolicy};

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured daemon
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the daemon url
    Set {
        /// Base url, e.g. http://localhost:8080
        #[arg(long)]
        url: String,
        /// Per-request timeout
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show console.json
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Choose how settings edits are submitted
    Policy {
        #[arg(value_enum)]
        policy: PolicyArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PolicyArg {
    /// Send the whole settings document
    WholeDocument,
    /// Send only touched fields
    SparsePatch,
}

impl From<PolicyArg> for SavePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::WholeDocument => SavePolicy::WholeDocument,
            PolicyArg::SparsePatch => SavePolicy::SparsePatch,
        }
    }
}
