use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gumshoe::remote::RemoteClient;
use gumshoe::store::LocalStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "gumshoe")]
#[command(about = "Manage a gumshoe daemon's settings and tracked shows", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding console.json (defaults to ~/.gumshoe)
    #[arg(long, global = true, value_name = "DIR")]
    home: Option<PathBuf>,

    /// Log requests and state changes (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let store = open_store(cli.home)?;

    // One cooperative event loop; every store is driven from this thread.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    rt.block_on(crate::cli_exec::handle_command(&store, cli.command))
}

fn open_store(home: Option<PathBuf>) -> Result<LocalStore> {
    let root = match home {
        Some(root) => root,
        None => LocalStore::default_root()?,
    };
    Ok(LocalStore::open(&root))
}

pub(crate) fn require_client(store: &LocalStore) -> Result<RemoteClient> {
    let cfg = store.read_config()?;
    let remote = cfg
        .remote
        .context("no daemon configured (run `gumshoe remote set --url ...`)")?;
    RemoteClient::new(remote)
}
