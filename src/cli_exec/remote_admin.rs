use gumshoe::model::{RemoteConfig, SavePolicy};

use super::*;

pub(super) fn handle_remote_command(store: &LocalStore, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg.remote).context("serialize remote json")?
                );
            } else if let Some(remote) = cfg.remote {
                println!("url: {}", remote.base_url);
                println!("timeout: {}s", remote.timeout_secs);
            } else {
                println!("No daemon configured");
            }
        }
        RemoteCommands::Set { url, timeout_secs } => {
            let mut cfg = store.read_config()?;
            let mut remote = RemoteConfig::new(&url);
            remote.timeout_secs = timeout_secs;
            cfg.remote = Some(remote);
            store.write_config(&cfg)?;
            println!("Daemon configured");
        }
    }
    Ok(())
}

pub(super) fn handle_config_command(store: &LocalStore, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("file: {}", store.config_path().display());
                match &cfg.remote {
                    Some(remote) => println!("url: {}", remote.base_url),
                    None => println!("url: (none)"),
                }
                println!("save policy: {}", cfg.save_policy.label());
            }
        }
        ConfigCommands::Policy { policy } => {
            let mut cfg = store.read_config()?;
            cfg.save_policy = SavePolicy::from(policy);
            store.write_config(&cfg)?;
            println!("Save policy: {}", cfg.save_policy.label());
        }
    }
    Ok(())
}

pub(super) async fn handle_status_command(store: &LocalStore) -> Result<()> {
    let client = require_client(store)?;
    let status = client.status().await?;
    println!("{}: {}", client.remote().base_url, status.trim());
    Ok(())
}
