use std::path::Path;

use gumshoe::settings::{SaveOutcome, Section, SettingsField, SettingsStore, patch};

use super::format;
use super::*;

pub(super) async fn handle_settings_command(
    store: &LocalStore,
    command: SettingsCommands,
) -> Result<()> {
    let cfg = store.read_config()?;
    let client = require_client(store)?;
    let mut settings = SettingsStore::new(cfg.save_policy);
    settings.load(&client).await?;

    match command {
        SettingsCommands::Show { json } => {
            let doc = settings.document().context("settings not loaded")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(doc).context("serialize settings json")?
                );
                return Ok(());
            }
            for section in Section::ALL {
                println!("[{}]", section.key());
                for field in SettingsField::ALL.iter().filter(|f| f.section() == section) {
                    println!("  {} = {}", field.key(), settings.get(*field)?);
                }
            }
            let watch = &doc.operations.watch_methods;
            if !watch.is_empty() {
                let methods = watch
                    .iter()
                    .map(|(name, on)| format!("{}={}", name, on))
                    .collect::<Vec<_>>();
                println!("  watch_methods = {}", methods.join(", "));
            }
            println!("last modified: {}", format::unix_secs(doc.last_modified));
        }
        SettingsCommands::Fields => {
            for field in SettingsField::ALL {
                println!(
                    "{} ({}) = {}",
                    field,
                    field.kind().label(),
                    settings.get(*field)?
                );
            }
        }
        SettingsCommands::Dirs => {
            for field in SettingsField::ALL.iter().filter(|f| f.is_directory()) {
                let display = settings.directory_display(*field)?;
                println!("{}: {}", field.key(), display.display());
            }
        }
        SettingsCommands::Set {
            assignments,
            dry_run,
        } => {
            for assignment in &assignments {
                apply_assignment(&mut settings, assignment)?;
            }
            if dry_run {
                let doc = settings.document().context("settings not loaded")?;
                let fields = settings.dirty_fields().unique();
                let body = patch::request_body(settings.policy(), doc, &fields)?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&body).context("serialize request body")?
                );
                return Ok(());
            }
            match settings.save(&client).await? {
                SaveOutcome::Clean => println!("Nothing to update"),
                SaveOutcome::Saved(fields) => {
                    let names = fields.iter().map(|f| f.to_string()).collect::<Vec<_>>();
                    println!("Settings updated: {}", names.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn apply_assignment(settings: &mut SettingsStore, assignment: &str) -> Result<()> {
    let (name, value) = assignment
        .split_once('=')
        .with_context(|| format!("expected FIELD=VALUE, got {:?}", assignment))?;
    let field: SettingsField = name.trim().parse()?;
    if field.is_directory() && field != SettingsField::UserDir && !value.is_empty() {
        settings.set_directory_display(field, Path::new(value))?;
    } else {
        settings.set_from_str(field, value)?;
    }
    Ok(())
}
