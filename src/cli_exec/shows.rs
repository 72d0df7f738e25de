use std::io::{BufRead, Write};

use gumshoe::shows::{DeleteOutcome, ShowStore};

use super::format;
use super::*;

pub(super) async fn handle_show_command(store: &LocalStore, command: ShowCommands) -> Result<()> {
    let client = require_client(store)?;
    let mut shows = ShowStore::new();

    match command {
        ShowCommands::List { json } => {
            shows.load(&client).await?;
            if json {
                let list = shows.shows().collect::<Vec<_>>();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&list).context("serialize shows json")?
                );
                return Ok(());
            }
            if shows.is_empty() {
                println!("No shows tracked");
            }
            for (i, show) in shows.shows().enumerate() {
                let id = show
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let kind = if show.episodal { "episodes" } else { "seasons" };
                let quality = if show.quality.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", show.quality)
                };
                println!(
                    "{:>3}  {}{} ({}) id={} updated={}",
                    i,
                    show.title,
                    quality,
                    kind,
                    id,
                    format::unix_nanos(show.last_update)
                );
            }
        }
        ShowCommands::Add {
            title,
            episodal,
            quality,
        } => {
            let draft = shows.draft_mut();
            draft.title = title;
            draft.quality = quality;
            draft.episodal = episodal;
            let index = shows.create(&client).await?;
            let created = &shows.rows()[index].show;
            match created.id {
                Some(id) => println!("Added {} (id={})", created.title, id),
                None => println!("Added {}", created.title),
            }
        }
        ShowCommands::Edit {
            index,
            title,
            quality,
            episodal,
        } => {
            shows.load(&client).await?;
            if !shows.is_edit_form_visible(index)? {
                shows.toggle_edit_form(index)?;
            }
            let edit = shows.edit_draft_mut(index)?;
            if let Some(title) = title {
                edit.title = title;
            }
            if let Some(quality) = quality {
                edit.quality = quality;
            }
            if let Some(episodal) = episodal {
                edit.episodal = episodal;
            }
            shows.update(&client, index).await?;
            println!("Updated {}", shows.rows()[index].show.title);
        }
        ShowCommands::Delete { index, yes } => {
            shows.load(&client).await?;
            let mut confirm = |prompt: &str| yes || ask(prompt);
            match shows.delete(&client, index, &mut confirm).await? {
                DeleteOutcome::Deleted => println!("Deleted"),
                DeleteOutcome::Declined => println!("Kept"),
            }
        }
    }
    Ok(())
}

fn ask(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
