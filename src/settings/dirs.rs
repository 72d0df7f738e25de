//! Display paths for `dir_options`.
//!
//! The daemon may store a directory either as an absolute path or as a
//! fragment under `user_dir`. Screens show the joined path; writes re-split
//! it so the stored representation is kept.

use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::model::SettingsDocument;

use super::fields::{FieldValue, SettingsField};

pub fn display_path(doc: &SettingsDocument, field: SettingsField) -> Result<PathBuf, SyncError> {
    let stored = stored_dir(doc, field)?;
    if field == SettingsField::UserDir || stored.is_empty() || Path::new(&stored).is_absolute() {
        return Ok(PathBuf::from(stored));
    }
    Ok(Path::new(&doc.dir_options.user_dir).join(stored))
}

/// The value to store for `field` when the screen shows `display`.
///
/// An absolute stored value stays absolute. A fragment stays a fragment as
/// long as `display` is still under `user_dir`.
pub fn storage_value(
    doc: &SettingsDocument,
    field: SettingsField,
    display: &Path,
) -> Result<String, SyncError> {
    let stored = stored_dir(doc, field)?;
    let as_text = |p: &Path| {
        p.to_str()
            .map(str::to_string)
            .ok_or_else(|| SyncError::invalid(format!("path is not utf-8: {}", p.display())))
    };

    let user_dir = &doc.dir_options.user_dir;
    let keeps_fragment = field != SettingsField::UserDir
        && !user_dir.is_empty()
        && !stored.is_empty()
        && !Path::new(&stored).is_absolute();
    if keeps_fragment
        && let Ok(rest) = display.strip_prefix(user_dir)
        && !rest.as_os_str().is_empty()
    {
        return as_text(rest);
    }
    as_text(display)
}

fn stored_dir(doc: &SettingsDocument, field: SettingsField) -> Result<String, SyncError> {
    if !field.is_directory() {
        return Err(SyncError::invalid(format!("{} is not a directory option", field)));
    }
    match field.get(doc) {
        FieldValue::Text(s) => Ok(s),
        other => Err(SyncError::invalid(format!(
            "{} holds a {} value",
            field,
            other.kind().label()
        ))),
    }
}

#[cfg(test)]
#[path = "../tests/settings/dirs_tests.rs"]
mod tests;
