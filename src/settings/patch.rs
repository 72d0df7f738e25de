//! Request bodies for `POST /api/config/update`.

use anyhow::Context;

use crate::error::SyncError;
use crate::model::{SavePolicy, SettingsDocument};

use super::fields::SettingsField;

/// Ordered record of touched fields. Duplicates are kept as pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtyFieldSet {
    entries: Vec<SettingsField>,
}

impl DirtyFieldSet {
    pub fn push(&mut self, field: SettingsField) {
        self.entries.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[SettingsField] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Distinct fields in first-touch order.
    pub fn unique(&self) -> Vec<SettingsField> {
        let mut out: Vec<SettingsField> = Vec::with_capacity(self.entries.len());
        for f in &self.entries {
            if !out.contains(f) {
                out.push(*f);
            }
        }
        out
    }

    /// Drops the first `n` entries (those covered by a finished submission).
    pub(super) fn drain_prefix(&mut self, n: usize) {
        let n = n.min(self.entries.len());
        self.entries.drain(..n);
    }
}

/// `{section: {field: value}}` for the given fields, read from `doc`.
pub fn sparse_patch(doc: &SettingsDocument, fields: &[SettingsField]) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    for field in fields {
        let section = root
            .entry(field.section().key())
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if let serde_json::Value::Object(section) = section {
            section.insert(field.key().to_string(), field.get(doc).to_json());
        }
    }
    serde_json::Value::Object(root)
}

pub fn request_body(
    policy: SavePolicy,
    doc: &SettingsDocument,
    fields: &[SettingsField],
) -> Result<serde_json::Value, SyncError> {
    match policy {
        SavePolicy::WholeDocument => serde_json::to_value(doc)
            .context("serialize settings document")
            .map_err(|e| SyncError::invalid(format!("{:#}", e))),
        SavePolicy::SparsePatch => Ok(sparse_patch(doc, fields)),
    }
}

#[cfg(test)]
#[path = "../tests/settings/patch_tests.rs"]
mod tests;
