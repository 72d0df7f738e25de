//! Working copy of the daemon settings with dirty-field tracking.
//!
//! Every network action is split in two: `begin_*` validates local state and
//! marks the document in flight, `complete_*` applies the outcome. The async
//! helpers (`load`, `save`) run both halves around a `RemoteClient` call; an
//! event loop that dispatches requests itself can call the halves directly.

use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::model::{
    Directories, DownloadParams, IrcChannel, Operations, SavePolicy, SettingsDocument,
};
use crate::remote::RemoteClient;

pub mod dirs;
pub mod fields;
pub mod patch;

pub use self::fields::{FieldKind, FieldValue, Section, SettingsField, parse_flag};
pub use self::patch::DirtyFieldSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsState {
    Unloaded,
    Clean,
    Dirty,
    Saving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InFlight {
    Load,
    Save,
}

#[derive(Clone, Debug)]
struct Loaded {
    baseline: SettingsDocument,
    working: SettingsDocument,
}

/// A submission produced by [`SettingsStore::begin_save`].
#[derive(Debug)]
pub struct SavePlan {
    body: serde_json::Value,
    snapshot: SettingsDocument,
    fields: Vec<SettingsField>,
    submitted: usize,
    generation: u64,
}

impl SavePlan {
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    pub fn fields(&self) -> &[SettingsField] {
        &self.fields
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was touched; no request was sent.
    Clean,
    /// The daemon acknowledged these fields.
    Saved(Vec<SettingsField>),
}

pub struct SettingsStore {
    policy: SavePolicy,
    loaded: Option<Loaded>,
    dirty: DirtyFieldSet,
    in_flight: Option<InFlight>,
    // Bumped whenever tracking is reset outside of a save.
    generation: u64,
}

impl SettingsStore {
    pub fn new(policy: SavePolicy) -> Self {
        Self {
            policy,
            loaded: None,
            dirty: DirtyFieldSet::default(),
            in_flight: None,
            generation: 0,
        }
    }

    pub fn policy(&self) -> SavePolicy {
        self.policy
    }

    pub fn state(&self) -> SettingsState {
        if self.in_flight == Some(InFlight::Save) {
            return SettingsState::Saving;
        }
        if self.loaded.is_none() {
            return SettingsState::Unloaded;
        }
        if self.dirty.is_empty() {
            SettingsState::Clean
        } else {
            SettingsState::Dirty
        }
    }

    /// The working copy, including unsaved edits.
    pub fn document(&self) -> Option<&SettingsDocument> {
        self.loaded.as_ref().map(|l| &l.working)
    }

    /// The last document known to match the daemon.
    pub fn baseline(&self) -> Option<&SettingsDocument> {
        self.loaded.as_ref().map(|l| &l.baseline)
    }

    pub fn directories(&self) -> Option<&Directories> {
        self.document().map(|d| &d.dir_options)
    }

    pub fn operations(&self) -> Option<&Operations> {
        self.document().map(|d| &d.operations)
    }

    pub fn download_params(&self) -> Option<&DownloadParams> {
        self.document().map(|d| &d.download_params)
    }

    pub fn irc_channel(&self) -> Option<&IrcChannel> {
        self.document().map(|d| &d.irc_channel)
    }

    pub fn dirty_fields(&self) -> &DirtyFieldSet {
        &self.dirty
    }

    pub fn get(&self, field: SettingsField) -> Result<FieldValue, SyncError> {
        let doc = self.document().ok_or(SyncError::NotLoaded)?;
        Ok(field.get(doc))
    }

    /// Writes a field of the working copy and records the touch.
    pub fn set(&mut self, field: SettingsField, value: FieldValue) -> Result<(), SyncError> {
        let loaded = self.loaded.as_mut().ok_or(SyncError::NotLoaded)?;
        field.set(&mut loaded.working, value)?;
        self.record_touch(field);
        Ok(())
    }

    /// Parses `input` according to the field's kind, then [`Self::set`]s it.
    pub fn set_from_str(&mut self, field: SettingsField, input: &str) -> Result<(), SyncError> {
        let value = FieldValue::parse(field.kind(), input)?;
        self.set(field, value)
    }

    pub fn record_touch(&mut self, field: SettingsField) {
        self.dirty.push(field);
    }

    pub fn directory_display(&self, field: SettingsField) -> Result<PathBuf, SyncError> {
        let doc = self.document().ok_or(SyncError::NotLoaded)?;
        dirs::display_path(doc, field)
    }

    pub fn set_directory_display(
        &mut self,
        field: SettingsField,
        display: &Path,
    ) -> Result<(), SyncError> {
        let doc = self.document().ok_or(SyncError::NotLoaded)?;
        let stored = dirs::storage_value(doc, field, display)?;
        self.set(field, FieldValue::Text(stored))
    }

    /// Stops tracking edits. Edited values stay in the working copy.
    pub fn discard(&mut self) {
        if !self.dirty.is_empty() {
            log::info!("discarding {} tracked settings edits", self.dirty.len());
        }
        self.dirty.clear();
        self.generation += 1;
    }

    /// Restores the working copy from the baseline and stops tracking edits.
    pub fn revert(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.working = loaded.baseline.clone();
        }
        self.discard();
    }

    pub fn begin_load(&mut self) -> Result<(), SyncError> {
        if self.in_flight.is_some() {
            return Err(SyncError::Busy("settings".to_string()));
        }
        self.in_flight = Some(InFlight::Load);
        Ok(())
    }

    pub fn complete_load(
        &mut self,
        result: anyhow::Result<SettingsDocument>,
    ) -> Result<(), SyncError> {
        self.in_flight = None;
        match result {
            Ok(doc) => {
                log::info!("settings loaded (last_modified={})", doc.last_modified);
                self.loaded = Some(Loaded {
                    baseline: doc.clone(),
                    working: doc,
                });
                self.dirty.clear();
                self.generation += 1;
                Ok(())
            }
            Err(err) => {
                log::warn!("load settings failed: {:#}", err);
                Err(SyncError::load("settings", err))
            }
        }
    }

    /// Returns `None` when nothing has been touched since the last save.
    pub fn begin_save(&mut self) -> Result<Option<SavePlan>, SyncError> {
        if let Some(in_flight) = self.in_flight {
            let what = match in_flight {
                InFlight::Load => "settings (load)",
                InFlight::Save => "settings",
            };
            return Err(SyncError::Busy(what.to_string()));
        }
        let loaded = self.loaded.as_ref().ok_or(SyncError::NotLoaded)?;
        if self.dirty.is_empty() {
            log::debug!("nothing to update");
            return Ok(None);
        }

        let fields = self.dirty.unique();
        let body = patch::request_body(self.policy, &loaded.working, &fields)?;
        let plan = SavePlan {
            body,
            snapshot: loaded.working.clone(),
            fields,
            submitted: self.dirty.len(),
            generation: self.generation,
        };
        self.in_flight = Some(InFlight::Save);
        log::info!(
            "saving {} settings field(s) as {}",
            plan.fields.len(),
            self.policy.label()
        );
        Ok(Some(plan))
    }

    pub fn complete_save(
        &mut self,
        plan: SavePlan,
        result: anyhow::Result<()>,
    ) -> Result<SaveOutcome, SyncError> {
        self.in_flight = None;
        match result {
            Ok(()) => {
                if let Some(loaded) = self.loaded.as_mut() {
                    match self.policy {
                        SavePolicy::WholeDocument => loaded.baseline = plan.snapshot,
                        // Only the submitted fields are known to match the daemon.
                        SavePolicy::SparsePatch => {
                            for field in &plan.fields {
                                field.copy_value(&plan.snapshot, &mut loaded.baseline);
                            }
                        }
                    }
                }
                if self.generation == plan.generation {
                    self.dirty.drain_prefix(plan.submitted);
                }
                log::info!("settings updated");
                Ok(SaveOutcome::Saved(plan.fields))
            }
            Err(err) => {
                log::warn!("update settings failed: {:#}", err);
                Err(SyncError::submit("update settings", err))
            }
        }
    }

    /// Gives up on a load whose response will never be applied.
    pub fn abort_load(&mut self) {
        if self.in_flight == Some(InFlight::Load) {
            self.release();
        }
    }

    /// Gives up on a save whose response will never be applied. Tracked
    /// fields stay dirty.
    pub fn abort_save(&mut self, plan: SavePlan) {
        if self.in_flight == Some(InFlight::Save) {
            log::debug!("save of {} settings field(s) abandoned", plan.fields.len());
            self.release();
        }
    }

    fn release(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("settings {:?} request released before completion", in_flight);
        }
    }

    /// Cancel-safe: dropping the future leaves the store retryable.
    pub async fn load(&mut self, client: &RemoteClient) -> Result<(), SyncError> {
        self.begin_load()?;
        let guard = InFlightGuard { store: self };
        let result = client.get_settings().await;
        guard.store.complete_load(result)
    }

    /// Cancel-safe: dropping the future leaves the touched fields dirty.
    pub async fn save(&mut self, client: &RemoteClient) -> Result<SaveOutcome, SyncError> {
        let Some(plan) = self.begin_save()? else {
            return Ok(SaveOutcome::Clean);
        };
        let guard = InFlightGuard { store: self };
        let result = client.update_config(plan.body()).await;
        guard.store.complete_save(plan, result)
    }
}

/// Clears the in-flight marker if a request future is dropped before its
/// `complete_*` half runs.
struct InFlightGuard<'a> {
    store: &'a mut SettingsStore,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.store.release();
    }
}

#[cfg(test)]
#[path = "tests/settings/store_tests.rs"]
mod tests;
