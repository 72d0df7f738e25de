//! The tracked-show list and its create/update/delete lifecycle.
//!
//! Rows are addressed by index the way a list screen addresses them, but any
//! request that crosses an await is tied to the row's `ShowId`, so a splice
//! in between never lands an outcome on the wrong row.

use std::collections::HashSet;

use crate::error::SyncError;
use crate::model::{Show, ShowId};
use crate::remote::RemoteClient;

mod confirm;
mod draft;

pub use self::confirm::Confirm;
pub use self::draft::{ShowDraft, parse_episodal};

/// Screen state for one row. Not sent to the daemon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowUiState {
    pub edit_form_visible: bool,
    pub edit: ShowDraft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowRow {
    pub show: Show,
    pub ui: RowUiState,
}

impl ShowRow {
    fn new(show: Show) -> Self {
        let edit = ShowDraft::from_show(&show);
        Self {
            show,
            ui: RowUiState {
                edit_form_visible: false,
                edit,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreatePlan {
    show: Show,
}

impl CreatePlan {
    pub fn show(&self) -> &Show {
        &self.show
    }
}

#[derive(Debug)]
pub struct UpdatePlan {
    id: ShowId,
    show: Show,
}

impl UpdatePlan {
    pub fn id(&self) -> ShowId {
        self.id
    }

    pub fn show(&self) -> &Show {
        &self.show
    }
}

#[derive(Debug)]
pub struct DeletePlan {
    id: ShowId,
    title: String,
}

impl DeletePlan {
    pub fn id(&self) -> ShowId {
        self.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

#[derive(Default)]
pub struct ShowStore {
    rows: Vec<ShowRow>,
    draft: ShowDraft,
    loading: bool,
    creating: bool,
    pending: HashSet<ShowId>,
}

impl ShowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ShowRow] {
        &self.rows
    }

    pub fn shows(&self) -> impl Iterator<Item = &Show> {
        self.rows.iter().map(|r| &r.show)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, id: ShowId) -> Option<usize> {
        self.rows.iter().position(|r| r.show.id == Some(id))
    }

    pub fn is_pending(&self, id: ShowId) -> bool {
        self.pending.contains(&id)
    }

    pub fn draft(&self) -> &ShowDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ShowDraft {
        &mut self.draft
    }

    pub fn cancel_draft(&mut self) {
        self.draft = ShowDraft::default();
    }

    pub fn is_edit_form_visible(&self, index: usize) -> Result<bool, SyncError> {
        Ok(self.row(index)?.ui.edit_form_visible)
    }

    /// Flips the row's edit form. Opening it reseeds the form from the record.
    pub fn toggle_edit_form(&mut self, index: usize) -> Result<bool, SyncError> {
        let row = self.row_mut(index)?;
        row.ui.edit_form_visible = !row.ui.edit_form_visible;
        if row.ui.edit_form_visible {
            row.ui.edit = ShowDraft::from_show(&row.show);
        }
        Ok(row.ui.edit_form_visible)
    }

    pub fn edit_draft_mut(&mut self, index: usize) -> Result<&mut ShowDraft, SyncError> {
        Ok(&mut self.row_mut(index)?.ui.edit)
    }

    pub fn begin_load(&mut self) -> Result<(), SyncError> {
        if self.loading || self.creating || !self.pending.is_empty() {
            return Err(SyncError::Busy("show list".to_string()));
        }
        self.loading = true;
        Ok(())
    }

    pub fn complete_load(&mut self, result: anyhow::Result<Vec<Show>>) -> Result<(), SyncError> {
        self.loading = false;
        match result {
            Ok(shows) => {
                log::info!("loaded {} show(s)", shows.len());
                self.rows = shows.into_iter().map(ShowRow::new).collect();
                Ok(())
            }
            Err(err) => {
                log::warn!("load shows failed: {:#}", err);
                Err(SyncError::load("shows", err))
            }
        }
    }

    pub fn begin_create(&mut self) -> Result<CreatePlan, SyncError> {
        if self.loading || self.creating {
            return Err(SyncError::Busy("new show".to_string()));
        }
        let show = self.draft.to_show(None, None)?;
        self.creating = true;
        Ok(CreatePlan { show })
    }

    /// Appends the daemon's record and returns its index.
    pub fn complete_create(
        &mut self,
        plan: CreatePlan,
        result: anyhow::Result<Show>,
    ) -> Result<usize, SyncError> {
        self.creating = false;
        match result {
            Ok(created) => {
                log::info!(
                    "created show {:?} (id={})",
                    created.title,
                    created
                        .id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "none".to_string())
                );
                self.rows.push(ShowRow::new(created));
                self.draft = ShowDraft::default();
                Ok(self.rows.len() - 1)
            }
            Err(err) => {
                log::warn!("create show {:?} failed: {:#}", plan.show.title, err);
                Err(SyncError::submit("create show", err))
            }
        }
    }

    pub fn begin_update(&mut self, index: usize) -> Result<UpdatePlan, SyncError> {
        let row = self.row(index)?;
        let id = identity(row)?;
        if self.loading || self.pending.contains(&id) {
            return Err(SyncError::Busy(format!("show {}", id)));
        }
        let show = row.ui.edit.to_show(Some(id), Some(&row.show))?;
        self.pending.insert(id);
        Ok(UpdatePlan { id, show })
    }

    pub fn complete_update(
        &mut self,
        plan: UpdatePlan,
        result: anyhow::Result<()>,
    ) -> Result<(), SyncError> {
        self.pending.remove(&plan.id);
        match result {
            Ok(()) => {
                match self.position(plan.id) {
                    Some(pos) => {
                        let row = &mut self.rows[pos];
                        row.ui.edit = ShowDraft::from_show(&plan.show);
                        row.ui.edit_form_visible = false;
                        row.show = plan.show;
                    }
                    None => log::debug!("updated show {} is no longer listed", plan.id),
                }
                log::info!("updated show {}", plan.id);
                Ok(())
            }
            Err(err) => {
                log::warn!("update show {} failed: {:#}", plan.id, err);
                Err(SyncError::submit(&format!("update show {}", plan.id), err))
            }
        }
    }

    /// Asks `confirm` first; `Ok(None)` when the user declines.
    pub fn begin_delete(
        &mut self,
        index: usize,
        confirm: &mut impl Confirm,
    ) -> Result<Option<DeletePlan>, SyncError> {
        let row = self.row(index)?;
        let id = identity(row)?;
        if self.loading || self.pending.contains(&id) {
            return Err(SyncError::Busy(format!("show {}", id)));
        }
        let title = row.show.title.clone();
        if !confirm.confirm(&format!("Delete {}?", title)) {
            log::debug!("delete of {:?} declined", title);
            return Ok(None);
        }
        self.pending.insert(id);
        Ok(Some(DeletePlan { id, title }))
    }

    pub fn complete_delete(
        &mut self,
        plan: DeletePlan,
        result: anyhow::Result<()>,
    ) -> Result<(), SyncError> {
        self.pending.remove(&plan.id);
        match result {
            Ok(()) => {
                if let Some(pos) = self.position(plan.id) {
                    self.rows.remove(pos);
                }
                log::info!("deleted show {:?} (id={})", plan.title, plan.id);
                Ok(())
            }
            Err(err) => {
                log::warn!("delete show {} failed: {:#}", plan.id, err);
                Err(SyncError::submit(&format!("delete show {}", plan.id), err))
            }
        }
    }

    /// Gives up on a list load whose response will never be applied.
    pub fn abort_load(&mut self) {
        self.release(Request::Load);
    }

    /// Gives up on a create; the draft is kept for another attempt.
    pub fn abort_create(&mut self, plan: CreatePlan) {
        log::debug!("create of {:?} abandoned", plan.show.title);
        self.release(Request::Create);
    }

    pub fn abort_update(&mut self, plan: UpdatePlan) {
        self.release(Request::Row(plan.id));
    }

    pub fn abort_delete(&mut self, plan: DeletePlan) {
        self.release(Request::Row(plan.id));
    }

    fn release(&mut self, request: Request) {
        match request {
            Request::Load => self.loading = false,
            Request::Create => self.creating = false,
            Request::Row(id) => {
                self.pending.remove(&id);
            }
        }
    }

    /// The async helpers below are cancel-safe: dropping one mid-request
    /// leaves the list as it was and the entity free for a retry.
    pub async fn load(&mut self, client: &RemoteClient) -> Result<(), SyncError> {
        self.begin_load()?;
        let guard = RequestGuard::new(self, Request::Load);
        let result = client.list_shows().await;
        guard.store.complete_load(result)
    }

    pub async fn create(&mut self, client: &RemoteClient) -> Result<usize, SyncError> {
        let plan = self.begin_create()?;
        let guard = RequestGuard::new(self, Request::Create);
        let result = client.create_show(plan.show()).await;
        guard.store.complete_create(plan, result)
    }

    pub async fn update(&mut self, client: &RemoteClient, index: usize) -> Result<(), SyncError> {
        let plan = self.begin_update(index)?;
        let guard = RequestGuard::new(self, Request::Row(plan.id));
        let result = client.update_show(plan.id, &plan.show).await;
        guard.store.complete_update(plan, result)
    }

    pub async fn delete(
        &mut self,
        client: &RemoteClient,
        index: usize,
        confirm: &mut impl Confirm,
    ) -> Result<DeleteOutcome, SyncError> {
        let Some(plan) = self.begin_delete(index, confirm)? else {
            return Ok(DeleteOutcome::Declined);
        };
        let guard = RequestGuard::new(self, Request::Row(plan.id));
        let result = client.delete_show(plan.id).await;
        guard.store.complete_delete(plan, result)?;
        Ok(DeleteOutcome::Deleted)
    }

    fn row(&self, index: usize) -> Result<&ShowRow, SyncError> {
        self.rows.get(index).ok_or(SyncError::NoSuchRow(index))
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut ShowRow, SyncError> {
        self.rows.get_mut(index).ok_or(SyncError::NoSuchRow(index))
    }
}

#[derive(Clone, Copy, Debug)]
enum Request {
    Load,
    Create,
    Row(ShowId),
}

/// Releases the in-flight marker of `request` when dropped. `complete_*`
/// releases it too, so the drop is a no-op on the normal path.
struct RequestGuard<'a> {
    store: &'a mut ShowStore,
    request: Request,
}

impl<'a> RequestGuard<'a> {
    fn new(store: &'a mut ShowStore, request: Request) -> Self {
        Self { store, request }
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.store.release(self.request);
    }
}

fn identity(row: &ShowRow) -> Result<ShowId, SyncError> {
    row.show.id.ok_or_else(|| {
        SyncError::invalid(format!(
            "show {:?} has no server identity (reload the list)",
            row.show.title
        ))
    })
}

#[cfg(test)]
#[path = "tests/shows/store_tests.rs"]
mod tests;
