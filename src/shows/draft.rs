use crate::error::SyncError;
use crate::model::{Show, ShowId};
use crate::settings::parse_flag;

/// Form fields for a show, as the form produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowDraft {
    pub title: String,
    pub quality: String,
    /// `"true"` or `"false"`.
    pub episodal: String,
}

impl ShowDraft {
    pub fn new(title: &str, quality: &str, episodal: &str) -> Self {
        Self {
            title: title.to_string(),
            quality: quality.to_string(),
            episodal: episodal.to_string(),
        }
    }

    pub fn from_show(show: &Show) -> Self {
        Self {
            title: show.title.clone(),
            quality: show.quality.clone(),
            episodal: show.episodal.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.quality.is_empty() && self.episodal.is_empty()
    }

    /// Builds the wire record. Fields the form does not edit come from `base`.
    ///
    /// `title` and `quality` are sent with surrounding whitespace trimmed; a
    /// title that trims to nothing is rejected.
    pub fn to_show(&self, id: Option<ShowId>, base: Option<&Show>) -> Result<Show, SyncError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SyncError::invalid("show title is required"));
        }
        let episodal = parse_episodal(&self.episodal)?;
        Ok(Show {
            id,
            tvdbid: base.map(|b| b.tvdbid).unwrap_or_default(),
            title: title.to_string(),
            quality: self.quality.trim().to_string(),
            episodal,
            last_update: base.map(|b| b.last_update).unwrap_or_default(),
        })
    }
}

pub fn parse_episodal(input: &str) -> Result<bool, SyncError> {
    parse_flag(input).map_err(|_| {
        SyncError::invalid(format!(
            "episodal must be \"true\" or \"false\", got {:?}",
            input
        ))
    })
}
