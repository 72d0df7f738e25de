use serde::{Deserialize, Deserializer, Serialize};

use super::ShowId;

/// A tracked show as the daemon stores it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShowId>,

    #[serde(default)]
    pub tvdbid: u64,

    pub title: String,

    #[serde(default)]
    pub quality: String,

    #[serde(default)]
    pub episodal: bool,

    /// Unix nanoseconds; maintained by the daemon.
    #[serde(default)]
    pub last_update: i64,
}

/// `GET /api/shows` has answered both as a bare array and as `{"Shows": [...]}`.
///
/// Any other object (an error body, a misspelt key) fails to parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShowListResponse {
    Bare(Vec<Show>),
    Envelope(ShowEnvelope),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowEnvelope {
    /// Required; `null` means no shows.
    #[serde(rename = "Shows", deserialize_with = "nullable_list")]
    shows: Option<Vec<Show>>,
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Option<Vec<Show>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Show>>::deserialize(deserializer)
}

impl ShowListResponse {
    pub fn into_shows(self) -> Vec<Show> {
        match self {
            ShowListResponse::Bare(shows) => shows,
            ShowListResponse::Envelope(envelope) => envelope.shows.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/show_tests.rs"]
mod tests;
