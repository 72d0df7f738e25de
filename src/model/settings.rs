//! The daemon's settings document, as served by `GET /settings`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys the client does not model, kept so a full-document save round-trips them.
pub type ExtraKeys = BTreeMap<String, serde_json::Value>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub dir_options: Directories,

    #[serde(default)]
    pub download_params: DownloadParams,

    #[serde(default)]
    pub irc_channel: IrcChannel,

    #[serde(default)]
    pub operations: Operations,

    /// Unix seconds; maintained by the daemon.
    #[serde(default)]
    pub last_modified: i64,

    #[serde(flatten)]
    pub extra: ExtraKeys,
}

/// Path roles. Values are either absolute or fragments relative to `user_dir`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directories {
    pub gumshoe_dir: String,
    pub user_dir: String,
    pub data_dir: String,
    pub download_dir: String,
    pub fetch_dir: String,
    pub log_dir: String,

    #[serde(flatten)]
    pub extra: ExtraKeys,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadParams {
    pub tracker: String,
    pub download_rate: i64,
    pub max_retries: i64,
    pub queue_size: i64,
    pub is_secure: bool,
    pub cookies_file: String,
    pub torrent_url: String,
    pub torrent_user: String,
    pub torrent_pass: String,

    #[serde(flatten)]
    pub extra: ExtraKeys,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrcChannel {
    pub owner: String,
    pub nick: String,
    pub registered: bool,
    pub key: String,
    pub server: String,
    pub invite_cmd: String,
    pub watch_channel: String,
    pub keep_alive: i64,
    pub ping_frequency: i64,
    pub port: i64,
    pub timeout: i64,
    pub log_irc: bool,
    pub announce_regex: String,
    pub episode_regex: String,

    #[serde(flatten)]
    pub extra: ExtraKeys,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operations {
    pub email: String,
    pub enable_logging: bool,
    pub log_debug: bool,
    pub enable_web: bool,
    pub http_port: String,
    pub watch_methods: BTreeMap<String, bool>,

    #[serde(flatten)]
    pub extra: ExtraKeys,
}

#[cfg(test)]
#[path = "../tests/model/settings_tests.rs"]
mod tests;
