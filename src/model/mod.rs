mod config;
mod ids;
mod settings;
mod show;

pub use self::config::{ClientConfig, DEFAULT_TIMEOUT_SECS, RemoteConfig, SavePolicy};
pub use self::ids::ShowId;
pub use self::settings::{
    Directories, DownloadParams, ExtraKeys, IrcChannel, Operations, SettingsDocument,
};
pub use self::show::{Show, ShowEnvelope, ShowListResponse};
