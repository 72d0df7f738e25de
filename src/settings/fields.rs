//! The closed set of editable settings fields.

use std::fmt;
use std::str::FromStr;

use crate::error::SyncError;
use crate::model::SettingsDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    DirOptions,
    DownloadParams,
    IrcChannel,
    Operations,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::DirOptions,
        Section::DownloadParams,
        Section::IrcChannel,
        Section::Operations,
    ];

    /// JSON key of the section inside the settings document.
    pub fn key(self) -> &'static str {
        match self {
            Section::DirOptions => "dir_options",
            Section::DownloadParams => "download_params",
            Section::IrcChannel => "irc_channel",
            Section::Operations => "operations",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Number,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Flag => "flag",
            FieldKind::Number => "number",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Number(_) => FieldKind::Number,
        }
    }

    /// Parses form or command-line input for a field of the given kind.
    pub fn parse(kind: FieldKind, input: &str) -> Result<FieldValue, SyncError> {
        match kind {
            FieldKind::Text => Ok(FieldValue::Text(input.to_string())),
            FieldKind::Flag => parse_flag(input).map(FieldValue::Flag),
            FieldKind::Number => input
                .trim()
                .parse::<i64>()
                .map(FieldValue::Number)
                .map_err(|_| SyncError::invalid(format!("expected an integer, got {:?}", input))),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Flag(b) => serde_json::Value::Bool(*b),
            FieldValue::Number(n) => serde_json::Value::from(*n),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Boolean form literals: exactly `"true"` or `"false"`.
pub fn parse_flag(input: &str) -> Result<bool, SyncError> {
    match input {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(SyncError::invalid(format!(
            "expected \"true\" or \"false\", got {:?}",
            other
        ))),
    }
}

macro_rules! settings_fields {
    ($( $variant:ident => $section:ident ( $sec_field:ident ) . $field:ident : $kind:ident ),* $(,)?) => {
        /// One editable `{section, field}` pair of the settings document.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SettingsField {
            $($variant),*
        }

        impl SettingsField {
            pub const ALL: &'static [SettingsField] = &[$(SettingsField::$variant),*];

            pub fn section(self) -> Section {
                match self {
                    $(SettingsField::$variant => Section::$section),*
                }
            }

            /// JSON key of the field inside its section.
            pub fn key(self) -> &'static str {
                match self {
                    $(SettingsField::$variant => stringify!($field)),*
                }
            }

            pub fn kind(self) -> FieldKind {
                match self {
                    $(SettingsField::$variant => FieldKind::$kind),*
                }
            }

            pub fn get(self, doc: &SettingsDocument) -> FieldValue {
                match self {
                    $(SettingsField::$variant => FieldValue::$kind(doc.$sec_field.$field.to_owned())),*
                }
            }

            /// Copies this field's value from `from` into `to`.
            pub fn copy_value(self, from: &SettingsDocument, to: &mut SettingsDocument) {
                match self {
                    $(SettingsField::$variant => to.$sec_field.$field = from.$sec_field.$field.clone()),*
                }
            }

            pub fn set(self, doc: &mut SettingsDocument, value: FieldValue) -> Result<(), SyncError> {
                match (self, value) {
                    $(
                        (SettingsField::$variant, FieldValue::$kind(v)) => {
                            doc.$sec_field.$field = v;
                            Ok(())
                        }
                    )*
                    (field, value) => Err(SyncError::invalid(format!(
                        "{} takes a {} value, got a {} value",
                        field,
                        field.kind().label(),
                        value.kind().label()
                    ))),
                }
            }
        }
    };
}

settings_fields! {
    GumshoeDir => DirOptions(dir_options).gumshoe_dir: Text,
    UserDir => DirOptions(dir_options).user_dir: Text,
    DataDir => DirOptions(dir_options).data_dir: Text,
    DownloadDir => DirOptions(dir_options).download_dir: Text,
    FetchDir => DirOptions(dir_options).fetch_dir: Text,
    LogDir => DirOptions(dir_options).log_dir: Text,

    Tracker => DownloadParams(download_params).tracker: Text,
    DownloadRate => DownloadParams(download_params).download_rate: Number,
    MaxRetries => DownloadParams(download_params).max_retries: Number,
    QueueSize => DownloadParams(download_params).queue_size: Number,
    IsSecure => DownloadParams(download_params).is_secure: Flag,
    CookiesFile => DownloadParams(download_params).cookies_file: Text,
    TorrentUrl => DownloadParams(download_params).torrent_url: Text,
    TorrentUser => DownloadParams(download_params).torrent_user: Text,
    TorrentPass => DownloadParams(download_params).torrent_pass: Text,

    IrcOwner => IrcChannel(irc_channel).owner: Text,
    IrcNick => IrcChannel(irc_channel).nick: Text,
    IrcRegistered => IrcChannel(irc_channel).registered: Flag,
    IrcKey => IrcChannel(irc_channel).key: Text,
    IrcServer => IrcChannel(irc_channel).server: Text,
    IrcInviteCmd => IrcChannel(irc_channel).invite_cmd: Text,
    IrcWatchChannel => IrcChannel(irc_channel).watch_channel: Text,
    IrcKeepAlive => IrcChannel(irc_channel).keep_alive: Number,
    IrcPingFrequency => IrcChannel(irc_channel).ping_frequency: Number,
    IrcPort => IrcChannel(irc_channel).port: Number,
    IrcTimeout => IrcChannel(irc_channel).timeout: Number,
    IrcLogIrc => IrcChannel(irc_channel).log_irc: Flag,
    IrcAnnounceRegex => IrcChannel(irc_channel).announce_regex: Text,
    IrcEpisodeRegex => IrcChannel(irc_channel).episode_regex: Text,

    Email => Operations(operations).email: Text,
    EnableLogging => Operations(operations).enable_logging: Flag,
    LogDebug => Operations(operations).log_debug: Flag,
    EnableWeb => Operations(operations).enable_web: Flag,
    HttpPort => Operations(operations).http_port: Text,
}

impl SettingsField {
    pub fn is_directory(self) -> bool {
        self.section() == Section::DirOptions
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section().key(), self.key())
    }
}

impl FromStr for SettingsField {
    type Err = SyncError;

    /// Parses a dotted `section.field` name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, field) = s
            .split_once('.')
            .ok_or_else(|| SyncError::invalid(format!("expected section.field, got {:?}", s)))?;
        let section = Section::from_key(section)
            .ok_or_else(|| SyncError::invalid(format!("unknown settings section {:?}", section)))?;
        SettingsField::ALL
            .iter()
            .copied()
            .find(|f| f.section() == section && f.key() == field)
            .ok_or_else(|| SyncError::invalid(format!("unknown settings field {:?}", s)))
    }
}

#[cfg(test)]
#[path = "../tests/settings/fields_tests.rs"]
mod tests;
