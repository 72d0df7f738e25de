mod remote;
mod settings;
mod shows;

pub(crate) use self::remote::{ConfigCommands, RemoteCommands};
pub(crate) use self::settings::SettingsCommands;
pub(crate) use self::shows::ShowCommands;
