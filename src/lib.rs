//! Client-side control layer for the gumshoe daemon: the settings working
//! copy with dirty-field tracking, and the tracked-show list.

pub mod error;
pub mod model;
pub mod remote;
pub mod settings;
pub mod shows;
pub mod store;

pub use error::SyncError;
