//! DrawKit Settings Crate
//!
//! Handles application configuration, settings persistence and the label
//! bundle used to present editor actions.

pub mod config;
pub mod error;
pub mod labels;

pub use config::{Config, UndoSettings};
pub use error::{SettingsError, SettingsResult};
pub use labels::{ActionLabels, Labels};
