//! VertexKit Settings Crate
//!
//! Handles editor settings, application configuration, and their persistence.

pub mod config;
pub mod error;

pub use config::{
    Config, EditorSettings, StorageSettings, MAX_CORNER_RADIUS_RATIO, MAX_CORNER_SEGMENTS,
    MAX_RING_SEGMENTS,
};
pub use error::{SettingsError, SettingsResult};
