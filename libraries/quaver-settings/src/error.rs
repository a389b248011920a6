//! Error types for settings

use std::path::PathBuf;
use thiserror::Error;

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while validating or applying settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A value in the batch failed validation, nothing was applied
    #[error("Failed to apply setting \"{setting}\". Check your settings and try again.")]
    Apply {
        setting: &'static str,
        #[source]
        source: Box<SettingsError>,
    },

    /// Client executable does not exist
    #[error("Client not found: {}", .0.display())]
    ClientNotFound(PathBuf),

    /// Path points at something other than the playback client
    #[error("Not a spotifyd executable: {}", .0.display())]
    NotClient(PathBuf),

    /// Client ran but printed no version
    #[error("Client at {} reported no version", .0.display())]
    NoVersion(PathBuf),

    /// Backing store failed to load or save
    #[error("Settings store error: {0}")]
    Store(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SettingsError {
    /// Wrap a validation failure with the name of the setting shown to the user
    pub fn apply(setting: &'static str, source: SettingsError) -> Self {
        Self::Apply {
            setting,
            source: Box::new(source),
        }
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
