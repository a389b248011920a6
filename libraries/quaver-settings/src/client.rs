//! Playback client detection
//!
//! The app drives a separate `spotifyd` process. Before a path is accepted
//! the binary is asked for its version, which doubles as a sanity check.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, SettingsError};

/// File stem the client executable must have
pub const CLIENT_NAME: &str = "spotifyd";

const PACTL_PATH: &str = "/usr/bin/pactl";

/// Resolves the version string of a client executable
#[cfg_attr(test, mockall::automock)]
pub trait ClientProbe {
    fn version(&self, path: &Path) -> Result<String>;
}

/// Probe that runs `<path> --version`
#[derive(Debug, Clone, Default)]
pub struct ProcessProbe;

impl ProcessProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ClientProbe for ProcessProbe {
    fn version(&self, path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(SettingsError::ClientNotFound(path.to_path_buf()));
        }

        if path.file_stem().and_then(|stem| stem.to_str()) != Some(CLIENT_NAME) {
            return Err(SettingsError::NotClient(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "Querying client version");
        let output = Command::new(path).arg("--version").output()?;

        // Entire stdout is the version
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(SettingsError::NoVersion(path.to_path_buf()));
        }

        Ok(version)
    }
}

/// Whether PulseAudio volume control can be offered
pub fn is_pulse_available() -> bool {
    is_executable(Path::new(PACTL_PATH))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
