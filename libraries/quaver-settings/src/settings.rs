/// Persisted client settings
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Widget style name, `None` uses the platform default
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default)]
    pub refresh_interval: RefreshInterval,

    /// Start the playback client together with the app
    #[serde(default)]
    pub start_client: bool,

    /// Use PulseAudio for volume instead of the service API
    #[serde(default)]
    pub pulse_volume: bool,

    /// MPRIS media controller
    #[serde(default)]
    pub media_controller: bool,

    #[serde(default)]
    pub client_path: Option<PathBuf>,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub bitrate: Bitrate,
}

/// Color palette applied on top of the widget style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    App,
    Style,
    Dark,
}

impl Palette {
    pub const ALL: [Self; 3] = [Self::App, Self::Style, Self::Dark];

    /// Combo box entry
    pub fn label(&self) -> &'static str {
        match self {
            Self::App => "Default",
            Self::Style => "From style",
            Self::Dark => "Dark",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// How often playback state is polled from the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshInterval {
    Fast,
    #[default]
    Medium,
    Slow,
}

impl RefreshInterval {
    pub const ALL: [Self; 3] = [Self::Fast, Self::Medium, Self::Slow];

    pub fn duration(&self) -> Duration {
        match self {
            Self::Fast => Duration::from_secs(3),
            Self::Medium => Duration::from_secs(5),
            Self::Slow => Duration::from_secs(10),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fast => "Fast (3s)",
            Self::Medium => "Medium (5s)",
            Self::Slow => "Slow (10s)",
        }
    }

    /// Position in the refresh combo box
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Fast => 0,
            Self::Medium => 1,
            Self::Slow => 2,
        }
    }
}

/// Streaming quality of the playback client
///
/// Stored as kbit/s. Unrecognized rates fall back to `High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "u32", into = "u32")]
pub enum Bitrate {
    Low,
    Medium,
    #[default]
    High,
}

impl Bitrate {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn kbps(&self) -> u32 {
        match self {
            Self::Low => 96,
            Self::Medium => 160,
            Self::High => 320,
        }
    }

    pub fn from_kbps(kbps: u32) -> Self {
        match kbps {
            96 => Self::Low,
            160 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Position in the quality combo box, out of range picks `High`
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::High)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low (96 kbit/s)",
            Self::Medium => "Medium (160 kbit/s)",
            Self::High => "High (320 kbit/s)",
        }
    }
}

impl From<u32> for Bitrate {
    fn from(kbps: u32) -> Self {
        Self::from_kbps(kbps)
    }
}

impl From<Bitrate> for u32 {
    fn from(bitrate: Bitrate) -> Self {
        bitrate.kbps()
    }
}
