//! Feature kinds reported by the audio-features endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named audio measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Acousticness,
    Danceability,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Speechiness,
    Tempo,
    Valence,
    TimeSignature,
    #[serde(other)]
    Unknown,
}

impl FeatureKind {
    /// Every kind the service reports, in display order
    pub const ALL: [Self; 12] = [
        Self::Acousticness,
        Self::Danceability,
        Self::Energy,
        Self::Instrumentalness,
        Self::Key,
        Self::Liveness,
        Self::Loudness,
        Self::Mode,
        Self::Speechiness,
        Self::Tempo,
        Self::Valence,
        Self::TimeSignature,
    ];

    /// Parse an API field name (`"time_signature"`), unrecognized names map to `Unknown`
    pub fn from_name(name: &str) -> Self {
        let kind = match name.trim().to_ascii_lowercase().as_str() {
            "acousticness" => Self::Acousticness,
            "danceability" => Self::Danceability,
            "energy" => Self::Energy,
            "instrumentalness" => Self::Instrumentalness,
            "key" => Self::Key,
            "liveness" => Self::Liveness,
            "loudness" => Self::Loudness,
            "mode" => Self::Mode,
            "speechiness" => Self::Speechiness,
            "tempo" => Self::Tempo,
            "valence" => Self::Valence,
            "time_signature" | "time-signature" => Self::TimeSignature,
            _ => Self::Unknown,
        };

        if kind == Self::Unknown {
            tracing::debug!(name, "Unrecognized audio feature name");
        }
        kind
    }

    /// API field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acousticness => "acousticness",
            Self::Danceability => "danceability",
            Self::Energy => "energy",
            Self::Instrumentalness => "instrumentalness",
            Self::Key => "key",
            Self::Liveness => "liveness",
            Self::Loudness => "loudness",
            Self::Mode => "mode",
            Self::Speechiness => "speechiness",
            Self::Tempo => "tempo",
            Self::Valence => "valence",
            Self::TimeSignature => "time_signature",
            Self::Unknown => "unknown",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Acousticness => "Acousticness",
            Self::Danceability => "Danceability",
            Self::Energy => "Energy",
            Self::Instrumentalness => "Instrumentalness",
            Self::Key => "Key",
            Self::Liveness => "Liveness",
            Self::Loudness => "Loudness",
            Self::Mode => "Mode",
            Self::Speechiness => "Speechiness",
            Self::Tempo => "Tempo",
            Self::Valence => "Valence",
            Self::TimeSignature => "Time signature",
            Self::Unknown => "Unknown",
        }
    }

    /// Unit appended to raw (non-percentage) values
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            Self::Loudness => " dB",
            Self::Tempo => " BPM",
            Self::TimeSignature => " m",
            _ => "",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
