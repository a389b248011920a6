//! Musical key and mode, reported by the service as ordinals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch class using standard Pitch Class notation (C = 0, B = 11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    pub const ALL: [Self; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
    ];

    /// Look up a pitch class, `None` for -1 (no key detected) or anything out of range
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Display name, enharmonic equivalents joined
    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C♯, D♭",
            Self::D => "D",
            Self::DSharp => "D♯, E♭",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F♯, G♭",
            Self::G => "G",
            Self::GSharp => "G♯, A♭",
            Self::A => "A",
            Self::ASharp => "A♯, B♭",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Modality of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    Minor,
    Major,
}

impl Mode {
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Minor),
            1 => Some(Self::Major),
            _ => None,
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
