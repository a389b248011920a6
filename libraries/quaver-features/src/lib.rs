//! Audio feature classification for Quaver
//!
//! The streaming service describes every track with a handful of numeric
//! audio features (energy, tempo, loudness, ...). This crate turns those raw
//! numbers into something a listener can read:
//! - a qualitative label ("Probably acoustic", "Very loud")
//! - a display range for slider-like widgets
//! - a short description string ("72%", "-5.5 dB", "128 BPM")
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ AudioFeatures │ ──► │   Feature    │ ──► │ DisplayFeature │
//! │  (API JSON)   │     │ (kind,value) │     │  (UI rendering)│
//! └───────────────┘     └──────────────┘     └────────────────┘
//!                              ▲
//!                       Key / Mode ordinals
//! ```
//!
//! # Example
//!
//! ```rust
//! use quaver_features::{Feature, FeatureKind, Key};
//!
//! let energy = Feature::new(FeatureKind::Energy, 0.7);
//! assert_eq!(energy.name(), "Medium");
//! assert_eq!(energy.description(), "70%");
//!
//! let key = Feature::from(Key::CSharp);
//! assert_eq!(key.name(), "C♯, D♭");
//! ```

#![forbid(unsafe_code)]

mod display;
mod feature;
mod key;
mod kind;
mod response;

pub use display::DisplayFeature;
pub use feature::Feature;
pub use key::{Key, Mode};
pub use kind::FeatureKind;
pub use response::AudioFeatures;

/// Range used by every feature measured as a fraction
pub const UNIT_RANGE: (f32, f32) = (0.0, 1.0);

/// Loudness display range in dB
pub const LOUDNESS_RANGE: (f32, f32) = (-60.0, 0.0);

/// Tempo display range in BPM
pub const TEMPO_RANGE: (f32, f32) = (0.0, 250.0);
