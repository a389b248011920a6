//! Client settings for Quaver
//!
//! The settings dialog edits a copy of [`Settings`] through a [`SettingsForm`].
//! Pressing OK or Apply hands the form to [`SettingsApplier::apply`], which
//! either commits every value or none of them:
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌───────────────┐
//! │ SettingsForm │ ──► │ SettingsApplier │ ──► │ SettingsStore │
//! └──────────────┘     └─────────────────┘     └───────────────┘
//!                              │
//!                              ▼
//!                       ┌─────────────┐
//!                       │ ClientProbe │  (spotifyd --version)
//!                       └─────────────┘
//! ```
//!
//! Some values only take effect after a restart; those come back as
//! [`RestartNotice`]s for the UI to show.

#![forbid(unsafe_code)]

mod apply;
mod client;
mod error;
mod settings;
mod store;

pub use apply::{ApplyOutcome, RestartNotice, SettingsApplier, SettingsForm};
pub use client::{is_pulse_available, ClientProbe, ProcessProbe, CLIENT_NAME};
pub use error::{Result, SettingsError};
pub use settings::{Bitrate, Palette, RefreshInterval, Settings};
pub use store::{MemoryStore, SettingsStore};
