//! Settings persistence seam
//!
//! Where settings live on disk is up to the application; the applier only
//! needs load and save.

use crate::error::Result;
use crate::settings::Settings;

/// Backing storage for [`Settings`]
pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;

    /// Persist a complete settings snapshot
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Store that keeps settings in memory, used by tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Settings,
    saves: usize,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings, saves: 0 }
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.settings = settings.clone();
        self.saves += 1;
        Ok(())
    }
}
