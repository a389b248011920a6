//! Batch apply of the settings dialog
//!
//! The whole form is validated against a copy of the current settings and
//! only swapped in once the store accepted it. A failure at any step leaves
//! both the in-memory settings and the store untouched.

use std::path::PathBuf;

use crate::client::ClientProbe;
use crate::error::{Result, SettingsError};
use crate::settings::{Bitrate, Palette, RefreshInterval, Settings};
use crate::store::SettingsStore;

/// Setting name shown when the client path is rejected
const CLIENT_PATH_SETTING: &str = "spotifyd path";

/// Change that only takes full effect after restarting the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartNotice {
    Palette,
    MediaController,
}

impl RestartNotice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Palette => "Palette",
            Self::MediaController => "Media Controller",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Palette => "Please restart the application to fully apply selected palette",
            Self::MediaController => "Please restart the application to apply changes",
        }
    }
}

/// Values as edited in the settings dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub style: Option<String>,
    pub palette: Palette,
    pub refresh_interval: RefreshInterval,
    pub start_client: bool,
    /// `None` when PulseAudio is unavailable and the checkbox is hidden
    pub pulse_volume: Option<bool>,
    pub media_controller: bool,
    /// Raw text of the path field, empty clears the path
    pub client_path: String,
    pub username: String,
    pub bitrate: Bitrate,
}

impl SettingsForm {
    /// Pre-fill the dialog from stored settings
    pub fn from_settings(settings: &Settings, pulse_available: bool) -> Self {
        Self {
            style: settings.style.clone(),
            palette: settings.palette,
            refresh_interval: settings.refresh_interval,
            start_client: settings.start_client,
            pulse_volume: pulse_available.then_some(settings.pulse_volume),
            media_controller: settings.media_controller,
            client_path: settings
                .client_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            username: settings.username.clone(),
            bitrate: settings.bitrate,
        }
    }
}

/// Result of a successful apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub notices: Vec<RestartNotice>,
    /// Version reported by the client when a path is set
    pub client_version: Option<String>,
}

impl ApplyOutcome {
    pub fn restart_required(&self) -> bool {
        !self.notices.is_empty()
    }
}

/// Owns the current settings and commits dialog batches atomically
pub struct SettingsApplier<S, P> {
    settings: Settings,
    store: S,
    probe: P,
}

impl<S: SettingsStore, P: ClientProbe> SettingsApplier<S, P> {
    /// Load current settings from `store`
    pub fn new(store: S, probe: P) -> Result<Self> {
        let settings = store.load()?;
        Ok(Self {
            settings,
            store,
            probe,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate and commit every value in `form`, or none of them
    pub fn apply(&mut self, form: &SettingsForm) -> Result<ApplyOutcome> {
        let current = &self.settings;
        let mut next = current.clone();
        let mut outcome = ApplyOutcome::default();

        next.style = form.style.clone();

        if form.palette != current.palette {
            outcome.notices.push(RestartNotice::Palette);
        }
        next.palette = form.palette;

        if form.media_controller != current.media_controller {
            outcome.notices.push(RestartNotice::MediaController);
        }
        next.media_controller = form.media_controller;

        if let Some(pulse_volume) = form.pulse_volume {
            next.pulse_volume = pulse_volume;
        }

        let client_path = form.client_path.trim();
        if client_path.is_empty() {
            next.client_path = None;
        } else {
            let path = PathBuf::from(client_path);
            let version = self.probe.version(&path).map_err(|err| {
                tracing::warn!(path = %path.display(), error = %err, "Rejected client path");
                SettingsError::apply(CLIENT_PATH_SETTING, err)
            })?;
            next.client_path = Some(path);
            outcome.client_version = Some(version);
        }

        next.refresh_interval = form.refresh_interval;
        next.start_client = form.start_client;
        next.username = form.username.trim().to_string();
        next.bitrate = form.bitrate;

        self.store.save(&next)?;
        self.settings = next;

        tracing::info!(
            restart_required = outcome.restart_required(),
            "Settings applied"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockClientProbe;
    use crate::store::MemoryStore;

    fn applier(probe: MockClientProbe) -> SettingsApplier<MemoryStore, MockClientProbe> {
        SettingsApplier::new(MemoryStore::default(), probe).unwrap()
    }

    #[test]
    fn unchanged_form_has_no_notices() {
        let mut applier = applier(MockClientProbe::new());
        let form = SettingsForm::from_settings(applier.settings(), false);

        let outcome = applier.apply(&form).unwrap();
        assert!(!outcome.restart_required());
        assert_eq!(outcome.client_version, None);
    }

    #[test]
    fn palette_and_media_changes_need_restart() {
        let mut applier = applier(MockClientProbe::new());
        let mut form = SettingsForm::from_settings(applier.settings(), false);
        form.palette = Palette::Dark;
        form.media_controller = true;

        let outcome = applier.apply(&form).unwrap();
        assert_eq!(
            outcome.notices,
            vec![RestartNotice::Palette, RestartNotice::MediaController]
        );
        assert_eq!(applier.settings().palette, Palette::Dark);
    }

    #[test]
    fn client_path_is_probed() {
        let mut probe = MockClientProbe::new();
        probe
            .expect_version()
            .withf(|path| path == std::path::Path::new("/usr/bin/spotifyd"))
            .times(1)
            .returning(|_| Ok("spotifyd 0.3.5".to_string()));

        let mut applier = applier(probe);
        let mut form = SettingsForm::from_settings(applier.settings(), false);
        form.client_path = "/usr/bin/spotifyd".to_string();

        let outcome = applier.apply(&form).unwrap();
        assert_eq!(outcome.client_version.as_deref(), Some("spotifyd 0.3.5"));
        assert_eq!(
            applier.settings().client_path,
            Some(PathBuf::from("/usr/bin/spotifyd"))
        );
    }

    #[test]
    fn rejected_client_path_rolls_back_everything() {
        let mut probe = MockClientProbe::new();
        probe
            .expect_version()
            .returning(|path| Err(SettingsError::NotClient(path.to_path_buf())));

        let mut applier = applier(probe);
        let before = applier.settings().clone();

        let mut form = SettingsForm::from_settings(&before, true);
        form.palette = Palette::Style;
        form.username = "bob".to_string();
        form.client_path = "/opt/librespot".to_string();

        let err = applier.apply(&form).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Apply {
                setting: "spotifyd path",
                ..
            }
        ));
        assert_eq!(applier.settings(), &before);
        assert_eq!(applier.store().saves(), 0);
    }

    #[test]
    fn hidden_pulse_checkbox_keeps_stored_value() {
        let stored = Settings {
            pulse_volume: true,
            ..Settings::default()
        };
        let mut applier =
            SettingsApplier::new(MemoryStore::new(stored), MockClientProbe::new()).unwrap();

        let form = SettingsForm::from_settings(applier.settings(), false);
        assert_eq!(form.pulse_volume, None);

        applier.apply(&form).unwrap();
        assert!(applier.settings().pulse_volume);
    }
}
