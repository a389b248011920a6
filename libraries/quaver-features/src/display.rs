//! Renderable feature rows
//!
//! Key and mode are categorical, so they get their own variants instead of
//! pretending to have a numeric range.

use crate::{Feature, FeatureKind, Key, Mode};

/// One row in the audio features view
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayFeature {
    /// Continuous measurement with a label and a range
    Measured(Feature),
    Key(Key),
    Mode(Mode),
}

impl DisplayFeature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Measured(feature) => feature.kind(),
            Self::Key(_) => FeatureKind::Key,
            Self::Mode(_) => FeatureKind::Mode,
        }
    }

    /// Row title, e.g. "Time signature"
    pub fn title(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Qualitative label
    pub fn label(&self) -> &str {
        match self {
            Self::Measured(feature) => feature.name(),
            Self::Key(key) => key.name(),
            Self::Mode(mode) => mode.name(),
        }
    }

    /// Slider bounds, `None` for categorical rows
    pub fn range(&self) -> Option<(f32, f32)> {
        match self {
            Self::Measured(feature) => Some(feature.range()),
            Self::Key(_) | Self::Mode(_) => None,
        }
    }

    /// Value column text
    pub fn description(&self) -> String {
        match self {
            Self::Measured(feature) => feature.description(),
            Self::Key(key) => key.name().to_string(),
            Self::Mode(mode) => mode.name().to_string(),
        }
    }

    /// Collapse into the uniform pseudo-feature shape
    pub fn into_feature(self) -> Feature {
        match self {
            Self::Measured(feature) => feature,
            Self::Key(key) => Feature::from(key),
            Self::Mode(mode) => Feature::from(mode),
        }
    }
}

impl From<Feature> for DisplayFeature {
    fn from(feature: Feature) -> Self {
        Self::Measured(feature)
    }
}

impl From<Key> for DisplayFeature {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<Mode> for DisplayFeature {
    fn from(mode: Mode) -> Self {
        Self::Mode(mode)
    }
}
