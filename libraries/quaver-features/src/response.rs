//! Audio-features payload from the music service Web API

use serde::{Deserialize, Serialize};

use crate::{DisplayFeature, Feature, FeatureKind, Key, Mode};

/// Audio features of one track as returned by `GET /audio-features/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub id: Option<String>,
    pub acousticness: f32,
    pub danceability: f32,
    pub energy: f32,
    pub instrumentalness: f32,
    /// Pitch class, -1 when no key was detected
    pub key: i64,
    pub liveness: f32,
    pub loudness: f32,
    pub mode: i64,
    pub speechiness: f32,
    pub tempo: f32,
    pub time_signature: i64,
    pub valence: f32,
}

impl AudioFeatures {
    /// Rows for the features view, in [`FeatureKind::ALL`] order
    ///
    /// Undetected key and out-of-range mode are left out.
    pub fn to_display_features(&self) -> Vec<DisplayFeature> {
        FeatureKind::ALL
            .iter()
            .filter_map(|&kind| self.display_feature(kind))
            .collect()
    }

    fn display_feature(&self, kind: FeatureKind) -> Option<DisplayFeature> {
        let value = match kind {
            FeatureKind::Key => {
                let key = Key::from_ordinal(self.key);
                if key.is_none() {
                    tracing::debug!(key = self.key, track = ?self.id, "No key detected");
                }
                return key.map(DisplayFeature::Key);
            }
            FeatureKind::Mode => {
                let mode = Mode::from_ordinal(self.mode);
                if mode.is_none() {
                    tracing::debug!(mode = self.mode, track = ?self.id, "Unrecognized mode");
                }
                return mode.map(DisplayFeature::Mode);
            }
            FeatureKind::Acousticness => self.acousticness,
            FeatureKind::Danceability => self.danceability,
            FeatureKind::Energy => self.energy,
            FeatureKind::Instrumentalness => self.instrumentalness,
            FeatureKind::Liveness => self.liveness,
            FeatureKind::Loudness => self.loudness,
            FeatureKind::Speechiness => self.speechiness,
            FeatureKind::Tempo => self.tempo,
            FeatureKind::Valence => self.valence,
            FeatureKind::TimeSignature => self.time_signature as f32,
            FeatureKind::Unknown => return None,
        };

        Some(DisplayFeature::Measured(Feature::new(kind, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AudioFeatures {
        AudioFeatures {
            id: Some("06AKEBrKUckW0KREUWRnvT".to_string()),
            acousticness: 0.00242,
            danceability: 0.585,
            energy: 0.842,
            instrumentalness: 0.00686,
            key: 9,
            liveness: 0.0866,
            loudness: -5.883,
            mode: 0,
            speechiness: 0.0556,
            tempo: 118.211,
            time_signature: 4,
            valence: 0.428,
        }
    }

    #[test]
    fn rows_follow_kind_order() {
        let rows = sample().to_display_features();
        let kinds: Vec<_> = rows.iter().map(|row| row.kind()).collect();
        assert_eq!(kinds, FeatureKind::ALL.to_vec());
    }

    #[test]
    fn categorical_fields_become_key_and_mode() {
        let rows = sample().to_display_features();
        assert!(rows.contains(&DisplayFeature::Key(Key::A)));
        assert!(rows.contains(&DisplayFeature::Mode(Mode::Minor)));
    }

    #[test]
    fn undetected_key_is_skipped() {
        let mut features = sample();
        features.key = -1;
        let rows = features.to_display_features();
        assert_eq!(rows.len(), FeatureKind::ALL.len() - 1);
        assert!(rows.iter().all(|row| row.kind() != FeatureKind::Key));
    }
}
