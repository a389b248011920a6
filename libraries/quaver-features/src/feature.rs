//! Qualitative classification of a single audio feature
//!
//! Thresholds follow the distribution of values across the service's
//! catalogue, not an acoustic definition. Every comparison is inclusive to
//! the lower bucket: exactly 0.4 acousticness is "Probably not acoustic".

use crate::{FeatureKind, Key, Mode, LOUDNESS_RANGE, TEMPO_RANGE, UNIT_RANGE};

/// A measured feature with its label and display range
///
/// Label and range are computed once in [`Feature::new`] and depend only on
/// `(kind, value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    kind: FeatureKind,
    value: f32,
    name: String,
    range: (f32, f32),
}

impl Feature {
    /// Classify `value` as a `kind` measurement
    ///
    /// Never fails. An `Unknown` kind logs a warning and leaves the label empty.
    pub fn new(kind: FeatureKind, value: f32) -> Self {
        let (name, range) = classify(kind, value);

        Self {
            kind,
            value,
            name,
            range,
        }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Qualitative label, empty for unknown kinds
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// `(minimum, maximum)` for presentation only
    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn min(&self) -> f32 {
        self.range.0
    }

    pub fn max(&self) -> f32 {
        self.range.1
    }

    /// Short value string: a percentage for unit-range features, otherwise
    /// the raw value with the kind's unit
    pub fn description(&self) -> String {
        if self.range == UNIT_RANGE {
            // Two decimals at most, f32 noise shows up as 30.000002
            let percent = (f64::from(self.value) * 10_000.0).round() / 100.0;
            return format!("{}%", percent);
        }

        format!("{}{}", self.value, self.kind.unit_suffix())
    }
}

impl From<Key> for Feature {
    /// Pseudo-feature spanning C..B so keys render like the other features
    fn from(key: Key) -> Self {
        Self {
            kind: FeatureKind::Key,
            value: f32::from(key.ordinal()),
            name: key.name().to_string(),
            range: key_range(),
        }
    }
}

impl From<Mode> for Feature {
    fn from(mode: Mode) -> Self {
        Self {
            kind: FeatureKind::Mode,
            value: f32::from(mode.ordinal()),
            name: mode.name().to_string(),
            range: mode_range(),
        }
    }
}

fn classify(kind: FeatureKind, value: f32) -> (String, (f32, f32)) {
    match kind {
        FeatureKind::Acousticness => (acousticness(value).to_string(), UNIT_RANGE),
        FeatureKind::Danceability => (danceability(value).to_string(), UNIT_RANGE),
        FeatureKind::Energy => (energy(value).to_string(), UNIT_RANGE),
        FeatureKind::Instrumentalness => (instrumentalness(value).to_string(), UNIT_RANGE),
        FeatureKind::Key => (key(value).to_string(), key_range()),
        FeatureKind::Liveness => (liveness(value).to_string(), UNIT_RANGE),
        FeatureKind::Loudness => (loudness(value).to_string(), LOUDNESS_RANGE),
        FeatureKind::Mode => (mode(value).to_string(), mode_range()),
        FeatureKind::Speechiness => (speechiness(value).to_string(), UNIT_RANGE),
        FeatureKind::Tempo => (tempo(value).to_string(), TEMPO_RANGE),
        FeatureKind::Valence => (valence(value).to_string(), UNIT_RANGE),
        // No natural maximum, the value itself fills the slider
        FeatureKind::TimeSignature => (format!("{} m", value as i32), (0.0, value)),
        FeatureKind::Unknown => {
            tracing::warn!(kind = %kind, value, "Invalid audio feature, leaving label empty");
            (String::new(), UNIT_RANGE)
        }
    }
}

fn key_range() -> (f32, f32) {
    (f32::from(Key::C.ordinal()), f32::from(Key::B.ordinal()))
}

fn mode_range() -> (f32, f32) {
    (f32::from(Mode::Minor.ordinal()), f32::from(Mode::Major.ordinal()))
}

fn acousticness(value: f32) -> &'static str {
    const NO: f32 = 0.1;
    const PROBABLY_NO: f32 = 0.4;
    const PROBABLY_YES: f32 = 0.7;

    if value <= NO {
        "Not acoustic"
    } else if value <= PROBABLY_NO {
        "Probably not acoustic"
    } else if value <= PROBABLY_YES {
        "Probably acoustic"
    } else {
        "Acoustic"
    }
}

fn danceability(value: f32) -> &'static str {
    const NO_LOWER: f32 = 0.4;
    const NO_HIGHER: f32 = 0.85;

    if value <= NO_LOWER || value >= NO_HIGHER {
        "Not suitable"
    } else {
        "Suitable"
    }
}

fn energy(value: f32) -> &'static str {
    const VERY_LOW: f32 = 0.4;
    const LOW: f32 = 0.65;
    const MEDIUM: f32 = 0.8;
    const HIGH: f32 = 0.95;

    if value <= VERY_LOW {
        "Very low"
    } else if value <= LOW {
        "Low"
    } else if value <= MEDIUM {
        "Medium"
    } else if value <= HIGH {
        "High"
    } else {
        "Very high"
    }
}

fn instrumentalness(value: f32) -> &'static str {
    const NO: f32 = 0.05;

    if value <= NO {
        "Not instrumental"
    } else {
        "Instrumental"
    }
}

fn key(value: f32) -> &'static str {
    Key::from_ordinal(value as i64).map_or("?", |key| key.name())
}

fn liveness(value: f32) -> &'static str {
    const NO: f32 = 0.05;
    const PROBABLY_NO: f32 = 0.15;
    const PROBABLY_YES: f32 = 0.4;

    if value <= NO {
        "Not live"
    } else if value <= PROBABLY_NO {
        "Probably not live"
    } else if value <= PROBABLY_YES {
        "Probably live"
    } else {
        "Live"
    }
}

fn loudness(value: f32) -> &'static str {
    const VERY_QUIET: f32 = -25.0;
    const QUIET: f32 = -15.0;
    const LOUD: f32 = -2.5;

    if value <= VERY_QUIET {
        "Very quiet"
    } else if value <= QUIET {
        "Quiet"
    } else if value <= LOUD {
        "Loud"
    } else {
        "Very loud"
    }
}

fn mode(value: f32) -> &'static str {
    Mode::from_ordinal(value as i64).map_or("Unknown", |mode| mode.name())
}

fn speechiness(value: f32) -> &'static str {
    const SPEECH: f32 = 0.6;
    const MUSIC: f32 = 0.8;

    if value <= SPEECH {
        "Speech"
    } else if value >= MUSIC {
        "Music"
    } else {
        "Mixed"
    }
}

fn tempo(value: f32) -> &'static str {
    const SLOW: f32 = 60.0;
    const FAST: f32 = 150.0;

    if value <= SLOW {
        "Slow"
    } else if value >= FAST {
        "Fast"
    } else {
        "Average"
    }
}

fn valence(value: f32) -> &'static str {
    const SAD: f32 = 0.2;
    const HAPPY: f32 = 0.7;

    if value <= SAD {
        "Sad"
    } else if value >= HAPPY {
        "Happy"
    } else {
        "Mixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Formatted log output shared with the subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a DEBUG-level subscriber installed on this thread
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.lines())
    }

    fn label(kind: FeatureKind, value: f32) -> String {
        Feature::new(kind, value).name().to_string()
    }

    #[test]
    fn acousticness_boundaries() {
        assert_eq!(label(FeatureKind::Acousticness, 0.1), "Not acoustic");
        assert_eq!(label(FeatureKind::Acousticness, 0.4), "Probably not acoustic");
        assert_eq!(label(FeatureKind::Acousticness, 0.41), "Probably acoustic");
        assert_eq!(label(FeatureKind::Acousticness, 0.7), "Probably acoustic");
        assert_eq!(label(FeatureKind::Acousticness, 0.71), "Acoustic");
    }

    #[test]
    fn danceability_is_unsuitable_at_both_ends() {
        assert_eq!(label(FeatureKind::Danceability, 0.4), "Not suitable");
        assert_eq!(label(FeatureKind::Danceability, 0.6), "Suitable");
        assert_eq!(label(FeatureKind::Danceability, 0.85), "Not suitable");
    }

    #[test]
    fn loudness_range_is_in_decibels() {
        let feature = Feature::new(FeatureKind::Loudness, -2.5);
        assert_eq!(feature.name(), "Loud");
        assert_eq!(feature.range(), (-60.0, 0.0));
    }

    #[test]
    fn tempo_upper_bound_is_fast() {
        let feature = Feature::new(FeatureKind::Tempo, 150.0);
        assert_eq!(feature.name(), "Fast");
        assert_eq!(feature.range(), (0.0, 250.0));
    }

    #[test]
    fn time_signature_max_tracks_value() {
        let feature = Feature::new(FeatureKind::TimeSignature, 4.0);
        assert_eq!(feature.name(), "4 m");
        assert_eq!(feature.max(), 4.0);
        assert_eq!(feature.description(), "4 m");
    }

    #[test]
    fn unknown_kind_leaves_label_empty() {
        let feature = Feature::new(FeatureKind::Unknown, 0.5);
        assert!(feature.name().is_empty());
        assert_eq!(feature.value(), 0.5);
    }

    #[test]
    fn unknown_kind_warns_once() {
        let (feature, lines) = capture_logs(|| Feature::new(FeatureKind::Unknown, 0.3));
        assert!(feature.name().is_empty());

        let warnings: Vec<_> = lines.iter().filter(|line| line.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{:?}", lines);
        assert!(warnings[0].contains("Invalid audio feature"));
        assert!(warnings[0].contains("value=0.3"));
    }

    #[test]
    fn known_kinds_do_not_warn() {
        let (_, lines) = capture_logs(|| {
            for kind in FeatureKind::ALL {
                Feature::new(kind, 0.5);
            }
        });
        assert!(!lines.iter().any(|line| line.contains("WARN")), "{:?}", lines);
    }

    #[test]
    fn unrecognized_name_is_logged() {
        let (kind, lines) = capture_logs(|| FeatureKind::from_name("popularity"));
        assert_eq!(kind, FeatureKind::Unknown);
        assert!(lines
            .iter()
            .any(|line| line.contains("DEBUG") && line.contains("popularity")));
    }

    #[test]
    fn key_pseudo_feature() {
        let feature = Feature::from(Key::CSharp);
        assert_eq!(feature.kind(), FeatureKind::Key);
        assert_eq!(feature.name(), "C♯, D♭");
        assert_eq!(feature.value(), 1.0);
        assert_eq!(feature.range(), (0.0, 11.0));
    }

    #[test]
    fn key_kind_from_raw_ordinal() {
        assert_eq!(label(FeatureKind::Key, 7.0), "G");
        assert_eq!(label(FeatureKind::Key, -1.0), "?");
    }

    #[test]
    fn mode_pseudo_feature() {
        let feature = Feature::from(Mode::Major);
        assert_eq!(feature.name(), "Major");
        assert_eq!(feature.range(), (0.0, 1.0));
        assert_eq!(label(FeatureKind::Mode, 0.0), "Minor");
    }

    #[test]
    fn description_formats_percentage_and_units() {
        assert_eq!(Feature::new(FeatureKind::Energy, 0.5).description(), "50%");
        assert_eq!(Feature::new(FeatureKind::Loudness, -5.5).description(), "-5.5 dB");
        assert_eq!(Feature::new(FeatureKind::Tempo, 128.0).description(), "128 BPM");
        assert_eq!(Feature::from(Key::G).description(), "7");
    }

    #[test]
    fn percentage_has_no_float_noise() {
        assert_eq!(Feature::new(FeatureKind::Unknown, 0.3).description(), "30%");
        assert_eq!(Feature::new(FeatureKind::Energy, 0.578).description(), "57.8%");
        assert_eq!(Feature::new(FeatureKind::Valence, 0.123_45).description(), "12.35%");
        assert_eq!(Feature::new(FeatureKind::Danceability, 1.0).description(), "100%");
    }
}
