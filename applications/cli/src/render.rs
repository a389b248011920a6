/// Plain-text rendering of view models
use quaver_core::album::AlbumShelf;
use quaver_features::DisplayFeature;
use quaver_settings::{ApplyOutcome, Settings};

/// `Title: label (description)`, range appended for measured rows
pub fn feature_line(feature: &DisplayFeature) -> String {
    let mut line = format!("{}: ", feature.title());

    let label = feature.label();
    let description = feature.description();
    if label.is_empty() || label == description {
        line.push_str(&description);
    } else {
        line.push_str(&format!("{} ({})", label, description));
    }

    if let Some((min, max)) = feature.range() {
        line.push_str(&format!(" [{}..{}]", min, max));
    }

    line
}

pub fn feature_table(features: &[DisplayFeature]) -> String {
    features
        .iter()
        .map(|feature| feature_line(feature) + "\n")
        .collect()
}

/// Sections with their entries, the expanded one marked with `▾`
pub fn album_shelf(shelf: &AlbumShelf) -> String {
    let expanded = shelf.first_expanded();
    let mut out = String::new();

    for (index, section) in shelf.sections().iter().enumerate() {
        let marker = if Some(index) == expanded { '▾' } else { '▸' };
        out.push_str(&format!(
            "{} {} ({})\n",
            marker,
            section.title(),
            section.entries.len()
        ));

        if Some(index) != expanded {
            continue;
        }
        for entry in &section.entries {
            out.push_str(&format!("    {:<40} {}\n", entry.name, entry.year));
        }
    }

    out
}

pub fn settings(settings: &Settings) -> String {
    let client_path = settings
        .client_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(no spotifyd provided)".to_string());

    [
        format!("Theme: {}", settings.style.as_deref().unwrap_or("(default)")),
        format!("Colors: {}", settings.palette.label()),
        format!("Refresh interval: {}", settings.refresh_interval.label()),
        format!("Autostart spotifyd: {}", settings.start_client),
        format!("PulseAudio volume control: {}", settings.pulse_volume),
        format!("Media Controller: {}", settings.media_controller),
        format!("spotifyd path: {}", client_path),
        format!("Username: {}", settings.username),
        format!("Quality: {}", settings.bitrate.label()),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

pub fn apply_outcome(outcome: &ApplyOutcome) -> String {
    let mut out = String::from("Settings applied\n");
    if let Some(version) = &outcome.client_version {
        out.push_str(&format!("Client: {}\n", version));
    }
    for notice in &outcome.notices {
        out.push_str(&format!("{}: {}\n", notice.title(), notice.message()));
    }
    out
}
