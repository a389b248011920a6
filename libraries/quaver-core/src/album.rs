//! Artist discography grouped by release type
//!
//! The artist view shows one collapsible section per group. Sections keep a
//! fixed order and the first one with entries starts expanded.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{QuaverError, Result};

/// Relation of an album to the artist whose page lists it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumGroup {
    Album,
    Single,
    Compilation,
    AppearsOn,
    #[serde(other)]
    Other,
}

impl AlbumGroup {
    /// Section order on the artist page
    pub const ALL: [Self; 5] = [
        Self::Album,
        Self::Single,
        Self::Compilation,
        Self::AppearsOn,
        Self::Other,
    ];

    /// Section title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Album => "Albums",
            Self::Single => "Singles",
            Self::Compilation => "Compilations",
            Self::AppearsOn => "Appears On",
            Self::Other => "Other",
        }
    }
}

/// Album as listed in an artist's discography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on what the label provided
    #[serde(default)]
    pub release_date: String,
    #[serde(default = "default_album_group")]
    pub album_group: AlbumGroup,
    /// Cover art URL
    #[serde(default)]
    pub image: Option<String>,
}

fn default_album_group() -> AlbumGroup {
    AlbumGroup::Other
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        release_date: impl Into<String>,
        album_group: AlbumGroup,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            release_date: release_date.into(),
            album_group,
            image: None,
        }
    }
}

/// How much of a release date is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// Parsed release date, missing parts default to the first month/day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDate {
    pub date: NaiveDate,
    pub precision: DatePrecision,
}

impl ReleaseDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Short form, only as precise as the source
    pub fn short_format(&self) -> String {
        match self.precision {
            DatePrecision::Year => self.date.format("%Y").to_string(),
            DatePrecision::Month => self.date.format("%b %Y").to_string(),
            DatePrecision::Day => self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Parse a release date in any of the precisions the service uses
pub fn parse_release_date(value: &str) -> Option<ReleaseDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(ReleaseDate {
            date,
            precision: DatePrecision::Day,
        });
    }

    let mut parts = value.splitn(2, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(month) => {
            let month: u32 = month.parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1).map(|date| ReleaseDate {
                date,
                precision: DatePrecision::Month,
            })
        }
        None => NaiveDate::from_ymd_opt(year, 1, 1).map(|date| ReleaseDate {
            date,
            precision: DatePrecision::Year,
        }),
    }
}

/// Row in an album section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumEntry {
    pub id: String,
    pub name: String,
    /// Empty when the release date could not be parsed
    pub year: String,
    pub tooltip: String,
    pub image: Option<String>,
}

impl AlbumEntry {
    fn from_album(album: &Album) -> Self {
        let release = parse_release_date(&album.release_date);
        if release.is_none() && !album.release_date.is_empty() {
            tracing::debug!(album = %album.id, date = %album.release_date, "Unparseable release date");
        }

        Self {
            id: album.id.clone(),
            name: album.name.clone(),
            year: release.map(|r| r.year().to_string()).unwrap_or_default(),
            tooltip: release.map(|r| r.short_format()).unwrap_or_default(),
            image: album.image.clone(),
        }
    }

    /// Entries without an id can be shown but not opened or played
    pub fn playable(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn uri(&self) -> String {
        format!("spotify:album:{}", self.id)
    }
}

/// One collapsible group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSection {
    pub group: AlbumGroup,
    pub entries: Vec<AlbumEntry>,
}

impl AlbumSection {
    pub fn title(&self) -> &'static str {
        self.group.label()
    }
}

/// All sections of an artist's discography
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumShelf {
    sections: Vec<AlbumSection>,
}

impl AlbumShelf {
    /// Group albums by release type, keeping API order within each group
    pub fn from_albums(albums: &[Album]) -> Self {
        let mut sections: Vec<AlbumSection> = AlbumGroup::ALL
            .iter()
            .map(|&group| AlbumSection {
                group,
                entries: Vec::new(),
            })
            .collect();

        for album in albums {
            let index = album.album_group as usize;
            sections[index].entries.push(AlbumEntry::from_album(album));
        }

        Self { sections }
    }

    pub fn sections(&self) -> &[AlbumSection] {
        &self.sections
    }

    /// Index of the section that starts expanded
    pub fn first_expanded(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| !section.entries.is_empty())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a playable entry by album id
    pub fn entry(&self, id: &str) -> Result<&AlbumEntry> {
        if id.is_empty() {
            return Err(QuaverError::invalid_input("album id is empty"));
        }

        self.sections
            .iter()
            .flat_map(|section| section.entries.iter())
            .find(|entry| entry.id == id)
            .ok_or_else(|| QuaverError::not_found("Album", id))
    }
}
