//! Playlist edit dialog state

use serde::{Deserialize, Serialize};

use crate::error::{QuaverError, Result};

/// Editable playlist attributes as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub collaborative: bool,
}

/// Widget focused when the dialog opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFocus {
    Dialog,
    Name,
    Description,
}

impl EditFocus {
    /// Map the column the user clicked in the playlist header
    pub fn from_selected_index(index: i32) -> Self {
        match index {
            0 => Self::Name,
            1 => Self::Description,
            _ => Self::Dialog,
        }
    }
}

/// Body for `PUT /playlists/{id}`, unchanged fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
}

impl PlaylistUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// In-progress edit of a playlist
#[derive(Debug, Clone)]
pub struct PlaylistEdit {
    original: PlaylistDetails,
    edited: PlaylistDetails,
    focus: EditFocus,
}

impl PlaylistEdit {
    pub fn open(details: &PlaylistDetails, selected_index: i32) -> Self {
        Self {
            original: details.clone(),
            edited: details.clone(),
            focus: EditFocus::from_selected_index(selected_index),
        }
    }

    /// Dialog title
    pub fn title(&self) -> &str {
        &self.original.name
    }

    pub fn focus(&self) -> EditFocus {
        self.focus
    }

    pub fn edited(&self) -> &PlaylistDetails {
        &self.edited
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.edited.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.edited.description = description.into();
    }

    pub fn set_public(&mut self, public: bool) {
        self.edited.public = public;
    }

    pub fn set_collaborative(&mut self, collaborative: bool) {
        self.edited.collaborative = collaborative;
    }

    /// Fields that differ from the opened playlist
    pub fn changes(&self) -> Result<PlaylistUpdate> {
        let name = self.edited.name.trim();
        if name.is_empty() {
            return Err(QuaverError::invalid_input("playlist name cannot be empty"));
        }

        let original = &self.original;
        let edited = &self.edited;

        Ok(PlaylistUpdate {
            name: (name != original.name).then(|| name.to_string()),
            description: (edited.description != original.description)
                .then(|| edited.description.clone()),
            public: (edited.public != original.public).then_some(edited.public),
            collaborative: (edited.collaborative != original.collaborative)
                .then_some(edited.collaborative),
        })
    }
}
