//! Quaver Core
//!
//! Toolkit-agnostic view models for the Quaver desktop client.
//!
//! The UI layer only lays out widgets; everything it displays is prepared here:
//! - **Album shelf**: artist albums grouped by release type
//! - **Playlist editing**: dialog state and the minimal update body
//! - **System info**: diagnostics shown in the about page and bug reports
//! - **Error Handling**: Unified `QuaverError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use quaver_core::album::{Album, AlbumGroup, AlbumShelf};
//!
//! let albums = vec![Album::new("4aawyAB9vmqN3uQ7FjRGTy", "Global Warming", "2012-11-16", AlbumGroup::Album)];
//! let shelf = AlbumShelf::from_albums(&albums);
//! assert_eq!(shelf.first_expanded(), Some(0));
//! ```

#![forbid(unsafe_code)]

pub mod album;
pub mod error;
pub mod playlist;
pub mod system_info;

pub use error::{QuaverError, Result};
