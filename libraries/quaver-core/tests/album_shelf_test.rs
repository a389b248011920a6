//! Integration tests for the artist album shelf

use quaver_core::album::{Album, AlbumGroup, AlbumShelf};
use quaver_core::QuaverError;

fn discography() -> Vec<Album> {
    vec![
        Album::new("s1", "Timber", "2013-10-07", AlbumGroup::Single),
        Album::new("c1", "Now 50", "2014", AlbumGroup::Compilation),
        Album::new("s2", "Feel This Moment", "2013-01", AlbumGroup::Single),
        Album::new("", "Bootleg", "", AlbumGroup::Other),
    ]
}

#[test]
fn sections_keep_fixed_order() {
    let shelf = AlbumShelf::from_albums(&discography());
    let titles: Vec<_> = shelf.sections().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec!["Albums", "Singles", "Compilations", "Appears On", "Other"]
    );
    assert_eq!(shelf.len(), 4);
}

#[test]
fn first_non_empty_section_is_expanded() {
    let shelf = AlbumShelf::from_albums(&discography());
    // No full albums, so singles open first
    assert_eq!(shelf.first_expanded(), Some(1));

    let empty = AlbumShelf::from_albums(&[]);
    assert_eq!(empty.first_expanded(), None);
    assert!(empty.is_empty());
}

#[test]
fn entries_keep_api_order_within_a_group() {
    let shelf = AlbumShelf::from_albums(&discography());
    let singles: Vec<_> = shelf.sections()[1]
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(singles, vec!["Timber", "Feel This Moment"]);
}

#[test]
fn years_and_tooltips() {
    let shelf = AlbumShelf::from_albums(&discography());
    let timber = shelf.entry("s1").unwrap();
    assert_eq!(timber.year, "2013");
    assert_eq!(timber.tooltip, "2013-10-07");

    let compilation = shelf.entry("c1").unwrap();
    assert_eq!(compilation.year, "2014");
    assert_eq!(compilation.tooltip, "2014");
}

#[test]
fn entries_without_id_are_not_playable() {
    let shelf = AlbumShelf::from_albums(&discography());
    let bootleg = &shelf.sections()[4].entries[0];
    assert!(!bootleg.playable());
    assert!(matches!(shelf.entry(""), Err(QuaverError::InvalidInput(_))));
}

#[test]
fn missing_album_is_not_found() {
    let shelf = AlbumShelf::from_albums(&discography());
    assert!(matches!(
        shelf.entry("nope"),
        Err(QuaverError::NotFound { .. })
    ));
}

#[test]
fn albums_deserialize_from_api_json() {
    let json = r#"[
        {"id": "a1", "name": "Globalization", "release_date": "2014-11-21", "album_group": "album"},
        {"id": "a2", "name": "Guest Spot", "release_date": "2016", "album_group": "appears_on", "image": "https://i.scdn.co/image/x"}
    ]"#;

    let albums: Vec<Album> = serde_json::from_str(json).unwrap();
    let shelf = AlbumShelf::from_albums(&albums);

    assert_eq!(shelf.first_expanded(), Some(0));
    assert_eq!(shelf.sections()[3].entries[0].uri(), "spotify:album:a2");
    assert!(shelf.sections()[3].entries[0].image.is_some());
}
