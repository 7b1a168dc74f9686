use pltstore::{Error, Playlist, RecordStore, SqliteStore, Track};
use tempfile::TempDir;

/// Crée une base temporaire pour les tests
fn create_test_store() -> (TempDir, SqliteStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("playlists").join("test.db");
    let store = SqliteStore::open(&db_path, "saved_tabs").unwrap();
    (temp_dir, store)
}

fn sample_playlist(name: &str) -> Playlist {
    Playlist::with_tracks(
        name,
        vec![
            Track::new("file:///music/one.flac")
                .with_title("One")
                .with_length(201.5),
            Track::new("http://radio.example/stream"),
            Track::new("file:///music/three.ogg").with_title("Three"),
        ],
    )
}

#[test]
fn test_open_creates_parent_directory() {
    let (temp_dir, _store) = create_test_store();
    assert!(temp_dir.path().join("playlists").join("test.db").exists());
}

#[test]
fn test_save_and_load_preserves_track_order() {
    let (_temp_dir, store) = create_test_store();
    let playlist = sample_playlist("Evening");

    store.save("order0..Evening", &playlist, false).unwrap();
    let loaded = store.load("order0..Evening").unwrap();

    assert_eq!(loaded.name, "Evening");
    assert_eq!(loaded.tracks, playlist.tracks);
    assert!(!loaded.needs_save);
}

#[test]
fn test_overwrite_replaces_tracks() {
    let (_temp_dir, store) = create_test_store();
    store.save("tab", &sample_playlist("A"), false).unwrap();

    let err = store.save("tab", &Playlist::new("B"), false).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));

    let replacement = Playlist::with_tracks("B", vec![Track::new("b.mp3")]);
    store.save("tab", &replacement, true).unwrap();

    let loaded = store.load("tab").unwrap();
    assert_eq!(loaded.name, "B");
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_remove_and_list() {
    let (_temp_dir, store) = create_test_store();
    store.save("order0..A", &sample_playlist("A"), true).unwrap();
    store.save("order1..B", &sample_playlist("B"), true).unwrap();

    let mut names = store.list_names().unwrap();
    names.sort();
    assert_eq!(names, vec!["order0..A", "order1..B"]);

    store.remove("order0..A").unwrap();
    assert_eq!(store.list_names().unwrap(), vec!["order1..B"]);
    assert!(matches!(store.load("order0..A"), Err(Error::NotFound(_))));
    assert!(matches!(store.remove("order0..A"), Err(Error::NotFound(_))));
}

#[test]
fn test_namespaces_are_isolated() {
    let (_temp_dir, tabs) = create_test_store();
    let library = tabs.namespaced("custom");

    tabs.save("Mix", &sample_playlist("Mix"), true).unwrap();
    assert!(library.list_names().unwrap().is_empty());
    assert!(!library.contains("Mix").unwrap());

    let mut custom = sample_playlist("Mix");
    custom.is_custom = true;
    library.save("Mix", &custom, true).unwrap();

    assert!(library.load("Mix").unwrap().is_custom);
    assert!(!tabs.load("Mix").unwrap().is_custom);
}

#[test]
fn test_reopen_keeps_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");
    {
        let store = SqliteStore::open(&db_path, "saved_tabs").unwrap();
        store
            .save("order0.current.Kept", &sample_playlist("Kept"), true)
            .unwrap();
    }

    let store = SqliteStore::open(&db_path, "saved_tabs").unwrap();
    let loaded = store.load("order0.current.Kept").unwrap();
    assert_eq!(loaded.len(), 3);
}

#[test]
fn test_playlist_serde_shape() {
    let playlist = Playlist::with_tracks("Json", vec![Track::new("a.flac")]);
    let json = serde_json::to_value(&playlist).unwrap();

    assert_eq!(json["name"], "Json");
    assert_eq!(json["tracks"][0]["location"], "a.flac");
    assert!(json["tracks"][0].get("title").is_none());

    let back: Playlist = serde_json::from_value(json).unwrap();
    assert_eq!(back, playlist);
}
