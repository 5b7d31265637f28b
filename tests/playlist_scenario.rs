use gradebook_playlist::model::{Playlist, PlaylistError, Song};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Seven distinct songs, as used by the demo
fn sample_songs() -> Vec<Song> {
    vec![
        Song::new("Bohemian Rhapsody", "Queen", 354, "Rock"),
        Song::new("Shape of You", "Ed Sheeran", 234, "Pop"),
        Song::new("Blinding Lights", "The Weeknd", 200, "Synthwave"),
        Song::new("Take Five", "Dave Brubeck", 324, "Jazz"),
        Song::new("Hotel California", "Eagles", 391, "Rock"),
        Song::new("Perfect", "Ed Sheeran", 263, "Pop"),
        Song::new("Yesterday", "The Beatles", 125, "Rock"),
    ]
}

fn create_test_playlist() -> Playlist {
    let mut playlist = Playlist::new("Favorites");
    for song in sample_songs() {
        playlist.add_song(song).unwrap();
    }
    playlist
}

#[test]
fn test_end_to_end_scenario() {
    let mut playlist = create_test_playlist();
    assert_eq!(playlist.song_count(), 7);

    let first = sample_songs().remove(0);
    assert!(matches!(
        playlist.add_song(first),
        Err(PlaylistError::AlreadyExists { .. })
    ));
    assert_eq!(playlist.song_count(), 7);

    assert!(playlist.remove_song_by_name("Take Five", "Dave Brubeck"));
    assert_eq!(playlist.song_count(), 6);

    assert!(!playlist.remove_song_by_name("Take Six", "Dave Brubeck"));
    assert_eq!(playlist.song_count(), 6);
}

#[test]
fn test_total_duration_of_full_playlist() {
    let playlist = create_test_playlist();
    assert_eq!(playlist.total_duration(), 1891);
    assert_eq!(playlist.formatted_total_duration(), "31:31");
}

#[test]
fn test_exact_and_case_insensitive_matching_differ() {
    let mut playlist = create_test_playlist();

    // Adding with different case is a new song...
    assert!(playlist
        .add_song(Song::new("perfect", "ED SHEERAN", 263, "Pop"))
        .is_ok());
    assert_eq!(playlist.song_count(), 8);

    // ...but search and named removal see both
    assert_eq!(playlist.find_songs_by_artist("ed sheeran").len(), 3);

    // Identity removal only takes the exact match
    assert!(playlist.remove_song(&Song::new("perfect", "ED SHEERAN", 0, "")));
    assert_eq!(playlist.find_songs_by_artist("Ed Sheeran").len(), 2);
    assert!(!playlist.remove_song(&Song::new("perfect", "ED SHEERAN", 0, "")));

    // Named removal takes the first case-insensitive match
    assert!(playlist.remove_song_by_name("PERFECT", "ed sheeran"));
    let remaining = playlist.find_songs_by_artist("Ed Sheeran");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Shape of You");
}

#[test]
fn test_returned_songs_are_copies() {
    let playlist = create_test_playlist();

    let mut found = playlist.find_songs_by_artist("Queen");
    found[0].title = "Changed".to_string();
    found.clear();

    let mut copy = playlist.songs().to_vec();
    copy.truncate(1);

    assert_eq!(playlist.songs()[0].title, "Bohemian Rhapsody");
    assert_eq!(playlist.song_count(), 7);
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let mut a = create_test_playlist();
    let mut b = create_test_playlist();

    a.shuffle_with(&mut StdRng::seed_from_u64(42));
    b.shuffle_with(&mut StdRng::seed_from_u64(42));

    let titles_a: Vec<&str> = a.songs().iter().map(|s| s.title.as_str()).collect();
    let titles_b: Vec<&str> = b.songs().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles_a, titles_b);
}

#[test]
fn test_shuffle_preserves_songs() {
    let mut playlist = create_test_playlist();
    playlist.shuffle();

    assert_eq!(playlist.song_count(), 7);
    for song in sample_songs() {
        assert!(playlist.songs().contains(&song));
    }
    assert_eq!(playlist.total_duration(), 1891);
}

#[test]
fn test_shuffle_has_no_positional_bias() {
    const TRIALS: usize = 7000;
    let mut rng = StdRng::seed_from_u64(2024);
    let base = create_test_playlist();

    // first_song_positions[p] = how often the original first song landed at p
    let mut first_song_positions = [0usize; 7];
    let mut leaders: HashMap<String, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut playlist = base.clone();
        playlist.shuffle_with(&mut rng);

        let pos = playlist
            .songs()
            .iter()
            .position(|s| s.title == "Bohemian Rhapsody")
            .unwrap();
        first_song_positions[pos] += 1;
        *leaders.entry(playlist.songs()[0].title.clone()).or_default() += 1;
    }

    // Expected 1000 per bucket, standard deviation about 29
    for count in first_song_positions {
        assert!((800..=1200).contains(&count), "biased position count: {}", count);
    }
    assert_eq!(leaders.len(), 7);
    for count in leaders.values() {
        assert!((800..=1200).contains(count), "biased leader count: {}", count);
    }
}

#[test]
fn test_export_after_removal() {
    let mut playlist = create_test_playlist();
    playlist.set_name("Trimmed");
    assert!(playlist.remove_song(&Song::new("Bohemian Rhapsody", "Queen", 0, "")));

    let export = playlist.export();
    let mut lines = export.lines();
    assert_eq!(lines.next(), Some("Playlist: Trimmed"));
    assert_eq!(lines.next(), Some("Total Duration: 25:37"));
    assert_eq!(lines.next(), Some("Songs:"));
    assert_eq!(lines.next(), Some("- Shape of You | Ed Sheeran | 03:54 | Pop"));
    assert_eq!(lines.count(), 5);
}

#[test]
fn test_playlist_serializes_to_json() {
    let playlist = create_test_playlist();
    let value = serde_json::to_value(&playlist).unwrap();

    assert_eq!(value["name"], "Favorites");
    assert_eq!(value["songs"].as_array().unwrap().len(), 7);
    assert_eq!(value["songs"][0]["duration"], 354);

    let song: Song = serde_json::from_value(value["songs"][1].clone()).unwrap();
    assert_eq!(song, Song::new("Shape of You", "Ed Sheeran", 234, "Pop"));
}
