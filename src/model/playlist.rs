use super::error::PlaylistError;
use super::song::{format_hours_minutes_seconds, Song};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt::Write;

const SEPARATOR: &str = "========================================";

/// Represents a playlist
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    /// Playlist name
    name: String,

    /// Songs in playback order, unique by (title, artist)
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Songs in current playlist order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Append a song unless one with the same exact (title, artist) is present
    pub fn add_song(&mut self, song: Song) -> Result<(), PlaylistError> {
        if self.songs.contains(&song) {
            log::warn!(
                "Rejected duplicate song in '{}': {} - {}",
                self.name,
                song.title,
                song.artist
            );
            return Err(PlaylistError::AlreadyExists {
                title: song.title,
                artist: song.artist,
            });
        }

        log::debug!("Added to '{}': {}", self.name, song);
        self.songs.push(song);
        Ok(())
    }

    /// Remove the first song with the same exact (title, artist)
    pub fn remove_song(&mut self, song: &Song) -> bool {
        match self.songs.iter().position(|s| s == song) {
            Some(index) => {
                let removed = self.songs.remove(index);
                log::debug!("Removed from '{}': {}", self.name, removed);
                true
            }
            None => false,
        }
    }

    /// Remove the first song matching title and artist, ignoring case
    pub fn remove_song_by_name(&mut self, title: &str, artist: &str) -> bool {
        match self.songs.iter().position(|s| s.matches_name(title, artist)) {
            Some(index) => {
                let removed = self.songs.remove(index);
                log::debug!("Removed from '{}': {}", self.name, removed);
                true
            }
            None => {
                log::debug!("No song '{} - {}' in '{}'", title, artist, self.name);
                false
            }
        }
    }

    /// All songs by `artist` (case-insensitive), in playlist order
    pub fn find_songs_by_artist(&self, artist: &str) -> Vec<Song> {
        self.songs
            .iter()
            .filter(|s| s.is_by(artist))
            .cloned()
            .collect()
    }

    /// Shuffle using the thread-local random source
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle using a caller-supplied random source
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.songs.shuffle(rng);
        log::info!("Shuffled '{}' ({} songs)", self.name, self.songs.len());
    }

    /// Total duration in seconds
    pub fn total_duration(&self) -> u64 {
        self.songs.iter().map(|s| u64::from(s.duration)).sum()
    }

    /// Total duration as `HH:MM:SS`, or `MM:SS` under an hour
    pub fn formatted_total_duration(&self) -> String {
        format_hours_minutes_seconds(self.total_duration())
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Human-readable report with a numbered song listing
    pub fn playlist_info(&self) -> String {
        let mut info = String::new();
        let _ = writeln!(info, "PLAYLIST: {}", self.name);
        let _ = writeln!(
            info,
            "Songs: {} | Total duration: {}",
            self.song_count(),
            self.formatted_total_duration()
        );
        let _ = writeln!(info, "{}", SEPARATOR);

        if self.songs.is_empty() {
            let _ = writeln!(info, "Playlist is empty!");
        } else {
            for (i, song) in self.songs.iter().enumerate() {
                let _ = writeln!(info, "{}. {}", i + 1, song);
            }
        }

        info
    }

    /// Pipe-delimited dump of the playlist
    pub fn export(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Playlist: {}", self.name);
        let _ = writeln!(out, "Total Duration: {}", self.formatted_total_duration());
        let _ = writeln!(out, "Songs:");

        for song in &self.songs {
            let _ = writeln!(
                out,
                "- {} | {} | {} | {}",
                song.title,
                song.artist,
                song.formatted_duration(),
                song.genre
            );
        }

        out
    }
}
