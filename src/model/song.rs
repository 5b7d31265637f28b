use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single song in a playlist
///
/// Equality and hashing only look at `(title, artist)`, compared exactly.
/// `Playlist::remove_song_by_name` and `Playlist::find_songs_by_artist`
/// compare case-insensitively instead, so `"queen"` is a different song
/// from `"Queen"` when adding but the same artist when searching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds
    pub duration: u32,

    /// Genre label
    pub genre: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: u32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            genre: genre.into(),
        }
    }

    /// Duration as `MM:SS`
    ///
    /// Minutes are not rolled over into hours, a 61 minute song renders as `61:00`.
    pub fn formatted_duration(&self) -> String {
        format_minutes_seconds(u64::from(self.duration))
    }

    /// One-line summary: `Title - Artist (MM:SS) [Genre]`
    pub fn song_info(&self) -> String {
        self.to_string()
    }

    /// Exact (title, artist) match
    pub fn same_identity(&self, other: &Song) -> bool {
        self.title == other.title && self.artist == other.artist
    }

    /// Case-insensitive (title, artist) match
    pub fn matches_name(&self, title: &str, artist: &str) -> bool {
        eq_ignore_case(&self.title, title) && eq_ignore_case(&self.artist, artist)
    }

    /// Case-insensitive artist match
    pub fn is_by(&self, artist: &str) -> bool {
        eq_ignore_case(&self.artist, artist)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{}]",
            self.title,
            self.artist,
            self.formatted_duration(),
            self.genre
        )
    }
}

/// Render seconds as zero-padded `MM:SS`
pub fn format_minutes_seconds(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render seconds as `HH:MM:SS`, or `MM:SS` when under an hour
pub fn format_hours_minutes_seconds(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
