//! Music playlist model
//!
//! Songs are identified by their (title, artist) pair. A playlist keeps
//! songs in playback order and refuses exact duplicates.

mod error;
mod playlist;
mod song;

pub use error::PlaylistError;
pub use playlist::Playlist;
pub use song::{format_hours_minutes_seconds, format_minutes_seconds, Song};
