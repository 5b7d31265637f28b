//! Grade book and playlist manager
//!
//! Two independent in-memory collections: student grades with summary
//! statistics, and music playlists with duplicate checks, search and shuffle.

pub mod gradebook;
pub mod model;

pub use gradebook::{GradeError, LetterGrade, Student};
pub use model::{Playlist, PlaylistError, Song};
