use thiserror::Error;

/// Errors returned by playlist mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("song already exists: {title} - {artist}")]
    AlreadyExists { title: String, artist: String },
}
