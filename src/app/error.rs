//! User-facing action errors

use thiserror::Error;

use crate::database::{MAX_RATING, MIN_RATING, StoreError};
use crate::playback::PlaybackError;

/// Why a user action was refused. `Display` is the alert text.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("The username is already taken")]
    UsernameTaken,
    #[error("The email is already registered")]
    EmailTaken,
    #[error("Incorrect username or password")]
    InvalidCredentials,
    #[error("You need to sign in first")]
    NotLoggedIn,
    #[error("Rating must be between {min} and {max} stars, got {0}", min = MIN_RATING, max = MAX_RATING)]
    InvalidRating(i64),
    #[error("The {0} field is required")]
    MissingField(&'static str),
    #[error("Song {0} does not exist")]
    SongNotFound(i64),
    #[error("Thread {0} does not exist")]
    ThreadNotFound(i64),
    #[error("Playlist {0} does not exist")]
    PlaylistNotFound(i64),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Reject blank input for a required field
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ActionError> {
    if value.trim().is_empty() {
        Err(ActionError::MissingField(field))
    } else {
        Ok(())
    }
}
