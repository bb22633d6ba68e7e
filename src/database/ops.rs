//! Database operations organized by entity type

mod favorites;
mod playlists;
mod records;
mod reviews;
mod seed;
mod songs;
mod threads;
mod users;

pub use favorites::*;
pub use playlists::*;
pub use records::*;
pub use reviews::*;
pub use seed::*;
pub use songs::*;
pub use threads::*;
pub use users::*;

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
