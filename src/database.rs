//! Database module for persistent storage
//! Uses SQLite via sqlx for users, songs, reviews, threads, favorites and playlists

mod error;
mod models;
mod ops;
mod repository;
mod schema;
mod table;

pub use error::StoreError;
pub use models::*;
pub use ops::{MAX_RATING, MIN_RATING, average_rating};
pub use repository::Database;
pub use table::Table;
