//! Database repository - main entry point
//! Delegates to ops modules for actual operations

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use super::error::{StoreError, StoreResult};
use super::table::{Entity, Index, Key, Table};
use super::{models::*, ops, schema};

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if needed) the database at the given path
    pub async fn open(db_path: &Path) -> StoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(sqlx::Error::Io(e)))?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .map_err(StoreError::Unavailable)?;

        // WAL keeps reads from blocking on the occasional write
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StoreError::Unavailable)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StoreError::Unavailable)?;

        schema::run_migrations(&pool)
            .await
            .map_err(StoreError::Unavailable)?;

        tracing::info!("Database opened at {}", db_path.display());
        Ok(Self { pool })
    }

    /// Private in-memory database with the full schema
    pub async fn in_memory() -> StoreResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(StoreError::Unavailable)?;

        // A single long-lived connection, every new one would see an empty database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        schema::run_migrations(&pool)
            .await
            .map_err(StoreError::Unavailable)?;

        Ok(Self { pool })
    }

    /// Close every pooled connection; later operations fail
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ============ Generic Operations ============

    pub async fn insert<E: Entity>(&self, record: &E) -> StoreResult<i64> {
        ops::insert(&self.pool, record).await
    }

    pub async fn get<E: Entity>(&self, id: i64) -> StoreResult<Option<E>> {
        ops::get(&self.pool, id).await
    }

    pub async fn get_all<E: Entity>(&self) -> StoreResult<Vec<E>> {
        ops::get_all(&self.pool).await
    }

    pub async fn update<E: Entity>(&self, record: &E) -> StoreResult<()> {
        ops::update(&self.pool, record).await
    }

    pub async fn delete(&self, table: Table, id: i64) -> StoreResult<()> {
        ops::delete(&self.pool, table, id).await
    }

    pub async fn lookup<E: Entity>(&self, index: Index, key: Key) -> StoreResult<Vec<E>> {
        ops::lookup(&self.pool, index, key).await
    }

    pub async fn count(&self, table: Table) -> StoreResult<i64> {
        ops::count(&self.pool, table).await
    }

    pub async fn seed_once(&self) -> StoreResult<bool> {
        ops::seed_once(&self.pool).await
    }

    pub async fn wipe_all(&self) -> StoreResult<()> {
        ops::wipe_all(&self.pool).await
    }

    // ============ User Operations ============

    pub async fn create_user(&self, user: NewUser) -> StoreResult<i64> {
        ops::create_user(&self.pool, user).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        ops::get_user_by_username(&self.pool, username).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        ops::get_user_by_email(&self.pool, email).await
    }

    pub async fn get_all_users(&self) -> StoreResult<Vec<User>> {
        ops::get_all_users(&self.pool).await
    }

    // ============ Song Operations ============

    pub async fn create_song(&self, song: NewSong) -> StoreResult<i64> {
        ops::create_song(&self.pool, song).await
    }

    pub async fn get_song(&self, id: i64) -> StoreResult<Option<Song>> {
        ops::get_song(&self.pool, id).await
    }

    pub async fn get_all_songs(&self) -> StoreResult<Vec<Song>> {
        ops::get_all_songs(&self.pool).await
    }

    pub async fn get_songs_by_user(&self, user_id: i64) -> StoreResult<Vec<Song>> {
        ops::get_songs_by_user(&self.pool, user_id).await
    }

    pub async fn get_songs_by_genre(&self, genre: &str) -> StoreResult<Vec<Song>> {
        ops::get_songs_by_genre(&self.pool, genre).await
    }

    pub async fn increment_plays(&self, song_id: i64) -> StoreResult<()> {
        ops::increment_plays(&self.pool, song_id).await
    }

    pub async fn increment_downloads(&self, song_id: i64) -> StoreResult<()> {
        ops::increment_downloads(&self.pool, song_id).await
    }

    // ============ Review Operations ============

    pub async fn create_review(&self, review: NewReview) -> StoreResult<i64> {
        ops::create_review(&self.pool, review).await
    }

    pub async fn get_reviews_by_song(&self, song_id: i64) -> StoreResult<Vec<Review>> {
        ops::get_reviews_by_song(&self.pool, song_id).await
    }

    pub async fn get_reviews_by_user(&self, user_id: i64) -> StoreResult<Vec<Review>> {
        ops::get_reviews_by_user(&self.pool, user_id).await
    }

    pub async fn get_all_reviews(&self) -> StoreResult<Vec<Review>> {
        ops::get_all_reviews(&self.pool).await
    }

    pub async fn average_song_rating(&self, song_id: i64) -> StoreResult<f64> {
        ops::average_song_rating(&self.pool, song_id).await
    }

    pub async fn set_review_status(&self, review_id: i64, status: ReviewStatus) -> StoreResult<()> {
        ops::set_review_status(&self.pool, review_id, status).await
    }

    // ============ Thread Operations ============

    pub async fn create_thread(&self, thread: NewThread) -> StoreResult<i64> {
        ops::create_thread(&self.pool, thread).await
    }

    pub async fn get_thread(&self, id: i64) -> StoreResult<Option<Thread>> {
        ops::get_thread(&self.pool, id).await
    }

    pub async fn get_threads_by_song(&self, song_id: i64) -> StoreResult<Vec<Thread>> {
        ops::get_threads_by_song(&self.pool, song_id).await
    }

    pub async fn get_all_threads(&self) -> StoreResult<Vec<Thread>> {
        ops::get_all_threads(&self.pool).await
    }

    pub async fn create_reply(&self, reply: NewReply) -> StoreResult<i64> {
        ops::create_reply(&self.pool, reply).await
    }

    pub async fn get_replies_by_thread(&self, thread_id: i64) -> StoreResult<Vec<Reply>> {
        ops::get_replies_by_thread(&self.pool, thread_id).await
    }

    // ============ Favorite Operations ============

    pub async fn toggle_favorite(&self, user_id: i64, song_id: i64) -> bool {
        ops::toggle_favorite(&self.pool, user_id, song_id).await
    }

    pub async fn is_favorite(&self, user_id: i64, song_id: i64) -> bool {
        ops::is_favorite(&self.pool, user_id, song_id).await
    }

    pub async fn get_favorites_by_user(&self, user_id: i64) -> StoreResult<Vec<Favorite>> {
        ops::get_favorites_by_user(&self.pool, user_id).await
    }

    // ============ Playlist Operations ============

    pub async fn create_playlist(&self, playlist: NewPlaylist) -> StoreResult<i64> {
        ops::create_playlist(&self.pool, playlist).await
    }

    pub async fn get_playlist(&self, id: i64) -> StoreResult<Option<Playlist>> {
        ops::get_playlist(&self.pool, id).await
    }

    pub async fn get_playlists_by_user(&self, user_id: i64) -> StoreResult<Vec<Playlist>> {
        ops::get_playlists_by_user(&self.pool, user_id).await
    }

    pub async fn add_song_to_playlist(&self, playlist_id: i64, song_id: i64) -> StoreResult<()> {
        ops::add_song_to_playlist(&self.pool, playlist_id, song_id).await
    }

    pub async fn remove_song_from_playlist(&self, playlist_id: i64, song_id: i64) -> StoreResult<()> {
        ops::remove_song_from_playlist(&self.pool, playlist_id, song_id).await
    }
}
