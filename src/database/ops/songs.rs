//! Song CRUD operations

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, get, get_all, insert, lookup};
use crate::database::error::{StoreError, StoreResult};
use crate::database::table::{Index, Key};
use crate::database::{NewSong, Song};
use crate::features::video::{extract_video_id, thumbnail_url};

/// Album name used when the uploader left it blank
pub const UNKNOWN_ALBUM: &str = "Unknown";

/// Build a song record: derives the video id and thumbnail once, defaults the album
pub fn song_from_input(song: NewSong, now: i64) -> Song {
    let video_id = extract_video_id(&song.video_url);
    let thumbnail = video_id.as_deref().map(thumbnail_url);
    let album = song
        .album
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

    Song {
        id: 0,
        title: song.title,
        artist: song.artist,
        album,
        genre: song.genre,
        video_url: song.video_url,
        video_id,
        user_id: song.user_id,
        user_name: song.user_name,
        downloads: 0,
        plays: 0,
        added_at: now,
        thumbnail,
    }
}

/// Insert a new song, returns the new song id
pub async fn create_song(pool: &Pool<Sqlite>, song: NewSong) -> StoreResult<i64> {
    validate_new_song(&song)?;
    let record = song_from_input(song, current_timestamp());
    if record.video_id.is_none() {
        tracing::warn!(
            "Song '{}' has no recognizable video id: {}",
            record.title,
            record.video_url
        );
    }
    let id = insert(pool, &record).await?;
    tracing::debug!("Created song {} ({})", id, record.title);
    Ok(id)
}

pub async fn get_song(pool: &Pool<Sqlite>, id: i64) -> StoreResult<Option<Song>> {
    get(pool, id).await
}

/// Get all songs in insertion order
pub async fn get_all_songs(pool: &Pool<Sqlite>) -> StoreResult<Vec<Song>> {
    get_all(pool).await
}

pub async fn get_songs_by_user(pool: &Pool<Sqlite>, user_id: i64) -> StoreResult<Vec<Song>> {
    lookup(pool, Index::SongOwner, Key::Int(user_id)).await
}

pub async fn get_songs_by_genre(pool: &Pool<Sqlite>, genre: &str) -> StoreResult<Vec<Song>> {
    lookup(pool, Index::SongGenre, Key::from(genre)).await
}

/// Which counter to bump on a song
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongCounter {
    Plays,
    Downloads,
}

impl SongCounter {
    fn column(&self) -> &'static str {
        match self {
            SongCounter::Plays => "plays",
            SongCounter::Downloads => "downloads",
        }
    }
}

/// Increment a counter; a missing song is silently skipped
pub async fn increment_counter(
    pool: &Pool<Sqlite>,
    song_id: i64,
    counter: SongCounter,
) -> StoreResult<()> {
    let column = counter.column();
    let sql = format!("UPDATE songs SET {column} = {column} + 1 WHERE id = ?");
    let result = sqlx::query(&sql).bind(song_id).execute(pool).await?;
    if result.rows_affected() == 0 {
        tracing::debug!("increment {} skipped, no song {}", column, song_id);
    }
    Ok(())
}

pub async fn increment_plays(pool: &Pool<Sqlite>, song_id: i64) -> StoreResult<()> {
    increment_counter(pool, song_id, SongCounter::Plays).await
}

pub async fn increment_downloads(pool: &Pool<Sqlite>, song_id: i64) -> StoreResult<()> {
    increment_counter(pool, song_id, SongCounter::Downloads).await
}

/// Reject song input missing a required field
pub fn validate_new_song(song: &NewSong) -> StoreResult<()> {
    for (field, value) in [
        ("title", &song.title),
        ("artist", &song.artist),
        ("genre", &song.genre),
        ("video url", &song.video_url),
    ] {
        if value.trim().is_empty() {
            return Err(StoreError::Invalid(format!("{field} is required")));
        }
    }
    Ok(())
}
