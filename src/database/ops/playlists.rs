//! Playlist CRUD operations

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, get, insert, lookup, update};
use crate::database::error::{StoreError, StoreResult};
use crate::database::table::{Index, Key, Table};
use crate::database::{NewPlaylist, Playlist};

/// Create a new playlist
pub async fn create_playlist(pool: &Pool<Sqlite>, playlist: NewPlaylist) -> StoreResult<i64> {
    let mut songs = Vec::with_capacity(playlist.songs.len());
    for id in playlist.songs {
        if !songs.contains(&id) {
            songs.push(id);
        }
    }

    let record = Playlist {
        id: 0,
        user_id: playlist.user_id,
        name: playlist.name,
        description: playlist.description,
        songs,
        is_public: playlist.is_public,
        created_at: current_timestamp(),
    };
    insert(pool, &record).await
}

pub async fn get_playlist(pool: &Pool<Sqlite>, id: i64) -> StoreResult<Option<Playlist>> {
    get(pool, id).await
}

pub async fn get_playlists_by_user(pool: &Pool<Sqlite>, user_id: i64) -> StoreResult<Vec<Playlist>> {
    lookup(pool, Index::PlaylistOwner, Key::Int(user_id)).await
}

async fn require_playlist(pool: &Pool<Sqlite>, id: i64) -> StoreResult<Playlist> {
    get_playlist(pool, id).await?.ok_or(StoreError::NotFound {
        table: Table::Playlists,
        id,
    })
}

/// Append a song; already-present songs are left where they are
pub async fn add_song_to_playlist(pool: &Pool<Sqlite>, playlist_id: i64, song_id: i64) -> StoreResult<()> {
    let mut playlist = require_playlist(pool, playlist_id).await?;
    if playlist.songs.contains(&song_id) {
        return Ok(());
    }
    playlist.songs.push(song_id);
    update(pool, &playlist).await
}

pub async fn remove_song_from_playlist(
    pool: &Pool<Sqlite>,
    playlist_id: i64,
    song_id: i64,
) -> StoreResult<()> {
    let mut playlist = require_playlist(pool, playlist_id).await?;
    playlist.songs.retain(|id| *id != song_id);
    update(pool, &playlist).await
}
