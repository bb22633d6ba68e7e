//! Favorite marks, one per (user, song) pair

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, delete, insert, lookup};
use crate::database::error::StoreResult;
use crate::database::table::{Index, Key, Table};
use crate::database::Favorite;

/// Flip the favorite mark inside one transaction, returns the new state
pub async fn try_toggle_favorite(pool: &Pool<Sqlite>, user_id: i64, song_id: i64) -> StoreResult<bool> {
    let mut tx = pool.begin().await?;

    let existing: Vec<Favorite> =
        lookup(&mut *tx, Index::FavoriteUserSong, Key::Pair(user_id, song_id)).await?;

    let is_favorite = match existing.first() {
        Some(favorite) => {
            delete(&mut *tx, Table::Favorites, favorite.id).await?;
            false
        }
        None => {
            let record = Favorite {
                id: 0,
                user_id,
                song_id,
                created_at: current_timestamp(),
            };
            insert(&mut *tx, &record).await?;
            true
        }
    };

    tx.commit().await?;
    Ok(is_favorite)
}

/// Flip the favorite mark; storage errors are logged and reported as "not a favorite"
pub async fn toggle_favorite(pool: &Pool<Sqlite>, user_id: i64, song_id: i64) -> bool {
    match try_toggle_favorite(pool, user_id, song_id).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Error toggling favorite ({}, {}): {}", user_id, song_id, e);
            false
        }
    }
}

/// Whether the pair is marked; storage errors read as `false`
pub async fn is_favorite(pool: &Pool<Sqlite>, user_id: i64, song_id: i64) -> bool {
    let found: StoreResult<Vec<Favorite>> =
        lookup(pool, Index::FavoriteUserSong, Key::Pair(user_id, song_id)).await;
    match found {
        Ok(rows) => !rows.is_empty(),
        Err(e) => {
            tracing::warn!("Favorite lookup failed: {}", e);
            false
        }
    }
}

pub async fn get_favorites_by_user(pool: &Pool<Sqlite>, user_id: i64) -> StoreResult<Vec<Favorite>> {
    lookup(pool, Index::FavoriteUser, Key::Int(user_id)).await
}
