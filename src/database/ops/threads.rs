//! Discussion thread and reply operations

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, get, get_all, insert, lookup};
use crate::database::error::{StoreError, StoreResult};
use crate::database::table::{Index, Key, Table};
use crate::database::{NewReply, NewThread, Reply, Thread};

pub async fn create_thread(pool: &Pool<Sqlite>, thread: NewThread) -> StoreResult<i64> {
    let record = Thread {
        id: 0,
        song_id: thread.song_id,
        user_id: thread.user_id,
        user_name: thread.user_name,
        title: thread.title,
        content: thread.content,
        created_at: current_timestamp(),
        likes: 0,
        reply_count: 0,
    };
    insert(pool, &record).await
}

pub async fn get_thread(pool: &Pool<Sqlite>, id: i64) -> StoreResult<Option<Thread>> {
    get(pool, id).await
}

pub async fn get_threads_by_song(pool: &Pool<Sqlite>, song_id: i64) -> StoreResult<Vec<Thread>> {
    lookup(pool, Index::ThreadSong, Key::Int(song_id)).await
}

pub async fn get_all_threads(pool: &Pool<Sqlite>) -> StoreResult<Vec<Thread>> {
    get_all(pool).await
}

/// Insert a reply and bump the parent's `reply_count` in one transaction.
///
/// A missing parent thread fails with `NotFound` and nothing is written.
pub async fn create_reply(pool: &Pool<Sqlite>, reply: NewReply) -> StoreResult<i64> {
    let mut tx = pool.begin().await?;

    let record = Reply {
        id: 0,
        thread_id: reply.thread_id,
        user_id: reply.user_id,
        user_name: reply.user_name,
        content: reply.content,
        created_at: current_timestamp(),
        likes: 0,
    };
    let reply_id = insert(&mut *tx, &record).await?;

    let bumped = sqlx::query("UPDATE threads SET reply_count = reply_count + 1 WHERE id = ?")
        .bind(record.thread_id)
        .execute(&mut *tx)
        .await?;

    if bumped.rows_affected() == 0 {
        // Dropping the transaction rolls the reply back
        tracing::warn!("Reply to missing thread {} discarded", record.thread_id);
        return Err(StoreError::NotFound {
            table: Table::Threads,
            id: record.thread_id,
        });
    }

    tx.commit().await?;
    Ok(reply_id)
}

pub async fn get_replies_by_thread(pool: &Pool<Sqlite>, thread_id: i64) -> StoreResult<Vec<Reply>> {
    lookup(pool, Index::ReplyThread, Key::Int(thread_id)).await
}
