//! Database schema migrations

use sqlx::{Pool, Sqlite};

use super::table::Index;

/// Run database migrations to create/update schema
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    // Users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            joined_at INTEGER NOT NULL,
            is_admin INTEGER NOT NULL DEFAULT 0,
            avatar TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Songs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            album TEXT NOT NULL DEFAULT 'Unknown',
            genre TEXT NOT NULL,
            video_url TEXT NOT NULL,
            video_id TEXT,
            user_id INTEGER NOT NULL,
            user_name TEXT NOT NULL,
            downloads INTEGER NOT NULL DEFAULT 0,
            plays INTEGER NOT NULL DEFAULT 0,
            added_at INTEGER NOT NULL,
            thumbnail TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            song_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            user_name TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'approved'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Threads table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS threads (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            song_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            user_name TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0,
            reply_count INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Replies table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS replies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            thread_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            user_name TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Playlists table, song order kept as a JSON array
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            songs TEXT NOT NULL DEFAULT '[]',
            is_public INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Favorites table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            song_id INTEGER NOT NULL,
            created_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    for index in Index::ALL {
        let sql = index.create_sql();
        sqlx::query(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn migrations_are_idempotent_and_create_every_index() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(names.len(), Index::ALL.len());
        for index in Index::ALL {
            assert!(names.iter().any(|n| n == index.name()), "{} missing", index.name());
        }

        // The unique pair index backs the one-favorite-per-song rule
        sqlx::query("INSERT INTO favorites (user_id, song_id, created_at) VALUES (1, 2, 0)")
            .execute(&pool)
            .await
            .unwrap();
        let dup = sqlx::query("INSERT INTO favorites (user_id, song_id, created_at) VALUES (1, 2, 0)")
            .execute(&pool)
            .await;
        assert!(dup.is_err());
    }
}
