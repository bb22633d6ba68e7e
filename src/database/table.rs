//! Table catalog: the seven entity tables, their secondary indexes,
//! and the `Entity` trait that lets generic CRUD work on any of them.

use std::fmt;

use sqlx::Sqlite;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

pub(crate) type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// One logical table per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Songs,
    Reviews,
    Threads,
    Replies,
    Favorites,
    Playlists,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::Users,
        Table::Songs,
        Table::Reviews,
        Table::Threads,
        Table::Replies,
        Table::Favorites,
        Table::Playlists,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Songs => "songs",
            Table::Reviews => "reviews",
            Table::Threads => "threads",
            Table::Replies => "replies",
            Table::Favorites => "favorites",
            Table::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named secondary indexes created by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    UserUsername,
    UserEmail,
    SongOwner,
    SongGenre,
    SongTitle,
    ReviewSong,
    ReviewUser,
    ThreadSong,
    ThreadUser,
    ReplyThread,
    ReplyUser,
    PlaylistOwner,
    FavoriteUser,
    FavoriteSong,
    /// Composite (user, song) key, unique
    FavoriteUserSong,
}

impl Index {
    pub const ALL: [Index; 15] = [
        Index::UserUsername,
        Index::UserEmail,
        Index::SongOwner,
        Index::SongGenre,
        Index::SongTitle,
        Index::ReviewSong,
        Index::ReviewUser,
        Index::ThreadSong,
        Index::ThreadUser,
        Index::ReplyThread,
        Index::ReplyUser,
        Index::PlaylistOwner,
        Index::FavoriteUser,
        Index::FavoriteSong,
        Index::FavoriteUserSong,
    ];

    /// Name of the SQLite index
    pub fn name(&self) -> &'static str {
        match self {
            Index::UserUsername => "idx_users_username",
            Index::UserEmail => "idx_users_email",
            Index::SongOwner => "idx_songs_user",
            Index::SongGenre => "idx_songs_genre",
            Index::SongTitle => "idx_songs_title",
            Index::ReviewSong => "idx_reviews_song",
            Index::ReviewUser => "idx_reviews_user",
            Index::ThreadSong => "idx_threads_song",
            Index::ThreadUser => "idx_threads_user",
            Index::ReplyThread => "idx_replies_thread",
            Index::ReplyUser => "idx_replies_user",
            Index::PlaylistOwner => "idx_playlists_user",
            Index::FavoriteUser => "idx_favorites_user",
            Index::FavoriteSong => "idx_favorites_song",
            Index::FavoriteUserSong => "idx_favorites_user_song",
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(
            self,
            Index::UserUsername | Index::UserEmail | Index::FavoriteUserSong
        )
    }

    pub(crate) fn create_sql(&self) -> String {
        format!(
            "CREATE {}INDEX IF NOT EXISTS {} ON {}({})",
            if self.is_unique() { "UNIQUE " } else { "" },
            self.name(),
            self.table().name(),
            self.columns().join(", ")
        )
    }

    pub fn table(&self) -> Table {
        match self {
            Index::UserUsername | Index::UserEmail => Table::Users,
            Index::SongOwner | Index::SongGenre | Index::SongTitle => Table::Songs,
            Index::ReviewSong | Index::ReviewUser => Table::Reviews,
            Index::ThreadSong | Index::ThreadUser => Table::Threads,
            Index::ReplyThread | Index::ReplyUser => Table::Replies,
            Index::PlaylistOwner => Table::Playlists,
            Index::FavoriteUser | Index::FavoriteSong | Index::FavoriteUserSong => {
                Table::Favorites
            }
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Index::UserUsername => &["username"],
            Index::UserEmail => &["email"],
            Index::SongOwner => &["user_id"],
            Index::SongGenre => &["genre"],
            Index::SongTitle => &["title"],
            Index::ReviewSong => &["song_id"],
            Index::ReviewUser => &["user_id"],
            Index::ThreadSong => &["song_id"],
            Index::ThreadUser => &["user_id"],
            Index::ReplyThread => &["thread_id"],
            Index::ReplyUser => &["user_id"],
            Index::PlaylistOwner => &["user_id"],
            Index::FavoriteUser => &["user_id"],
            Index::FavoriteSong => &["song_id"],
            Index::FavoriteUserSong => &["user_id", "song_id"],
        }
    }
}

/// Lookup key for an `Index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Int(i64),
    Text(String),
    Pair(i64, i64),
}

impl Key {
    pub(crate) fn into_values(self) -> Vec<SqlValue> {
        match self {
            Key::Int(v) => vec![SqlValue::Int(v)],
            Key::Text(v) => vec![SqlValue::Text(v)],
            Key::Pair(a, b) => vec![SqlValue::Int(a), SqlValue::Int(b)],
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

/// A column value as it is bound into a statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Bool(bool),
    Text(String),
    OptText(Option<String>),
}

impl SqlValue {
    pub(crate) fn bind_to(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        match self {
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::OptText(v) => query.bind(v),
        }
    }
}

/// A record stored in one of the entity tables.
///
/// `COLUMNS` lists every column except `id`, in the same order as `values()`.
pub trait Entity: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: Table;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn values(&self) -> Vec<SqlValue>;
}
