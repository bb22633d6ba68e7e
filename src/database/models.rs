//! Database models for persistent storage
//! These models map directly to SQLite tables

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::table::{Entity, SqlValue, Table};

/// Registered account
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Stored and compared verbatim; demo data only
    pub password: String,
    /// Registration timestamp
    pub joined_at: i64,
    pub is_admin: bool,
    /// Uppercase first character of the username
    pub avatar: String,
}

/// Song entry linked to an externally hosted video
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    /// "Unknown" when none was given
    pub album: String,
    pub genre: String,
    /// Video URL as entered by the uploader
    pub video_url: String,
    /// Derived once from `video_url` at creation time
    pub video_id: Option<String>,
    /// Uploader
    pub user_id: i64,
    /// Uploader display name (denormalized)
    pub user_name: String,
    pub downloads: i64,
    pub plays: i64,
    /// Created timestamp
    pub added_at: i64,
    /// Thumbnail URL derived from `video_id`
    pub thumbnail: Option<String>,
}

/// Moderation state of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    #[default]
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rating and comment left on a song
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub song_id: i64,
    pub user_id: i64,
    pub user_name: String,
    /// 1 to 5 stars
    pub rating: i64,
    pub comment: String,
    pub created_at: i64,
    pub likes: i64,
    pub status: ReviewStatus,
}

/// Discussion thread attached to a song
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub song_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub likes: i64,
    /// Denormalized, bumped by each reply
    pub reply_count: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub thread_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub content: String,
    pub created_at: i64,
    pub likes: i64,
}

/// One (user, song) favorite mark
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub song_id: i64,
    pub created_at: i64,
}

/// User playlist with an ordered list of song ids
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    /// Owner
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Song ids in play order, no duplicates
    #[sqlx(json)]
    pub songs: Vec<i64>,
    pub is_public: bool,
    pub created_at: i64,
}

// ============ Input structs for creating new records ============

/// Input for registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Input for adding a song
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: String,
    pub video_url: String,
    pub user_id: i64,
    pub user_name: String,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub song_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i64,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct NewThread {
    pub song_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub thread_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewPlaylist {
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub songs: Vec<i64>,
    pub is_public: bool,
}

// ============ Entity bindings ============

impl Entity for User {
    const TABLE: Table = Table::Users;
    const COLUMNS: &'static [&'static str] = &[
        "username", "email", "password", "joined_at", "is_admin", "avatar",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.username.clone()),
            SqlValue::Text(self.email.clone()),
            SqlValue::Text(self.password.clone()),
            SqlValue::Int(self.joined_at),
            SqlValue::Bool(self.is_admin),
            SqlValue::Text(self.avatar.clone()),
        ]
    }
}

impl Entity for Song {
    const TABLE: Table = Table::Songs;
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "artist",
        "album",
        "genre",
        "video_url",
        "video_id",
        "user_id",
        "user_name",
        "downloads",
        "plays",
        "added_at",
        "thumbnail",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.title.clone()),
            SqlValue::Text(self.artist.clone()),
            SqlValue::Text(self.album.clone()),
            SqlValue::Text(self.genre.clone()),
            SqlValue::Text(self.video_url.clone()),
            SqlValue::OptText(self.video_id.clone()),
            SqlValue::Int(self.user_id),
            SqlValue::Text(self.user_name.clone()),
            SqlValue::Int(self.downloads),
            SqlValue::Int(self.plays),
            SqlValue::Int(self.added_at),
            SqlValue::OptText(self.thumbnail.clone()),
        ]
    }
}

impl Entity for Review {
    const TABLE: Table = Table::Reviews;
    const COLUMNS: &'static [&'static str] = &[
        "song_id",
        "user_id",
        "user_name",
        "rating",
        "comment",
        "created_at",
        "likes",
        "status",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.song_id),
            SqlValue::Int(self.user_id),
            SqlValue::Text(self.user_name.clone()),
            SqlValue::Int(self.rating),
            SqlValue::Text(self.comment.clone()),
            SqlValue::Int(self.created_at),
            SqlValue::Int(self.likes),
            SqlValue::Text(self.status.as_str().to_string()),
        ]
    }
}

impl Entity for Thread {
    const TABLE: Table = Table::Threads;
    const COLUMNS: &'static [&'static str] = &[
        "song_id",
        "user_id",
        "user_name",
        "title",
        "content",
        "created_at",
        "likes",
        "reply_count",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.song_id),
            SqlValue::Int(self.user_id),
            SqlValue::Text(self.user_name.clone()),
            SqlValue::Text(self.title.clone()),
            SqlValue::Text(self.content.clone()),
            SqlValue::Int(self.created_at),
            SqlValue::Int(self.likes),
            SqlValue::Int(self.reply_count),
        ]
    }
}

impl Entity for Reply {
    const TABLE: Table = Table::Replies;
    const COLUMNS: &'static [&'static str] = &[
        "thread_id",
        "user_id",
        "user_name",
        "content",
        "created_at",
        "likes",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.thread_id),
            SqlValue::Int(self.user_id),
            SqlValue::Text(self.user_name.clone()),
            SqlValue::Text(self.content.clone()),
            SqlValue::Int(self.created_at),
            SqlValue::Int(self.likes),
        ]
    }
}

impl Entity for Favorite {
    const TABLE: Table = Table::Favorites;
    const COLUMNS: &'static [&'static str] = &["user_id", "song_id", "created_at"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Int(self.user_id),
            SqlValue::Int(self.song_id),
            SqlValue::Int(self.created_at),
        ]
    }
}

impl Entity for Playlist {
    const TABLE: Table = Table::Playlists;
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "name",
        "description",
        "songs",
        "is_public",
        "created_at",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        // Vec<i64> always serializes
        let songs = serde_json::to_string(&self.songs).unwrap_or_else(|_| "[]".to_string());
        vec![
            SqlValue::Int(self.user_id),
            SqlValue::Text(self.name.clone()),
            SqlValue::OptText(self.description.clone()),
            SqlValue::Text(songs),
            SqlValue::Bool(self.is_public),
            SqlValue::Int(self.created_at),
        ]
    }
}
