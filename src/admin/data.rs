//! Mock records of the admin panel

use serde::{Deserialize, Serialize};

/// Signed-in administrator, kept as the admin session snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: i64,
    pub username: String,
    pub role: String,
    /// RFC 3339 login time
    pub login_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub songs: u32,
    pub reviews: u32,
    pub joined: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSong {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub user_id: i64,
    pub user_name: String,
    pub downloads: u64,
    /// Whole stars, 0 to 5
    pub rating: u8,
}

/// Moderation state of a mock review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Approved,
    Pending,
    Flagged,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Approved => "approved",
            ModerationStatus::Pending => "pending",
            ModerationStatus::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReview {
    pub id: i64,
    pub song_id: i64,
    pub song_title: String,
    pub user: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub status: ModerationStatus,
}

fn user(id: i64, username: &str, email: &str, songs: u32, reviews: u32, joined: &str) -> AdminUser {
    AdminUser {
        id,
        username: username.to_string(),
        email: email.to_string(),
        songs,
        reviews,
        joined: joined.to_string(),
        status: "active".to_string(),
    }
}

pub fn mock_users() -> Vec<AdminUser> {
    vec![
        user(1, "MusicLover", "music@example.com", 4, 5, "2024-01-10"),
        user(2, "PopMaster", "pop@example.com", 1, 2, "2024-01-12"),
        user(3, "GrungeKid", "grunge@example.com", 1, 1, "2024-01-14"),
        user(4, "PeaceLover", "peace@example.com", 1, 0, "2024-01-05"),
    ]
}

pub fn mock_songs() -> Vec<AdminSong> {
    vec![
        AdminSong {
            id: 1,
            title: "Bohemian Rhapsody".to_string(),
            artist: "Queen".to_string(),
            genre: "Rock".to_string(),
            user_id: 1,
            user_name: "MusicLover".to_string(),
            downloads: 1523,
            rating: 5,
        },
        AdminSong {
            id: 2,
            title: "Billie Jean".to_string(),
            artist: "Michael Jackson".to_string(),
            genre: "Pop".to_string(),
            user_id: 2,
            user_name: "PopMaster".to_string(),
            downloads: 2145,
            rating: 5,
        },
    ]
}

pub fn mock_reviews() -> Vec<AdminReview> {
    let review = |id, song_id, song_title: &str, user: &str, rating, comment: &str, date: &str, status| {
        AdminReview {
            id,
            song_id,
            song_title: song_title.to_string(),
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            date: date.to_string(),
            status,
        }
    };
    vec![
        review(
            1,
            1,
            "Bohemian Rhapsody",
            "RockFan",
            5,
            "Absolute masterpiece! This song never gets old.",
            "2024-01-15",
            ModerationStatus::Approved,
        ),
        review(
            2,
            2,
            "Billie Jean",
            "PopLover",
            5,
            "The King of Pop at his best!",
            "2024-01-16",
            ModerationStatus::Pending,
        ),
        review(
            3,
            1,
            "Bohemian Rhapsody",
            "MusicCritic",
            4,
            "Great song but a bit overrated",
            "2024-01-17",
            ModerationStatus::Flagged,
        ),
    ]
}

/// Canned dashboard activity: (kind, text, when)
pub const ACTIVITY_FEED: [(&str, &str, &str); 4] = [
    ("user", "New user registered: GrungeKid", "2 hours ago"),
    ("song", "New song added: \"Smells Like Teen Spirit\"", "3 hours ago"),
    ("review", "New review on \"Bohemian Rhapsody\"", "5 hours ago"),
    ("download", "50+ downloads today", "6 hours ago"),
];
