//! Admin panel over mock data
//!
//! Nothing here touches `database`: the panel starts from built-in mock
//! records and keeps its edited copies as session snapshots.

mod analytics;
mod data;
mod render;

pub use analytics::{
    ChartKind, ChartSink, Series, TextChart, genre_distribution, user_growth, weekly_downloads,
};
pub use data::{AdminAccount, AdminReview, AdminSong, AdminUser, ModerationStatus};
pub use render::{Dashboard, ReviewsList, SongDetails, SongsTable, UserDetails, UsersTable};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::features::{
    ADMIN_KEY, ADMIN_REVIEWS_KEY, ADMIN_SONGS_KEY, ADMIN_USERS_KEY, SessionStore,
};

/// Demo credentials: username, password, one-time code
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_CODE: &str = "123456";

/// Filter value matching every genre or status
pub const ALL: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Admin sign-in required")]
    NotSignedIn,
}

/// Totals shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub users: usize,
    pub songs: usize,
    pub downloads: u64,
    pub reviews: usize,
}

pub struct AdminPanel {
    session: SessionStore,
    admin: Option<AdminAccount>,
    users: Vec<AdminUser>,
    songs: Vec<AdminSong>,
    reviews: Vec<AdminReview>,
}

impl AdminPanel {
    /// Restore the saved records (mock data when none) and admin session
    pub fn new(session: SessionStore) -> Self {
        let admin = match session.load::<AdminAccount>(ADMIN_KEY) {
            Ok(admin) => admin,
            Err(e) => {
                tracing::warn!("Ignoring unreadable admin session: {}", e);
                None
            }
        };
        Self {
            users: load_or(&session, ADMIN_USERS_KEY, data::mock_users),
            songs: load_or(&session, ADMIN_SONGS_KEY, data::mock_songs),
            reviews: load_or(&session, ADMIN_REVIEWS_KEY, data::mock_reviews),
            session,
            admin,
        }
    }

    fn persist<T: Serialize>(&self, key: &str, records: &T) {
        if let Err(e) = self.session.save(key, records) {
            tracing::warn!("Failed to save admin records '{}': {}", key, e);
        }
    }

    pub fn admin(&self) -> Option<&AdminAccount> {
        self.admin.as_ref()
    }

    pub fn require_admin(&self) -> Result<&AdminAccount, AdminError> {
        self.admin.as_ref().ok_or(AdminError::NotSignedIn)
    }

    pub fn login(&mut self, username: &str, password: &str, code: &str) -> Result<&AdminAccount, AdminError> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD || code != ADMIN_CODE {
            tracing::warn!("Rejected admin login for '{}'", username);
            return Err(AdminError::InvalidCredentials);
        }

        let account = AdminAccount {
            id: 1,
            username: "Administrator".to_string(),
            role: "SUPER ADMIN".to_string(),
            login_time: chrono::Utc::now().to_rfc3339(),
        };
        if let Err(e) = self.session.save(ADMIN_KEY, &account) {
            tracing::warn!("Failed to save admin session: {}", e);
        }
        tracing::info!("Admin signed in");
        Ok(self.admin.insert(account))
    }

    pub fn logout(&mut self) {
        self.admin = None;
        if let Err(e) = self.session.clear(ADMIN_KEY) {
            tracing::warn!("Failed to clear admin session: {}", e);
        }
    }

    // ============ Records ============

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn songs(&self) -> &[AdminSong] {
        &self.songs
    }

    pub fn reviews(&self) -> &[AdminReview] {
        &self.reviews
    }

    pub fn user(&self, id: i64) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn song(&self, id: i64) -> Option<&AdminSong> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Returns whether a user was removed
    pub fn delete_user(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;
        if removed {
            self.persist(ADMIN_USERS_KEY, &self.users);
        }
        removed
    }

    pub fn delete_song(&mut self, id: i64) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| s.id != id);
        let removed = self.songs.len() != before;
        if removed {
            self.persist(ADMIN_SONGS_KEY, &self.songs);
        }
        removed
    }

    /// Mark a review approved, returns whether it exists
    pub fn approve_review(&mut self, id: i64) -> bool {
        let Some(review) = self.reviews.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        review.status = ModerationStatus::Approved;
        self.persist(ADMIN_REVIEWS_KEY, &self.reviews);
        true
    }

    pub fn delete_review(&mut self, id: i64) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != id);
        let removed = self.reviews.len() != before;
        if removed {
            self.persist(ADMIN_REVIEWS_KEY, &self.reviews);
        }
        removed
    }

    // ============ Filters ============

    /// Case-insensitive match on username or email; blank matches all
    pub fn filter_users(&self, query: &str) -> Vec<&AdminUser> {
        let query = query.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.username.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Case-insensitive match on title, artist or uploader; blank matches all
    pub fn filter_songs(&self, query: &str) -> Vec<&AdminSong> {
        let query = query.trim().to_lowercase();
        self.songs
            .iter()
            .filter(|s| {
                [&s.title, &s.artist, &s.user_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Songs of exactly `genre`, or every song for `"all"`
    pub fn songs_by_genre(&self, genre: &str) -> Vec<&AdminSong> {
        self.songs
            .iter()
            .filter(|s| genre == ALL || s.genre == genre)
            .collect()
    }

    /// Reviews in `status` (`approved`, `pending`, `flagged`), or all for `"all"`
    pub fn reviews_by_status(&self, status: &str) -> Vec<&AdminReview> {
        self.reviews
            .iter()
            .filter(|r| status == ALL || r.status.as_str() == status)
            .collect()
    }

    pub fn stats(&self) -> AdminStats {
        AdminStats {
            users: self.users.len(),
            songs: self.songs.len(),
            downloads: self.songs.iter().map(|s| s.downloads).sum(),
            reviews: self.reviews.len(),
        }
    }

    // ============ Analytics ============

    pub fn genre_distribution(&self) -> Series {
        genre_distribution(self.songs.iter().map(|s| s.genre.as_str()))
    }

    /// Draw every analytics chart; returns false when there is no sink
    pub fn render_analytics(&self, sink: Option<&mut dyn ChartSink>) -> bool {
        let Some(sink) = sink else {
            tracing::debug!("No chart sink, skipping analytics");
            return false;
        };
        sink.draw(ChartKind::Line, &user_growth());
        sink.draw(ChartKind::Doughnut, &self.genre_distribution());
        sink.draw(ChartKind::Bar, &weekly_downloads());
        true
    }
}

/// Saved records under `key`, or `fallback()` when absent or unreadable
fn load_or<T: DeserializeOwned>(session: &SessionStore, key: &str, fallback: fn() -> Vec<T>) -> Vec<T> {
    match session.load(key) {
        Ok(Some(records)) => records,
        Ok(None) => fallback(),
        Err(e) => {
            tracing::warn!("Ignoring unreadable admin records '{}': {}", key, e);
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("musicae-admin-{}", uuid::Uuid::new_v4()))
    }

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<(ChartKind, String)>,
    }

    impl ChartSink for Recorder {
        fn draw(&mut self, kind: ChartKind, series: &Series) {
            self.drawn.push((kind, series.title.clone()));
        }
    }

    #[test]
    fn login_requires_all_three_credentials() {
        let dir = temp_dir();
        let mut panel = AdminPanel::new(SessionStore::new(&dir));
        assert_eq!(panel.require_admin(), Err(AdminError::NotSignedIn));
        assert_eq!(
            panel.login("admin", "admin123", "000000").unwrap_err(),
            AdminError::InvalidCredentials
        );
        assert!(panel.admin().is_none());

        let account = panel.login("admin", "admin123", "123456").unwrap();
        assert_eq!(account.username, "Administrator");
        assert_eq!(account.role, "SUPER ADMIN");

        let restored = AdminPanel::new(SessionStore::new(&dir));
        assert_eq!(restored.admin().map(|a| a.id), Some(1));

        panel.logout();
        assert!(AdminPanel::new(SessionStore::new(&dir)).admin().is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn mutations_update_stats() {
        let dir = temp_dir();
        let mut panel = AdminPanel::new(SessionStore::new(&dir));
        assert_eq!(
            panel.stats(),
            AdminStats {
                users: 4,
                songs: 2,
                downloads: 3668,
                reviews: 3
            }
        );

        assert!(panel.delete_user(3));
        assert!(!panel.delete_user(3));
        assert!(panel.delete_song(2));
        assert!(panel.delete_review(1));
        assert_eq!(
            panel.stats(),
            AdminStats {
                users: 3,
                songs: 1,
                downloads: 1523,
                reviews: 2
            }
        );
        assert_eq!(panel.genre_distribution().labels, vec!["Rock"]);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn edits_survive_a_restart() {
        let dir = temp_dir();
        let mut panel = AdminPanel::new(SessionStore::new(&dir));
        assert!(panel.delete_song(2));
        assert!(panel.delete_user(4));
        assert!(panel.approve_review(2));
        assert!(panel.delete_review(3));

        let reopened = AdminPanel::new(SessionStore::new(&dir));
        assert_eq!(reopened.songs().len(), 1);
        assert!(reopened.song(2).is_none());
        assert!(reopened.user(4).is_none());
        assert_eq!(reopened.reviews_by_status("approved").len(), 2);
        assert!(reopened.reviews_by_status("flagged").is_empty());

        // Songs use the same record shape as the web panel
        let raw: serde_json::Value = SessionStore::new(&dir)
            .load(ADMIN_SONGS_KEY)
            .unwrap()
            .unwrap();
        assert_eq!(raw[0]["userName"], "MusicLover");

        // A corrupt snapshot falls back to the mock records
        std::fs::write(dir.join("session").join("musicae_songs.json"), "{").unwrap();
        assert_eq!(AdminPanel::new(SessionStore::new(&dir)).songs().len(), 2);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn lookups_by_id() {
        let panel = AdminPanel::new(SessionStore::new(&temp_dir()));
        assert_eq!(panel.user(3).map(|u| u.username.as_str()), Some("GrungeKid"));
        assert_eq!(panel.song(1).map(|s| s.artist.as_str()), Some("Queen"));
        assert!(panel.song(99).is_none());
    }

    #[test]
    fn moderation_filters() {
        let dir = temp_dir();
        let mut panel = AdminPanel::new(SessionStore::new(&dir));
        assert_eq!(panel.reviews_by_status(ALL).len(), 3);
        assert_eq!(panel.reviews_by_status("flagged")[0].user, "MusicCritic");

        assert!(panel.approve_review(2));
        assert!(!panel.approve_review(9));
        assert!(panel.reviews_by_status("pending").is_empty());
        assert_eq!(panel.reviews_by_status("approved").len(), 2);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn search_filters() {
        let panel = AdminPanel::new(SessionStore::new(&temp_dir()));
        let names: Vec<&str> = panel
            .filter_users("LOVER")
            .iter()
            .map(|u| u.username.as_str())
            .collect();
        assert_eq!(names, vec!["MusicLover", "PeaceLover"]);
        assert_eq!(panel.filter_users("grunge@").len(), 1);
        assert_eq!(panel.filter_users("  ").len(), 4);

        assert_eq!(panel.filter_songs("queen")[0].id, 1);
        assert_eq!(panel.songs_by_genre("Pop")[0].title, "Billie Jean");
        assert_eq!(panel.songs_by_genre(ALL).len(), 2);
        assert!(panel.songs_by_genre("Jazz").is_empty());
    }

    #[test]
    fn analytics_need_a_sink() {
        let panel = AdminPanel::new(SessionStore::new(&temp_dir()));
        assert!(!panel.render_analytics(None));

        let mut recorder = Recorder::default();
        assert!(panel.render_analytics(Some(&mut recorder)));
        assert_eq!(
            recorder.drawn,
            vec![
                (ChartKind::Line, "Users".to_string()),
                (ChartKind::Doughnut, "Genres".to_string()),
                (ChartKind::Bar, "Downloads".to_string()),
            ]
        );
    }
}
