//! Text views of the admin panel

use std::fmt;

use super::data::ACTIVITY_FEED;
use super::{AdminPanel, AdminReview, AdminSong, AdminStats, AdminUser};
use crate::ui::widgets::{section_header, stars};

pub struct Dashboard {
    pub admin_name: Option<String>,
    pub stats: AdminStats,
}

impl Dashboard {
    pub fn new(panel: &AdminPanel) -> Self {
        Self {
            admin_name: panel.admin().map(|a| a.username.clone()),
            stats: panel.stats(),
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.admin_name {
            writeln!(f, "Signed in as {}", name)?;
        }
        let s = &self.stats;
        writeln!(
            f,
            "Users: {}  Songs: {}  Downloads: {}  Reviews: {}",
            s.users, s.songs, s.downloads, s.reviews
        )?;
        writeln!(f)?;
        writeln!(f, "{}", section_header("Recent activity", None))?;
        for (_, text, when) in ACTIVITY_FEED {
            writeln!(f, "  {}  ({})", text, when)?;
        }
        Ok(())
    }
}

pub struct UsersTable<'a> {
    pub rows: Vec<&'a AdminUser>,
}

impl<'a> UsersTable<'a> {
    pub fn new(rows: Vec<&'a AdminUser>) -> Self {
        Self { rows }
    }
}

impl fmt::Display for UsersTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<4}{:<14}{:<22}{:<7}{:<9}{:<12}STATUS",
            "ID", "USERNAME", "EMAIL", "SONGS", "REVIEWS", "JOINED"
        )?;
        for u in &self.rows {
            writeln!(
                f,
                "{:<4}{:<14}{:<22}{:<7}{:<9}{:<12}{}",
                u.id,
                u.username,
                u.email,
                u.songs,
                u.reviews,
                u.joined,
                u.status.to_uppercase()
            )?;
        }
        Ok(())
    }
}

pub struct SongsTable<'a> {
    pub rows: Vec<&'a AdminSong>,
}

impl<'a> SongsTable<'a> {
    pub fn new(rows: Vec<&'a AdminSong>) -> Self {
        Self { rows }
    }
}

impl fmt::Display for SongsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<4}{:<20}{:<17}{:<8}{:<12}{:<11}RATING",
            "ID", "TITLE", "ARTIST", "GENRE", "UPLOADER", "DOWNLOADS"
        )?;
        for s in &self.rows {
            writeln!(
                f,
                "{:<4}{:<20}{:<17}{:<8}{:<12}{:<11}{}",
                s.id,
                s.title,
                s.artist,
                s.genre,
                s.user_name,
                s.downloads,
                stars(f64::from(s.rating))
            )?;
        }
        Ok(())
    }
}

/// Detail card of one user
pub struct UserDetails<'a>(pub &'a AdminUser);

impl fmt::Display for UserDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.0;
        writeln!(f, "User Details")?;
        writeln!(f, "  Username: {}", u.username)?;
        writeln!(f, "  Email: {}", u.email)?;
        writeln!(f, "  Songs: {}", u.songs)?;
        writeln!(f, "  Reviews: {}", u.reviews)?;
        writeln!(f, "  Joined: {}", u.joined)
    }
}

/// Detail card of one song
pub struct SongDetails<'a>(pub &'a AdminSong);

impl fmt::Display for SongDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Song Details")?;
        writeln!(f, "  Title: {}", s.title)?;
        writeln!(f, "  Artist: {}", s.artist)?;
        writeln!(f, "  Genre: {}", s.genre)?;
        writeln!(f, "  Uploaded by: {}", s.user_name)?;
        writeln!(f, "  Downloads: {}", s.downloads)
    }
}

pub struct ReviewsList<'a> {
    pub reviews: Vec<&'a AdminReview>,
}

impl<'a> ReviewsList<'a> {
    pub fn new(reviews: Vec<&'a AdminReview>) -> Self {
        Self { reviews }
    }
}

impl fmt::Display for ReviewsList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reviews.is_empty() {
            return writeln!(f, "No reviews");
        }
        for r in &self.reviews {
            writeln!(
                f,
                "#{} {} by {}  [{}]",
                r.id,
                r.song_title,
                r.user,
                r.status.as_str().to_uppercase()
            )?;
            writeln!(f, "  {}  {}", stars(f64::from(r.rating)), r.comment)?;
            writeln!(f, "  {}", r.date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::SessionStore;

    fn panel() -> AdminPanel {
        let dir = std::env::temp_dir().join(format!("musicae-admin-{}", uuid::Uuid::new_v4()));
        AdminPanel::new(SessionStore::new(&dir))
    }

    #[test]
    fn dashboard_totals() {
        let text = Dashboard::new(&panel()).to_string();
        assert!(text.contains("Users: 4  Songs: 2  Downloads: 3668  Reviews: 3"));
        assert!(text.contains("New user registered: GrungeKid  (2 hours ago)"));
        assert!(!text.contains("Signed in as"));
    }

    #[test]
    fn tables() {
        let panel = panel();
        let users = UsersTable::new(panel.filter_users("peace")).to_string();
        assert_eq!(users.lines().count(), 2);
        assert!(users.contains("PeaceLover"));
        assert!(users.ends_with("ACTIVE\n"));

        let songs = SongsTable::new(panel.songs_by_genre("Pop")).to_string();
        assert!(songs.contains("Billie Jean"));
        assert!(songs.contains("2145"));
        assert!(songs.contains("★★★★★"));

        let reviews = ReviewsList::new(panel.reviews_by_status("flagged")).to_string();
        assert!(reviews.starts_with("#3 Bohemian Rhapsody by MusicCritic  [FLAGGED]"));
        assert!(reviews.contains("★★★★☆  Great song but a bit overrated"));
        assert_eq!(ReviewsList::new(Vec::new()).to_string(), "No reviews\n");
    }

    #[test]
    fn detail_cards() {
        let panel = panel();
        let user = UserDetails(panel.user(1).unwrap()).to_string();
        assert!(user.contains("Username: MusicLover"));
        assert!(user.contains("Songs: 4"));
        assert!(user.ends_with("Joined: 2024-01-10\n"));

        let song = SongDetails(panel.song(2).unwrap()).to_string();
        assert!(song.contains("Uploaded by: PopMaster"));
        assert!(song.ends_with("Downloads: 2145\n"));
    }
}
