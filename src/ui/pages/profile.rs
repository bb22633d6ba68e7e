//! Profile page

use std::fmt;

use crate::app::App;
use crate::ui::widgets::format_date;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub avatar: String,
    pub username: String,
    pub email: String,
    pub joined_at: i64,
    /// Songs uploaded by the user
    pub songs: usize,
    pub reviews: usize,
    /// Songs in the library downloaded at least once
    pub downloads: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub user: Option<ProfileSummary>,
}

impl ProfilePage {
    pub fn new(app: &App) -> Self {
        let library = &app.library;
        let user = library.current_user.as_ref().map(|user| ProfileSummary {
            avatar: user.avatar.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            joined_at: user.joined_at,
            songs: library
                .songs
                .iter()
                .filter(|e| e.song.user_id == user.id)
                .count(),
            reviews: library.my_review_count,
            downloads: library.songs.iter().filter(|e| e.is_downloaded()).count(),
        });
        Self { user }
    }
}

impl fmt::Display for ProfilePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(user) = &self.user else {
            return write!(f, "Sign in to see your profile");
        };
        writeln!(f, "[{}] {}", user.avatar, user.username)?;
        writeln!(f, "{}", user.email)?;
        writeln!(f, "Joined {}", format_date(user.joined_at))?;
        write!(
            f,
            "Songs: {}  Reviews: {}  Downloads: {}",
            user.songs, user.reviews, user.downloads
        )
    }
}
