//! UI module: typed view-models rendered to terminal text
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): small text building blocks without business logic
//! - **Components** (`components`): player bar, sidebar and modals built from `App`
//! - **Pages** (`pages`): one view-model per top-level screen
//!
//! Every view-model implements `Display`; rendering is `to_string()`.

pub mod components;
pub mod pages;
pub mod theme;
pub mod widgets;

pub use widgets::Toast;

use crate::app::{App, Modal, Screen};
use components::{PlayerBar, Sidebar, SongDetailsView, ThreadView};
use pages::{DiscoverPage, DownloadsPage, HomePage, LibraryPage, ProfilePage};

/// Render the current screen
pub fn render_screen(app: &App) -> String {
    match app.ui.screen {
        Screen::Home => HomePage::new(app).to_string(),
        Screen::Library => LibraryPage::new(app).to_string(),
        Screen::Discover => DiscoverPage::new(app).to_string(),
        Screen::Downloads => DownloadsPage::new(app).to_string(),
        Screen::Profile => ProfilePage::new(app).to_string(),
    }
}

/// Render the open modal, if any
pub fn render_modal(app: &App) -> Option<String> {
    let modal = app.ui.modal.as_ref()?;
    let rendered = match modal {
        Modal::SongDetails(details) => SongDetailsView::new(app, details)?.to_string(),
        Modal::Thread(details) => ThreadView::new(details).to_string(),
    };
    Some(rendered)
}

/// Sidebar, screen, modal, player bar and toast stacked into one frame
pub fn render_frame(app: &App) -> String {
    let mut parts = vec![Sidebar::new(app).to_string(), render_screen(app)];
    if let Some(modal) = render_modal(app) {
        parts.push(modal);
    }
    parts.push(PlayerBar::new(app).to_string());
    if let Some(toast) = app.ui.toast.as_ref().filter(|t| t.visible) {
        parts.push(toast.to_string());
    }
    parts.join(&format!("\n{}\n", theme::RULE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Message, SongForm, SortKey};
    use crate::database::Database;
    use crate::features::{SessionStore, Settings};
    use crate::playback::recording::RecordingPlayer;
    use crate::playback::PlayerEvent;

    async fn seeded_app() -> (App, std::path::PathBuf) {
        let db = Database::in_memory().await.unwrap();
        db.seed_once().await.unwrap();
        let dir = std::env::temp_dir().join(format!("musicae-ui-{}", uuid::Uuid::new_v4()));
        let app = App::new(
            db,
            Settings::default(),
            None,
            SessionStore::new(&dir),
            Box::new(RecordingPlayer::new()),
        )
        .await;
        (app, dir)
    }

    async fn empty_app() -> (App, std::path::PathBuf) {
        let db = Database::in_memory().await.unwrap();
        let dir = std::env::temp_dir().join(format!("musicae-ui-{}", uuid::Uuid::new_v4()));
        let app = App::new(
            db,
            Settings::default(),
            None,
            SessionStore::new(&dir),
            Box::new(RecordingPlayer::new()),
        )
        .await;
        (app, dir)
    }

    async fn login_mejo(app: &mut App) {
        app.update(Message::Login {
            username: "mejo".into(),
            password: "1234".into(),
        })
        .await;
    }

    #[tokio::test]
    async fn home_shows_stats_and_newest_songs() {
        let (mut app, dir) = seeded_app().await;
        login_mejo(&mut app).await;
        app.update(Message::ToggleFavorite(2)).await;
        app.update(Message::Download(3)).await;

        let home = HomePage::new(&app);
        assert_eq!(home.total, 7);
        assert_eq!(home.downloaded, 1);
        assert_eq!(home.favorites, 1);
        assert_eq!(home.recent.len(), 6);
        assert_eq!(home.recent[0].title, "Heroes tonight");
        assert!(home.recent.iter().all(|t| t.title != "Bohemian Rhapsody"));

        let text = render_screen(&app);
        assert!(text.contains("Total songs: 7"));
        assert!(text.contains("Heroes tonight - Janji feat. Johnning"));
        let favorite = text.lines().find(|l| l.starts_with("  #2 ")).unwrap();
        assert!(favorite.ends_with(theme::HEART));
        assert_eq!(text.matches(theme::HEART).count(), 1);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn empty_states() {
        let (mut app, dir) = empty_app().await;
        assert!(render_screen(&app).contains("No songs yet"));

        app.update(Message::Navigate(Screen::Library)).await;
        assert!(render_screen(&app).contains("Start building your library"));

        app.update(Message::Navigate(Screen::Downloads)).await;
        assert!(render_screen(&app).contains("No downloads yet"));

        app.update(Message::Navigate(Screen::Profile)).await;
        assert!(render_screen(&app).contains("Sign in to see your profile"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn library_rows_follow_sort_and_filter() {
        let (mut app, dir) = seeded_app().await;
        login_mejo(&mut app).await;
        app.update(Message::ToggleFavorite(6)).await;
        app.update(Message::Navigate(Screen::Library)).await;
        app.update(Message::SortChanged(SortKey::Title)).await;

        let page = LibraryPage::new(&app);
        assert_eq!(page.rows[0].number, "01");
        assert_eq!(page.rows[0].title, "Billie Jean");
        assert!(page.rows[0].is_favorite);
        assert_eq!(page.rows[0].album, "Thriller");

        let text = page.to_string();
        assert!(text.contains("01  Billie Jean - Michael Jackson"));
        assert!(text.contains("♥"));

        app.update(Message::SearchChanged("zzz".into())).await;
        assert!(render_screen(&app).contains("No songs match \"zzz\""));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn discover_names_the_uploader() {
        let (mut app, dir) = seeded_app().await;
        app.update(Message::Navigate(Screen::Discover)).await;
        let text = render_screen(&app);
        assert!(text.contains("Heroes tonight - Janji feat. Johnning [Electronic] by mejo"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn profile_counts_own_activity() {
        let (mut app, dir) = seeded_app().await;
        login_mejo(&mut app).await;
        app.update(Message::AddSong(SongForm {
            title: "Second".into(),
            artist: "mejo".into(),
            album: None,
            genre: "Pop".into(),
            video_url: "https://youtu.be/fJ9rUzIMcZQ".into(),
        }))
        .await;
        app.update(Message::AddReview {
            song_id: 1,
            rating: 3,
            comment: "ok".into(),
        })
        .await;
        app.update(Message::Navigate(Screen::Profile)).await;

        let profile = ProfilePage::new(&app);
        let user = profile.user.as_ref().unwrap();
        assert_eq!(user.avatar, "M");
        assert_eq!(user.songs, 2);
        assert_eq!(user.reviews, 1);
        assert_eq!(user.downloads, 0);
        assert!(profile.to_string().contains("mejo@example.com"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn song_details_and_thread_modals() {
        let (mut app, dir) = seeded_app().await;
        login_mejo(&mut app).await;
        app.update(Message::AddSong(SongForm {
            title: "Fresh".into(),
            artist: "mejo".into(),
            album: None,
            genre: "Electronic".into(),
            video_url: "https://youtu.be/3nQNiWdeH2Q".into(),
        }))
        .await;
        let song_id = app.library.songs.last().unwrap().song.id;
        app.update(Message::ShowSongDetails(song_id)).await;
        let text = render_modal(&app).unwrap();
        assert!(text.contains("Fresh - mejo"));
        assert!(text.contains("Album: Unknown"));
        assert!(text.contains("0.0 ★ (0 reviews)"));
        assert!(text.contains("No reviews yet"));
        assert!(text.contains("No discussion threads"));

        app.update(Message::CreateThread {
            song_id,
            title: "Drop".into(),
            content: "That drop".into(),
        })
        .await;
        let text = render_modal(&app).unwrap();
        assert!(text.contains("Threads (1)"));
        assert!(text.contains("Drop (0 replies)"));

        let thread_id = match &app.ui.modal {
            Some(Modal::SongDetails(d)) => d.threads[0].id,
            _ => unreachable!(),
        };
        app.update(Message::AddReply {
            thread_id,
            content: "Agreed".into(),
        })
        .await;
        let text = render_modal(&app).unwrap();
        assert!(text.contains("Replies (1)"));
        assert!(text.contains("mejo: Agreed"));

        app.update(Message::Navigate(Screen::Library)).await;
        assert!(render_modal(&app).is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn frame_includes_player_and_toast() {
        let (mut app, dir) = seeded_app().await;
        let frame = render_frame(&app);
        assert!(frame.contains("Nothing playing"));

        app.update(Message::Play(1)).await;
        app.update(Message::Player(PlayerEvent::Ready)).await;
        let frame = render_frame(&app);
        assert!(frame.contains("Bohemian Rhapsody - Queen"));
        assert!(frame.contains("Playing"));

        app.update(Message::ToggleFavorite(1)).await;
        let frame = render_frame(&app);
        assert!(frame.contains("✗ You need to sign in first"));

        app.update(Message::Tick).await;
        assert!(render_frame(&app).contains("You need to sign in first"));
        app.update(Message::Navigate(Screen::Discover)).await;
        assert!(!render_frame(&app).contains("You need to sign in first"));
        let _ = std::fs::remove_dir_all(dir);
    }
}
