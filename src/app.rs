//! Main application module

mod error;
mod message;
mod state;
mod update;

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

pub use error::ActionError;
pub use message::{Effect, Message, Screen, SongForm, SortKey};
pub use state::{
    App, CoreState, LibraryState, Modal, SongDetails, SongEntry, ThreadDetails, UiState,
    sort_songs,
};

use crate::database::{Database, Review, User, average_rating};
use crate::features::{SessionStore, Settings, USER_KEY};
use crate::playback::{PlaybackController, VideoPlayer};
use crate::ui::Toast;

impl App {
    /// Create the application: restores the signed-in user from the session
    /// snapshot and loads the library.
    pub async fn new(
        db: Database,
        settings: Settings,
        settings_path: Option<PathBuf>,
        session: SessionStore,
        player: Box<dyn VideoPlayer>,
    ) -> Self {
        let playback = PlaybackController::new(player, &settings.playback);
        let core = CoreState {
            db,
            settings,
            settings_path,
            session,
        };

        let mut app = Self {
            core,
            library: LibraryState::default(),
            ui: UiState::default(),
            playback,
        };

        app.restore_session();
        app.reload_library().await;
        app
    }

    /// Rehydrate the current user from the session snapshot
    fn restore_session(&mut self) {
        match self.core.session.load::<User>(USER_KEY) {
            Ok(Some(user)) => {
                tracing::info!("Restored session for {}", user.username);
                self.library.current_user = Some(user);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Discarding unreadable session snapshot: {}", e);
                if let Err(e) = self.core.session.clear(USER_KEY) {
                    tracing::warn!("Failed to clear session snapshot: {}", e);
                }
            }
        }
    }

    /// Reload songs and playlists, logging failures
    pub async fn reload_library(&mut self) {
        if let Err(e) = self.load_songs().await {
            tracing::error!("Error loading songs: {}", e);
            self.library.songs.clear();
        }
        if let Err(e) = self.load_playlists().await {
            tracing::error!("Error loading playlists: {}", e);
            self.library.playlists.clear();
        }
    }

    /// Reload every song, annotated with the current user's favorites and
    /// the average review rating, and rebuild the play queue.
    pub async fn load_songs(&mut self) -> Result<(), ActionError> {
        let db = &self.core.db;
        let songs = db.get_all_songs().await?;
        let reviews = db.get_all_reviews().await?;

        let favorites: HashSet<i64> = match self.library.user_id() {
            Some(user_id) => db
                .get_favorites_by_user(user_id)
                .await?
                .into_iter()
                .map(|f| f.song_id)
                .collect(),
            None => HashSet::new(),
        };

        self.library.my_review_count = self
            .library
            .user_id()
            .map(|id| reviews.iter().filter(|r| r.user_id == id).count())
            .unwrap_or(0);

        let mut by_song: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_song.entry(review.song_id).or_default().push(review);
        }

        self.library.songs = songs
            .into_iter()
            .map(|song| SongEntry {
                is_favorite: favorites.contains(&song.id),
                rating: by_song
                    .get(&song.id)
                    .map(|r| average_rating(r))
                    .unwrap_or(0.0),
                song,
            })
            .collect();

        let queue = self.library.songs.iter().map(SongEntry::queue_entry).collect();
        self.playback.set_queue(queue);

        tracing::info!("Loaded {} songs from database", self.library.songs.len());
        Ok(())
    }

    pub async fn load_playlists(&mut self) -> Result<(), ActionError> {
        self.library.playlists = match self.library.user_id() {
            Some(user_id) => self.core.db.get_playlists_by_user(user_id).await?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Show a toast and hand the text to the host as an alert
    pub(crate) fn alert(&mut self, toast: Toast) -> Effect {
        let text = toast.message.clone();
        self.ui.toast = Some(toast);
        Effect::Alert(text)
    }

    /// Write settings back when a settings file is configured
    pub(crate) fn persist_settings(&self) {
        if let Some(path) = &self.core.settings_path {
            if let Err(e) = self.core.settings.save_to_file(path) {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use super::*;
    use crate::database::Table;
    use crate::playback::recording::{Command, RecordingPlayer, Script};
    use crate::playback::player::PlayerState;
    use crate::playback::{PlaybackState, PlayerEvent};

    struct Harness {
        app: App,
        script: Rc<RefCell<Script>>,
        dir: PathBuf,
    }

    impl Drop for Harness {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("musicae-app-{}", uuid::Uuid::new_v4()))
    }

    async fn build(db: Database, dir: &Path, settings_path: Option<PathBuf>) -> (App, Rc<RefCell<Script>>) {
        let player = RecordingPlayer::new();
        let script = player.handle();
        script.borrow_mut().duration = 200.0;
        let app = App::new(
            db,
            Settings::default(),
            settings_path,
            SessionStore::new(dir),
            Box::new(player),
        )
        .await;
        (app, script)
    }

    async fn harness() -> Harness {
        let db = Database::in_memory().await.unwrap();
        db.seed_once().await.unwrap();
        let dir = temp_dir();
        let (app, script) = build(db, &dir, None).await;
        Harness { app, script, dir }
    }

    async fn login(app: &mut App, username: &str, password: &str) -> Effect {
        app.update(Message::Login {
            username: username.into(),
            password: password.into(),
        })
        .await
    }

    fn push(script: &Rc<RefCell<Script>>, event: PlayerEvent) {
        script.borrow_mut().pending.push(event);
    }

    #[tokio::test]
    async fn register_signs_in_and_survives_restart() {
        let mut h = harness().await;
        let effect = h
            .app
            .update(Message::Register {
                username: "alice".into(),
                email: "alice@example.com".into(),
                password: "pw".into(),
            })
            .await;
        assert_eq!(effect, Effect::None);
        let user = h.app.library.current_user.clone().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.avatar, "A");

        let (restarted, _) = build(h.app.core.db.clone(), &h.dir, None).await;
        assert_eq!(
            restarted.library.current_user.map(|u| u.username).as_deref(),
            Some("alice")
        );
    }

    #[tokio::test]
    async fn duplicate_registration_is_refused() {
        let mut h = harness().await;
        let users = h.app.core.db.count(Table::Users).await.unwrap();

        let effect = h
            .app
            .update(Message::Register {
                username: "mejo".into(),
                email: "new@example.com".into(),
                password: "pw".into(),
            })
            .await;
        assert_eq!(effect.alerts(), vec!["The username is already taken"]);

        let effect = h
            .app
            .update(Message::Register {
                username: "someone".into(),
                email: "mejo@example.com".into(),
                password: "pw".into(),
            })
            .await;
        assert_eq!(effect.alerts(), vec!["The email is already registered"]);

        assert_eq!(h.app.core.db.count(Table::Users).await.unwrap(), users);
        assert!(!h.app.is_logged_in());
    }

    #[tokio::test]
    async fn login_and_logout() {
        let mut h = harness().await;
        let effect = login(&mut h.app, "mejo", "wrong").await;
        assert_eq!(effect.alerts(), vec!["Incorrect username or password"]);
        assert!(!h.app.is_logged_in());

        assert_eq!(login(&mut h.app, "mejo", "1234").await, Effect::None);
        assert!(h.app.is_logged_in());

        let effect = h.app.update(Message::Logout).await;
        assert_eq!(effect, Effect::Alert("Signed out".into()));
        assert_eq!(h.app.ui.toast.as_ref().map(|t| t.style.icon()), Some("ℹ"));
        assert!(!h.app.is_logged_in());
        assert_eq!(h.app.update(Message::Logout).await, Effect::None);
        let (restarted, _) = build(h.app.core.db.clone(), &h.dir, None).await;
        assert!(restarted.library.current_user.is_none());
    }

    #[tokio::test]
    async fn unreadable_session_is_discarded() {
        let h = harness().await;
        let session_dir = h.dir.join("session");
        std::fs::create_dir_all(&session_dir).unwrap();
        std::fs::write(session_dir.join("musicae_user.json"), "{ not json").unwrap();

        let (app, _) = build(h.app.core.db.clone(), &h.dir, None).await;
        assert!(app.library.current_user.is_none());
        assert!(!session_dir.join("musicae_user.json").exists());
    }

    #[tokio::test]
    async fn favorites_follow_the_current_user() {
        let mut h = harness().await;
        let effect = h.app.update(Message::ToggleFavorite(1)).await;
        assert_eq!(effect.alerts(), vec!["You need to sign in first"]);

        login(&mut h.app, "MusicLover", "demo123").await;
        h.app.update(Message::ToggleFavorite(1)).await;
        assert!(h.app.library.song(1).unwrap().is_favorite);

        h.app.update(Message::ToggleFavorite(1)).await;
        assert!(!h.app.library.song(1).unwrap().is_favorite);
    }

    #[tokio::test]
    async fn replies_bump_the_thread_counter() {
        let mut h = harness().await;
        login(&mut h.app, "RockFan", "demo123").await;

        h.app
            .update(Message::CreateThread {
                song_id: 2,
                title: "Best solo?".into(),
                content: "Discuss".into(),
            })
            .await;
        let thread_id = match &h.app.ui.modal {
            Some(Modal::SongDetails(details)) => details.threads[0].id,
            other => panic!("unexpected modal {other:?}"),
        };

        let effect = h
            .app
            .update(Message::AddReply {
                thread_id,
                content: "The outro".into(),
            })
            .await;
        assert_eq!(effect, Effect::None);
        match &h.app.ui.modal {
            Some(Modal::Thread(details)) => {
                assert_eq!(details.thread.reply_count, 1);
                assert_eq!(details.replies.len(), 1);
                assert_eq!(details.replies[0].user_name, "RockFan");
            }
            other => panic!("unexpected modal {other:?}"),
        }

        let effect = h
            .app
            .update(Message::AddReply {
                thread_id: 999,
                content: "lost".into(),
            })
            .await;
        assert_eq!(effect.alerts(), vec!["Thread 999 does not exist"]);
    }

    #[tokio::test]
    async fn reviews_are_validated() {
        let mut h = harness().await;
        login(&mut h.app, "mejo", "1234").await;

        let effect = h
            .app
            .update(Message::AddReview {
                song_id: 7,
                rating: 6,
                comment: "too good".into(),
            })
            .await;
        assert_eq!(
            effect.alerts(),
            vec!["Rating must be between 1 and 5 stars, got 6"]
        );

        let effect = h
            .app
            .update(Message::AddReview {
                song_id: 7,
                rating: 4,
                comment: "Nice".into(),
            })
            .await;
        assert_eq!(effect.alerts(), vec!["Review added successfully!"]);
        assert_eq!(h.app.library.my_review_count, 1);
        match &h.app.ui.modal {
            Some(Modal::SongDetails(details)) => {
                assert!(details.reviews.iter().any(|r| r.comment == "Nice"));
            }
            other => panic!("unexpected modal {other:?}"),
        }
    }

    #[tokio::test]
    async fn unplayable_song_is_refused() {
        let mut h = harness().await;
        login(&mut h.app, "mejo", "1234").await;

        let effect = h
            .app
            .update(Message::AddSong(SongForm {
                title: "Demo".into(),
                artist: "Nobody".into(),
                album: None,
                genre: "Pop".into(),
                video_url: "not a url".into(),
            }))
            .await;
        assert_eq!(effect.alerts().len(), 1);
        let song = h
            .app
            .library
            .songs
            .iter()
            .find(|s| s.song.title == "Demo")
            .unwrap()
            .song
            .clone();
        assert_eq!(song.album, "Unknown");

        let effect = h.app.update(Message::Play(song.id)).await;
        assert_eq!(effect.alerts(), vec!["Invalid video URL: not a url"]);
        assert!(h.script.borrow().commands.is_empty());
        assert_eq!(h.app.library.song(song.id).unwrap().song.plays, 0);
    }

    #[tokio::test]
    async fn playing_creates_the_player_and_counts_the_play() {
        let mut h = harness().await;
        h.app.update(Message::Play(1)).await;
        assert_eq!(
            h.script.borrow().commands,
            vec![Command::Create("fJ9rUzIMcZQ".into())]
        );
        assert_eq!(h.app.playback.state(), PlaybackState::Loading);
        assert_eq!(h.app.library.song(1).unwrap().song.plays, 1);

        push(&h.script, PlayerEvent::Ready);
        h.app.update(Message::Tick).await;
        assert_eq!(h.app.playback.state(), PlaybackState::Playing);
        assert!(h.script.borrow().commands.contains(&Command::SetVolume(70)));

        h.script.borrow_mut().position = 50.0;
        h.app.update(Message::Tick).await;
        let progress = h.app.ui.progress.unwrap();
        assert_eq!(progress.percent, 25.0);
    }

    #[tokio::test]
    async fn next_wraps_and_ended_advances() {
        let mut h = harness().await;
        h.app.update(Message::Play(7)).await;
        push(&h.script, PlayerEvent::Ready);
        h.app.update(Message::Tick).await;

        h.app.update(Message::Next).await;
        assert_eq!(h.app.playback.current().unwrap().song_id, 1);
        assert!(
            h.script
                .borrow()
                .commands
                .contains(&Command::Load("fJ9rUzIMcZQ".into()))
        );

        push(&h.script, PlayerEvent::StateChanged(PlayerState::Ended));
        h.app.update(Message::Tick).await;
        assert_eq!(h.app.playback.current().unwrap().song_id, 2);
        assert_eq!(h.app.library.song(2).unwrap().song.plays, 1);

        h.app.update(Message::Previous).await;
        assert_eq!(h.app.playback.current().unwrap().song_id, 1);
    }

    #[tokio::test]
    async fn controls_drive_the_current_song() {
        let mut h = harness().await;
        login(&mut h.app, "mejo", "1234").await;
        // Nothing playing yet
        assert_eq!(h.app.update(Message::ToggleCurrentFavorite).await, Effect::None);

        h.app.update(Message::Play(2)).await;
        push(&h.script, PlayerEvent::Ready);
        h.app.update(Message::Tick).await;

        h.app.update(Message::TogglePlay).await;
        assert_eq!(h.app.playback.state(), PlaybackState::Paused);
        h.app.update(Message::ToggleMute).await;
        h.app.update(Message::Seek(50.0)).await;
        let commands = h.script.borrow().commands.clone();
        assert!(commands.contains(&Command::Mute));
        assert!(commands.contains(&Command::SeekTo(100.0)));

        h.app.update(Message::ToggleCurrentFavorite).await;
        assert!(h.app.library.song(2).unwrap().is_favorite);
    }

    #[tokio::test]
    async fn repeat_replays_a_song_removed_while_playing() {
        let mut h = harness().await;
        h.app.update(Message::Play(2)).await;
        push(&h.script, PlayerEvent::Ready);
        h.app.update(Message::Tick).await;

        h.app.core.db.delete(Table::Songs, 2).await.unwrap();
        h.app.load_songs().await.unwrap();
        h.app.update(Message::ToggleRepeat).await;
        h.script.borrow_mut().commands.clear();

        push(&h.script, PlayerEvent::StateChanged(PlayerState::Ended));
        h.app.update(Message::Tick).await;
        assert_eq!(h.app.playback.current().unwrap().song_id, 2);
        assert_eq!(
            h.script.borrow().commands[..2],
            [Command::Load("QkF3oxziUI4".into()), Command::Play]
        );
    }

    #[tokio::test]
    async fn player_errors_become_alerts() {
        let mut h = harness().await;
        h.app.update(Message::Play(1)).await;
        push(&h.script, PlayerEvent::Error(100));
        let effect = h.app.update(Message::Tick).await;
        assert_eq!(effect.alerts(), vec!["Video not found. Try another video."]);
    }

    #[tokio::test]
    async fn download_opens_the_video() {
        let mut h = harness().await;
        let effect = h.app.update(Message::Download(4)).await;
        assert_eq!(
            effect.urls(),
            vec!["https://www.youtube.com/watch?v=hTWKbfoikeg"]
        );
        let entry = h.app.library.song(4).unwrap();
        assert_eq!(entry.song.downloads, 1);
        assert!(entry.is_downloaded());

        let effect = h.app.update(Message::Download(42)).await;
        assert_eq!(effect.alerts(), vec!["Song 42 does not exist"]);
    }

    #[tokio::test]
    async fn search_and_sort_shape_the_library() {
        let mut h = harness().await;
        h.app.update(Message::SearchChanged("QUEEN".into())).await;
        let ids: Vec<i64> = h.app.visible_songs().iter().map(|s| s.song.id).collect();
        assert_eq!(ids, vec![1]);

        h.app.update(Message::SearchChanged(String::new())).await;
        h.app.update(Message::SortChanged(SortKey::Title)).await;
        let titles: Vec<&str> = h
            .app
            .visible_songs()
            .iter()
            .map(|s| s.song.title.as_str())
            .collect();
        assert_eq!(titles[0], "Billie Jean");
        assert_eq!(titles.len(), 7);
    }

    #[tokio::test]
    async fn playlists_are_owner_only() {
        let mut h = harness().await;
        login(&mut h.app, "mejo", "1234").await;
        h.app
            .update(Message::CreatePlaylist {
                name: "Road trip".into(),
                description: None,
                is_public: false,
            })
            .await;
        let playlist_id = h.app.library.playlists[0].id;

        for song_id in [3, 4, 3] {
            h.app
                .update(Message::AddToPlaylist {
                    playlist_id,
                    song_id,
                })
                .await;
        }
        assert_eq!(h.app.library.playlists[0].songs, vec![3, 4]);

        h.app
            .update(Message::RemoveFromPlaylist {
                playlist_id,
                song_id: 3,
            })
            .await;
        assert_eq!(h.app.library.playlists[0].songs, vec![4]);

        let effect = h
            .app
            .update(Message::AddToPlaylist {
                playlist_id: 99,
                song_id: 1,
            })
            .await;
        assert_eq!(effect.alerts(), vec!["Playlist 99 does not exist"]);
    }

    #[tokio::test]
    async fn playback_toggles_are_saved() {
        let db = Database::in_memory().await.unwrap();
        let dir = temp_dir();
        let settings_path = dir.join("settings.json");
        let (mut app, _) = build(db, &dir, Some(settings_path.clone())).await;

        app.update(Message::ToggleShuffle).await;
        app.update(Message::SetVolume(35)).await;
        let saved = Settings::load_from_file(&settings_path).unwrap();
        assert!(saved.playback.shuffle);
        assert!(!saved.playback.repeat);
        assert_eq!(saved.playback.volume, 35);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
