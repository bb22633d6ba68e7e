//! Application state definitions

use std::path::PathBuf;

use crate::database::{Database, Playlist, Reply, Review, Song, Thread, User};
use crate::features::{SessionStore, Settings};
use crate::playback::{PlaybackController, Progress, QueueEntry};
use crate::ui::Toast;

use super::message::{Screen, SortKey};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, database, session snapshots)
    pub core: CoreState,
    /// Business data (current user, songs, playlists)
    pub library: LibraryState,
    /// UI state (screen, modal, toast, sort and filter)
    pub ui: UiState,
    pub playback: PlaybackController,
}

/// Core infrastructure & services
pub struct CoreState {
    pub db: Database,
    pub settings: Settings,
    /// Where settings changes are written back, None to keep them in memory
    pub settings_path: Option<PathBuf>,
    pub session: SessionStore,
}

/// A song annotated for the current user
#[derive(Debug, Clone, PartialEq)]
pub struct SongEntry {
    pub song: Song,
    pub is_favorite: bool,
    /// Average review rating, 0 when unrated
    pub rating: f64,
}

impl SongEntry {
    pub fn queue_entry(&self) -> QueueEntry {
        QueueEntry {
            song_id: self.song.id,
            title: self.song.title.clone(),
            artist: self.song.artist.clone(),
            video_url: self.song.video_url.clone(),
        }
    }

    pub fn is_downloaded(&self) -> bool {
        self.song.downloads > 0
    }

    /// Case-insensitive substring match over title, artist and album
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.song.title, &self.song.artist, &self.song.album]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Business data
#[derive(Debug, Default)]
pub struct LibraryState {
    pub current_user: Option<User>,
    /// Every song in storage order
    pub songs: Vec<SongEntry>,
    /// Playlists owned by the current user
    pub playlists: Vec<Playlist>,
    /// Number of reviews written by the current user
    pub my_review_count: usize,
}

impl LibraryState {
    pub fn song(&self, id: i64) -> Option<&SongEntry> {
        self.songs.iter().find(|s| s.song.id == id)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|u| u.id)
    }
}

/// Song details modal contents
#[derive(Debug, Clone)]
pub struct SongDetails {
    pub song_id: i64,
    pub average: f64,
    pub reviews: Vec<Review>,
    pub threads: Vec<Thread>,
}

/// Thread modal contents
#[derive(Debug, Clone)]
pub struct ThreadDetails {
    pub thread: Thread,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone)]
pub enum Modal {
    SongDetails(SongDetails),
    Thread(ThreadDetails),
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    pub screen: Screen,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub sort: SortKey,
    pub search_query: String,
    /// Last progress reading while playing
    pub progress: Option<Progress>,
}

impl App {
    /// Songs for the library screen, filtered by the search text and sorted
    pub fn visible_songs(&self) -> Vec<&SongEntry> {
        let mut songs: Vec<&SongEntry> = self
            .library
            .songs
            .iter()
            .filter(|s| s.matches(&self.ui.search_query))
            .collect();
        sort_songs(&mut songs, self.ui.sort);
        songs
    }

    pub fn is_logged_in(&self) -> bool {
        self.library.current_user.is_some()
    }
}

/// Sort song entries in place; ties keep storage order
pub fn sort_songs(songs: &mut [&SongEntry], key: SortKey) {
    match key {
        SortKey::Added => {}
        SortKey::Title => songs.sort_by_key(|s| s.song.title.to_lowercase()),
        SortKey::Artist => songs.sort_by_key(|s| s.song.artist.to_lowercase()),
        SortKey::Rating => songs.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Recent => songs.sort_by(|a, b| {
            b.song
                .added_at
                .cmp(&a.song.added_at)
                .then(b.song.id.cmp(&a.song.id))
        }),
    }
}
