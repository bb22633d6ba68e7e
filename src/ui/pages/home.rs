//! Home page: library stats and the newest tracks

use std::fmt;

use crate::app::{App, SongEntry, SortKey, sort_songs};
use crate::ui::theme::HEART;
use crate::ui::widgets::{empty_state, section_header};

/// Number of tracks in the recent section
const RECENT_TRACKS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackCard {
    pub song_id: i64,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub is_favorite: bool,
}

impl TrackCard {
    fn from_entry(entry: &SongEntry) -> Self {
        Self {
            song_id: entry.song.id,
            title: entry.song.title.clone(),
            artist: entry.song.artist.clone(),
            genre: entry.song.genre.clone(),
            is_favorite: entry.is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub total: usize,
    pub downloaded: usize,
    pub favorites: usize,
    /// Newest first
    pub recent: Vec<TrackCard>,
}

impl HomePage {
    pub fn new(app: &App) -> Self {
        let songs = &app.library.songs;
        let mut newest: Vec<&SongEntry> = songs.iter().collect();
        sort_songs(&mut newest, SortKey::Recent);

        Self {
            total: songs.len(),
            downloaded: songs.iter().filter(|s| s.is_downloaded()).count(),
            favorites: songs.iter().filter(|s| s.is_favorite).count(),
            recent: newest
                .into_iter()
                .take(RECENT_TRACKS)
                .map(TrackCard::from_entry)
                .collect(),
        }
    }
}

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total songs: {}  Downloaded: {}  Favorites: {}",
            self.total, self.downloaded, self.favorites
        )?;
        writeln!(f)?;
        writeln!(f, "{}", section_header("Recent tracks", None))?;
        if self.recent.is_empty() {
            return write!(f, "{}", empty_state("No songs yet", "Add your first song to get started"));
        }
        for card in &self.recent {
            write!(
                f,
                "  #{} {} - {}  [{}]",
                card.song_id, card.title, card.artist, card.genre
            )?;
            if card.is_favorite {
                write!(f, " {}", HEART)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
