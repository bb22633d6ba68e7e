//! Library page: numbered track list honoring sort and search

use std::fmt;

use crate::app::{App, SortKey};
use crate::ui::theme::{HEART, HEART_EMPTY};
use crate::ui::widgets::{empty_state, stars};

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryRow {
    /// Two-digit position, `01` first
    pub number: String,
    pub song_id: i64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub rating: f64,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryPage {
    pub sort: SortKey,
    pub query: String,
    /// Whether the library has any song before filtering
    pub has_songs: bool,
    pub rows: Vec<LibraryRow>,
}

impl LibraryPage {
    pub fn new(app: &App) -> Self {
        let rows = app
            .visible_songs()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LibraryRow {
                number: format!("{:02}", i + 1),
                song_id: entry.song.id,
                title: entry.song.title.clone(),
                artist: entry.song.artist.clone(),
                album: entry.song.album.clone(),
                genre: entry.song.genre.clone(),
                rating: entry.rating,
                is_favorite: entry.is_favorite,
            })
            .collect();

        Self {
            sort: app.ui.sort,
            query: app.ui.search_query.trim().to_string(),
            has_songs: !app.library.songs.is_empty(),
            rows,
        }
    }

    fn sort_label(&self) -> &'static str {
        match self.sort {
            SortKey::Added => "added",
            SortKey::Title => "title",
            SortKey::Artist => "artist",
            SortKey::Rating => "rating",
            SortKey::Recent => "most recent",
        }
    }
}

impl fmt::Display for LibraryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sorted by {}", self.sort_label())?;
        if !self.query.is_empty() {
            write!(f, "  Filter: \"{}\"", self.query)?;
        }
        writeln!(f)?;

        if !self.has_songs {
            return write!(
                f,
                "{}",
                empty_state("No songs yet", "Start building your library by adding your first song")
            );
        }
        if self.rows.is_empty() {
            return write!(f, "  No songs match \"{}\"", self.query);
        }
        for row in &self.rows {
            writeln!(
                f,
                "{}  {} - {}  | {} | {} | {} {}",
                row.number,
                row.title,
                row.artist,
                row.album,
                row.genre,
                stars(row.rating),
                if row.is_favorite { HEART } else { HEART_EMPTY },
            )?;
        }
        Ok(())
    }
}
