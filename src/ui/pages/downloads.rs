//! Downloads page: songs downloaded at least once

use std::fmt;

use crate::app::App;
use crate::database::Song;
use crate::ui::widgets::empty_state;

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadsPage {
    pub songs: Vec<Song>,
}

impl DownloadsPage {
    pub fn new(app: &App) -> Self {
        Self {
            songs: app
                .library
                .songs
                .iter()
                .filter(|e| e.is_downloaded())
                .map(|e| e.song.clone())
                .collect(),
        }
    }
}

impl fmt::Display for DownloadsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.songs.is_empty() {
            return write!(
                f,
                "{}",
                empty_state("No downloads yet", "Download songs to access them offline")
            );
        }
        for song in &self.songs {
            writeln!(
                f,
                "  {} - {}  | {} | {} downloads",
                song.title, song.artist, song.album, song.downloads
            )?;
        }
        Ok(())
    }
}
