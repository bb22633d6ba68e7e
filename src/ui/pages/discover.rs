//! Discover page: every song with its uploader

use std::fmt;

use crate::app::App;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverPage {
    /// (title, artist, genre, uploader)
    pub songs: Vec<(String, String, String, String)>,
}

impl DiscoverPage {
    pub fn new(app: &App) -> Self {
        Self {
            songs: app
                .library
                .songs
                .iter()
                .map(|e| {
                    let s = &e.song;
                    (
                        s.title.clone(),
                        s.artist.clone(),
                        s.genre.clone(),
                        s.user_name.clone(),
                    )
                })
                .collect(),
        }
    }
}

impl fmt::Display for DiscoverPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Discover")?;
        for (title, artist, genre, uploader) in &self.songs {
            writeln!(f, "  {} - {} [{}] by {}", title, artist, genre, uploader)?;
        }
        Ok(())
    }
}
