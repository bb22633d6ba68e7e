//! Song details modal: metadata, average rating, reviews and threads

use std::fmt;

use crate::app::{App, SongDetails};
use crate::database::{Review, Song, Thread};
use crate::ui::widgets::{empty_state, format_date, section_header, stars};

#[derive(Debug, Clone)]
pub struct SongDetailsView {
    pub song: Song,
    pub average: f64,
    pub reviews: Vec<Review>,
    pub threads: Vec<Thread>,
}

impl SongDetailsView {
    /// `None` when the song is no longer in the library
    pub fn new(app: &App, details: &SongDetails) -> Option<Self> {
        let song = app.library.song(details.song_id)?.song.clone();
        Some(Self {
            song,
            average: details.average,
            reviews: details.reviews.clone(),
            threads: details.threads.clone(),
        })
    }
}

impl fmt::Display for SongDetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let song = &self.song;
        writeln!(f, "{} - {}", song.title, song.artist)?;
        writeln!(
            f,
            "[{}]  {} downloads  {} plays",
            song.genre, song.downloads, song.plays
        )?;
        if let Some(thumbnail) = &song.thumbnail {
            writeln!(f, "Thumbnail: {}", thumbnail)?;
        }
        writeln!(f)?;
        writeln!(f, "Album: {}", song.album)?;
        writeln!(f, "Genre: {}", song.genre)?;
        writeln!(f, "Uploaded by: {}", song.user_name)?;
        writeln!(f, "Added: {}", format_date(song.added_at))?;
        writeln!(
            f,
            "Rating: {:.1} ★ ({} reviews)",
            self.average,
            self.reviews.len()
        )?;

        writeln!(f)?;
        writeln!(f, "{}", section_header("Reviews", Some(self.reviews.len())))?;
        if self.reviews.is_empty() {
            writeln!(f, "{}", empty_state("No reviews yet", "Be the first to rate this song"))?;
        }
        for review in &self.reviews {
            writeln!(f, "  {}  {}", review.user_name, stars(review.rating as f64))?;
            writeln!(f, "  {}", review.comment)?;
            writeln!(f, "  {}", format_date(review.created_at))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", section_header("Threads", Some(self.threads.len())))?;
        if self.threads.is_empty() {
            write!(f, "{}", empty_state("No discussion threads", "Start one to talk about this song"))?;
        }
        for thread in &self.threads {
            writeln!(f, "  #{} {} ({} replies)", thread.id, thread.title, thread.reply_count)?;
            writeln!(f, "  {}", thread.content)?;
            writeln!(
                f,
                "  by {}  {}",
                thread.user_name,
                format_date(thread.created_at)
            )?;
        }
        Ok(())
    }
}
