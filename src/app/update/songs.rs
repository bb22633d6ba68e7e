//! Song catalog handlers: add, favorite, download

use crate::app::error::require;
use crate::app::{ActionError, App, Effect, Message, SongForm};
use crate::database::NewSong;
use crate::features::video::extract_video_id;
use crate::ui::Toast;

impl App {
    /// Handle song-related messages
    pub async fn handle_songs(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::AddSong(form) => {
                let result = self.add_song(form).await;
                Some(self.finish(result))
            }
            Message::ToggleFavorite(song_id) => {
                let result = self.toggle_favorite(*song_id).await;
                Some(self.finish(result))
            }
            Message::ToggleCurrentFavorite => {
                let Some(song_id) = self.playback.current().map(|e| e.song_id) else {
                    return Some(Effect::None);
                };
                let result = self.toggle_favorite(song_id).await;
                Some(self.finish(result))
            }
            Message::Download(song_id) => {
                let result = self.download(*song_id).await;
                Some(self.finish(result))
            }
            _ => None,
        }
    }

    async fn add_song(&mut self, form: &SongForm) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        require("title", &form.title)?;
        require("artist", &form.artist)?;
        require("genre", &form.genre)?;
        require("video URL", &form.video_url)?;

        let song_id = self
            .core
            .db
            .create_song(NewSong {
                title: form.title.trim().to_string(),
                artist: form.artist.trim().to_string(),
                album: form.album.clone(),
                genre: form.genre.trim().to_string(),
                video_url: form.video_url.trim().to_string(),
                user_id: user.id,
                user_name: user.username.clone(),
            })
            .await?;
        tracing::info!("Song created with id {}", song_id);

        self.load_songs().await?;

        let toast = if extract_video_id(&form.video_url).is_some() {
            Toast::success("Song added successfully!")
        } else {
            Toast::warning("Song added, but its video URL is not recognized and it cannot be played")
        };
        Ok(self.alert(toast))
    }

    async fn toggle_favorite(&mut self, song_id: i64) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        let is_favorite = self.core.db.toggle_favorite(user.id, song_id).await;
        tracing::debug!("Song {} favorite: {}", song_id, is_favorite);
        self.load_songs().await?;
        Ok(Effect::None)
    }

    /// Count a download and open the video
    async fn download(&mut self, song_id: i64) -> Result<Effect, ActionError> {
        let url = self
            .library
            .song(song_id)
            .map(|s| s.song.video_url.clone())
            .ok_or(ActionError::SongNotFound(song_id))?;

        self.core.db.increment_downloads(song_id).await?;
        self.load_songs().await?;
        Ok(Effect::OpenUrl(url))
    }
}
