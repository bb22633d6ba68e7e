//! Playlist handlers

use crate::app::error::require;
use crate::app::{ActionError, App, Effect, Message};
use crate::database::NewPlaylist;
use crate::ui::Toast;

impl App {
    /// Handle playlist-related messages
    pub async fn handle_playlist(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::CreatePlaylist {
                name,
                description,
                is_public,
            } => {
                let result = self
                    .create_playlist(name, description.clone(), *is_public)
                    .await;
                Some(self.finish(result))
            }
            Message::AddToPlaylist {
                playlist_id,
                song_id,
            } => {
                let result = self.add_to_playlist(*playlist_id, *song_id).await;
                Some(self.finish(result))
            }
            Message::RemoveFromPlaylist {
                playlist_id,
                song_id,
            } => {
                let result = self.remove_from_playlist(*playlist_id, *song_id).await;
                Some(self.finish(result))
            }
            _ => None,
        }
    }

    async fn create_playlist(
        &mut self,
        name: &str,
        description: Option<String>,
        is_public: bool,
    ) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        require("name", name)?;

        let id = self
            .core
            .db
            .create_playlist(NewPlaylist {
                user_id: user.id,
                name: name.trim().to_string(),
                description: description.filter(|d| !d.trim().is_empty()),
                songs: Vec::new(),
                is_public,
            })
            .await?;
        tracing::info!("Created playlist {}", id);

        self.load_playlists().await?;
        Ok(self.alert(Toast::success("Playlist created")))
    }

    /// Playlists can only be edited by their owner
    fn require_own_playlist(&self, playlist_id: i64) -> Result<(), ActionError> {
        self.require_user()?;
        if self.library.playlists.iter().any(|p| p.id == playlist_id) {
            Ok(())
        } else {
            Err(ActionError::PlaylistNotFound(playlist_id))
        }
    }

    async fn add_to_playlist(&mut self, playlist_id: i64, song_id: i64) -> Result<Effect, ActionError> {
        self.require_own_playlist(playlist_id)?;
        if self.library.song(song_id).is_none() {
            return Err(ActionError::SongNotFound(song_id));
        }

        self.core.db.add_song_to_playlist(playlist_id, song_id).await?;
        self.load_playlists().await?;
        Ok(Effect::None)
    }

    async fn remove_from_playlist(
        &mut self,
        playlist_id: i64,
        song_id: i64,
    ) -> Result<Effect, ActionError> {
        self.require_own_playlist(playlist_id)?;
        self.core
            .db
            .remove_song_from_playlist(playlist_id, song_id)
            .await?;
        self.load_playlists().await?;
        Ok(Effect::None)
    }
}
