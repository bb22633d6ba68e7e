//! Reviews, discussion threads and replies

use crate::app::error::require;
use crate::app::{ActionError, App, Effect, Message};
use crate::database::{MAX_RATING, MIN_RATING, NewReply, NewReview, NewThread, StoreError};
use crate::ui::Toast;

impl App {
    /// Handle community-related messages
    pub async fn handle_community(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::AddReview {
                song_id,
                rating,
                comment,
            } => {
                let result = self.add_review(*song_id, *rating, comment).await;
                Some(self.finish(result))
            }
            Message::CreateThread {
                song_id,
                title,
                content,
            } => {
                let result = self.create_thread(*song_id, title, content).await;
                Some(self.finish(result))
            }
            Message::AddReply { thread_id, content } => {
                let result = self.add_reply(*thread_id, content).await;
                Some(self.finish(result))
            }
            _ => None,
        }
    }

    async fn add_review(
        &mut self,
        song_id: i64,
        rating: i64,
        comment: &str,
    ) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ActionError::InvalidRating(rating));
        }
        require("comment", comment)?;
        if self.library.song(song_id).is_none() {
            return Err(ActionError::SongNotFound(song_id));
        }

        self.core
            .db
            .create_review(NewReview {
                song_id,
                user_id: user.id,
                user_name: user.username,
                rating,
                comment: comment.trim().to_string(),
            })
            .await?;

        // Ratings feed the library annotations
        self.load_songs().await?;
        self.open_song_details(song_id).await?;
        Ok(self.alert(Toast::success("Review added successfully!")))
    }

    async fn create_thread(
        &mut self,
        song_id: i64,
        title: &str,
        content: &str,
    ) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        require("title", title)?;
        require("content", content)?;
        if self.library.song(song_id).is_none() {
            return Err(ActionError::SongNotFound(song_id));
        }

        self.core
            .db
            .create_thread(NewThread {
                song_id,
                user_id: user.id,
                user_name: user.username,
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            })
            .await?;

        self.open_song_details(song_id).await?;
        Ok(self.alert(Toast::success("Thread created successfully!")))
    }

    async fn add_reply(&mut self, thread_id: i64, content: &str) -> Result<Effect, ActionError> {
        let user = self.require_user()?;
        require("reply", content)?;

        self.core
            .db
            .create_reply(NewReply {
                thread_id,
                user_id: user.id,
                user_name: user.username,
                content: content.trim().to_string(),
            })
            .await
            .map_err(|e| match e {
                StoreError::NotFound { .. } => ActionError::ThreadNotFound(thread_id),
                other => other.into(),
            })?;

        self.open_thread(thread_id).await?;
        Ok(Effect::None)
    }
}
