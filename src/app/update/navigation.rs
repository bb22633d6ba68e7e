//! Screen, modal, search and sort handlers

use crate::app::{ActionError, App, Effect, Message, Modal, SongDetails, ThreadDetails};
use crate::database::average_rating;

impl App {
    /// Handle navigation-related messages
    pub async fn handle_navigation(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::Navigate(screen) => {
                tracing::debug!("Navigate to {:?}", screen);
                self.ui.screen = *screen;
                self.ui.modal = None;
                Some(Effect::None)
            }
            Message::ShowSongDetails(song_id) => {
                let result = self.open_song_details(*song_id).await.map(|_| Effect::None);
                Some(self.finish(result))
            }
            Message::ViewThread(thread_id) => {
                let result = self.open_thread(*thread_id).await.map(|_| Effect::None);
                Some(self.finish(result))
            }
            Message::SearchChanged(query) => {
                self.ui.search_query = query.clone();
                Some(Effect::None)
            }
            Message::SortChanged(key) => {
                self.ui.sort = *key;
                Some(Effect::None)
            }
            _ => None,
        }
    }

    /// Load reviews, rating and threads of a song into the details modal
    pub(crate) async fn open_song_details(&mut self, song_id: i64) -> Result<(), ActionError> {
        if self.library.song(song_id).is_none() {
            return Err(ActionError::SongNotFound(song_id));
        }

        let mut reviews = self.core.db.get_reviews_by_song(song_id).await?;
        let mut threads = self.core.db.get_threads_by_song(song_id).await?;
        reviews.sort_by_key(|r| r.id);
        threads.sort_by_key(|t| t.id);
        let average = average_rating(&reviews);

        self.ui.modal = Some(Modal::SongDetails(SongDetails {
            song_id,
            average,
            reviews,
            threads,
        }));
        Ok(())
    }

    /// Load a thread and its replies into the thread modal
    pub(crate) async fn open_thread(&mut self, thread_id: i64) -> Result<(), ActionError> {
        let thread = self
            .core
            .db
            .get_thread(thread_id)
            .await?
            .ok_or(ActionError::ThreadNotFound(thread_id))?;
        let mut replies = self.core.db.get_replies_by_thread(thread_id).await?;
        replies.sort_by_key(|r| r.id);

        self.ui.modal = Some(Modal::Thread(ThreadDetails { thread, replies }));
        Ok(())
    }
}
