// src/app/update/playback.rs
//! Playback control message handlers

use crate::app::{ActionError, App, Effect, Message};
use crate::playback::{Advance, PlayerEvent, PlayerOutcome, QueueEntry};
use crate::ui::Toast;

impl App {
    /// Handle playback-related messages
    pub async fn handle_playback(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::Play(song_id) => {
                let result = self.play_song(*song_id).await;
                Some(self.finish(result))
            }
            Message::Next => {
                let target = self.playback.advance();
                let result = self.advance_to(target).await;
                Some(self.finish(result))
            }
            Message::Previous => {
                let idx = self.playback.previous_index();
                let result = self.play_queue_index(idx).await;
                Some(self.finish(result))
            }
            Message::TogglePlay => {
                self.playback.toggle_play();
                Some(Effect::None)
            }
            Message::ToggleShuffle => {
                let shuffle = self.playback.toggle_shuffle();
                tracing::info!("Shuffle: {}", shuffle);
                self.core.settings.playback.shuffle = shuffle;
                self.persist_settings();
                Some(Effect::None)
            }
            Message::ToggleRepeat => {
                let repeat = self.playback.toggle_repeat();
                tracing::info!("Repeat: {}", repeat);
                self.core.settings.playback.repeat = repeat;
                self.persist_settings();
                Some(Effect::None)
            }
            Message::SetVolume(volume) => {
                self.playback.set_volume(*volume);
                self.core.settings.playback.volume = self.playback.volume();
                self.persist_settings();
                Some(Effect::None)
            }
            Message::ToggleMute => {
                let muted = self.playback.toggle_mute();
                tracing::debug!("Muted: {}", muted);
                Some(Effect::None)
            }
            Message::Seek(percent) => {
                self.playback.seek_percent(*percent);
                Some(Effect::None)
            }
            Message::Player(event) => Some(self.on_player_event(event.clone()).await),
            Message::Tick => {
                if let Some(progress) = self.playback.tick() {
                    self.ui.progress = Some(progress);
                }
                Some(Effect::None)
            }
            _ => None,
        }
    }

    async fn play_song(&mut self, song_id: i64) -> Result<Effect, ActionError> {
        let entry = self
            .library
            .song(song_id)
            .map(|s| s.queue_entry())
            .ok_or(ActionError::SongNotFound(song_id))?;

        self.playback.play(&entry)?;
        self.count_play(&entry).await?;
        Ok(Effect::None)
    }

    async fn play_queue_index(&mut self, idx: Option<usize>) -> Result<Effect, ActionError> {
        let Some(idx) = idx else {
            tracing::debug!("Queue is empty");
            return Ok(Effect::None);
        };
        if let Some(entry) = self.playback.play_index(idx)? {
            self.count_play(&entry).await?;
        }
        Ok(Effect::None)
    }

    async fn advance_to(&mut self, target: Option<Advance>) -> Result<Effect, ActionError> {
        match target {
            Some(Advance::Index(idx)) => self.play_queue_index(Some(idx)).await,
            Some(Advance::Current) => {
                if let Some(entry) = self.playback.replay_current()? {
                    self.count_play(&entry).await?;
                }
                Ok(Effect::None)
            }
            None => self.play_queue_index(None).await,
        }
    }

    /// Bump the play counter of a song that started and refresh the library
    async fn count_play(&mut self, entry: &QueueEntry) -> Result<(), ActionError> {
        self.ui.progress = None;
        self.core.db.increment_plays(entry.song_id).await?;
        self.load_songs().await
    }

    /// React to one event reported by the player
    pub(crate) async fn on_player_event(&mut self, event: PlayerEvent) -> Effect {
        match self.playback.handle_event(event) {
            PlayerOutcome::None => Effect::None,
            PlayerOutcome::Advance(target) => {
                let result = self.advance_to(Some(target)).await;
                self.finish(result)
            }
            PlayerOutcome::Failed(err) => self.alert(Toast::error(err.to_string())),
        }
    }
}
