//! Playback controller - drives one `VideoPlayer` through its lifecycle
//!
//! ```text
//! Uninitialized --play--> Loading --Ready--> Ready --Playing--> Playing <--> Paused
//!                                                                  |
//!                                                                Ended --> owner advances the queue
//! ```
//!
//! Commands issued before the widget reports `Ready` are dropped, except
//! the volume which is remembered and applied on `Ready`.

use crate::features::settings::PlaybackSettings;
use crate::features::video::extract_video_id;

use super::PlaybackError;
use super::player::{PlayerEvent, PlayerState, VideoPlayer};
use super::queue::QueueNavigator;

/// One playable queue entry
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub song_id: i64,
    pub title: String,
    pub artist: String,
    pub video_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No widget yet
    #[default]
    Uninitialized,
    /// Widget created or media swapped, waiting for the player
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
}

/// Position snapshot for the progress bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub position: f64,
    pub duration: f64,
    /// 0 to 100
    pub percent: f64,
}

/// Where advancing (end of song or the next button) leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Play this queue index
    Index(usize),
    /// Repeat is on and the current entry is no longer queued: play it again
    Current,
}

/// What the owner should do after a player event
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerOutcome {
    None,
    /// The song ended, move on
    Advance(Advance),
    /// The widget reported an error
    Failed(PlaybackError),
}

pub struct PlaybackController {
    player: Box<dyn VideoPlayer>,
    state: PlaybackState,
    created: bool,
    ready: bool,
    queue: Vec<QueueEntry>,
    queue_index: Option<usize>,
    current: Option<QueueEntry>,
    shuffle: bool,
    repeat: bool,
    volume: u8,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("queue_len", &self.queue.len())
            .field("queue_index", &self.queue_index)
            .field("shuffle", &self.shuffle)
            .field("repeat", &self.repeat)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl PlaybackController {
    pub fn new(player: Box<dyn VideoPlayer>, settings: &PlaybackSettings) -> Self {
        Self {
            player,
            state: PlaybackState::Uninitialized,
            created: false,
            ready: false,
            queue: Vec::new(),
            queue_index: None,
            current: None,
            shuffle: settings.shuffle,
            repeat: settings.repeat,
            volume: settings.volume.min(100),
        }
    }

    // ============ Accessors ============

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn queue_index(&self) -> Option<usize> {
        self.queue_index
    }

    pub fn current(&self) -> Option<&QueueEntry> {
        self.current.as_ref()
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.ready && self.player.is_muted()
    }

    // ============ Queue ============

    /// Replace the queue; the current entry keeps its index if still present
    pub fn set_queue(&mut self, entries: Vec<QueueEntry>) {
        self.queue = entries;
        self.queue_index = self.current.as_ref().and_then(|current| self.position_of(current.song_id));
    }

    fn position_of(&self, song_id: i64) -> Option<usize> {
        self.queue.iter().position(|e| e.song_id == song_id)
    }

    fn navigator(&self) -> QueueNavigator {
        QueueNavigator::new(self.queue.len(), self.queue_index, self.shuffle, self.repeat)
    }

    /// Index the next button (or the end of a song) moves to
    pub fn next_index(&self) -> Option<usize> {
        self.navigator().next_index()
    }

    /// Target of the next button (or the end of a song)
    pub fn advance(&self) -> Option<Advance> {
        if self.repeat && self.queue_index.is_none() && self.current.is_some() {
            return Some(Advance::Current);
        }
        self.next_index().map(Advance::Index)
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.navigator().prev_index()
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    // ============ Commands ============

    /// Start playing `entry`.
    ///
    /// The first call creates the widget; later calls swap the media on it.
    /// A URL without a video id is refused before the widget is touched.
    pub fn play(&mut self, entry: &QueueEntry) -> Result<(), PlaybackError> {
        let video_id = extract_video_id(&entry.video_url)
            .ok_or_else(|| PlaybackError::InvalidUrl(entry.video_url.clone()))?;

        tracing::info!("Playing: {} - {}", entry.title, entry.artist);
        self.current = Some(entry.clone());
        self.queue_index = self.position_of(entry.song_id);

        if self.created {
            self.player.load(&video_id);
            self.player.play();
        } else {
            tracing::debug!("Creating player for {}", video_id);
            self.player.create(&video_id);
            self.created = true;
        }
        self.state = PlaybackState::Loading;
        Ok(())
    }

    /// Play the queue entry at `idx`, returns the entry that started
    pub fn play_index(&mut self, idx: usize) -> Result<Option<QueueEntry>, PlaybackError> {
        let Some(entry) = self.queue.get(idx).cloned() else {
            tracing::warn!("Invalid queue index: {}", idx);
            return Ok(None);
        };
        self.play(&entry)?;
        Ok(Some(entry))
    }

    /// Start the current entry again, returns it when there is one
    pub fn replay_current(&mut self) -> Result<Option<QueueEntry>, PlaybackError> {
        let Some(entry) = self.current.clone() else {
            return Ok(None);
        };
        self.play(&entry)?;
        Ok(Some(entry))
    }

    pub fn toggle_play(&mut self) {
        if !self.ready {
            tracing::debug!("Player not ready");
            return;
        }
        if self.state == PlaybackState::Playing {
            self.player.pause();
        } else {
            self.player.play();
        }
    }

    /// Pause if currently playing
    pub fn pause(&mut self) {
        if self.ready && self.state == PlaybackState::Playing {
            self.player.pause();
        }
    }

    /// Remember the volume (0 to 100), forwarding it once ready
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        if self.ready {
            self.player.set_volume(self.volume);
        }
    }

    /// Flip mute, returns whether the player is now muted
    pub fn toggle_mute(&mut self) -> bool {
        if !self.ready {
            return false;
        }
        if self.player.is_muted() {
            self.player.unmute();
        } else {
            self.player.mute();
        }
        self.player.is_muted()
    }

    /// Jump to a percentage (0 to 100) of the current video
    pub fn seek_percent(&mut self, percent: f64) {
        if !self.ready {
            return;
        }
        let duration = self.player.duration();
        if duration > 0.0 {
            self.player.seek_to(percent.clamp(0.0, 100.0) * duration / 100.0);
        }
    }

    /// Progress while playing with a known duration
    pub fn tick(&self) -> Option<Progress> {
        if !self.ready || self.state != PlaybackState::Playing {
            return None;
        }
        let duration = self.player.duration();
        if duration <= 0.0 {
            return None;
        }
        let position = self.player.current_time();
        Some(Progress {
            position,
            duration,
            percent: position / duration * 100.0,
        })
    }

    // ============ Events ============

    /// Pending events reported by the player
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        self.player.take_events()
    }

    pub fn handle_event(&mut self, event: PlayerEvent) -> PlayerOutcome {
        match event {
            PlayerEvent::Ready => {
                tracing::info!("Player ready");
                self.ready = true;
                self.state = PlaybackState::Ready;
                self.player.set_volume(self.volume);
                self.player.play();
                PlayerOutcome::None
            }
            PlayerEvent::StateChanged(PlayerState::Playing) => {
                self.state = PlaybackState::Playing;
                PlayerOutcome::None
            }
            PlayerEvent::StateChanged(PlayerState::Paused) => {
                self.state = PlaybackState::Paused;
                PlayerOutcome::None
            }
            PlayerEvent::StateChanged(PlayerState::Ended) => {
                self.state = PlaybackState::Ended;
                tracing::debug!("Song ended, advancing queue");
                match self.advance() {
                    Some(target) => PlayerOutcome::Advance(target),
                    None => PlayerOutcome::None,
                }
            }
            PlayerEvent::StateChanged(other) => {
                tracing::debug!("Player state: {:?}", other);
                PlayerOutcome::None
            }
            PlayerEvent::Error(code) => {
                let err = PlaybackError::Player(code);
                tracing::warn!("Player error {}: {}", code, err);
                PlayerOutcome::Failed(err)
            }
        }
    }
}
