//! Headless player simulating the embeddable widget against the wall clock

use std::time::{Duration, Instant};

use super::player::{PlayerEvent, PlayerState, VideoPlayer};

/// Length assumed for every video
pub const DEFAULT_VIDEO_LENGTH: Duration = Duration::from_secs(210);

/// Plays nothing, but keeps position, volume and state the way the widget
/// reports them: ready right after creation, ended once the clock passes
/// the video length.
#[derive(Debug)]
pub struct HeadlessPlayer {
    video_id: Option<String>,
    length: Duration,
    /// Position accumulated before the current play stretch
    offset: Duration,
    /// Start of the current play stretch
    started: Option<Instant>,
    volume: u8,
    muted: bool,
    ended: bool,
    events: Vec<PlayerEvent>,
}

impl HeadlessPlayer {
    pub fn new() -> Self {
        Self::with_length(DEFAULT_VIDEO_LENGTH)
    }

    pub fn with_length(length: Duration) -> Self {
        Self {
            video_id: None,
            length,
            offset: Duration::ZERO,
            started: None,
            volume: 100,
            muted: false,
            ended: false,
            events: Vec::new(),
        }
    }

    fn position(&self) -> Duration {
        let running = self.started.map(|s| s.elapsed()).unwrap_or_default();
        (self.offset + running).min(self.length)
    }

    fn cue(&mut self, video_id: &str) {
        self.video_id = Some(video_id.to_string());
        self.offset = Duration::ZERO;
        self.started = None;
        self.ended = false;
    }
}

impl Default for HeadlessPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPlayer for HeadlessPlayer {
    fn create(&mut self, video_id: &str) {
        self.cue(video_id);
        self.events.push(PlayerEvent::Ready);
    }

    fn load(&mut self, video_id: &str) {
        self.cue(video_id);
        self.events.push(PlayerEvent::StateChanged(PlayerState::Cued));
    }

    fn play(&mut self) {
        if self.video_id.is_none() || self.started.is_some() {
            return;
        }
        if self.ended {
            self.offset = Duration::ZERO;
            self.ended = false;
        }
        self.started = Some(Instant::now());
        self.events.push(PlayerEvent::StateChanged(PlayerState::Playing));
    }

    fn pause(&mut self) {
        if self.started.is_none() {
            return;
        }
        self.offset = self.position();
        self.started = None;
        self.events.push(PlayerEvent::StateChanged(PlayerState::Paused));
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        tracing::debug!("Headless volume {}", self.volume);
    }

    fn mute(&mut self) {
        self.muted = true;
    }

    fn unmute(&mut self) {
        self.muted = false;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn seek_to(&mut self, seconds: f64) {
        let target = Duration::from_secs_f64(seconds.max(0.0)).min(self.length);
        self.offset = target;
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }

    fn current_time(&self) -> f64 {
        self.position().as_secs_f64()
    }

    fn duration(&self) -> f64 {
        if self.video_id.is_some() {
            self.length.as_secs_f64()
        } else {
            0.0
        }
    }

    fn take_events(&mut self) -> Vec<PlayerEvent> {
        if self.started.is_some() && self.position() >= self.length {
            self.offset = self.length;
            self.started = None;
            self.ended = true;
            self.events.push(PlayerEvent::StateChanged(PlayerState::Ended));
        }
        std::mem::take(&mut self.events)
    }
}
