//! Player widget abstraction

/// Widget-reported playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Ended,
    Playing,
    Paused,
    /// New media loaded, not started yet
    Cued,
}

/// Asynchronous notifications from the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Widget finished initializing after `create`
    Ready,
    StateChanged(PlayerState),
    Error(i32),
}

/// An embeddable video player.
///
/// Commands return immediately; their effects arrive later as events from
/// `take_events`.
pub trait VideoPlayer {
    /// Build the widget with an initial video; `Ready` follows
    fn create(&mut self, video_id: &str);
    /// Swap the video on an existing widget
    fn load(&mut self, video_id: &str);
    fn play(&mut self);
    fn pause(&mut self);
    /// Volume 0 to 100
    fn set_volume(&mut self, volume: u8);
    fn mute(&mut self);
    fn unmute(&mut self);
    fn is_muted(&self) -> bool;
    fn seek_to(&mut self, seconds: f64);
    /// Position in seconds
    fn current_time(&self) -> f64;
    /// Length in seconds, 0 while unknown
    fn duration(&self) -> f64;
    /// Drain pending events in arrival order
    fn take_events(&mut self) -> Vec<PlayerEvent>;
}
