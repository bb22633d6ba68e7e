//! Video playback
//!
//! - `VideoPlayer`: the embeddable player widget seam
//! - `PlaybackController`: lifecycle state machine and pass-through commands
//! - `QueueNavigator`: next/previous index policy
//! - `HeadlessPlayer`: wall-clock simulation of the widget for the CLI

mod controller;
mod headless;
pub mod player;
mod queue;
#[cfg(test)]
pub(crate) mod recording;

pub use controller::{
    Advance, PlaybackController, PlaybackState, PlayerOutcome, Progress, QueueEntry,
};
pub use headless::HeadlessPlayer;
pub use player::{PlayerEvent, VideoPlayer};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The song URL has no recognizable video id
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),
    /// Error code reported by the player widget
    #[error("{}. Try another video.", error_message(*.0))]
    Player(i32),
}

/// Human-readable text for a player error code
pub fn error_message(code: i32) -> &'static str {
    match code {
        2 => "Invalid video id",
        5 => "HTML5 player error",
        100 => "Video not found",
        101 | 150 => "The video owner does not allow embedded playback",
        _ => "Error playing the video",
    }
}

/// Format seconds as `m:ss`; zero, negative and NaN read as `0:00`
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
