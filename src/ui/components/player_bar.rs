//! Bottom player bar component

use std::fmt;

use crate::app::App;
use crate::playback::{PlaybackState, format_time};
use crate::ui::theme::{PAUSED, PLAYING};

/// Build the player bar from the controller and the last progress reading
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBar {
    /// Title and artist of the current entry
    pub now_playing: Option<(String, String)>,
    pub state: PlaybackState,
    /// 1-based queue position and queue length
    pub track: Option<(usize, usize)>,
    pub position: f64,
    pub duration: f64,
    pub shuffle: bool,
    pub repeat: bool,
    pub volume: u8,
    pub muted: bool,
}

impl PlayerBar {
    pub fn new(app: &App) -> Self {
        let playback = &app.playback;
        let (position, duration) = app
            .ui
            .progress
            .map(|p| (p.position, p.duration))
            .unwrap_or((0.0, 0.0));
        Self {
            now_playing: playback
                .current()
                .map(|e| (e.title.clone(), e.artist.clone())),
            state: playback.state(),
            track: playback
                .queue_index()
                .map(|idx| (idx + 1, playback.queue().len())),
            position,
            duration,
            shuffle: playback.shuffle(),
            repeat: playback.repeat(),
            volume: playback.volume(),
            muted: playback.is_muted(),
        }
    }

    fn state_label(&self) -> &'static str {
        match self.state {
            PlaybackState::Uninitialized => "Stopped",
            PlaybackState::Loading => "Loading",
            PlaybackState::Ready => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Ended => "Ended",
        }
    }
}

impl fmt::Display for PlayerBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((title, artist)) = &self.now_playing else {
            return write!(f, "Nothing playing");
        };
        let icon = if self.state == PlaybackState::Playing {
            PLAYING
        } else {
            PAUSED
        };
        write!(f, "{} {} - {}  [{}]", icon, title, artist, self.state_label())?;
        match self.track {
            Some((number, total)) => writeln!(f, "  {}/{}", number, total)?,
            None => writeln!(f)?,
        }
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        write!(
            f,
            "{} / {}  shuffle {}  repeat {}  volume {}{}",
            format_time(self.position),
            format_time(self.duration),
            on_off(self.shuffle),
            on_off(self.repeat),
            self.volume,
            if self.muted { " (muted)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_position_and_modes() {
        let bar = PlayerBar {
            now_playing: Some(("Imagine".into(), "John Lennon".into())),
            state: PlaybackState::Paused,
            track: None,
            position: 65.0,
            duration: 183.4,
            shuffle: true,
            repeat: false,
            volume: 40,
            muted: true,
        };
        assert_eq!(
            bar.to_string(),
            "⏸ Imagine - John Lennon  [Paused]\n1:05 / 3:03  shuffle on  repeat off  volume 40 (muted)"
        );
    }

    #[test]
    fn shows_queue_position() {
        let bar = PlayerBar {
            now_playing: Some(("Imagine".into(), "John Lennon".into())),
            state: PlaybackState::Playing,
            track: Some((2, 5)),
            position: 0.0,
            duration: 0.0,
            shuffle: false,
            repeat: false,
            volume: 70,
            muted: false,
        };
        let text = bar.to_string();
        assert!(text.starts_with("▶ Imagine - John Lennon  [Playing]  2/5\n"));
        assert_eq!(PlayerBar { now_playing: None, ..bar }.to_string(), "Nothing playing");
    }
}
