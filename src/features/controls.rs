//! Player controls typed while a song plays
//!
//! One command per line; an empty line toggles play/pause.

use thiserror::Error;

/// Every action available from the control prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    PlayPause,
    Next,
    Previous,
    Mute,
    /// Percentage of the current video, 0 to 100
    Seek(f64),
    /// 0 to 100
    Volume(u8),
    /// Favorite the song that is playing
    Favorite,
    Shuffle,
    Repeat,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs a number from 0 to 100")]
    BadArgument(&'static str),
}

/// Help line listing the commands
pub const HELP: &str = "Commands: <enter>/p pause, n next, b back, m mute, s <0-100> seek, \
v <0-100> volume, f favorite, shuffle, repeat, q quit";

impl PlayerAction {
    pub fn parse(line: &str) -> Result<Self, ControlError> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(PlayerAction::PlayPause);
        };
        let percent = |name: &'static str, arg: Option<&str>| -> Result<f64, ControlError> {
            arg.and_then(|a| a.parse::<f64>().ok())
                .filter(|v| (0.0..=100.0).contains(v))
                .ok_or(ControlError::BadArgument(name))
        };

        let action = match command.to_lowercase().as_str() {
            "p" | "pause" | "play" => PlayerAction::PlayPause,
            "n" | "next" => PlayerAction::Next,
            "b" | "back" | "prev" => PlayerAction::Previous,
            "m" | "mute" => PlayerAction::Mute,
            "s" | "seek" => PlayerAction::Seek(percent("seek", words.next())?),
            "v" | "volume" => PlayerAction::Volume(percent("volume", words.next())?.round() as u8),
            "f" | "fav" | "favorite" => PlayerAction::Favorite,
            "shuffle" => PlayerAction::Shuffle,
            "repeat" => PlayerAction::Repeat,
            "q" | "quit" => PlayerAction::Quit,
            other => return Err(ControlError::Unknown(other.to_string())),
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(PlayerAction::parse(""), Ok(PlayerAction::PlayPause));
        assert_eq!(PlayerAction::parse("  N "), Ok(PlayerAction::Next));
        assert_eq!(PlayerAction::parse("back"), Ok(PlayerAction::Previous));
        assert_eq!(PlayerAction::parse("s 42.5"), Ok(PlayerAction::Seek(42.5)));
        assert_eq!(PlayerAction::parse("volume 30"), Ok(PlayerAction::Volume(30)));
        assert_eq!(PlayerAction::parse("f"), Ok(PlayerAction::Favorite));
        assert_eq!(PlayerAction::parse("q"), Ok(PlayerAction::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            PlayerAction::parse("jump"),
            Err(ControlError::Unknown("jump".into()))
        );
        assert_eq!(PlayerAction::parse("s"), Err(ControlError::BadArgument("seek")));
        assert_eq!(
            PlayerAction::parse("v 120"),
            Err(ControlError::BadArgument("volume"))
        );
    }
}
