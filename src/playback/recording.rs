//! Scriptable player that records every command

use std::cell::RefCell;
use std::rc::Rc;

use super::player::{PlayerEvent, PlayerState, VideoPlayer};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(String),
    Load(String),
    Play,
    Pause,
    SetVolume(u8),
    Mute,
    Unmute,
    SeekTo(f64),
}

#[derive(Debug, Default)]
pub struct Script {
    pub commands: Vec<Command>,
    pub pending: Vec<PlayerEvent>,
    pub position: f64,
    pub duration: f64,
    pub muted: bool,
    /// Emit `StateChanged` events in response to play/pause
    pub echo_state: bool,
}

/// Player whose state lives behind a shared handle so tests can inspect
/// commands and inject events after handing the player to a controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    script: Rc<RefCell<Script>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        let player = Self::default();
        player.script.borrow_mut().echo_state = true;
        player
    }

    pub fn handle(&self) -> Rc<RefCell<Script>> {
        Rc::clone(&self.script)
    }

    fn record(&self, command: Command) {
        self.script.borrow_mut().commands.push(command);
    }
}

impl VideoPlayer for RecordingPlayer {
    fn create(&mut self, video_id: &str) {
        self.record(Command::Create(video_id.to_string()));
    }

    fn load(&mut self, video_id: &str) {
        self.record(Command::Load(video_id.to_string()));
    }

    fn play(&mut self) {
        self.record(Command::Play);
        let mut script = self.script.borrow_mut();
        if script.echo_state {
            script
                .pending
                .push(PlayerEvent::StateChanged(PlayerState::Playing));
        }
    }

    fn pause(&mut self) {
        self.record(Command::Pause);
        let mut script = self.script.borrow_mut();
        if script.echo_state {
            script
                .pending
                .push(PlayerEvent::StateChanged(PlayerState::Paused));
        }
    }

    fn set_volume(&mut self, volume: u8) {
        self.record(Command::SetVolume(volume));
    }

    fn mute(&mut self) {
        self.record(Command::Mute);
        self.script.borrow_mut().muted = true;
    }

    fn unmute(&mut self) {
        self.record(Command::Unmute);
        self.script.borrow_mut().muted = false;
    }

    fn is_muted(&self) -> bool {
        self.script.borrow().muted
    }

    fn seek_to(&mut self, seconds: f64) {
        self.record(Command::SeekTo(seconds));
        self.script.borrow_mut().position = seconds;
    }

    fn current_time(&self) -> f64 {
        self.script.borrow().position
    }

    fn duration(&self) -> f64 {
        self.script.borrow().duration
    }

    fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.script.borrow_mut().pending)
    }
}
