//! Message update handlers - thin dispatcher delegating to submodules

mod auth;
mod community;
mod navigation;
mod playback;
mod playlist;
mod songs;

use super::{ActionError, App, Effect, Message};
use crate::ui::Toast;

/// Upper bound on player event rounds drained after one message
const MAX_EVENT_ROUNDS: usize = 16;

impl App {
    /// Handle a message, then drain whatever the player reported meanwhile
    pub async fn update(&mut self, message: Message) -> Effect {
        // A toast lasts until the next user action
        if !matches!(message, Message::Tick | Message::Player(_)) {
            if let Some(toast) = self.ui.toast.as_mut() {
                toast.hide();
            }
        }
        let effect = self.dispatch(&message).await;
        let player_effect = self.drain_player_events().await;
        effect.and(player_effect)
    }

    /// Try each handler in order until one handles the message
    async fn dispatch(&mut self, message: &Message) -> Effect {
        if let Some(effect) = self.handle_auth(message).await {
            return effect;
        }
        if let Some(effect) = self.handle_navigation(message).await {
            return effect;
        }
        if let Some(effect) = self.handle_songs(message).await {
            return effect;
        }
        if let Some(effect) = self.handle_community(message).await {
            return effect;
        }
        if let Some(effect) = self.handle_playlist(message).await {
            return effect;
        }
        if let Some(effect) = self.handle_playback(message).await {
            return effect;
        }

        Effect::None
    }

    async fn drain_player_events(&mut self) -> Effect {
        let mut effect = Effect::None;
        for _ in 0..MAX_EVENT_ROUNDS {
            let events = self.playback.take_events();
            if events.is_empty() {
                return effect;
            }
            for event in events {
                effect = effect.and(self.on_player_event(event).await);
            }
        }
        tracing::warn!("Player kept emitting events, deferring the rest");
        effect
    }

    /// Turn an action result into its effect, alerting on failure
    pub(crate) fn finish(&mut self, result: Result<Effect, ActionError>) -> Effect {
        match result {
            Ok(effect) => effect,
            Err(e) => {
                tracing::warn!("Action refused: {}", e);
                self.alert(Toast::error(e.to_string()))
            }
        }
    }

    pub(crate) fn require_user(&self) -> Result<crate::database::User, ActionError> {
        self.library
            .current_user
            .clone()
            .ok_or(ActionError::NotLoggedIn)
    }
}
