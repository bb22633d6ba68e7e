//! Registration, login and logout

use crate::app::error::require;
use crate::app::{ActionError, App, Effect, Message, Screen};
use crate::database::{NewUser, StoreError, User};
use crate::features::USER_KEY;
use crate::ui::Toast;

impl App {
    /// Handle auth-related messages
    pub async fn handle_auth(&mut self, message: &Message) -> Option<Effect> {
        match message {
            Message::Register {
                username,
                email,
                password,
            } => {
                let result = self.register(username, email, password).await;
                Some(self.finish(result))
            }
            Message::Login { username, password } => {
                let result = self.login(username, password).await;
                Some(self.finish(result))
            }
            Message::Logout => Some(self.logout().await),
            _ => None,
        }
    }

    async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Effect, ActionError> {
        require("username", username)?;
        require("email", email)?;
        require("password", password)?;

        let db = &self.core.db;
        if db.get_user_by_username(username).await?.is_some() {
            return Err(ActionError::UsernameTaken);
        }
        if db.get_user_by_email(email).await?.is_some() {
            return Err(ActionError::EmailTaken);
        }

        let user_id = db
            .create_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                is_admin: false,
            })
            .await
            .map_err(|e| match e {
                // Lost a race against another registration
                StoreError::Duplicate { .. } => ActionError::UsernameTaken,
                other => other.into(),
            })?;

        let user: User = db
            .get(user_id)
            .await?
            .ok_or(StoreError::NotFound {
                table: crate::database::Table::Users,
                id: user_id,
            })?;

        self.sign_in(user).await;
        Ok(Effect::None)
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<Effect, ActionError> {
        let user = self.core.db.get_user_by_username(username).await?;
        // Plaintext comparison, demo accounts only
        match user {
            Some(user) if user.password == password => {
                self.sign_in(user).await;
                Ok(Effect::None)
            }
            _ => Err(ActionError::InvalidCredentials),
        }
    }

    async fn sign_in(&mut self, user: User) {
        tracing::info!("Signed in as {}", user.username);
        if let Err(e) = self.core.session.save(USER_KEY, &user) {
            tracing::warn!("Failed to save session snapshot: {}", e);
        }
        self.library.current_user = Some(user);
        self.ui.screen = Screen::Home;
        self.ui.modal = None;
        self.reload_library().await;
    }

    async fn logout(&mut self) -> Effect {
        let Some(user) = self.library.current_user.take() else {
            return Effect::None;
        };
        tracing::info!("Signed out {}", user.username);
        if let Err(e) = self.core.session.clear(USER_KEY) {
            tracing::warn!("Failed to clear session snapshot: {}", e);
        }
        self.playback.pause();
        self.ui.modal = None;
        self.ui.screen = Screen::Home;
        self.reload_library().await;
        self.alert(Toast::info("Signed out"))
    }
}
