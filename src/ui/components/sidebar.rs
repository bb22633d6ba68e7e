//! Navigation sidebar with the signed-in user

use std::fmt;

use crate::app::{App, Screen};
use crate::ui::theme::SELECTED;

#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub current: Screen,
    /// Avatar and name of the signed-in user
    pub user: Option<(String, String)>,
}

impl Sidebar {
    pub fn new(app: &App) -> Self {
        Self {
            current: app.ui.screen,
            user: app
                .library
                .current_user
                .as_ref()
                .map(|u| (u.avatar.clone(), u.username.clone())),
        }
    }
}

impl fmt::Display for Sidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some((avatar, name)) => writeln!(f, "MusicAE  [{}] {}", avatar, name)?,
            None => writeln!(f, "MusicAE  (not signed in)")?,
        }
        let items: Vec<String> = Screen::ALL
            .iter()
            .map(|screen| {
                if *screen == self.current {
                    format!("{} {}", SELECTED, screen.title())
                } else {
                    format!("  {}", screen.title())
                }
            })
            .collect();
        write!(f, "{}", items.join("  "))
    }
}
