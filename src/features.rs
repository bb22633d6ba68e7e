//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod controls;
pub mod session;
pub mod settings;
pub mod video;

pub use session::{
    ADMIN_KEY, ADMIN_REVIEWS_KEY, ADMIN_SONGS_KEY, ADMIN_USERS_KEY, SessionStore, USER_KEY,
};
pub use settings::Settings;
