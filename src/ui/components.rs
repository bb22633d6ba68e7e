//! UI Components - view-models built from application state
//!
//! Components are the only layer besides pages that read `crate::app`.

mod player_bar;
mod sidebar;
mod song_details;
mod thread_view;

pub use player_bar::PlayerBar;
pub use sidebar::Sidebar;
pub use song_details::SongDetailsView;
pub use thread_view::ThreadView;
