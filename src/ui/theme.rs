//! Text theme: glyphs and separators shared by every view

/// Separator between stacked frame sections
pub const RULE: &str = "────────────────────────────────────────";

pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';

/// Favorite marker
pub const HEART: &str = "♥";
pub const HEART_EMPTY: &str = "♡";

/// Marker of the selected sidebar entry
pub const SELECTED: &str = "▸";

pub const PLAYING: &str = "▶";
pub const PAUSED: &str = "⏸";
