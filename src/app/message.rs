//! Application messages

use crate::playback::PlayerEvent;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Library,
    Discover,
    Downloads,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Library,
        Screen::Discover,
        Screen::Downloads,
        Screen::Profile,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Library => "My Library",
            Screen::Discover => "Discover",
            Screen::Downloads => "Downloads",
            Screen::Profile => "Profile",
        }
    }
}

/// Library ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Storage order
    #[default]
    Added,
    Title,
    Artist,
    /// Highest average rating first
    Rating,
    /// Newest first
    Recent,
}

/// Input of the add-song form
#[derive(Debug, Clone, Default)]
pub struct SongForm {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub genre: String,
    pub video_url: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Auth ============
    Register {
        username: String,
        email: String,
        password: String,
    },
    Login {
        username: String,
        password: String,
    },
    Logout,

    // ============ Navigation ============
    Navigate(Screen),
    ShowSongDetails(i64),
    ViewThread(i64),
    /// Library search text
    SearchChanged(String),
    SortChanged(SortKey),

    // ============ Songs ============
    AddSong(SongForm),
    ToggleFavorite(i64),
    /// Favorite button on the player bar
    ToggleCurrentFavorite,
    Download(i64),

    // ============ Community ============
    AddReview {
        song_id: i64,
        rating: i64,
        comment: String,
    },
    CreateThread {
        song_id: i64,
        title: String,
        content: String,
    },
    AddReply {
        thread_id: i64,
        content: String,
    },

    // ============ Playlists ============
    CreatePlaylist {
        name: String,
        description: Option<String>,
        is_public: bool,
    },
    AddToPlaylist {
        playlist_id: i64,
        song_id: i64,
    },
    RemoveFromPlaylist {
        playlist_id: i64,
        song_id: i64,
    },

    // ============ Playback ============
    Play(i64),
    Next,
    Previous,
    TogglePlay,
    ToggleShuffle,
    ToggleRepeat,
    /// Volume 0 to 100
    SetVolume(u8),
    ToggleMute,
    /// Seek to a percentage of the current video
    Seek(f64),
    Player(PlayerEvent),
    /// Progress poll
    Tick,
}

/// Side effect requested by an update, carried out by the host
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Blocking message for the user
    Alert(String),
    OpenUrl(String),
    Batch(Vec<Effect>),
}

impl Effect {
    /// Combine two effects, dropping `None`s
    pub fn and(self, other: Effect) -> Effect {
        match (self, other) {
            (Effect::None, e) | (e, Effect::None) => e,
            (Effect::Batch(mut a), Effect::Batch(b)) => {
                a.extend(b);
                Effect::Batch(a)
            }
            (Effect::Batch(mut a), e) => {
                a.push(e);
                Effect::Batch(a)
            }
            (a, b) => Effect::Batch(vec![a, b]),
        }
    }

    /// Every alert text, in order
    pub fn alerts(&self) -> Vec<&str> {
        match self {
            Effect::Alert(text) => vec![text.as_str()],
            Effect::Batch(effects) => effects.iter().flat_map(Effect::alerts).collect(),
            _ => Vec::new(),
        }
    }

    /// Every URL to open, in order
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Effect::OpenUrl(url) => vec![url.as_str()],
            Effect::Batch(effects) => effects.iter().flat_map(Effect::urls).collect(),
            _ => Vec::new(),
        }
    }
}
