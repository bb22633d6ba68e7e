//! MusicAE - a music catalog and community app
//! Songs linked to videos, reviews, discussion threads, favorites and playlists

mod admin;
mod app;
mod database;
mod features;
mod playback;
mod ui;

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::admin::{
    AdminPanel, ReviewsList, SongDetails, SongsTable, TextChart, UserDetails, UsersTable,
};
use crate::app::{App, Effect, Message, Screen, SongForm, SortKey};
use crate::database::Database;
use crate::features::controls::{self, PlayerAction};
use crate::features::{SessionStore, Settings};
use crate::playback::{HeadlessPlayer, PlaybackState};

#[derive(Debug, Parser)]
#[command(name = "musicae", version, about = "Music catalog and community")]
struct Cli {
    /// Data directory for the database, settings and session snapshots
    #[arg(long, env = "MUSICAE_DATA", global = true)]
    data: Option<PathBuf>,

    /// Log filter, e.g. `info` or `musicae=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert the demo users, songs and reviews into an empty database
    Seed,
    /// Delete every record
    Wipe,
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
    /// Render a screen
    Show {
        #[arg(value_enum, default_value_t = ScreenArg::Home)]
        screen: ScreenArg,
        /// Library search text
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Song details: metadata, reviews and threads
    Details { song_id: i64 },
    /// A discussion thread with its replies
    Thread { thread_id: i64 },
    AddSong {
        title: String,
        artist: String,
        genre: String,
        url: String,
        #[arg(long)]
        album: Option<String>,
    },
    Favorite { song_id: i64 },
    Download { song_id: i64 },
    Review {
        song_id: i64,
        rating: i64,
        comment: String,
    },
    NewThread {
        song_id: i64,
        title: String,
        content: String,
    },
    Reply { thread_id: i64, content: String },
    #[command(subcommand)]
    Playlist(PlaylistCommand),
    /// Play a song on the headless player; stdin lines control playback
    Play {
        song_id: i64,
        /// Stop after this many seconds
        #[arg(long, default_value_t = 5)]
        seconds: u64,
        #[arg(long)]
        shuffle: bool,
        #[arg(long)]
        repeat: bool,
        #[arg(long)]
        volume: Option<u8>,
    },
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
enum PlaylistCommand {
    List,
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        public: bool,
    },
    Add { playlist_id: i64, song_id: i64 },
    Remove { playlist_id: i64, song_id: i64 },
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    Login {
        username: String,
        password: String,
        code: String,
    },
    Logout,
    Dashboard,
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    Songs {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = admin::ALL)]
        genre: String,
    },
    Reviews {
        #[arg(long, default_value = admin::ALL)]
        status: String,
    },
    Analytics,
    /// Details of one user
    User { id: i64 },
    /// Details of one song
    Song { id: i64 },
    DeleteUser { id: i64 },
    DeleteSong { id: i64 },
    ApproveReview { id: i64 },
    DeleteReview { id: i64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScreenArg {
    Home,
    Library,
    Discover,
    Downloads,
    Profile,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Home => Screen::Home,
            ScreenArg::Library => Screen::Library,
            ScreenArg::Discover => Screen::Discover,
            ScreenArg::Downloads => Screen::Downloads,
            ScreenArg::Profile => Screen::Profile,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Title,
    Artist,
    Rating,
    Recent,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Artist => SortKey::Artist,
            SortArg::Rating => SortKey::Rating,
            SortArg::Recent => SortKey::Recent,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = match &cli.data {
        Some(dir) => dir.clone(),
        None => features::settings::default_data_dir()
            .context("could not determine a data directory, pass --data")?,
    };
    let session = SessionStore::new(&data_dir);

    // Admin panel runs on mock data and never opens the database
    if let Command::Admin(command) = cli.command {
        return run_admin(AdminPanel::new(session), command);
    }

    let settings_path = match &cli.data {
        Some(dir) => Some(dir.join("settings.json")),
        None => Settings::file_path(),
    };
    let settings = settings_path
        .as_deref()
        .filter(|path| path.exists())
        .map(Settings::load_from_file)
        .transpose()
        .context("failed to load settings")?
        .unwrap_or_default();

    let db_path = settings.database_path(&data_dir);
    let db = Database::open(&db_path)
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    match cli.command {
        Command::Seed => {
            let seeded = db.seed_once().await.context("seeding failed")?;
            println!(
                "{}",
                if seeded {
                    "Demo data inserted"
                } else {
                    "Database already has songs, nothing to do"
                }
            );
            db.close().await;
            return Ok(());
        }
        Command::Wipe => {
            db.wipe_all().await.context("wipe failed")?;
            println!("All records deleted");
            db.close().await;
            return Ok(());
        }
        _ => {}
    }

    if let Err(e) = db.seed_once().await {
        tracing::warn!("Seeding skipped: {}", e);
    }

    let player = Box::new(HeadlessPlayer::new());
    let mut app = App::new(db, settings, settings_path, session, player).await;

    let screen = run_command(&mut app, cli.command).await;
    if let Some(screen) = screen {
        app.update(Message::Navigate(screen)).await;
        println!("{}", ui::render_screen(&app));
    }
    app.core.db.close().await;
    Ok(())
}

/// Run one app command, printing its outcome.
/// Returns a screen to render afterwards.
async fn run_command(app: &mut App, command: Command) -> Option<Screen> {
    match command {
        Command::Register {
            username,
            email,
            password,
        } => {
            let effect = app
                .update(Message::Register {
                    username,
                    email,
                    password,
                })
                .await;
            report(&effect);
            app.is_logged_in().then_some(Screen::Profile)
        }
        Command::Login { username, password } => {
            let effect = app.update(Message::Login { username, password }).await;
            report(&effect);
            app.is_logged_in().then_some(Screen::Home)
        }
        Command::Logout => {
            report(&app.update(Message::Logout).await);
            None
        }
        Command::Show {
            screen,
            search,
            sort,
        } => {
            if let Some(query) = search {
                app.update(Message::SearchChanged(query)).await;
            }
            if let Some(sort) = sort {
                app.update(Message::SortChanged(sort.into())).await;
            }
            Some(screen.into())
        }
        Command::Details { song_id } => {
            report(&app.update(Message::ShowSongDetails(song_id)).await);
            print_modal(app);
            None
        }
        Command::Thread { thread_id } => {
            report(&app.update(Message::ViewThread(thread_id)).await);
            print_modal(app);
            None
        }
        Command::AddSong {
            title,
            artist,
            genre,
            url,
            album,
        } => {
            let form = SongForm {
                title,
                artist,
                album,
                genre,
                video_url: url,
            };
            report(&app.update(Message::AddSong(form)).await);
            Some(Screen::Library)
        }
        Command::Favorite { song_id } => {
            report(&app.update(Message::ToggleFavorite(song_id)).await);
            Some(Screen::Library)
        }
        Command::Download { song_id } => {
            report(&app.update(Message::Download(song_id)).await);
            Some(Screen::Downloads)
        }
        Command::Review {
            song_id,
            rating,
            comment,
        } => {
            let effect = app
                .update(Message::AddReview {
                    song_id,
                    rating,
                    comment,
                })
                .await;
            report(&effect);
            print_modal(app);
            None
        }
        Command::NewThread {
            song_id,
            title,
            content,
        } => {
            let effect = app
                .update(Message::CreateThread {
                    song_id,
                    title,
                    content,
                })
                .await;
            report(&effect);
            print_modal(app);
            None
        }
        Command::Reply { thread_id, content } => {
            report(&app.update(Message::AddReply { thread_id, content }).await);
            print_modal(app);
            None
        }
        Command::Playlist(command) => {
            run_playlist(app, command).await;
            None
        }
        Command::Play {
            song_id,
            seconds,
            shuffle,
            repeat,
            volume,
        } => {
            play(app, song_id, seconds, shuffle, repeat, volume).await;
            None
        }
        Command::Seed | Command::Wipe | Command::Admin(_) => None,
    }
}

async fn run_playlist(app: &mut App, command: PlaylistCommand) {
    let message = match command {
        PlaylistCommand::List => None,
        PlaylistCommand::Create {
            name,
            description,
            public,
        } => Some(Message::CreatePlaylist {
            name,
            description,
            is_public: public,
        }),
        PlaylistCommand::Add {
            playlist_id,
            song_id,
        } => Some(Message::AddToPlaylist {
            playlist_id,
            song_id,
        }),
        PlaylistCommand::Remove {
            playlist_id,
            song_id,
        } => Some(Message::RemoveFromPlaylist {
            playlist_id,
            song_id,
        }),
    };
    if let Some(message) = message {
        report(&app.update(message).await);
    }

    if !app.is_logged_in() {
        println!("Sign in to see your playlists");
        return;
    }
    if app.library.playlists.is_empty() {
        println!("No playlists yet");
    }
    for playlist in &app.library.playlists {
        let titles: Vec<&str> = playlist
            .songs
            .iter()
            .filter_map(|id| app.library.song(*id))
            .map(|entry| entry.song.title.as_str())
            .collect();
        println!(
            "#{} {}{}: {}",
            playlist.id,
            playlist.name,
            if playlist.is_public { " (public)" } else { "" },
            titles.join(", ")
        );
    }
}

/// Drive the headless player, polling progress on the configured interval
/// and applying control lines read from stdin until the time is up.
async fn play(
    app: &mut App,
    song_id: i64,
    seconds: u64,
    shuffle: bool,
    repeat: bool,
    volume: Option<u8>,
) {
    if shuffle != app.playback.shuffle() {
        app.update(Message::ToggleShuffle).await;
    }
    if repeat != app.playback.repeat() {
        app.update(Message::ToggleRepeat).await;
    }
    if let Some(volume) = volume {
        app.update(Message::SetVolume(volume)).await;
    }

    let effect = app.update(Message::Play(song_id)).await;
    report(&effect);
    if app.playback.state() == PlaybackState::Uninitialized {
        return;
    }

    let interval_ms = app.core.settings.playback.progress_interval_ms.max(50);
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    println!("{}", controls::HELP);
    let mut input = spawn_line_reader();
    let mut input_open = true;
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = interval.tick() => {
                report(&app.update(Message::Tick).await);
                println!("{}", ui::components::PlayerBar::new(app));
            }
            line = input.recv(), if input_open => {
                let Some(line) = line else {
                    input_open = false;
                    continue;
                };
                match PlayerAction::parse(&line).map(control_message) {
                    Ok(Some(message)) => {
                        report(&app.update(message).await);
                        println!("{}", ui::components::PlayerBar::new(app));
                    }
                    Ok(None) => break,
                    Err(e) => println!("{}. {}", e, controls::HELP),
                }
            }
        }
    }
}

/// Message for a control action, `None` to stop playing
fn control_message(action: PlayerAction) -> Option<Message> {
    let message = match action {
        PlayerAction::PlayPause => Message::TogglePlay,
        PlayerAction::Next => Message::Next,
        PlayerAction::Previous => Message::Previous,
        PlayerAction::Mute => Message::ToggleMute,
        PlayerAction::Seek(percent) => Message::Seek(percent),
        PlayerAction::Volume(volume) => Message::SetVolume(volume),
        PlayerAction::Favorite => Message::ToggleCurrentFavorite,
        PlayerAction::Shuffle => Message::ToggleShuffle,
        PlayerAction::Repeat => Message::ToggleRepeat,
        PlayerAction::Quit => return None,
    };
    Some(message)
}

/// Read stdin on a plain thread so a pending read never holds up shutdown
fn spawn_line_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn run_admin(mut panel: AdminPanel, command: AdminCommand) -> anyhow::Result<()> {
    if let AdminCommand::Login {
        username,
        password,
        code,
    } = &command
    {
        match panel.login(username, password, code) {
            Ok(account) => println!("Signed in as {} ({})", account.username, account.role),
            Err(e) => println!("{}", e),
        }
        return Ok(());
    }
    if let AdminCommand::Logout = command {
        panel.logout();
        println!("Admin signed out");
        return Ok(());
    }

    panel.require_admin()?;
    match command {
        AdminCommand::Dashboard => print!("{}", admin::Dashboard::new(&panel)),
        AdminCommand::Users { search } => print!("{}", UsersTable::new(panel.filter_users(&search))),
        AdminCommand::Songs { search, genre } => {
            let matching: Vec<i64> = panel.filter_songs(&search).iter().map(|s| s.id).collect();
            let rows = panel
                .songs_by_genre(&genre)
                .into_iter()
                .filter(|s| matching.contains(&s.id))
                .collect();
            print!("{}", SongsTable::new(rows));
        }
        AdminCommand::Reviews { status } => {
            print!("{}", ReviewsList::new(panel.reviews_by_status(&status)));
        }
        AdminCommand::Analytics => {
            let mut chart = TextChart::default();
            if panel.render_analytics(Some(&mut chart)) {
                print!("{}", chart.output);
            }
        }
        AdminCommand::User { id } => match panel.user(id) {
            Some(user) => print!("{}", UserDetails(user)),
            None => announce(false, "user", id),
        },
        AdminCommand::Song { id } => match panel.song(id) {
            Some(song) => print!("{}", SongDetails(song)),
            None => announce(false, "song", id),
        },
        AdminCommand::DeleteUser { id } => {
            announce(panel.delete_user(id), "user", id);
            print!("{}", UsersTable::new(panel.users().iter().collect()));
        }
        AdminCommand::DeleteSong { id } => {
            announce(panel.delete_song(id), "song", id);
            print!("{}", SongsTable::new(panel.songs().iter().collect()));
        }
        AdminCommand::ApproveReview { id } => {
            announce(panel.approve_review(id), "review", id);
            print!("{}", ReviewsList::new(panel.reviews().iter().collect()));
        }
        AdminCommand::DeleteReview { id } => {
            announce(panel.delete_review(id), "review", id);
            print!("{}", ReviewsList::new(panel.reviews().iter().collect()));
        }
        AdminCommand::Login { .. } | AdminCommand::Logout => {}
    }
    Ok(())
}

fn announce(found: bool, kind: &str, id: i64) {
    if !found {
        println!("No {} with id {}", kind, id);
    }
}

fn print_modal(app: &App) {
    if let Some(modal) = ui::render_modal(app) {
        println!("{}", modal);
    }
}

/// Print alerts and URLs requested by an update
fn report(effect: &Effect) {
    for alert in effect.alerts() {
        println!("{}", alert);
    }
    for url in effect.urls() {
        println!("Open {}", url);
    }
}
