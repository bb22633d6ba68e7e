//! First-run demonstration data

use rand::Rng;
use sqlx::{Pool, Sqlite};

use super::{count, create_review, create_song, create_user};
use crate::database::error::StoreResult;
use crate::database::table::Table;
use crate::database::{NewReview, NewSong, NewUser};

/// Demo accounts: (username, email, password)
pub const SEED_USERS: [(&str, &str, &str); 3] = [
    ("MusicLover", "music@example.com", "demo123"),
    ("RockFan", "rock@example.com", "demo123"),
    ("mejo", "mejo@example.com", "1234"),
];

/// Demo songs: (title, artist, album, genre, url, index into SEED_USERS)
pub const SEED_SONGS: [(&str, &str, &str, &str, &str, usize); 7] = [
    (
        "Bohemian Rhapsody",
        "Queen",
        "A Night at the Opera",
        "Rock",
        "https://www.youtube.com/watch?v=fJ9rUzIMcZQ",
        0,
    ),
    (
        "Stairway to Heaven",
        "Led Zeppelin",
        "Led Zeppelin IV",
        "Rock",
        "https://www.youtube.com/watch?v=QkF3oxziUI4",
        0,
    ),
    (
        "Hotel California",
        "Eagles",
        "Hotel California",
        "Rock",
        "https://www.youtube.com/watch?v=09839DpTctU",
        0,
    ),
    (
        "Smells Like Teen Spirit",
        "Nirvana",
        "Nevermind",
        "Rock",
        "https://www.youtube.com/watch?v=hTWKbfoikeg",
        1,
    ),
    (
        "Imagine",
        "John Lennon",
        "Imagine",
        "Rock",
        "https://www.youtube.com/watch?v=YkgkThdzX-8",
        1,
    ),
    (
        "Billie Jean",
        "Michael Jackson",
        "Thriller",
        "Pop",
        "https://www.youtube.com/watch?v=Zi_XLOBDo_Y",
        0,
    ),
    (
        "Heroes tonight",
        "Janji feat. Johnning",
        "Heroes tonight",
        "Electronic",
        "https://www.youtube.com/watch?v=3nQNiWdeH2Q",
        2,
    ),
];

const SEED_REVIEW: &str = "Excellent song! A classic that never goes out of style.";

/// Populate demo users, songs and reviews unless any song already exists.
/// Returns whether anything was written.
pub async fn seed_once(pool: &Pool<Sqlite>) -> StoreResult<bool> {
    if count(pool, Table::Songs).await? > 0 {
        tracing::debug!("Database already has data, skipping seed");
        return Ok(false);
    }

    tracing::info!("Seeding database with initial data...");

    let mut user_ids = Vec::with_capacity(SEED_USERS.len());
    for (username, email, password) in SEED_USERS {
        let id = create_user(
            pool,
            NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                is_admin: false,
            },
        )
        .await?;
        user_ids.push(id);
    }

    let reviewer = 1;
    for (title, artist, album, genre, url, owner) in SEED_SONGS {
        let song_id = create_song(
            pool,
            NewSong {
                title: title.to_string(),
                artist: artist.to_string(),
                album: Some(album.to_string()),
                genre: genre.to_string(),
                video_url: url.to_string(),
                user_id: user_ids[owner],
                user_name: SEED_USERS[owner].0.to_string(),
            },
        )
        .await?;

        // About half the demo songs get a review
        if rand::rng().random_bool(0.5) {
            create_review(
                pool,
                NewReview {
                    song_id,
                    user_id: user_ids[reviewer],
                    user_name: SEED_USERS[reviewer].0.to_string(),
                    rating: 5,
                    comment: SEED_REVIEW.to_string(),
                },
            )
            .await?;
        }
    }

    tracing::info!("Database seeded successfully");
    Ok(true)
}
