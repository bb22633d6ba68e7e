//! User account operations

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, get_all, insert, lookup};
use crate::database::error::StoreResult;
use crate::database::table::{Index, Key};
use crate::database::{NewUser, User};

/// Uppercase first character of a username, used as the avatar
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Insert a new user, returns the new user id.
/// Fails with `StoreError::Duplicate` when the username or email is taken.
pub async fn create_user(pool: &Pool<Sqlite>, user: NewUser) -> StoreResult<i64> {
    let record = User {
        id: 0,
        avatar: avatar_initial(&user.username),
        username: user.username,
        email: user.email,
        password: user.password,
        joined_at: current_timestamp(),
        is_admin: user.is_admin,
    };
    let id = insert(pool, &record).await?;
    tracing::info!("Created user {} ({})", id, record.username);
    Ok(id)
}

pub async fn get_user_by_username(pool: &Pool<Sqlite>, username: &str) -> StoreResult<Option<User>> {
    let users: Vec<User> = lookup(pool, Index::UserUsername, Key::from(username)).await?;
    Ok(users.into_iter().next())
}

pub async fn get_user_by_email(pool: &Pool<Sqlite>, email: &str) -> StoreResult<Option<User>> {
    let users: Vec<User> = lookup(pool, Index::UserEmail, Key::from(email)).await?;
    Ok(users.into_iter().next())
}

pub async fn get_all_users(pool: &Pool<Sqlite>) -> StoreResult<Vec<User>> {
    get_all(pool).await
}
