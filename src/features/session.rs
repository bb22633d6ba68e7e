//! Session snapshots
//!
//! Small JSON documents that survive restarts, one file per fixed key under
//! `<data dir>/session/`. They hold convenience state only (who is signed in)
//! and may lag behind the database.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Signed-in user of the main application
pub const USER_KEY: &str = "musicae_user";

/// Signed-in admin of the admin panel
pub const ADMIN_KEY: &str = "musicae_admin";

/// Admin panel records
pub const ADMIN_SONGS_KEY: &str = "musicae_songs";
pub const ADMIN_USERS_KEY: &str = "musicae_admin_users";
pub const ADMIN_REVIEWS_KEY: &str = "musicae_admin_reviews";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session snapshot is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid session key '{0}'")]
    InvalidKey(String),
}

/// Key-value store of JSON snapshots
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Snapshots live in `<data_dir>/session`
    pub fn new(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.join("session"),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SessionError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SessionError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Read a snapshot, `None` when nothing is stored under `key`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let path = self.path_for(key)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string(value)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Session snapshot '{}' saved", key);
        Ok(())
    }

    /// Remove a snapshot; clearing an absent key succeeds
    pub fn clear(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        id: i64,
        name: String,
    }

    fn store() -> (SessionStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("musicae-session-{}", uuid::Uuid::new_v4()));
        (SessionStore::new(&dir), dir)
    }

    #[test]
    fn save_load_clear() {
        let (store, dir) = store();
        let value = Snapshot {
            id: 3,
            name: "mejo".into(),
        };

        assert_eq!(store.load::<Snapshot>(USER_KEY).unwrap(), None);
        store.save(USER_KEY, &value).unwrap();
        assert!(dir.join("session").join("musicae_user.json").exists());
        assert_eq!(store.load::<Snapshot>(USER_KEY).unwrap(), Some(value));

        // Keys are independent
        assert_eq!(store.load::<Snapshot>(ADMIN_KEY).unwrap(), None);

        store.clear(USER_KEY).unwrap();
        store.clear(USER_KEY).unwrap();
        assert_eq!(store.load::<Snapshot>(USER_KEY).unwrap(), None);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let (store, dir) = store();
        std::fs::create_dir_all(dir.join("session")).unwrap();
        std::fs::write(dir.join("session").join("musicae_user.json"), "{oops").unwrap();

        let result = store.load::<Snapshot>(USER_KEY);
        assert!(matches!(result, Err(SessionError::Parse(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let (store, _dir) = store();
        for key in ["", "../escape", "a/b", "x.json"] {
            assert!(matches!(
                store.save(key, &1),
                Err(SessionError::InvalidKey(_))
            ));
        }
    }
}
