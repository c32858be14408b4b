//! Process-wide session state with on-disk persistence.
//!
//! The session holds the bearer credential and the cached user profile.
//! Both live under two well-known files in the state directory and are
//! always written and removed together: a credential without a profile (or
//! the reverse) is treated as corrupt state and discarded.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, warn};

use nebula_core::config::session::SessionConfig;
use nebula_core::error::AppError;
use nebula_core::result::AppResult;
use nebula_entity::user::User;

/// Well-known file name for the bearer credential.
const TOKEN_FILE: &str = "token";
/// Well-known file name for the cached user profile.
const USER_FILE: &str = "user.json";

#[derive(Debug, Default)]
struct SessionData {
    token: Option<String>,
    user: Option<User>,
}

/// The process-wide authentication session.
///
/// Guarded for concurrent access; the transport client reads the credential
/// on every request while command flows may refresh the cached profile.
#[derive(Debug)]
pub struct Session {
    inner: RwLock<SessionData>,
    state_dir: PathBuf,
}

impl Session {
    /// Create an unloaded session rooted at the configured state directory.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            inner: RwLock::new(SessionData::default()),
            state_dir: PathBuf::from(&config.state_dir),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.state_dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.state_dir.join(USER_FILE)
    }

    /// Load persisted state from disk.
    ///
    /// Missing state leaves the session unauthenticated. Corrupt or
    /// half-present state is discarded, removing both files together.
    pub fn init(&self) -> AppResult<()> {
        let token = fs::read_to_string(self.token_path())
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let user = fs::read(self.user_path())
            .ok()
            .and_then(|raw| serde_json::from_slice::<User>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => {
                debug!(username = %user.username, "Restored session from disk");
                let mut data = self
                    .inner
                    .write()
                    .map_err(|_| AppError::session("session state lock poisoned"))?;
                data.token = Some(token);
                data.user = Some(user);
                Ok(())
            }
            (None, None) => Ok(()),
            _ => {
                warn!("Discarding corrupt session state");
                self.clear()
            }
        }
    }

    /// Store a fresh credential and profile, persisting both together.
    pub fn store(&self, token: String, user: User) -> AppResult<()> {
        fs::create_dir_all(&self.state_dir)?;
        fs::write(self.token_path(), &token)?;
        fs::write(self.user_path(), serde_json::to_vec_pretty(&user)?)?;

        let mut data = self
            .inner
            .write()
            .map_err(|_| AppError::session("session state lock poisoned"))?;
        data.token = Some(token);
        data.user = Some(user);
        Ok(())
    }

    /// Replace the cached profile, keeping the credential.
    pub fn set_user(&self, user: User) -> AppResult<()> {
        fs::create_dir_all(&self.state_dir)?;
        fs::write(self.user_path(), serde_json::to_vec_pretty(&user)?)?;

        let mut data = self
            .inner
            .write()
            .map_err(|_| AppError::session("session state lock poisoned"))?;
        data.user = Some(user);
        Ok(())
    }

    /// The bearer credential, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.inner.read().ok()?.token.clone()
    }

    /// The cached user profile, if authenticated.
    pub fn user(&self) -> Option<User> {
        self.inner.read().ok()?.user.clone()
    }

    /// Whether a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Tear the session down: both state files are removed together.
    pub fn clear(&self) -> AppResult<()> {
        for path in [self.token_path(), self.user_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        let mut data = self
            .inner
            .write()
            .map_err(|_| AppError::session("session state lock poisoned"))?;
        data.token = None;
        data.user = None;
        Ok(())
    }
}
