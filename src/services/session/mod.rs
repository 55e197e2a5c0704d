//! Disk persistence for the logged-in [`Session`].
//!
//! The session lives in a single JSON file. Screens receive the loaded
//! `Session` value instead of reaching into storage themselves.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::session::{Session, UserProfile};

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write session to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse session from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize session")]
    Serialize(#[from] serde_json::Error),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "NutriTrack", "meal-calendar")
            .ok_or(SessionError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(SESSION_FILE)))
    }

    /// Store at `path` when given, otherwise the platform default.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session. A missing file means nobody is logged in.
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            log::debug!("No session file at {}", self.path.display());
            return Ok(Session::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SessionError::Read {
            path: self.path.clone(),
            source,
        })?;
        let session: Session =
            serde_json::from_str(&data).map_err(|source| SessionError::Parse {
                path: self.path.clone(),
                source,
            })?;

        log::info!(
            "Loaded session from {} (authenticated={})",
            self.path.display(),
            session.is_authenticated()
        );
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, data).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// Log the saved session out and remove it. An unreadable session file
    /// is removed as well. Returns the profile that was logged in.
    pub fn logout(&self) -> Result<Option<UserProfile>> {
        let mut session = match self.load() {
            Ok(session) => session,
            Err(err @ SessionError::Parse { .. }) => {
                log::warn!("Discarding unreadable session: {}", err);
                Session::default()
            }
            Err(err) => return Err(err),
        };
        let profile = session.logout();
        self.clear()?;
        Ok(profile)
    }

    /// Forget the saved session.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Cleared session at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
