//! Session store: the persisted role + token pair of the current user.
//!
//! Key properties:
//! - Two keys only: `userRole` and `token`
//! - `Guest` is the absence of `userRole`, never a stored value
//! - An authenticated role without a token is an invalid session
//! - Tokens are zeroed on drop and never printed

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::models::Role;

/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";

// ═══════════════════════════════════════════════════════════
// SessionToken
// ═══════════════════════════════════════════════════════════

/// Opaque credential issued at login.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error on session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Session file {0} is corrupted")]
    Corrupted(PathBuf),
}

// ═══════════════════════════════════════════════════════════
// Storage backends
// ═══════════════════════════════════════════════════════════

/// Persistent string key/value storage scoped to one client.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-process storage. Lives as long as the value does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, mostly useful for restoring a known state.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-object file storage. Survives restarts of the host process.
///
/// Every mutation rewrites the whole file through a sibling temp file
/// followed by a rename, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open (or lazily create) the storage file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| SessionError::Io {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|_| SessionError::Corrupted(path.clone()))?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Open the default session file under the application data directory.
    pub fn open_default() -> Result<Self, SessionError> {
        Self::open(crate::config::session_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SessionError> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|_| SessionError::Corrupted(self.path.clone()))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore: typed accessors over a Storage
// ═══════════════════════════════════════════════════════════

/// Typed view of the session keys held in a [`Storage`].
#[derive(Debug)]
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current role. Missing or unrecognised values read as `Guest`.
    pub fn role(&self) -> Role {
        match self.storage.get(ROLE_KEY) {
            None => Role::Guest,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unknown stored role, treating as guest");
                Role::Guest
            }),
        }
    }

    /// Current token, if a non-empty one is stored.
    pub fn token(&self) -> Option<SessionToken> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .map(SessionToken::new)
    }

    /// Record a successful login.
    pub fn set_session(&mut self, role: Role, token: &SessionToken) -> Result<(), SessionError> {
        self.storage.set(TOKEN_KEY, token.as_str())?;
        self.set_role(role)
    }

    /// Change the role without touching the token. `Guest` removes the key.
    pub fn set_role(&mut self, role: Role) -> Result<(), SessionError> {
        match role {
            Role::Guest => self.storage.remove(ROLE_KEY),
            other => self.storage.set(ROLE_KEY, other.as_str()),
        }
    }

    pub fn clear_role(&mut self) -> Result<(), SessionError> {
        self.storage.remove(ROLE_KEY)
    }

    pub fn clear_token(&mut self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)
    }

    /// Destroy the session: both keys removed.
    pub fn clear_session(&mut self) -> Result<(), SessionError> {
        self.storage.remove(ROLE_KEY)?;
        self.storage.remove(TOKEN_KEY)
    }

    /// False when an authenticated role is stored without a token.
    pub fn is_consistent(&self) -> bool {
        !(self.role().requires_token() && self.token().is_none())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

impl Default for SessionStore<MemoryStorage> {
    fn default() -> Self {
        Self::new(MemoryStorage::new())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
