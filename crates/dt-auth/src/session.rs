use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::claims::{DecodedToken, decode_token};
use crate::error::AuthError;
use crate::store::{FileStore, KeyValueStore, MemoryStore};

/// Session-scoped key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Session-scoped key set once the snapshot-build notice was shown.
pub const SNAPSHOT_KEY: &str = "snapshot";
/// Shared key written (then removed) to tell other sessions to log out.
pub const SESSION_INVALIDATE_KEY: &str = "sessionInvalidate";

/// Overrides the stored token when set and non-empty (CI use).
const TOKEN_ENV: &str = "DTRACK_TOKEN";

const SESSION_FILE_NAME: &str = "session.json";
const SHARED_FILE_NAME: &str = "shared.json";

/// Where the active token came from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
    Env,
    Session,
}

/// Explicit session state passed to every dashboard operation.
///
/// `session` holds per-login values; `shared` is visible to every session
/// using the same directory and carries the logout broadcast.
pub struct SessionContext {
    session: Box<dyn KeyValueStore + Send>,
    shared: Box<dyn KeyValueStore + Send>,
    read_env: bool,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.token().is_some())
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// File-backed session under `dir` (`session.json` + `shared.json`).
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        Self {
            session: Box::new(FileStore::open(dir.join(SESSION_FILE_NAME))),
            shared: Box::new(FileStore::open(dir.join(SHARED_FILE_NAME))),
            read_env: true,
        }
    }

    /// Session that lives only as long as this value. Ignores `DTRACK_TOKEN`.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_stores(MemoryStore::new(), MemoryStore::new())
    }

    /// Session over caller-provided stores. Ignores `DTRACK_TOKEN`.
    #[must_use]
    pub fn with_stores(
        session: impl KeyValueStore + Send + 'static,
        shared: impl KeyValueStore + Send + 'static,
    ) -> Self {
        Self {
            session: Box::new(session),
            shared: Box::new(shared),
            read_env: false,
        }
    }

    fn env_token(&self) -> Option<String> {
        if !self.read_env {
            return None;
        }
        std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty())
    }

    /// The active bearer token. Priority: `DTRACK_TOKEN` env → session store.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.env_token().or_else(|| {
            self.session
                .get(TOKEN_KEY)
                .filter(|t| !t.trim().is_empty())
        })
    }

    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        if self.env_token().is_some() {
            return Some(TokenSource::Env);
        }
        self.session
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
            .map(|_| TokenSource::Session)
    }

    /// Whether a token is present in the session store itself.
    #[must_use]
    pub fn has_stored_token(&self) -> bool {
        self.session.is_set(TOKEN_KEY)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the session store cannot be written.
    pub fn store_token(&mut self, token: &str) -> Result<(), AuthError> {
        self.session.set(TOKEN_KEY, token.trim())
    }

    /// Decode the active token; a token that cannot be decoded grants nothing.
    #[must_use]
    pub fn decoded_token(&self) -> Option<DecodedToken> {
        let token = self.token()?;
        match decode_token(&token) {
            Ok(decoded) => Some(decoded),
            Err(error) => {
                tracing::warn!(%error, "stored token could not be decoded");
                None
            }
        }
    }

    #[must_use]
    pub fn snapshot_acknowledged(&self) -> bool {
        self.session.is_set(SNAPSHOT_KEY)
    }

    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if the session store cannot be written.
    pub fn acknowledge_snapshot(&mut self) -> Result<(), AuthError> {
        self.session.set(SNAPSHOT_KEY, "true")
    }

    /// Current value of the shared invalidation key, if a broadcast is in flight.
    #[must_use]
    pub fn invalidation_marker(&self) -> Option<String> {
        self.shared.get(SESSION_INVALIDATE_KEY)
    }

    /// End the session.
    ///
    /// Broadcasts the invalidation by writing the current epoch millis to the
    /// shared store and removing it again, then drops the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StoreError`] if either store cannot be written.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let now = Utc::now().timestamp_millis().to_string();
        self.shared.set(SESSION_INVALIDATE_KEY, &now)?;
        self.shared.remove(SESSION_INVALIDATE_KEY)?;
        self.session.remove(TOKEN_KEY)?;
        tracing::debug!("session invalidated");
        Ok(())
    }
}
