//! Session persistence: OS keychain first, then `MRU_AUTH__TOKEN`, then a
//! `0600` file under `~/.mru/`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::session::Session;

const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "MRU_AUTH__TOKEN";

/// What survives between runs. The env tier only ever supplies an access
/// token, so the refresh token is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.access_token.clone(),
            refresh_token: Some(session.refresh_token.clone()),
        }
    }
}

/// Where a loaded session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    file: Option<PathBuf>,
    use_keyring: bool,
}

impl TokenStore {
    /// Store under keychain `service`, with `~/.mru/credentials` as the
    /// file fallback.
    #[must_use]
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            file: dirs::home_dir().map(|home| home.join(".mru").join(CREDENTIALS_FILE_NAME)),
            use_keyring: true,
        }
    }

    /// File-only store at `path`; the keychain is never touched.
    #[must_use]
    pub fn file_only(path: PathBuf) -> Self {
        Self {
            service: String::new(),
            file: Some(path),
            use_keyring: false,
        }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        if !self.use_keyring {
            return None;
        }
        keyring::Entry::new(&self.service, KEYRING_USER).ok()
    }

    fn file(&self) -> Result<&PathBuf, AuthError> {
        self.file.as_ref().ok_or_else(|| {
            AuthError::TokenStore("home directory not found; cannot store credentials".into())
        })
    }

    /// Persist a session. Falls back to the file if the keychain refuses.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if both keychain and file fail.
    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let encoded = serde_json::to_string(session)
            .map_err(|e| AuthError::TokenStore(format!("encode session: {e}")))?;
        if let Some(entry) = self.entry() {
            match entry.set_password(&encoded) {
                Ok(()) => return Ok(()),
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        self.save_file(&encoded)
    }

    /// Load the stored session, trying each tier in order.
    #[must_use]
    pub fn load(&self) -> Option<(StoredSession, TokenSource)> {
        if let Some(entry) = self.entry()
            && let Ok(encoded) = entry.get_password()
            && let Some(session) = decode(&encoded)
        {
            return Some((session, TokenSource::Keyring));
        }

        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.trim().is_empty()
        {
            return Some((
                StoredSession {
                    access_token: token.trim().to_string(),
                    refresh_token: None,
                },
                TokenSource::Env,
            ));
        }

        self.load_file().map(|session| (session, TokenSource::File))
    }

    /// Remove the session from the keychain and the file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.entry()
            && let Err(error) = entry.delete_credential()
        {
            tracing::debug!(%error, "no keyring entry to delete");
        }
        if let Some(path) = &self.file
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn save_file(&self, encoded: &str) -> Result<(), AuthError> {
        let path = self.file()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, encoded)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }

    fn load_file(&self) -> Option<StoredSession> {
        let path = self.file.as_ref()?;
        fs::read_to_string(path).ok().and_then(|s| decode(&s))
    }
}

/// A stored value is either session JSON or, from older files, a bare token.
fn decode(encoded: &str) -> Option<StoredSession> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok().or_else(|| {
        Some(StoredSession {
            access_token: trimmed.to_string(),
            refresh_token: None,
        })
    })
}
