//! Admin token persistence.
//!
//! Resolution order: `MURAL_AUTH__TOKEN` env var → credentials file
//! (`~/.mural/credentials` by default). The file is written with 0600
//! permissions on unix.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ClientError;

pub const TOKEN_ENV_VAR: &str = "MURAL_AUTH__TOKEN";
const CREDENTIALS_DIR_NAME: &str = ".mural";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Env,
    File,
    Config,
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store rooted at `~/.mural/credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the home directory cannot be found.
    pub fn default_location() -> Result<Self, ClientError> {
        dirs::home_dir()
            .map(|home| Self::at(home.join(CREDENTIALS_DIR_NAME).join(CREDENTIALS_FILE_NAME)))
            .ok_or_else(|| {
                ClientError::TokenStore("home directory not found; cannot store credentials".into())
            })
    }

    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `token` to the credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the token is blank or the file
    /// cannot be written.
    pub fn store(&self, token: &str) -> Result<(), ClientError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::TokenStore("refusing to store an empty token".into()));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ClientError::TokenStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        fs::write(&self.path, token).map_err(|e| {
            ClientError::TokenStore(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }

        tracing::info!(path = %self.path.display(), "stored admin token");
        Ok(())
    }

    /// Resolve a token: env var first, then the credentials file.
    #[must_use]
    pub fn load(&self) -> Option<(String, TokenSource)> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.trim().is_empty()
        {
            return Some((token.trim().to_string(), TokenSource::Env));
        }
        self.load_file().map(|token| (token, TokenSource::File))
    }

    /// Read only the credentials file, ignoring the environment.
    #[must_use]
    pub fn load_file(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Delete the credentials file. Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the file exists but cannot be removed.
    pub fn delete(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                ClientError::TokenStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
            tracing::info!(path = %self.path.display(), "removed admin token");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::at(dir.path().join("nested").join("credentials"))
    }

    #[test]
    fn store_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.store("  tok-abc \n").unwrap();
        assert_eq!(store.load_file().as_deref(), Some("tok-abc"));
    }

    #[test]
    fn empty_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.store("   "), Err(ClientError::TokenStore(_))));
        assert!(store.load_file().is_none());
    }

    #[test]
    fn delete_removes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.store("tok").unwrap();
        store.delete().unwrap();
        assert!(store.load_file().is_none());
        store.delete().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn credentials_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.store("tok").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
