//! Token gate for the admin area.
//!
//! The backend is the real authority; this only answers "is there a token to
//! present at all", the same check the web app's protected routes make before
//! sending anyone to the login page.

use serde::Serialize;

use crate::error::ClientError;
use crate::token_store::{TokenSource, TokenStore};

#[derive(Debug, Clone, Serialize)]
pub struct AuthGate {
    pub authenticated: bool,
    pub source: Option<TokenSource>,
    #[serde(skip)]
    token: Option<String>,
}

impl AuthGate {
    /// Resolve the gate from the token store, falling back to a configured token.
    #[must_use]
    pub fn resolve(store: &TokenStore, configured: Option<&str>) -> Self {
        if let Some((token, source)) = store.load() {
            return Self {
                authenticated: true,
                source: Some(source),
                token: Some(token),
            };
        }
        let configured = configured
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            authenticated: configured.is_some(),
            source: configured.as_ref().map(|_| TokenSource::Config),
            token: configured,
        }
    }

    /// The token to send, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.clone()
    }

    /// Require a token, as the admin routes do.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] when no token is available.
    pub fn require(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }
}
