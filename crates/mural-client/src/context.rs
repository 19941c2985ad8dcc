//! Per-client request context.
//!
//! Carries everything a request needs besides its path: the backend root,
//! the optional admin bearer token, and the callback to run when the backend
//! answers 401. Passed explicitly to [`crate::BoardClient`]; nothing here is
//! global.

use std::fmt;
use std::sync::Arc;

use mural_config::ApiConfig;

use crate::error::ClientError;

/// Callback run whenever the backend answers 401.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct RequestContext {
    base_url: String,
    token: Option<String>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl RequestContext {
    /// Build a context for `base_url` (trailing slashes are dropped).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            base_url,
            token: None,
            on_unauthorized: None,
        })
    }

    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the configured base URL does not parse.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url_trimmed())
    }

    /// Attach a bearer token. Blank tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_on_unauthorized(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for `path` (which must start with `/`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the joined URL does not parse.
    pub fn url(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        let raw = format!("{}{path}", self.base_url);
        reqwest::Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }

    pub(crate) fn notify_unauthorized(&self) {
        tracing::warn!(base_url = %self.base_url, "backend rejected credentials (401)");
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}
