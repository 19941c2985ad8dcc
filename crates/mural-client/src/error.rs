//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the job board backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, bad body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// Backend rejected the bearer token (HTTP 401).
    #[error("not authorized: run `mural auth set-token` with a valid admin token")]
    Unauthorized,

    /// Token was accepted but lacks permission (HTTP 403).
    #[error("access denied: this account is not allowed to perform the action")]
    Forbidden,

    /// The requested record does not exist (HTTP 404).
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// A URL could not be built from the configured base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The admin area was requested without any stored token.
    #[error("not authenticated: run `mural auth set-token <token>`")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStore(String),
}
