//! # mural-client
//!
//! REST client for the Mural de Estágios backend.
//!
//! Endpoints consumed:
//! - `GET /cursos` → course catalog
//! - `GET /habilidades` → skill catalog
//! - `GET /vagas` → paginated, filterable posting listing
//! - `GET /vagas/{id}` → single posting
//!
//! The bearer token and the 401 callback travel in an explicit
//! [`RequestContext`] instead of global interceptors.

pub mod auth;
mod catalog;
mod context;
mod error;
mod http;
mod postings;
pub mod token_store;

pub use auth::AuthGate;
pub use context::{RequestContext, UnauthorizedHook};
pub use error::ClientError;
pub use token_store::{TokenSource, TokenStore};

use std::time::Duration;

use mural_config::ApiConfig;

/// HTTP client for the job board backend.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    ctx: RequestContext,
}

impl BoardClient {
    /// Create a client from an explicit context.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        ctx: RequestContext,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, ctx })
    }

    /// Create a client from configuration and a context built on top of it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &ApiConfig, ctx: RequestContext) -> Result<Self, ClientError> {
        Self::new(
            ctx,
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    #[must_use]
    pub const fn context(&self) -> &RequestContext {
        &self.ctx
    }

    /// GET request for `url` with the bearer token attached when present.
    fn get(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match self.ctx.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a GET and run the status checks, notifying the context on 401.
    async fn send(&self, url: reqwest::Url) -> Result<reqwest::Response, ClientError> {
        tracing::debug!(%url, "GET");
        let resp = self.get(url).send().await?;
        self.check(resp).await
    }

    async fn check(&self, resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let result = http::check_response(resp).await;
        if matches!(result, Err(ClientError::Unauthorized)) {
            self.ctx.notify_unauthorized();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn client(ctx: RequestContext) -> BoardClient {
        BoardClient::new(ctx, Duration::from_secs(5), "mural-tests").unwrap()
    }

    #[test]
    fn bearer_token_is_attached() {
        let ctx = RequestContext::new("http://localhost:8081")
            .unwrap()
            .with_token(Some("tok-123".into()));
        let client = client(ctx);
        let url = client.ctx.url("/vagas").unwrap();
        let request = client.get(url).build().unwrap();
        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        assert_eq!(header, Some("Bearer tok-123"));
    }

    #[test]
    fn no_authorization_header_without_token() {
        let client = client(RequestContext::new("http://localhost:8081").unwrap());
        let url = client.ctx.url("/vagas").unwrap();
        let request = client.get(url).build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn unauthorized_response_runs_hook() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let ctx = RequestContext::new("http://localhost:8081")
            .unwrap()
            .with_on_unauthorized(Arc::new(move || flag.store(true, Ordering::SeqCst)));
        let client = client(ctx);

        let err = client
            .check(http::tests::mock_response(401, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn server_error_does_not_run_hook() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let ctx = RequestContext::new("http://localhost:8081")
            .unwrap()
            .with_on_unauthorized(Arc::new(move || flag.store(true, Ordering::SeqCst)));
        let client = client(ctx);

        let err = client
            .check(http::tests::mock_response(500, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert!(!fired.load(Ordering::SeqCst));
    }
}
