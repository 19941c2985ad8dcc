use std::sync::Arc;

use anyhow::Context;
use mural_client::{AuthGate, BoardClient, RequestContext, TokenStore};
use mural_config::MuralConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: MuralConfig,
    pub client: BoardClient,
}

impl AppContext {
    /// Resolve the admin token and build the backend client around it.
    pub fn init(config: MuralConfig) -> anyhow::Result<Self> {
        let auth = resolve_auth(&config);

        let request_ctx = RequestContext::from_config(&config.api)
            .context("invalid backend base URL")?
            .with_token(auth.token())
            .with_on_unauthorized(Arc::new(|| {
                tracing::warn!(
                    "backend rejected the admin token; run `mural auth set-token` with a fresh one"
                );
            }));

        let client = BoardClient::from_config(&config.api, request_ctx)
            .context("failed to build HTTP client")?;

        Ok(Self { config, client })
    }
}

/// The `auth.token` setting, if it holds anything.
pub fn configured_token(config: &MuralConfig) -> Option<&str> {
    config
        .auth
        .has_token()
        .then(|| config.auth.token.trim())
}

/// Token store first, then `auth.token` from config. A missing home
/// directory only disables the store.
fn resolve_auth(config: &MuralConfig) -> AuthGate {
    let configured = configured_token(config);
    match TokenStore::default_location() {
        Ok(store) => AuthGate::resolve(&store, configured),
        Err(error) => {
            tracing::warn!(%error, "token store unavailable; using configured token only");
            AuthGate::resolve(&TokenStore::at(std::path::PathBuf::new()), configured)
        }
    }
}
