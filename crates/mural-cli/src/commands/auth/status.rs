use serde::Serialize;

use mural_client::{AuthGate, TokenSource, TokenStore};
use mural_config::MuralConfig;

use crate::cli::GlobalFlags;
use crate::context::configured_token;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<TokenSource>,
    credentials_path: String,
    note: Option<String>,
}

pub fn handle(store: &TokenStore, flags: &GlobalFlags, config: &MuralConfig) -> anyhow::Result<()> {
    let gate = AuthGate::resolve(store, configured_token(config));
    let note = (!gate.authenticated)
        .then(|| "no admin token; run `mural auth set-token <token>`".to_string());
    output(
        &AuthStatusResponse {
            authenticated: gate.authenticated,
            token_source: gate.source,
            credentials_path: store.path().display().to_string(),
            note,
        },
        flags.format,
    )
}
