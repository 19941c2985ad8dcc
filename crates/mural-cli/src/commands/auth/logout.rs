use serde::Serialize;

use mural_client::TokenStore;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    note: Option<String>,
}

pub fn handle(store: &TokenStore, flags: &GlobalFlags) -> anyhow::Result<()> {
    store.delete()?;
    let note = std::env::var_os(mural_client::token_store::TOKEN_ENV_VAR)
        .map(|_| "MURAL_AUTH__TOKEN is still set in the environment".to_string());
    output(&AuthLogoutResponse { cleared: true, note }, flags.format)
}
