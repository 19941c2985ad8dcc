use serde::Serialize;

use mural_client::TokenStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSetTokenArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthSetTokenResponse {
    stored: bool,
    path: String,
}

pub fn handle(
    args: &AuthSetTokenArgs,
    store: &TokenStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    store.store(&args.token)?;
    output(
        &AuthSetTokenResponse {
            stored: true,
            path: store.path().display().to_string(),
        },
        flags.format,
    )
}
