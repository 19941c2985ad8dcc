use anyhow::Context;
use mural_config::MuralConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config with CLI flags applied on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MuralConfig> {
    load_dotenv();
    MuralConfig::load_with_overrides(&flag_overrides(flags))
        .context("failed to load mural configuration")
}

fn flag_overrides(flags: &GlobalFlags) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if let Some(base_url) = &flags.base_url {
        overrides.push(("api.base_url", base_url.clone()));
    }
    overrides
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "failed to read .env; continuing without it"),
    }
}
