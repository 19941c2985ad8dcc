//! # mural-config
//!
//! Layered configuration loading for Mural using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Explicit overrides passed by the caller (CLI flags)
//! 2. Environment variables (`MURAL_*` prefix, `__` as separator)
//! 3. Project-level `.mural/config.toml`
//! 4. User-level `~/.config/mural/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MURAL_API__BASE_URL` -> `api.base_url`, `MURAL_AUTH__TOKEN` -> `auth.token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mural_config::MuralConfig;
//!
//! let config = MuralConfig::load().expect("config");
//! println!("backend: {}", config.api.base_url_trimmed());
//! ```

mod api;
mod auth;
mod board;
mod error;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use board::BoardConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dotted keys of the string-typed settings.
const VERBATIM_ENV_KEYS: &[&str] = &[
    "api.base_url",
    "api.user_agent",
    "board.site_origin",
    "auth.token",
];

/// `api.user_agent` -> `MURAL_API__USER_AGENT`.
fn env_var_for(key: &str) -> String {
    format!("MURAL_{}", key.replace('.', "__").to_uppercase())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MuralConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl MuralConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(&[])
    }

    /// Load configuration, then apply dotted-key overrides (`("api.base_url", "...")`)
    /// on top of every other source. The result is validated.
    pub fn load_with_overrides(overrides: &[(&str, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        for (key, value) in overrides {
            figment = figment.merge((*key, value.as_str()));
        }
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".mural/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Env::prefixed("MURAL_").split("__"));

        // `Env` parses values, so `MURAL_AUTH__TOKEN=123456` arrives as an
        // integer. String fields are re-read verbatim on top of it.
        for key in VERBATIM_ENV_KEYS {
            if let Ok(raw) = std::env::var(env_var_for(key)) {
                figment = figment.merge((*key, raw));
            }
        }
        figment
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mural").join("config.toml"))
    }
}
