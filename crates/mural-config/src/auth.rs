//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token for the admin area. Normally set with
    /// `MURAL_AUTH__TOKEN` or stored by `mural auth set-token`.
    #[serde(default)]
    pub token: String,
}

impl AuthConfig {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
