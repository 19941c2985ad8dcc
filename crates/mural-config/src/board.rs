//! Presentation settings for the listing board.

use serde::{Deserialize, Serialize};

fn default_site_origin() -> String {
    String::from("http://localhost:5173")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Public origin of the student-facing site, used to build share links
    /// such as `{site_origin}/vagas/42`.
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            site_origin: default_site_origin(),
        }
    }
}
