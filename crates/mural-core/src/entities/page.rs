use serde::{Deserialize, Serialize};

use crate::entities::JobPosting;

/// One page of `GET /vagas`. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingPage {
    #[serde(default)]
    pub content: Vec<JobPosting>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

impl ListingPage {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
        }
    }
}
