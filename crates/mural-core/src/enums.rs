//! Facet enums for job postings.
//!
//! The filterable facets carry two string forms: the token the backend speaks
//! on the wire (`as_token`) and the Portuguese label shown to students
//! (`label`). Their `FromStr` accepts either form plus a few common spellings,
//! case-insensitive. `PostingStatus` is display-only and has just a label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// WorkModel
// ---------------------------------------------------------------------------

/// Where the intern works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkModel {
    #[serde(rename = "PRESENCIAL")]
    OnSite,
    #[serde(rename = "HIBRIDO")]
    Hybrid,
    #[serde(rename = "HOME_OFFICE")]
    Remote,
}

impl WorkModel {
    /// All models in display order.
    pub const ALL: [Self; 3] = [Self::OnSite, Self::Hybrid, Self::Remote];

    /// Token accepted by the `modelos` listing parameter.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::OnSite => "PRESENCIAL",
            Self::Hybrid => "HIBRIDO",
            Self::Remote => "HOME_OFFICE",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnSite => "Presencial",
            Self::Hybrid => "Híbrido",
            Self::Remote => "Home Office",
        }
    }
}

impl fmt::Display for WorkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "presencial" | "on_site" | "onsite" => Ok(Self::OnSite),
            "hibrido" | "híbrido" | "hybrid" => Ok(Self::Hybrid),
            "home_office" | "remoto" | "remote" => Ok(Self::Remote),
            _ => Err(CoreError::UnknownFacetValue {
                facet: "work model",
                value: s.to_string(),
                expected: "presencial, hibrido, home-office",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Shift
// ---------------------------------------------------------------------------

/// Part of the day the internship takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "manha")]
    Morning,
    #[serde(rename = "tarde")]
    Afternoon,
    #[serde(rename = "noite")]
    Night,
}

impl Shift {
    /// All shifts in display order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Night];

    /// Keyword accepted by the `periodos` listing parameter.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Morning => "manha",
            Self::Afternoon => "tarde",
            Self::Night => "noite",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Manhã",
            Self::Afternoon => "Tarde",
            Self::Night => "Noite",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "manha" | "manhã" | "morning" => Ok(Self::Morning),
            "tarde" | "afternoon" => Ok(Self::Afternoon),
            "noite" | "night" => Ok(Self::Night),
            _ => Err(CoreError::UnknownFacetValue {
                facet: "shift",
                value: s.to_string(),
                expected: "manha, tarde, noite",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PostingStatus
// ---------------------------------------------------------------------------

/// Whether a posting still accepts applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostingStatus {
    #[default]
    #[serde(rename = "ABERTO")]
    Open,
    #[serde(rename = "FECHADO")]
    Closed,
}

impl PostingStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Aberta",
            Self::Closed => "Fechada",
        }
    }
}

impl fmt::Display for PostingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace(['-', ' '], "_")
}
