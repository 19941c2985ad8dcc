//! Translation from [`FilterState`] to `GET /vagas` parameters.
//!
//! A facet with no selection is omitted entirely: the backend reads a
//! missing key as "no filter on that facet", whereas an empty value could be
//! read as "match nothing".

use mural_core::{Shift, WorkModel};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::filter::FilterState;

/// Fixed page size of the listing endpoint.
pub const PAGE_SIZE: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListingQuery {
    pub term: Option<String>,
    pub courses: Vec<String>,
    pub models: Vec<WorkModel>,
    pub periods: Vec<Shift>,
    pub page: u32,
    pub size: u32,
}

impl ListingQuery {
    /// Translate the current filters. Course names without a catalog entry
    /// are dropped silently; this happens when a course is pre-selected from
    /// the URL before the catalog has loaded.
    #[must_use]
    pub fn from_filters(filters: &FilterState, catalog: &Catalog) -> Self {
        let term = Some(filters.term().trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let mut courses: Vec<String> = Vec::new();
        for name in filters.courses() {
            match catalog.code_for(name) {
                Some(code) if !courses.iter().any(|c| c == code) => {
                    courses.push(code.to_string());
                }
                Some(_) => {}
                None => {
                    tracing::debug!(course = %name, "course not in catalog; dropped from query");
                }
            }
        }

        Self {
            term,
            courses,
            models: filters.models().iter().copied().collect(),
            periods: filters.shifts().iter().copied().collect(),
            page: filters.page(),
            size: PAGE_SIZE,
        }
    }

    /// Query pairs in a stable order, repeating keys for multi-valued facets.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = &self.term {
            pairs.push(("termo", term.clone()));
        }
        for code in &self.courses {
            pairs.push(("cursos", code.clone()));
        }
        for model in &self.models {
            pairs.push(("modelos", model.as_token().to_string()));
        }
        for period in &self.periods {
            pairs.push(("periodos", period.as_token().to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}

/// Everything that decides what the listing shows. A new fetch cycle starts
/// whenever this changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: ListingQuery,
    /// Applied client-side, after the page arrives.
    pub skills: Vec<String>,
}

impl QueryKey {
    #[must_use]
    pub fn new(filters: &FilterState, catalog: &Catalog) -> Self {
        Self {
            query: ListingQuery::from_filters(filters, catalog),
            skills: filters.skills().iter().cloned().collect(),
        }
    }
}
