//! The listing fetch cycle.
//!
//! Every fetch is keyed to the [`QueryKey`] snapshot that triggered it and
//! stamped with a generation number. Only the completion carrying the latest
//! generation is applied; anything older is dropped, so a slow response for
//! a superseded filter set can never overwrite the listing.
//!
//! ```text
//! Idle ─► Loading ─► Ready
//!            ▲   └─► Failed
//!            └────────┘ (next key change)
//! ```

use std::sync::Arc;

use mural_client::ClientError;
use mural_core::{JobPosting, ListingPage};
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::card::PostingCard;
use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::pagination::Pagination;
use crate::query::{ListingQuery, QueryKey};
use crate::source::ListingSource;

pub const LOADING_MESSAGE: &str = "Carregando vagas...";
pub const EMPTY_MESSAGE: &str = "Nenhuma vaga encontrada com os filtros selecionados.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one issued listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: QueryKey,
}

impl FetchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn query(&self) -> &ListingQuery {
        &self.key.query
    }
}

/// What [`ListingController::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response belonged to the latest request and is now displayed.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Discarded,
    /// The filters did not change, so no request was issued.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct ListingController {
    generation: u64,
    key: Option<QueryKey>,
    phase: FetchPhase,
    postings: Vec<JobPosting>,
    hidden_by_skill_filter: usize,
    total_pages: u32,
}

impl ListingController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch cycle if the filters produce a different key than the
    /// one already displayed or in flight. Returns `None` when nothing
    /// changed.
    pub fn begin(&mut self, filters: &FilterState, catalog: &Catalog) -> Option<FetchTicket> {
        let key = QueryKey::new(filters, catalog);
        if self.phase != FetchPhase::Idle && self.key.as_ref() == Some(&key) {
            return None;
        }
        Some(self.issue(key))
    }

    /// Start a fetch cycle unconditionally, e.g. on an explicit reload.
    pub fn restart(&mut self, filters: &FilterState, catalog: &Catalog) -> FetchTicket {
        self.issue(QueryKey::new(filters, catalog))
    }

    fn issue(&mut self, key: QueryKey) -> FetchTicket {
        self.generation += 1;
        self.key = Some(key.clone());
        self.phase = FetchPhase::Loading;
        self.postings.clear();
        self.hidden_by_skill_filter = 0;
        self.total_pages = 0;
        tracing::debug!(
            generation = self.generation,
            page = key.query.page,
            "listing fetch issued"
        );
        FetchTicket {
            generation: self.generation,
            key,
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ListingPage, ClientError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding superseded listing response"
            );
            return Completion::Discarded;
        }

        match result {
            Ok(page) => {
                let fetched = page.content.len();
                self.postings = page
                    .content
                    .into_iter()
                    .filter(|posting| matches_skills(posting, &ticket.key.skills))
                    .collect();
                self.hidden_by_skill_filter = fetched - self.postings.len();
                self.total_pages = page.total_pages;
                self.phase = FetchPhase::Ready;
            }
            Err(error) => {
                tracing::warn!(%error, "listing fetch failed");
                self.postings.clear();
                self.hidden_by_skill_filter = 0;
                self.total_pages = 0;
                self.phase = FetchPhase::Failed(format!("Erro ao carregar vagas: {error}"));
            }
        }
        Completion::Applied
    }

    /// Run one whole cycle inline: begin, fetch, complete.
    pub async fn refresh(
        &mut self,
        source: &dyn ListingSource,
        filters: &FilterState,
        catalog: &Catalog,
    ) -> Completion {
        let Some(ticket) = self.begin(filters, catalog) else {
            return Completion::Unchanged;
        };
        let result = source.listing(ticket.query()).await;
        self.complete(&ticket, result)
    }

    #[must_use]
    pub const fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    #[must_use]
    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page index of the latest request.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.key.as_ref().map_or(0, |key| key.query.page)
    }

    #[must_use]
    pub fn view(&self, site_origin: &str) -> ListingView {
        let cards: Vec<PostingCard> = self
            .postings
            .iter()
            .map(|posting| PostingCard::new(posting, site_origin))
            .collect();

        let message = match &self.phase {
            FetchPhase::Idle => None,
            FetchPhase::Loading => Some(LOADING_MESSAGE.to_string()),
            FetchPhase::Failed(message) => Some(message.clone()),
            FetchPhase::Ready if cards.is_empty() => Some(EMPTY_MESSAGE.to_string()),
            FetchPhase::Ready => None,
        };

        let pagination = Pagination::new(self.page(), self.total_pages);
        ListingView {
            phase: self.phase.clone(),
            page: self.page(),
            total_pages: self.total_pages,
            hidden_by_skill_filter: self.hidden_by_skill_filter,
            message,
            cards,
            pagination: pagination.is_visible().then_some(pagination),
        }
    }
}

/// Run the request for `ticket` on the runtime. The handle yields the
/// ticket back so the caller can pass both to [`ListingController::complete`].
pub fn spawn_fetch(
    source: Arc<dyn ListingSource>,
    ticket: FetchTicket,
) -> JoinHandle<(FetchTicket, Result<ListingPage, ClientError>)> {
    tokio::spawn(async move {
        let result = source.listing(ticket.query()).await;
        (ticket, result)
    })
}

/// A posting is kept only if every selected skill appears in one of its
/// requirements or differentials.
#[must_use]
pub fn matches_skills(posting: &JobPosting, skills: &[String]) -> bool {
    skills.iter().all(|skill| posting.mentions(skill))
}

/// Snapshot of what the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub phase: FetchPhase,
    pub page: u32,
    pub total_pages: u32,
    /// Postings on this page removed by the skill post-filter. The page
    /// count comes from the backend and does not account for them.
    pub hidden_by_skill_filter: usize,
    pub message: Option<String>,
    pub cards: Vec<PostingCard>,
    pub pagination: Option<Pagination>,
}
