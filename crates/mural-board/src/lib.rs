//! # mural-board
//!
//! The job listing pipeline behind the "Vagas" page:
//!
//! ```text
//! user toggles a facet ─► FilterState (page → 0)
//!                        │
//!                        ▼
//!        ListingQuery::from_filters(&FilterState, &Catalog)
//!                        │  key changed?
//!                        ▼
//!   ListingController::begin ─► FetchTicket ─► ListingSource::listing
//!                                                    │
//!   ListingController::complete ◄────────────────────┘
//!        │ stale ticket → discarded
//!        ▼
//!   skill post-filter ─► PostingCard[] + Pagination
//! ```
//!
//! The catalog (courses, skills) is loaded once and read-only afterwards.

pub mod card;
pub mod catalog;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod query;
pub mod source;

pub use card::{PostingCard, PostingDetail};
pub use catalog::Catalog;
pub use filter::FilterState;
pub use listing::{
    Completion, FetchPhase, FetchTicket, ListingController, ListingView, matches_skills,
    spawn_fetch,
};
pub use pagination::{PageButton, Pagination};
pub use query::{ListingQuery, PAGE_SIZE, QueryKey};
pub use source::ListingSource;
