//! # mural-core
//!
//! Core types and error types for the Mural de Estágios job board client.
//!
//! This crate provides the foundational types shared across all Mural crates:
//! - Entity structs for the backend's records (postings, courses, skills)
//! - The paginated listing envelope returned by `GET /vagas`
//! - Facet enums (work model, posting status, shift) with their wire tokens
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
mod wire;

pub use entities::{Course, JobPosting, ListingPage, Skill};
pub use enums::{PostingStatus, Shift, WorkModel};
pub use errors::CoreError;
