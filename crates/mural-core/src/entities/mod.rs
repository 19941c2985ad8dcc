//! Records owned by the job board backend.
//!
//! The client only reads these. Field names are English; the serde renames
//! carry the backend's Portuguese JSON keys.

mod catalog;
mod page;
mod posting;

pub use catalog::{Course, Skill};
pub use page::ListingPage;
pub use posting::JobPosting;
