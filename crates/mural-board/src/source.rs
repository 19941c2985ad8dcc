//! The seam between the pipeline and the network.

use async_trait::async_trait;
use mural_client::{BoardClient, ClientError};
use mural_core::{Course, JobPosting, ListingPage, Skill};

use crate::query::ListingQuery;

/// Read-only access to the job board backend.
///
/// [`BoardClient`] is the production implementation; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn courses(&self) -> Result<Vec<Course>, ClientError>;

    async fn skills(&self) -> Result<Vec<Skill>, ClientError>;

    async fn listing(&self, query: &ListingQuery) -> Result<ListingPage, ClientError>;

    async fn posting(&self, id: &str) -> Result<JobPosting, ClientError>;
}

#[async_trait]
impl ListingSource for BoardClient {
    async fn courses(&self) -> Result<Vec<Course>, ClientError> {
        self.list_courses().await
    }

    async fn skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.list_skills().await
    }

    async fn listing(&self, query: &ListingQuery) -> Result<ListingPage, ClientError> {
        self.list_postings(&query.to_pairs()).await
    }

    async fn posting(&self, id: &str) -> Result<JobPosting, ClientError> {
        self.get_posting(id).await
    }
}
