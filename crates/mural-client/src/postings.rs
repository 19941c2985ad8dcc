//! Posting endpoints: the filterable listing and single-posting lookup.

use mural_core::{JobPosting, ListingPage};

use crate::{BoardClient, error::ClientError};

impl BoardClient {
    /// URL for `GET /vagas` with `params` appended in order. Repeated keys
    /// are kept, which is how multi-valued facets are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL cannot be joined.
    pub fn listing_url(&self, params: &[(&str, String)]) -> Result<reqwest::Url, ClientError> {
        let mut url = self.ctx.url("/vagas")?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Fetch one page of postings (`GET /vagas?...`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a page envelope.
    pub async fn list_postings(
        &self,
        params: &[(&str, String)],
    ) -> Result<ListingPage, ClientError> {
        let url = self.listing_url(params)?;
        let page: ListingPage = self.send(url).await?.json().await?;
        Ok(page)
    }

    /// Fetch a single posting (`GET /vagas/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] on 404, otherwise the usual
    /// transport/status/parse errors.
    pub async fn get_posting(&self, id: &str) -> Result<JobPosting, ClientError> {
        let url = self
            .ctx
            .url(&format!("/vagas/{}", urlencoding::encode(id)))?;
        match self.send(url).await {
            Ok(resp) => Ok(resp.json().await?),
            Err(ClientError::Api { status: 404, .. }) => Err(ClientError::NotFound {
                resource: "posting",
                id: id.to_string(),
            }),
            Err(error) => Err(error),
        }
    }
}
