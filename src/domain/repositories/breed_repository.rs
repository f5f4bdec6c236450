//! Repository trait for paged breed data.

use crate::domain::entities::BreedPage;
use crate::error::UpstreamError;
use async_trait::async_trait;

/// Source of breed records, addressed one page at a time.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpBreedRepository`] - catfact.ninja-compatible HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedRepository: Send + Sync {
    /// Fetches a single page. Pages are numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure, unreadable body,
    /// non-success status or malformed JSON.
    async fn fetch_page(&self, page: u32) -> Result<BreedPage, UpstreamError>;
}
