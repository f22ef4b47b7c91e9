//! Service port - defines the interface for listing business logic

use models_listings::service::{Listing, ListingDraft, ListingFilter};
use uuid::Uuid;

use crate::domain::error::Result;

/// The service level interface for listing operations
pub trait ListingService: Send + Sync + 'static {
    /// Fetch listings matching the filter, ordered newest first.
    /// An empty filter returns every listing.
    fn list_listings(
        &self,
        filter: ListingFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Listing>>> + Send;

    /// Fetch a single listing; a miss is NotFound, distinct from a
    /// storage fault.
    fn get_listing(&self, id: Uuid) -> impl std::future::Future<Output = Result<Listing>> + Send;

    /// Validate and insert a normalized listing draft.
    fn create_listing(
        &self,
        draft: ListingDraft,
    ) -> impl std::future::Future<Output = Result<Listing>> + Send;
}
