//! Storage port - defines the interface for listing persistence operations

use models_listings::service::{Listing, ListingDraft, ListingFilter};
use uuid::Uuid;

/// Storage port for all listing persistence operations
pub trait ListingStorage: Send + Sync + 'static {
    /// Error type for storage operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert exactly one listing, returning the stored record with
    /// its generated id and timestamps.
    fn insert_listing(
        &self,
        draft: ListingDraft,
    ) -> impl std::future::Future<Output = Result<Listing, Self::Error>> + Send;

    fn get_listing(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Listing>, Self::Error>> + Send;

    /// List listings matching the filter, newest first.
    fn list_listings(
        &self,
        filter: &ListingFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Listing>, Self::Error>> + Send;
}
