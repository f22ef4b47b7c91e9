//! Service implementation for all listing operations

use models_listings::service::{Listing, ListingDraft, ListingFilter};
use uuid::Uuid;

use crate::domain::{
    error::{ListingError, Result},
    ports::{ListingService, ListingStorage},
};


/// Concrete implementation of [ListingService]
pub struct ListingServiceImpl<S> {
    storage: S,
}

impl<S> ListingServiceImpl<S>
where
    S: ListingStorage,
{
    /// Create a new listing service implementation
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

fn internal<E>(err: E) -> ListingError
where
    E: std::error::Error + Send + Sync + 'static,
{
    ListingError::Internal(anyhow::Error::new(err))
}

impl<S> ListingService for ListingServiceImpl<S>
where
    S: ListingStorage,
{
    async fn list_listings(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        self.storage
            .list_listings(&filter)
            .await
            .map_err(internal)
    }

    async fn get_listing(&self, id: Uuid) -> Result<Listing> {
        self.storage
            .get_listing(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ListingError::NotFound(format!("no listing with id {id}")))
    }

    async fn create_listing(&self, draft: ListingDraft) -> Result<Listing> {
        draft
            .validate()
            .map_err(|e| ListingError::ValidationError(e.to_string()))?;

        self.storage.insert_listing(draft).await.map_err(internal)
    }
}
