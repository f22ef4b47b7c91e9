//! PostgreSQL implementation of the listing storage port.
//! Maps directly from SQL rows to service models.

mod listings;

use models_listings::db::listing::ListingRowError;
use models_listings::service::{Listing, ListingDraft, ListingFilter};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ports::ListingStorage;

/// PostgreSQL storage implementation for listings
#[derive(Debug, Clone)]
pub struct ListingsPgStorage {
    pool: PgPool,
}

/// Error type for listing storage operations
#[derive(Debug, Error)]
pub enum ListingsStorageError {
    /// Database error
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    /// Data parsing error (e.g. invalid enum value from the database)
    #[error("data parsing error: {0}")]
    Parse(#[from] ListingRowError),
}

impl ListingsPgStorage {
    /// Create a new PostgreSQL listing storage
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ListingStorage for ListingsPgStorage {
    type Error = ListingsStorageError;

    async fn insert_listing(&self, draft: ListingDraft) -> Result<Listing, Self::Error> {
        listings::insert_listing(&self.pool, draft).await
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, Self::Error> {
        listings::get_listing(&self.pool, id).await
    }

    async fn list_listings(&self, filter: &ListingFilter) -> Result<Vec<Listing>, Self::Error> {
        listings::list_listings(&self.pool, filter).await
    }
}
