//! In-memory implementation of the listing storage port.
//!
//! Backs the service in tests so the full request path can run without
//! a database; applies [ListingFilter::matches] where the postgres
//! adapter builds the equivalent SQL.

use std::convert::Infallible;
use std::sync::Arc;

use chrono::Utc;
use models_listings::service::{Listing, ListingDraft, ListingFilter};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::ListingStorage;

/// Listing storage backed by a shared in-memory vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryListings {
    rows: Arc<RwLock<Vec<Listing>>>,
}

impl InMemoryListings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingStorage for InMemoryListings {
    type Error = Infallible;

    async fn insert_listing(&self, draft: ListingDraft) -> Result<Listing, Self::Error> {
        let now = Utc::now();
        let listing = Listing {
            id: Uuid::new_v4(),
            title: draft.title,
            location: draft.location,
            description: draft.description,
            price: draft.price,
            area: draft.area,
            status: draft.status,
            property_type: draft.property_type,
            bhk: draft.bhk,
            city: draft.city,
            images: draft.images,
            amenities: draft.amenities,
            map_location: draft.map_location,
            created_at: now,
            updated_at: now,
        };

        self.rows.write().await.push(listing.clone());
        Ok(listing)
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, Self::Error> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|l| l.id == id).cloned())
    }

    async fn list_listings(&self, filter: &ListingFilter) -> Result<Vec<Listing>, Self::Error> {
        let rows = self.rows.read().await;
        let mut matched: Vec<Listing> = rows.iter().filter(|l| filter.matches(l)).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}
