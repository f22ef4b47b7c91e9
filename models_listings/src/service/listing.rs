//! Service layer listing models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{ListingStatus, PropertyType};

/// A property listing as returned to clients (service representation).
///
/// Array-valued fields are already decoded from their storage form;
/// the JSON wire format is camelCase to preserve the public contract.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Asking price in whole rupees.
    pub price: i64,
    /// Floor area in square feet.
    pub area: f64,
    pub status: ListingStatus,
    pub property_type: PropertyType,
    /// Bedroom-hall-kitchen count; 0 for plots.
    pub bhk: i32,
    pub city: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub map_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fully normalized listing payload, ready for insertion.
///
/// Produced by [`crate::api::CreateListingRequest::normalize`]; the id
/// and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub description: String,
    pub price: i64,
    pub area: f64,
    pub status: ListingStatus,
    pub property_type: PropertyType,
    pub bhk: i32,
    pub city: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub map_location: Option<String>,
}

/// Errors that can occur during draft validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DraftValidationError {
    #[error("title must not be blank")]
    BlankTitle,

    #[error("location must not be blank")]
    BlankLocation,

    #[error("price must be positive; got {0}")]
    NonPositivePrice(i64),

    #[error("area must be positive; got {0}")]
    NonPositiveArea(f64),

    #[error("bhk must be non-negative; got {0}")]
    NegativeBhk(i32),
}

impl ListingDraft {
    /// Check the business invariants an insertable listing must hold.
    /// A bhk of 0 is valid; it marks non-residential (plot) listings.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::BlankTitle);
        }
        if self.location.trim().is_empty() {
            return Err(DraftValidationError::BlankLocation);
        }
        if self.price <= 0 {
            return Err(DraftValidationError::NonPositivePrice(self.price));
        }
        if self.area <= 0.0 {
            return Err(DraftValidationError::NonPositiveArea(self.area));
        }
        if self.bhk < 0 {
            return Err(DraftValidationError::NegativeBhk(self.bhk));
        }
        Ok(())
    }
}
