//! Database layer listing model.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::db::codec::{self, ListDecodeError};
use crate::service::listing::Listing;
use crate::shared::{
    listing_status::UnknownListingStatus, property_type::UnknownPropertyType, ListingStatus,
    PropertyType,
};


/// A listing row exactly as stored: enums as their display strings,
/// array fields as JSON-encoded text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingRow {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub description: String,
    pub price: i64,
    pub area: f64,
    pub status: String,
    pub property_type: String,
    pub bhk: i32,
    pub city: Option<String>,
    pub images: String,
    pub amenities: String,
    pub map_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An error which can occur when converting a stored row into the
/// service model.
#[derive(Debug, Error)]
pub enum ListingRowError {
    #[error(transparent)]
    Status(#[from] UnknownListingStatus),
    #[error(transparent)]
    PropertyType(#[from] UnknownPropertyType),
    #[error(transparent)]
    List(#[from] ListDecodeError),
}

// ===== Conversions =====

impl TryFrom<ListingRow> for Listing {
    type Error = ListingRowError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        Ok(Listing {
            id: row.id,
            title: row.title,
            location: row.location,
            description: row.description,
            price: row.price,
            area: row.area,
            status: ListingStatus::from_str(&row.status)?,
            property_type: PropertyType::from_str(&row.property_type)?,
            bhk: row.bhk,
            city: row.city,
            images: codec::decode_string_list(&row.images)?,
            amenities: codec::decode_string_list(&row.amenities)?,
            map_location: row.map_location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
