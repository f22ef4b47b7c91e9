//! Listing status shared across database, service, and API layers.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Whether a listing is offered for sale or for rent.
///
/// The wire and storage form is the exact display string ("For Sale" /
/// "For Rent") carried over from the original listing data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum ListingStatus {
    /// The property is offered for purchase.
    #[serde(rename = "For Sale")]
    ForSale,
    /// The property is offered for rent.
    #[serde(rename = "For Rent")]
    ForRent,
}

/// Represents a value which cannot be converted into a [ListingStatus]
#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown listing status: {0}")]
pub struct UnknownListingStatus(pub String);

impl Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::ForSale => write!(f, "For Sale"),
            ListingStatus::ForRent => write!(f, "For Rent"),
        }
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownListingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Sale" => Ok(ListingStatus::ForSale),
            "For Rent" => Ok(ListingStatus::ForRent),
            other => Err(UnknownListingStatus(other.to_string())),
        }
    }
}
