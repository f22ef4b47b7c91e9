//! Property type shared across database, service, and API layers.

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// The kind of property a listing describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// An apartment unit.
    Flat,
    /// A standalone house.
    Villa,
    /// An undeveloped parcel of land. Plots carry a bhk of 0.
    Plot,
}

/// Represents a value which cannot be converted into a [PropertyType]
#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown property type: {0}")]
pub struct UnknownPropertyType(pub String);

impl Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Flat => write!(f, "flat"),
            PropertyType::Villa => write!(f, "villa"),
            PropertyType::Plot => write!(f, "plot"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(PropertyType::Flat),
            "villa" => Ok(PropertyType::Villa),
            "plot" => Ok(PropertyType::Plot),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}
