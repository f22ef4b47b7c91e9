//! API layer request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::CreateListingValidationError;
use crate::service::listing::ListingDraft;
use crate::shared::{ListingStatus, PropertyType};

#[cfg(test)]
mod tests;

/// A numeric field that clients may send either as a JSON number or as
/// a numeric string (HTML forms post strings).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Coerce to a finite float, naming the field on failure.
    pub fn as_f64(&self, field: &'static str) -> Result<f64, CreateListingValidationError> {
        let value = match self {
            NumberInput::Number(n) => Some(*n),
            NumberInput::Text(s) => s.trim().parse::<f64>().ok(),
        };

        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| CreateListingValidationError::NonNumericField {
                field,
                value: match self {
                    NumberInput::Number(n) => n.to_string(),
                    NumberInput::Text(s) => s.clone(),
                },
            })
    }

    /// Coerce to an integer, rejecting fractional values.
    pub fn as_i64(&self, field: &'static str) -> Result<i64, CreateListingValidationError> {
        let value = self.as_f64(field)?;
        if value.fract() != 0.0 {
            return Err(CreateListingValidationError::NonIntegerField { field, value });
        }
        Ok(value as i64)
    }
}

impl From<i64> for NumberInput {
    fn from(n: i64) -> Self {
        NumberInput::Number(n as f64)
    }
}

impl From<f64> for NumberInput {
    fn from(n: f64) -> Self {
        NumberInput::Number(n)
    }
}

/// An ordered list of strings that clients may send either as a JSON
/// array or as one comma-separated string; any other shape normalizes
/// to the empty list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum StringListInput {
    Items(Vec<String>),
    Csv(String),
    /// Anything else a client manages to send.
    Other(serde_json::Value),
}

impl StringListInput {
    /// Normalize to the canonical ordered-sequence form.
    ///
    /// CSV input is split on commas with each element trimmed and
    /// empty elements dropped; array input is passed through as-is.
    pub fn normalize(self) -> Vec<String> {
        match self {
            StringListInput::Items(items) => items,
            StringListInput::Csv(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            StringListInput::Other(_) => Vec::new(),
        }
    }
}

/// Request to create a new listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: NumberInput,
    pub area: NumberInput,
    pub status: ListingStatus,
    pub property_type: PropertyType,
    pub bhk: NumberInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<StringListInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<StringListInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_location: Option<String>,
}

impl CreateListingRequest {
    /// Normalize the payload into a [ListingDraft], coercing numeric
    /// fields and collapsing the dual-shape list inputs.
    pub fn normalize(self) -> Result<ListingDraft, CreateListingValidationError> {
        let price = self.price.as_i64("price")?;
        let area = self.area.as_f64("area")?;
        let bhk = i32::try_from(self.bhk.as_i64("bhk")?)
            .map_err(|_| CreateListingValidationError::OutOfRangeField { field: "bhk" })?;

        Ok(ListingDraft {
            title: self.title,
            location: self.location,
            description: self.description.unwrap_or_default(),
            price,
            area,
            status: self.status,
            property_type: self.property_type,
            bhk,
            city: self.city,
            images: self.images.map(StringListInput::normalize).unwrap_or_default(),
            amenities: self
                .amenities
                .map(StringListInput::normalize)
                .unwrap_or_default(),
            map_location: self.map_location,
        })
    }
}
