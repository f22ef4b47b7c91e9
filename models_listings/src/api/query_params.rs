//! API layer query parameter types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::api::error::QueryValidationError;
use crate::service::filter::{BudgetRange, ListingFilter};
use crate::shared::PropertyType;

#[cfg(test)]
mod tests;

/// The sentinel value meaning "no constraint" for propertyType and bhk.
const ALL_SENTINEL: &str = "all";

/// Query parameters for the listing search endpoint.
///
/// All fields arrive as raw strings; [`ListingQueryParams::parse`]
/// turns them into a validated [ListingFilter]. Empty values are
/// treated as absent, matching what the browse UI sends.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListingQueryParams {
    /// Substring matched against location or title, case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Inclusive price range of the form `<min>-<max>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Exact property type, or `all` for no constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Exact bedroom count, or `all` for no constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhk: Option<String>,
}

/// Trim a raw parameter, dropping empty values.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl ListingQueryParams {
    /// Validate the raw parameters into a [ListingFilter].
    ///
    /// Malformed numeric input is rejected rather than coerced into a
    /// filter that silently matches nothing.
    pub fn parse(&self) -> Result<ListingFilter, QueryValidationError> {
        let location = present(&self.location).map(str::to_string);

        let budget = present(&self.budget)
            .map(BudgetRange::from_str)
            .transpose()?;

        let property_type = present(&self.property_type)
            .filter(|v| *v != ALL_SENTINEL)
            .map(|v| {
                PropertyType::from_str(v)
                    .map_err(|_| QueryValidationError::InvalidPropertyType(v.to_string()))
            })
            .transpose()?;

        let bhk = present(&self.bhk)
            .filter(|v| *v != ALL_SENTINEL)
            .map(|v| {
                v.parse::<i32>()
                    .map_err(|_| QueryValidationError::InvalidBhk(v.to_string()))
            })
            .transpose()?;

        Ok(ListingFilter {
            location,
            budget,
            property_type,
            bhk,
        })
    }
}
