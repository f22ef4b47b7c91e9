//! The listing filter predicate built from search query parameters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::service::listing::Listing;
use crate::shared::PropertyType;

#[cfg(test)]
mod tests;

/// An inclusive price range, written on the wire as `"<min>-<max>"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: i64,
    pub max: i64,
}

impl BudgetRange {
    /// Whether a price falls inside the range, bounds included.
    pub fn contains(&self, price: i64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

/// An error which can occur when parsing a [BudgetRange]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BudgetRangeParseError {
    #[error("budget must be of the form <min>-<max>")]
    MissingSeparator,
    #[error("budget bound {0:?} is not a number")]
    NonNumericBound(String),
    #[error("budget minimum {min} exceeds maximum {max}")]
    InvertedRange { min: i64, max: i64 },
}

impl FromStr for BudgetRange {
    type Err = BudgetRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or(BudgetRangeParseError::MissingSeparator)?;

        let parse_bound = |raw: &str| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| BudgetRangeParseError::NonNumericBound(raw.trim().to_string()))
        };

        let min = parse_bound(min)?;
        let max = parse_bound(max)?;
        if min > max {
            return Err(BudgetRangeParseError::InvertedRange { min, max });
        }

        Ok(BudgetRange { min, max })
    }
}

/// The combined set of constraints applied to a listing query.
///
/// Every field is optional; an empty filter matches all listings. The
/// postgres adapter translates this to SQL, [`ListingFilter::matches`]
/// is the equivalent in-memory predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingFilter {
    /// Case-insensitive substring matched against location OR title.
    pub location: Option<String>,
    pub budget: Option<BudgetRange>,
    pub property_type: Option<PropertyType>,
    pub bhk: Option<i32>,
}

impl ListingFilter {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.budget.is_none()
            && self.property_type.is_none()
            && self.bhk.is_none()
    }

    /// Apply the filter to a single listing.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(needle) = &self.location {
            let needle = needle.to_lowercase();
            let in_location = listing.location.to_lowercase().contains(&needle);
            let in_title = listing.title.to_lowercase().contains(&needle);
            if !in_location && !in_title {
                return false;
            }
        }

        if let Some(budget) = &self.budget {
            if !budget.contains(listing.price) {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }

        if let Some(bhk) = self.bhk {
            if listing.bhk != bhk {
                return false;
            }
        }

        true
    }
}
