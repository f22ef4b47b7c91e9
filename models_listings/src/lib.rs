//! Listing Models
//!
//! This crate defines the data models for the listings system using a three-layer architecture:
//!
//! - **shared**: Shared types (ListingStatus, PropertyType) used across all layers
//! - **db**: Database layer types (rows and the text codec for array-valued columns)
//! - **service**: Business logic layer types (the canonical Listing, drafts, filters)
//! - **api**: API layer types (external-facing requests/responses/query params)

pub mod api;
pub mod db;
pub mod service;
pub mod shared;

// Re-export commonly used shared types for convenience
pub use shared::{ListingStatus, PropertyType};
