//! Listings Service library following hexagonal architecture pattern
//!
//! This library provides the property-listing domain logic and can be
//! composed into various runtime contexts (the HTTP service binary,
//! tests against the in-memory storage adapter, etc.)

pub mod api;
pub mod config;
pub mod domain;
pub mod entrypoint;
pub mod inbound;
pub mod outbound;

pub use config::{Config, Environment};
