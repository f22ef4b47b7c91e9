//! Outbound adapters - storage implementations

pub mod memory;
pub mod postgres;

pub use memory::InMemoryListings;
pub use postgres::ListingsPgStorage;
