pub mod filter;
pub mod listing;

pub use filter::{BudgetRange, ListingFilter};
pub use listing::{Listing, ListingDraft};
