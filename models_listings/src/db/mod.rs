pub mod codec;
pub mod listing;

pub use listing::ListingRow;
