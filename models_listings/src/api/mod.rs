pub mod error;
pub mod query_params;
pub mod requests;
pub mod responses;

pub use error::{CreateListingValidationError, QueryValidationError};
pub use query_params::ListingQueryParams;
pub use requests::{CreateListingRequest, NumberInput, StringListInput};
pub use responses::{AdminSessionRequest, AdminSessionResponse, ErrorBody};
