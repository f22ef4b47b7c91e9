use models_listings::api;
use models_listings::service::Listing;
use models_listings::shared::{ListingStatus, PropertyType};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::list_listings,
        crate::inbound::http::get_listing,
        crate::inbound::http::create_listing,
        crate::api::admin::create_admin_session,
    ),
    components(
        schemas(
            Listing,
            ListingStatus,
            PropertyType,
            api::CreateListingRequest,
            api::requests::NumberInput,
            api::requests::StringListInput,
            api::AdminSessionRequest,
            api::AdminSessionResponse,
            api::ErrorBody,
        )
    ),
    tags(
        (name = "listings service", description = "Property listings search and management")
    )
)]
pub struct ApiDoc;
