//! HTTP inbound adapters - thin wrappers around the domain service

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use models_listings::api::{CreateListingRequest, ErrorBody, ListingQueryParams};
use models_listings::service::Listing;

use crate::api::admin::ValidAdminSession;
use crate::api::context::ApiContext;
use crate::domain::error::ListingError;
use crate::domain::ports::{ListingService, ListingStorage};

// ===== Error Handling =====

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ListingError> for HttpError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::NotFound(msg) => HttpError::NotFound(msg),
            ListingError::ValidationError(msg) => HttpError::BadRequest(msg),
            ListingError::Internal(e) => HttpError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => {
                // store faults are logged here and collapsed into a
                // generic body
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

// ===== Handlers =====

/// Search listings with optional filters
#[utoipa::path(
    get,
    tag = "listings service",
    path = "/properties",
    params(ListingQueryParams),
    responses(
        (status = 200, description = "Matching listings, newest first", body = Vec<Listing>),
        (status = 400, description = "Malformed filter parameter", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(ctx))]
pub async fn list_listings<S: ListingStorage>(
    State(ctx): State<ApiContext<S>>,
    Query(params): Query<ListingQueryParams>,
) -> Result<Json<Vec<Listing>>, HttpError> {
    let filter = params
        .parse()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let listings = ctx.service.list_listings(filter).await?;

    tracing::info!(listings_count = listings.len(), "retrieved listings");

    Ok(Json(listings))
}

/// Fetch a single listing by id
#[utoipa::path(
    get,
    tag = "listings service",
    path = "/properties/{id}",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "The listing", body = Listing),
        (status = 404, description = "No listing with this id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(ctx))]
pub async fn get_listing<S: ListingStorage>(
    State(ctx): State<ApiContext<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, HttpError> {
    let listing = ctx.service.get_listing(id).await?;
    Ok(Json(listing))
}

/// Create a listing (admin session required)
#[utoipa::path(
    post,
    tag = "listings service",
    path = "/properties",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created", body = Listing),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Missing or expired admin session", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
#[tracing::instrument(skip(ctx, request))]
pub async fn create_listing<S: ListingStorage>(
    _session: ValidAdminSession,
    State(ctx): State<ApiContext<S>>,
    Json(request): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<Listing>), HttpError> {
    let draft = request
        .normalize()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let listing = ctx.service.create_listing(draft).await?;

    tracing::info!(listing_id = %listing.id, "created listing");

    Ok((StatusCode::CREATED, Json(listing)))
}
