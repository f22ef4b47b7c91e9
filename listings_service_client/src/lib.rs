//! Typed HTTP client for the listings service, plus the browse
//! view-state used by frontends.

use reqwest::StatusCode;
use uuid::Uuid;

pub mod view_state;

pub use models_listings::api::{
    AdminSessionRequest, AdminSessionResponse, CreateListingRequest, ErrorBody,
    ListingQueryParams,
};
pub use models_listings::service::Listing;
pub use view_state::{BrowseState, FilterForm};

use thiserror::Error;

/// An error returned by the listings service client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The id did not name a listing; distinct from a fault
    #[error("listing not found")]
    NotFound,

    /// The service answered with an error body
    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Clone)]
pub struct ListingsServiceClient {
    url: String,
    client: reqwest::Client,
}

impl ListingsServiceClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Search listings; an empty query returns everything, newest
    /// first.
    #[tracing::instrument(skip(self), err)]
    pub async fn list_listings(
        &self,
        query: &ListingQueryParams,
    ) -> Result<Vec<Listing>, ClientError> {
        let response = self
            .client
            .get(format!("{}/properties", self.url))
            .query(query)
            .send()
            .await?;

        Self::parse(response).await
    }

    #[tracing::instrument(skip(self), err)]
    pub async fn get_listing(&self, id: Uuid) -> Result<Listing, ClientError> {
        let response = self
            .client
            .get(format!("{}/properties/{}", self.url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        Self::parse(response).await
    }

    /// Exchange the admin access key for a session token.
    #[tracing::instrument(skip(self, access_key), err)]
    pub async fn create_admin_session(
        &self,
        access_key: &str,
    ) -> Result<AdminSessionResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/admin/sessions", self.url))
            .json(&AdminSessionRequest {
                access_key: access_key.to_string(),
            })
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Create a listing; requires a live admin session token.
    #[tracing::instrument(skip(self, token, request), err)]
    pub async fn create_listing(
        &self,
        token: &str,
        request: &CreateListingRequest,
    ) -> Result<Listing, ClientError> {
        let response = self
            .client
            .post(format!("{}/properties", self.url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        Err(ClientError::Api { status, message })
    }
}
