//! Server-issued admin sessions.
//!
//! Listing creation is gated behind a bearer token minted by exchanging
//! the configured access key; tokens live in process memory and expire
//! after twelve hours. Read endpoints stay public.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts, State},
    http::{header, request::Parts, StatusCode},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use models_listings::api::{AdminSessionRequest, AdminSessionResponse};

use crate::api::context::ApiContext;
use crate::domain::ports::ListingStorage;
use crate::inbound::http::HttpError;


/// How long an issued session stays valid.
const SESSION_TTL_HOURS: i64 = 12;

/// In-memory store of issued admin session tokens and their expiries
#[derive(Debug, Clone, Default)]
pub struct AdminSessions {
    inner: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl AdminSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh session token.
    pub async fn issue(&self) -> AdminSessionResponse {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);

        self.inner.write().await.insert(token.clone(), expires_at);

        AdminSessionResponse { token, expires_at }
    }

    /// Whether a presented token belongs to a live session. Expired
    /// tokens are pruned on the way out.
    pub async fn verify(&self, token: &str) -> bool {
        let mut sessions = self.inner.write().await;
        match sessions.get(token) {
            Some(expires_at) if *expires_at > Utc::now() => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }
}

/// Compare the configured access key against user input without
/// leaking the match position through timing.
fn access_key_matches(expected: &str, presented: &str) -> bool {
    Sha256::digest(expected.as_bytes()) == Sha256::digest(presented.as_bytes())
}

/// Sentinel value which represents that the request carried a live
/// admin session token
#[derive(Debug)]
pub struct ValidAdminSession(());

impl<S> FromRequestParts<S> for ValidAdminSession
where
    AdminSessions: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                HttpError::Unauthorized("missing bearer admin session token".to_string())
            })?;

        let sessions = AdminSessions::from_ref(state);
        if !sessions.verify(token).await {
            return Err(HttpError::Unauthorized(
                "unknown or expired admin session".to_string(),
            ));
        }

        Ok(ValidAdminSession(()))
    }
}

/// Exchange the admin access key for a session token
#[utoipa::path(
    post,
    tag = "listings service",
    path = "/admin/sessions",
    request_body = AdminSessionRequest,
    responses(
        (status = 201, description = "Session opened", body = AdminSessionResponse),
        (status = 401, description = "Wrong access key", body = models_listings::api::ErrorBody),
    )
)]
#[tracing::instrument(skip(ctx, request))]
pub async fn create_admin_session<S: ListingStorage>(
    State(ctx): State<ApiContext<S>>,
    Json(request): Json<AdminSessionRequest>,
) -> Result<(StatusCode, Json<AdminSessionResponse>), HttpError> {
    if !access_key_matches(&ctx.config.admin_access_key, &request.access_key) {
        tracing::warn!("admin session request with wrong access key");
        return Err(HttpError::Unauthorized("wrong access key".to_string()));
    }

    let session = ctx.admin_sessions.issue().await;

    tracing::info!(expires_at = %session.expires_at, "opened admin session");

    Ok((StatusCode::CREATED, Json(session)))
}
