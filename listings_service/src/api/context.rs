use std::sync::Arc;

use axum::extract::FromRef;

use crate::api::admin::AdminSessions;
use crate::config::Config;
use crate::domain::services::ListingServiceImpl;

/// Shared state for the HTTP layer, generic over the storage adapter
/// so the router can be driven by the in-memory storage in tests.
pub struct ApiContext<S> {
    pub service: Arc<ListingServiceImpl<S>>,
    pub config: Arc<Config>,
    pub admin_sessions: AdminSessions,
}

// manual impl: S itself does not need to be Clone behind the Arc
impl<S> Clone for ApiContext<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
            admin_sessions: self.admin_sessions.clone(),
        }
    }
}

impl<S> FromRef<ApiContext<S>> for AdminSessions {
    fn from_ref(ctx: &ApiContext<S>) -> Self {
        ctx.admin_sessions.clone()
    }
}
