use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::ApiContext;
use crate::domain::ports::ListingStorage;
use crate::inbound::http;
use crate::outbound::ListingsPgStorage;

pub mod admin;
pub mod context;
pub mod health;
pub mod swagger;

pub async fn setup_and_serve(state: ApiContext<ListingsPgStorage>) -> anyhow::Result<()> {
    let port = state.config.port;
    let env = state.config.environment;
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "listings service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

pub fn api_router<S: ListingStorage>(state: ApiContext<S>) -> Router {
    Router::new()
        .route(
            "/properties",
            get(http::list_listings::<S>).post(http::create_listing::<S>),
        )
        .route("/properties/{id}", get(http::get_listing::<S>))
        .route("/admin/sessions", post(admin::create_admin_session::<S>))
        .with_state(state)
}
