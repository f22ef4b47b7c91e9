use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use listings_service::api::{self, admin::AdminSessions, context::ApiContext};
use listings_service::config::{Config, Environment};
use listings_service::domain::services::ListingServiceImpl;
use listings_service::entrypoint;
use listings_service::outbound::ListingsPgStorage;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    entrypoint::init_tracing(Environment::new_or_prod());

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to the listings database")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized database connection"
    );

    MIGRATOR
        .run(&db)
        .await
        .context("failed to apply migrations")?;

    tracing::info!("applied pending migrations");

    let service = Arc::new(ListingServiceImpl::new(ListingsPgStorage::new(db)));

    api::setup_and_serve(ApiContext {
        service,
        config: Arc::new(config),
        admin_sessions: AdminSessions::new(),
    })
    .await?;
    Ok(())
}
