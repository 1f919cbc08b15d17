mod model;
mod server;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{
    cache::ListingCache, config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let cache = Arc::new(ListingCache::new(config.cache_capacity));
    startup::spawn_cache_janitor(cache.clone(), config.cache_ttl);

    let state = AppState::new(db, cache, config.listing_settings(), config.app_url.clone());
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
