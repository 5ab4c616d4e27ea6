use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geo_ranker_service::api::{create_router, AppState};
use geo_ranker_service::config::Config;
use geo_ranker_service::fetcher::ForecastFetcher;
use geo_ranker_service::marine_fetcher::MarineFetcher;
use geo_ranker_service::registry::ScorerRegistry;
use geo_ranker_service::services::RankingService;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,geo_ranker_service=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();
    info!("Starting geo ranker service with config: {:?}", config);

    // Build the scorer registry once; it is read-only for the life of the process
    let registry = Arc::new(ScorerRegistry::from_config(&config.activities));
    info!("Active activity scorers: {:?}", registry.ids());

    // Create upstream fetchers
    let forecast_fetcher = ForecastFetcher::new(
        config.weather_base_url.clone(),
        config.geocoding_base_url.clone(),
    );
    let marine_fetcher = MarineFetcher::new(config.marine_base_url.clone());

    // Create the ranking service
    let ranking_service = Arc::new(RankingService::new(
        forecast_fetcher.clone(),
        marine_fetcher,
        registry,
    ));

    // Create API router
    let app_state = AppState {
        ranking_service,
        forecast_fetcher,
    };
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
