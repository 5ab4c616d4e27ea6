use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::fetcher::ForecastFetcher;
use crate::models::{GeocodingResult, LocationWeatherRanking};
use crate::services::RankingService;

#[derive(Clone)]
pub struct AppState {
    pub ranking_service: Arc<RankingService>,
    pub forecast_fetcher: ForecastFetcher,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/rankings", get(get_rankings))
        .route("/locations/search", get(search_locations))
        .with_state(state);

    Router::new().nest("/api/v1", api_routes)
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state), fields(city = %params.city, lat = %params.latitude, lon = %params.longitude))]
async fn get_rankings(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Json<LocationWeatherRanking>, StatusCode> {
    debug!("Ranking activities for {}, {}", params.city, params.country);

    let ranking = state
        .ranking_service
        .rank_location(&params.city, &params.country, params.latitude, params.longitude)
        .await
        .map_err(|e| {
            error!("Failed to rank activities for {}: {}", params.city, e);
            StatusCode::BAD_GATEWAY
        })?;

    info!(
        "Ranked {} forecast days for {}, {}",
        ranking.forecast.len(),
        params.city,
        params.country
    );

    Ok(Json(ranking))
}

#[instrument(skip(state), fields(query = %params.query))]
async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GeocodingResult>>, StatusCode> {
    debug!("Searching locations for '{}'", params.query);

    let results = state
        .forecast_fetcher
        .search_location(&params.query)
        .await
        .map_err(|e| {
            error!("Location search failed for '{}': {}", params.query, e);
            StatusCode::BAD_GATEWAY
        })?;

    info!("Found {} locations for '{}'", results.len(), params.query);

    Ok(Json(results))
}
