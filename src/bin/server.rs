use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use related_games_engine::catalog::{DeveloperSummary, Page};
use related_games_engine::{
    CatalogError, EngineOptions, Game, JsonFileSource, RelatedGamesEngine, RelatedResponse,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<RelatedGamesEngine>,
}

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default = "default_page")]
    page: usize,
}

fn default_page() -> usize { 1 }

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

fn default_max_results() -> usize { 5 }

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    games: usize,
    loaded_at: String,
}

#[derive(Debug, Serialize)]
struct DeveloperResponse {
    developer: DeveloperSummary,
    average_rating: String,
    games: Vec<Game>,
}

#[derive(Debug, Serialize)]
struct SearchHit {
    id: String,
    title: String,
    score: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "related_games_server=debug,related_games_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path = std::env::var("CATALOG_PATH").unwrap_or_else(|_| "catalog.json".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Related Games Server");
    tracing::info!("📦 Catalog: {}", catalog_path);
    tracing::info!("🔌 Port: {}", port);

    let source = JsonFileSource::new(&catalog_path);
    let engine = RelatedGamesEngine::from_source(&source, EngineOptions::default()).await?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", get(search_handler))
        .route("/v1/games/:id", get(game_handler))
        .route("/v1/games/:id/related", get(related_handler))
        .route("/v1/games/:id/more-like-this", get(more_like_this_handler))
        .route("/v1/developers/:slug", get(developer_handler))
        .route("/v1/genres/:slug", get(genre_handler))
        .route("/v1/platforms/:slug", get(platform_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.engine.catalog();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: related_games_engine::VERSION.to_string(),
        games: catalog.len(),
        loaded_at: catalog.loaded_at().to_rfc3339(),
    })
}

async fn game_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(state.engine.game(&id)?.clone()))
}

async fn related_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RelatedResponse>, AppError> {
    let result = state.engine.related(&id)?;
    tracing::info!("✅ related {} → {} games ({:.3}ms)", id, result.len(), result.latency_ms);
    Ok(Json(result))
}

async fn more_like_this_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RelatedResponse>, AppError> {
    let result = state.engine.more_like_this(&id)?;
    tracing::info!("✅ more-like-this {} → {} games ({:.3}ms)", id, result.len(), result.latency_ms);
    Ok(Json(result))
}

async fn developer_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<DeveloperResponse> {
    let (developer, games) = state.engine.developer(&slug);
    let average_rating = developer.formatted_average_rating();
    Json(DeveloperResponse {
        developer,
        average_rating,
        games,
    })
}

async fn genre_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Json<Page<Game>> {
    Json(state.engine.genre(&slug, params.page))
}

async fn platform_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Json<Page<Game>> {
    Json(state.engine.platform(&slug, params.page))
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchHit>> {
    tracing::debug!("Search request: {:?}", params);

    let hits = state
        .engine
        .search(&params.q, params.max_results)
        .into_iter()
        .map(|m| SearchHit {
            id: m.game.id.clone(),
            title: m.game.title.clone(),
            score: m.score,
        })
        .collect();

    Json(hits)
}

// Error handling
struct AppError(CatalogError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            CatalogError::GameNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Game not found: {}", id))
            }
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<CatalogError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
