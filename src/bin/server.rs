use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_recommender::{
    CatalogEntry, Recommendation, RecommendRequest, Recommender, RecommenderConfig,
    RecommenderError, UserPreference,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<Recommender>,
}

#[derive(Debug, Deserialize)]
struct RecommendBody {
    city: String,
    /// Catalog labels to select
    #[serde(default)]
    features: Vec<String>,
    /// Raw preference vector, takes precedence over `features`
    #[serde(default)]
    preference: Option<UserPreference>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct CitiesResponse {
    cities: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FeaturesResponse {
    features: Vec<CatalogEntry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_recommender_server=debug,hotel_recommender=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match std::env::var("HOTEL_CONFIG") {
        Ok(path) => RecommenderConfig::from_file(path)?,
        Err(_) => RecommenderConfig::default(),
    };
    config.apply_env_overrides()?;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Hotel Recommender Server");
    tracing::info!("📦 Dataset: {}", config.dataset.path.display());
    tracing::info!("🔌 Port: {}", port);

    let engine = Recommender::from_config(&config)?;
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🏨 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/cities", get(cities_handler))
        .route("/v1/features", get(features_handler))
        .route("/v1/recommend", post(recommend_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: hotel_recommender::VERSION.to_string(),
    })
}

async fn cities_handler(State(state): State<AppState>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: state.engine.cities(),
    })
}

async fn features_handler(State(state): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        features: state.engine.catalog().entries().to_vec(),
    })
}

async fn recommend_handler(
    State(state): State<AppState>,
    Json(body): Json<RecommendBody>,
) -> Result<Json<Recommendation>, AppError> {
    tracing::debug!("Recommend request: {:?}", body);

    let preference = match body.preference {
        Some(preference) => preference,
        None => state.engine.catalog().preference_from_labels(&body.features)?,
    };

    let result = state.engine.recommend(&RecommendRequest {
        city: body.city,
        preference,
    })?;

    Ok(Json(result))
}

// Error handling
struct AppError(RecommenderError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RecommenderError::DimensionMismatch { .. }
            | RecommenderError::InvalidPreference(_)
            | RecommenderError::UnknownFeature(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.to_string();

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<RecommenderError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
