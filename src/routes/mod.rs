pub mod candidate_routes;
pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/search", post(search::search_candidates))
        .route(
            "/api/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::register_candidate),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
