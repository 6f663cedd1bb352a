mod state;
pub mod v1;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

use v1::response::{ApiResponse, ErrorCode};

/// Full application router: the v1 API under `/api/v1`, with unknown paths
/// answered in the v1 error envelope.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", v1::router::v1_router(state.clone()))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> ApiResponse<()> {
    ApiResponse::error(ErrorCode::NotFound, "No such route")
}
