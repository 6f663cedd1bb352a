use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::v1_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let protected_routes = Router::new()
        .route(
            "/matches:calculate",
            post(handlers::matching::calculate_match),
        )
        .route(
            "/matches/suggestions/{userId}",
            get(handlers::matching::list_suggestions),
        )
        .route(
            "/fingerprints/{handle}",
            get(handlers::fingerprints::get_fingerprint),
        )
        .route_layer(middleware::from_fn_with_state(state, v1_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
