use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevMatch API",
        version = "1.0.0",
        description = "Developer compatibility scoring from public GitHub activity.",
    ),
    paths(
        handlers::health::health_check,
        handlers::matching::calculate_match,
        handlers::matching::list_suggestions,
        handlers::fingerprints::get_fingerprint,
    ),
    components(schemas(
        response::ErrorCode,
        response::ApiError,
        dto::CalculateMatchRequest,
        dto::SuggestionsResponse,
        models::MatchResult,
        models::Compatibility,
        models::CompatibilityBreakdown,
        models::FactorScore,
        models::MatchInsights,
        models::TechAnalysis,
        models::MatchSuggestion,
        models::CandidateSummary,
        models::TechFingerprint,
        models::CommitFrequency,
        models::ActivityMetrics,
        models::ProjectPatterns,
        models::DeveloperInterests,
        models::OpenSourceProfile,
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::GitHubStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "matches", description = "Pairwise compatibility and ranked suggestions"),
        (name = "fingerprints", description = "Tech fingerprints derived from GitHub activity"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
