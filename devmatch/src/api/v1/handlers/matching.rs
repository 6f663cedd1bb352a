//! v1 match handlers.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::v1::dto::{CalculateMatchRequest, SuggestionsQuery, SuggestionsResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::MatchResult;

/// `POST /api/v1/matches:calculate`
#[utoipa::path(
    post,
    path = "/api/v1/matches:calculate",
    tag = "matches",
    operation_id = "matches.calculate",
    request_body = CalculateMatchRequest,
    responses(
        (status = 200, description = "Compatibility between the two users", body = MatchResult),
        (status = 400, description = "Missing user id", body = ApiError),
        (status = 404, description = "A profile does not exist", body = ApiError),
    )
)]
pub async fn calculate_match(
    State(state): State<AppState>,
    Json(req): Json<CalculateMatchRequest>,
) -> ApiResponse<MatchResult> {
    let user_a = req.user_a_id.trim();
    let user_b = req.user_b_id.trim();
    if user_a.is_empty() || user_b.is_empty() {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "Both userAId and userBId are required",
        );
    }

    match state.matching.calculate_match(user_a, user_b).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/matches/suggestions/{userId}`
#[utoipa::path(
    get,
    path = "/api/v1/matches/suggestions/{userId}",
    tag = "matches",
    operation_id = "matches.suggestions",
    params(
        ("userId" = String, Path, description = "Requesting user"),
        SuggestionsQuery,
    ),
    responses(
        (status = 200, description = "Ranked suggestions", body = SuggestionsResponse),
    )
)]
pub async fn list_suggestions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<SuggestionsQuery>,
) -> ApiResponse<SuggestionsResponse> {
    match state
        .suggestions
        .list_suggestions(&user_id, query.limit)
        .await
    {
        Ok(matches) => ApiResponse::success(SuggestionsResponse::from(matches)),
        Err(e) => e.into(),
    }
}
