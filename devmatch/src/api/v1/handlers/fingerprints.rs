use axum::extract::{Path, State};

use crate::api::v1::response::ApiResponse;
use crate::api::AppState;
use crate::models::TechFingerprint;

/// `GET /api/v1/fingerprints/{handle}`
///
/// Handles that do not name a user return the zero fingerprint.
#[utoipa::path(
    get,
    path = "/api/v1/fingerprints/{handle}",
    tag = "fingerprints",
    operation_id = "fingerprints.get",
    params(("handle" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "Derived tech fingerprint", body = TechFingerprint),
    )
)]
pub async fn get_fingerprint(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResponse<TechFingerprint> {
    ApiResponse::success(state.fingerprints.build(&handle).await)
}
