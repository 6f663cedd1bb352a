use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::MatchSuggestion;

/// Body of `POST /api/v1/matches:calculate`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateMatchRequest {
    #[serde(default)]
    pub user_a_id: String,
    #[serde(default)]
    pub user_b_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionsQuery {
    /// Maximum number of suggestions. Clamped to `1..=50`, defaults to 10.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestionsResponse {
    pub matches: Vec<MatchSuggestion>,
    pub total: usize,
}

impl From<Vec<MatchSuggestion>> for SuggestionsResponse {
    fn from(matches: Vec<MatchSuggestion>) -> Self {
        Self {
            total: matches.len(),
            matches,
        }
    }
}
