use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::config::MatchingConfig;
use crate::error::Result;
use crate::models::{CandidateSummary, MatchSuggestion, UserProfile};

use super::MatchingService;

/// Ranks stored candidates against one requester.
#[derive(Clone)]
pub struct SuggestionService {
    matching: MatchingService,
    config: MatchingConfig,
}

impl SuggestionService {
    pub fn new(matching: MatchingService, config: MatchingConfig) -> Self {
        Self { matching, config }
    }

    /// Clamps a requested limit into `[1, max_suggestion_limit]`.
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.config.default_suggestion_limit)
            .clamp(1, self.config.max_suggestion_limit.max(1))
    }

    /// Best matches for `uid`, highest score first.
    ///
    /// Candidates whose match computation fails are dropped. Candidates the
    /// requester has swiped left on are never considered.
    pub async fn list_suggestions(
        &self,
        uid: &str,
        limit: Option<u32>,
    ) -> Result<Vec<MatchSuggestion>> {
        let limit = self.effective_limit(limit);
        let pool = self.config.candidate_pool_size.max(limit);

        let store = self.matching.store();
        let requester = store.get_profile(uid).await?;
        let candidates: Vec<UserProfile> = store
            .list_profiles(uid, pool)
            .await?
            .into_iter()
            .filter(|c| {
                requester
                    .as_ref()
                    .map_or(true, |r| !r.has_left_swiped(&c.uid))
            })
            .collect();

        debug!(
            uid,
            limit,
            candidates = candidates.len(),
            "Ranking suggestion candidates"
        );

        let concurrency = self.config.suggestion_concurrency.max(1);
        let outcomes: Vec<Option<MatchSuggestion>> = stream::iter(candidates)
            .map(|candidate| async move {
                match self.matching.calculate_match(uid, &candidate.uid).await {
                    Ok(result) => Some(MatchSuggestion {
                        user: summarize(&candidate),
                        match_score: result.match_score,
                        compatibility: result.compatibility,
                    }),
                    Err(e) => {
                        warn!(
                            uid,
                            candidate = %candidate.uid,
                            error = %e,
                            "Dropping suggestion candidate"
                        );
                        None
                    }
                }
            })
            .buffered(concurrency)
            .collect()
            .await;

        let mut suggestions: Vec<MatchSuggestion> = outcomes.into_iter().flatten().collect();
        suggestions.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        suggestions.truncate(limit as usize);

        Ok(suggestions)
    }
}

fn summarize(profile: &UserProfile) -> CandidateSummary {
    CandidateSummary {
        uid: profile.uid.clone(),
        full_name: profile.full_name.clone(),
        role: profile.role.clone(),
        location: profile.effective_location(),
        profile_image: profile.profile_image.clone(),
    }
}
