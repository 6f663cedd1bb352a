use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::db::ProfileStore;
use crate::error::{DevMatchError, Result};
use crate::intelligence::{compute_match, ProfileFacts};
use crate::models::{MatchResult, UserProfile};

use super::FingerprintService;

/// Computes and caches compatibility between two stored profiles.
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<dyn ProfileStore>,
    fingerprints: FingerprintService,
    cache: TtlCache<MatchResult>,
}

impl MatchingService {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        fingerprints: FingerprintService,
        cache: TtlCache<MatchResult>,
    ) -> Self {
        Self {
            store,
            fingerprints,
            cache,
        }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    /// Fails only with [`DevMatchError::ProfileNotFound`] or a store error.
    ///
    /// Results are cached under the ordered pair, so `(b, a)` is computed and
    /// cached separately from `(a, b)`.
    pub async fn calculate_match(&self, user_a: &str, user_b: &str) -> Result<MatchResult> {
        let key = match_key(user_a, user_b);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let (profile_a, profile_b) =
            tokio::try_join!(self.load_profile(user_a), self.load_profile(user_b))?;

        let (fp_a, fp_b) = tokio::join!(
            self.fingerprints.build(github_reference(&profile_a)),
            self.fingerprints.build(github_reference(&profile_b)),
        );

        let today = self.cache.clock().now().date_naive();
        let result = compute_match(
            &ProfileFacts::resolve(&profile_a, today),
            &ProfileFacts::resolve(&profile_b, today),
            fp_a,
            fp_b,
        );

        info!(
            user_a,
            user_b,
            score = result.match_score,
            profile = result.compatibility.profile,
            technical = result.compatibility.technical,
            "Match calculated"
        );

        self.cache.set(key, result.clone()).await;
        Ok(result)
    }

    async fn load_profile(&self, uid: &str) -> Result<UserProfile> {
        match self.store.get_profile(uid).await? {
            Some(profile) => Ok(profile),
            None => {
                debug!(uid, "Profile missing");
                Err(DevMatchError::ProfileNotFound(uid.to_string()))
            }
        }
    }
}

fn match_key(user_a: &str, user_b: &str) -> String {
    format!("{user_a}:{user_b}")
}

fn github_reference(profile: &UserProfile) -> &str {
    profile.github_profile_url.as_deref().unwrap_or_default()
}
