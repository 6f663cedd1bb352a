use std::sync::Arc;

use crate::cache::TtlCache;

use super::source::DeveloperDataSource;
use super::types::{RawDeveloperData, UserMetadata};

/// Cached, failure-absorbing access to raw developer data.
///
/// [`DeveloperDataFetcher::fetch`] never fails: a resource reported as not
/// found degrades to its empty value, and any other provider failure replaces
/// the whole bundle with [`RawDeveloperData::fallback`].
#[derive(Clone)]
pub struct DeveloperDataFetcher {
    source: Arc<dyn DeveloperDataSource>,
    cache: TtlCache<RawDeveloperData>,
}

impl DeveloperDataFetcher {
    pub fn new(source: Arc<dyn DeveloperDataSource>, cache: TtlCache<RawDeveloperData>) -> Self {
        Self { source, cache }
    }

    pub async fn fetch(&self, username: &str) -> RawDeveloperData {
        if let Some(cached) = self.cache.get(username).await {
            return cached;
        }

        let now = self.cache.clock().now();
        let lookups = tokio::try_join!(
            self.source.fetch_user(username),
            self.source.fetch_repositories(username),
            self.source.fetch_starred(username),
        );

        let data = match lookups {
            Ok((user, repos, starred)) => RawDeveloperData {
                user: user.unwrap_or_else(|| UserMetadata::placeholder(now)),
                repos: repos.unwrap_or_default(),
                starred: starred.unwrap_or_default(),
            },
            Err(e) => {
                tracing::warn!(
                    username,
                    error = %e,
                    "Developer data fetch failed, using fallback bundle"
                );
                RawDeveloperData::fallback(now)
            }
        };

        self.cache.set(username, data.clone()).await;
        data
    }
}
