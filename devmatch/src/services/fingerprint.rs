use tracing::debug;

use crate::cache::TtlCache;
use crate::github::DeveloperDataFetcher;
use crate::intelligence::{derive_fingerprint, extract_username};
use crate::models::TechFingerprint;

/// Builds tech fingerprints from profile references, cached per username.
#[derive(Clone)]
pub struct FingerprintService {
    fetcher: DeveloperDataFetcher,
    cache: TtlCache<TechFingerprint>,
}

impl FingerprintService {
    pub fn new(fetcher: DeveloperDataFetcher, cache: TtlCache<TechFingerprint>) -> Self {
        Self { fetcher, cache }
    }

    /// Never fails. References that do not name a user yield the zero
    /// fingerprint without touching the provider.
    pub async fn build(&self, reference: &str) -> TechFingerprint {
        let Some(username) = extract_username(reference) else {
            debug!(reference, "Profile reference does not name a user");
            return TechFingerprint::default();
        };

        if let Some(cached) = self.cache.get(&username).await {
            return cached;
        }

        let data = self.fetcher.fetch(&username).await;
        let fingerprint = derive_fingerprint(&data, self.cache.clock().now());
        debug!(
            username = %username,
            languages = fingerprint.primary_languages.len(),
            "Fingerprint derived"
        );

        self.cache.set(username, fingerprint.clone()).await;
        fingerprint
    }
}
