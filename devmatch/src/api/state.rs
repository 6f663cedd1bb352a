use std::sync::Arc;

use crate::cache::{CacheLayer, Clock};
use crate::config::Config;
use crate::db::ProfileStore;
use crate::github::{DeveloperDataFetcher, DeveloperDataSource};
use crate::services::{FingerprintService, MatchingService, SuggestionService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ProfileStore>,
    pub fingerprints: FingerprintService,
    pub matching: MatchingService,
    pub suggestions: SuggestionService,
}

impl AppState {
    /// Wires the three cache classes and the services on top of them.
    pub fn new(
        config: Config,
        store: Arc<dyn ProfileStore>,
        source: Arc<dyn DeveloperDataSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config = Arc::new(config);
        let caches = CacheLayer::in_memory(&config.cache, clock);

        let fetcher = DeveloperDataFetcher::new(source, caches.raw_data);
        let fingerprints = FingerprintService::new(fetcher, caches.fingerprints);
        let matching = MatchingService::new(store.clone(), fingerprints.clone(), caches.matches);
        let suggestions = SuggestionService::new(matching.clone(), config.matching.clone());

        Self {
            config,
            store,
            fingerprints,
            matching,
            suggestions,
        }
    }
}
