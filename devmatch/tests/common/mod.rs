#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use devmatch::cache::{CacheLayer, Clock, ManualClock};
use devmatch::config::{CacheConfig, MatchingConfig};
use devmatch::db::ProfileStore;
use devmatch::github::{
    DeveloperDataFetcher, RawDeveloperData, Repository, StarredRepository, StaticDataSource,
    UserMetadata,
};
use devmatch::models::{InterestList, UserProfile};
use devmatch::services::{FingerprintService, MatchingService, SuggestionService};

// ── Fixtures ──────────────────────────────────────────────────────────────

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn profile(uid: &str, location: &str, age: u32, interests: &str) -> UserProfile {
    UserProfile {
        uid: uid.to_string(),
        full_name: Some(format!("{uid} example")),
        location: Some(location.to_string()),
        age: Some(age),
        goal: Some("dating".to_string()),
        interests: Some(InterestList::Text(interests.to_string())),
        email: Some(format!("{uid}@example.com")),
        ..Default::default()
    }
}

pub fn with_github(mut profile: UserProfile, handle: &str) -> UserProfile {
    profile.github_profile_url = Some(format!("https://github.com/{handle}"));
    profile
}

pub fn rust_bundle(now: DateTime<Utc>) -> RawDeveloperData {
    RawDeveloperData {
        user: UserMetadata {
            created_at: Some(Utc.with_ymd_and_hms(2018, 3, 1, 0, 0, 0).unwrap()),
            followers: 40,
            stargazers_count: 0,
            bio: Some("Backend engineer building distributed systems".to_string()),
        },
        repos: vec![
            Repository {
                full_name: "dev/api-server".to_string(),
                language: Some("Rust".to_string()),
                topics: vec!["api".to_string(), "backend".to_string()],
                description: Some("REST api with axum".to_string()),
                size: 800,
                stargazers_count: 25,
                forks_count: 3,
                open_issues_count: 2,
                updated_at: Some(now),
                ..Default::default()
            },
            Repository {
                full_name: "dev/cli".to_string(),
                language: Some("Rust".to_string()),
                size: 300,
                ..Default::default()
            },
        ],
        starred: vec![StarredRepository {
            full_name: "tokio-rs/tokio".to_string(),
        }],
    }
}

pub fn frontend_bundle(now: DateTime<Utc>) -> RawDeveloperData {
    RawDeveloperData {
        user: UserMetadata {
            created_at: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            followers: 5,
            stargazers_count: 0,
            bio: Some("Frontend developer who loves design".to_string()),
        },
        repos: vec![Repository {
            full_name: "web/portfolio".to_string(),
            language: Some("TypeScript".to_string()),
            topics: vec!["react".to_string(), "frontend".to_string()],
            description: Some("Personal site built with react".to_string()),
            size: 150,
            updated_at: Some(now),
            ..Default::default()
        }],
        starred: vec![StarredRepository {
            full_name: "facebook/react".to_string(),
        }],
    }
}

// ── Harness ───────────────────────────────────────────────────────────────

/// The service stack over in-memory caches and a manual clock.
pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub source: Arc<StaticDataSource>,
    pub fingerprints: FingerprintService,
    pub matching: MatchingService,
    pub suggestions: SuggestionService,
}

impl Harness {
    pub fn new(store: Arc<dyn ProfileStore>, source: StaticDataSource) -> Self {
        Self::with_matching_config(store, source, MatchingConfig::default())
    }

    pub fn with_matching_config(
        store: Arc<dyn ProfileStore>,
        source: StaticDataSource,
        config: MatchingConfig,
    ) -> Self {
        let clock = Arc::new(ManualClock::new(start()));
        let source = Arc::new(source);
        let caches = CacheLayer::in_memory(&CacheConfig::default(), clock.clone() as Arc<dyn Clock>);

        let fetcher = DeveloperDataFetcher::new(source.clone(), caches.raw_data);
        let fingerprints = FingerprintService::new(fetcher, caches.fingerprints);
        let matching = MatchingService::new(store, fingerprints.clone(), caches.matches);
        let suggestions = SuggestionService::new(matching.clone(), config);

        Self {
            clock,
            source,
            fingerprints,
            matching,
            suggestions,
        }
    }
}
