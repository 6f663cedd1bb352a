//! Typed records for the developer-activity provider payloads.
//!
//! Every field the provider may omit is either `Option` or defaulted, so a
//! sparse upstream payload deserializes instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account metadata from `GET /users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserMetadata {
    /// Stand-in metadata for an account that could not be read.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(now),
            followers: 0,
            stargazers_count: 0,
            bio: Some(String::new()),
        }
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One entry of `GET /users/{username}/starred`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarredRepository {
    #[serde(default)]
    pub full_name: String,
}

/// Everything fetched for one username. Never partially absent: missing
/// resources become empty lists or placeholder metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDeveloperData {
    pub user: UserMetadata,
    pub repos: Vec<Repository>,
    pub starred: Vec<StarredRepository>,
}

impl RawDeveloperData {
    /// Safe bundle used when the provider fails.
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            user: UserMetadata::placeholder(now),
            repos: Vec::new(),
            starred: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_tolerates_nulls_and_missing_fields() {
        let repo: Repository = serde_json::from_value(json!({
            "full_name": "octocat/hello",
            "language": null,
            "description": null,
            "size": 42,
            "fork": false,
            "stargazers_count": 3,
            "forks_count": 1,
            "open_issues_count": 0,
            "updated_at": "2024-02-01T10:00:00Z"
        }))
        .expect("deserialize");

        assert!(repo.language.is_none());
        assert!(repo.topics.is_empty());
        assert_eq!(repo.size, 42);
        assert!(repo.updated_at.is_some());
    }

    #[test]
    fn user_metadata_ignores_unknown_fields() {
        let user: UserMetadata = serde_json::from_value(json!({
            "login": "octocat",
            "followers": 12,
            "created_at": "2011-01-25T18:44:36Z",
            "bio": null
        }))
        .expect("deserialize");

        assert_eq!(user.followers, 12);
        assert_eq!(user.stargazers_count, 0);
        assert!(user.bio.is_none());
    }

    #[test]
    fn fallback_bundle_is_empty() {
        let now = Utc::now();
        let data = RawDeveloperData::fallback(now);
        assert!(data.repos.is_empty());
        assert!(data.starred.is_empty());
        assert_eq!(data.user.created_at, Some(now));
        assert_eq!(data.user.followers, 0);
    }
}
