use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse activity classification derived from summed repository size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommitFrequency {
    High,
    Medium,
    #[default]
    Low,
}

impl std::fmt::Display for CommitFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    pub commit_frequency: CommitFrequency,
    pub repo_count: u64,
    pub star_count: u64,
    pub follower_count: u64,
    pub account_age_years: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatterns {
    pub personal_count: u64,
    pub collaborative_count: u64,
    /// Forked share of all repositories, `0.0` when there are none.
    pub fork_ratio: f64,
    pub recent_activity: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperInterests {
    pub starred_repos: Vec<String>,
    pub repository_topics: Vec<String>,
    pub bio_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourceProfile {
    pub contributions: u64,
    pub popular_repo_count: u64,
    pub issue_participation: bool,
    pub maintainer: bool,
}

/// Feature summary of one developer's public activity.
///
/// `TechFingerprint::default()` is the all-zero fingerprint returned for
/// unusable profile references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechFingerprint {
    pub primary_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub domains: Vec<String>,
    pub activity_metrics: ActivityMetrics,
    pub project_patterns: ProjectPatterns,
    pub interests: DeveloperInterests,
    pub open_source: OpenSourceProfile,
}

impl TechFingerprint {
    pub fn has_framework(&self, label: &str) -> bool {
        self.frameworks.iter().any(|f| f == label)
    }

    pub fn has_tool(&self, label: &str) -> bool {
        self.tools.iter().any(|t| t == label)
    }

    pub fn has_domain(&self, label: &str) -> bool {
        self.domains.iter().any(|d| d == label)
    }
}
