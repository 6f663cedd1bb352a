use chrono::{DateTime, Datelike, Duration, Utc};

use crate::github::{RawDeveloperData, Repository};
use crate::models::{
    ActivityMetrics, CommitFrequency, DeveloperInterests, OpenSourceProfile, ProjectPatterns,
    TechFingerprint,
};

use super::keywords::{to_strings, Classification};

pub const MAX_PRIMARY_LANGUAGES: usize = 5;
pub const MAX_STARRED_REPOS: usize = 20;
pub const MAX_REPOSITORY_TOPICS: usize = 10;
pub const RECENT_ACTIVITY_DAYS: i64 = 30;
pub const POPULAR_REPO_STARS: u64 = 10;

const HIGH_ACTIVITY_SIZE: u64 = 1000;
const MEDIUM_ACTIVITY_SIZE: u64 = 100;

/// Derives a fingerprint from one raw bundle. `now` anchors the recency
/// window and the account age.
pub fn derive_fingerprint(data: &RawDeveloperData, now: DateTime<Utc>) -> TechFingerprint {
    let repos = &data.repos;
    let classification = Classification::from_repositories(repos);

    let personal_count = repos.iter().filter(|r| !r.fork).count() as u64;
    let collaborative_count = repos.len() as u64 - personal_count;
    let popular_repo_count = repos
        .iter()
        .filter(|r| r.stargazers_count > POPULAR_REPO_STARS)
        .count() as u64;

    let created = data.user.created_at.unwrap_or(now);

    TechFingerprint {
        primary_languages: primary_languages(repos),
        frameworks: to_strings(&classification.frameworks),
        tools: to_strings(&classification.tools),
        domains: to_strings(&classification.domains),
        activity_metrics: ActivityMetrics {
            commit_frequency: commit_frequency(repos),
            repo_count: repos.len() as u64,
            star_count: data.user.stargazers_count,
            follower_count: data.user.followers,
            account_age_years: now.year() - created.year(),
        },
        project_patterns: ProjectPatterns {
            personal_count,
            collaborative_count,
            fork_ratio: fork_ratio(collaborative_count, repos.len()),
            recent_activity: has_recent_activity(repos, now),
        },
        interests: DeveloperInterests {
            starred_repos: data
                .starred
                .iter()
                .take(MAX_STARRED_REPOS)
                .map(|s| s.full_name.clone())
                .collect(),
            repository_topics: repository_topics(repos),
            bio_keywords: bio_keywords(data.user.bio.as_deref().unwrap_or_default()),
        },
        open_source: OpenSourceProfile {
            contributions: repos.iter().map(|r| r.forks_count).sum(),
            popular_repo_count,
            issue_participation: repos.iter().any(|r| r.open_issues_count > 0),
            maintainer: popular_repo_count > 0,
        },
    }
}

/// Top languages by repository count. Ties keep first-seen order.
fn primary_languages(repos: &[Repository]) -> Vec<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for language in repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
    {
        match tally.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => tally.push((language, 1)),
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(MAX_PRIMARY_LANGUAGES)
        .map(|(name, _)| name.to_string())
        .collect()
}

fn commit_frequency(repos: &[Repository]) -> CommitFrequency {
    let total_size: u64 = repos.iter().map(|r| r.size).sum();
    if total_size > HIGH_ACTIVITY_SIZE {
        CommitFrequency::High
    } else if total_size > MEDIUM_ACTIVITY_SIZE {
        CommitFrequency::Medium
    } else {
        CommitFrequency::Low
    }
}

fn fork_ratio(forks: u64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    forks as f64 / total as f64
}

fn has_recent_activity(repos: &[Repository], now: DateTime<Utc>) -> bool {
    let cutoff = now - Duration::days(RECENT_ACTIVITY_DAYS);
    repos
        .iter()
        .filter_map(|r| r.updated_at)
        .any(|updated| updated > cutoff)
}

fn repository_topics(repos: &[Repository]) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for topic in repos.iter().flat_map(|r| r.topics.iter()) {
        if topics.len() == MAX_REPOSITORY_TOPICS {
            break;
        }
        if !topics.contains(topic) {
            topics.push(topic.clone());
        }
    }
    topics
}

fn bio_keywords(bio: &str) -> Vec<String> {
    bio.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::github::{StarredRepository, UserMetadata};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn repo(language: Option<&str>) -> Repository {
        Repository {
            language: language.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_languages_ordering() {
        let repos = vec![
            repo(Some("Go")),
            repo(Some("Rust")),
            repo(Some("Rust")),
            repo(None),
            repo(Some("")),
            repo(Some("Python")),
            repo(Some("Go")),
            repo(Some("C")),
            repo(Some("Zig")),
            repo(Some("Lua")),
            repo(Some("Rust")),
        ];
        assert_eq!(
            primary_languages(&repos),
            vec!["Rust", "Go", "Python", "C", "Zig"]
        );
    }

    #[test]
    fn test_commit_frequency_thresholds() {
        let sized = |size| Repository {
            size,
            ..Default::default()
        };
        assert_eq!(commit_frequency(&[sized(100)]), CommitFrequency::Low);
        assert_eq!(commit_frequency(&[sized(60), sized(41)]), CommitFrequency::Medium);
        assert_eq!(commit_frequency(&[sized(1000)]), CommitFrequency::Medium);
        assert_eq!(commit_frequency(&[sized(1001)]), CommitFrequency::High);
    }

    #[test]
    fn test_empty_bundle_yields_zero_ratios() {
        let fp = derive_fingerprint(&RawDeveloperData::fallback(now()), now());
        assert_eq!(fp.project_patterns.fork_ratio, 0.0);
        assert_eq!(fp.activity_metrics.account_age_years, 0);
        assert!(!fp.project_patterns.recent_activity);
        assert!(fp.interests.bio_keywords.is_empty());
    }

    #[test]
    fn test_full_derivation() {
        let data = RawDeveloperData {
            user: UserMetadata {
                created_at: Some(Utc.with_ymd_and_hms(2015, 12, 31, 0, 0, 0).unwrap()),
                followers: 42,
                stargazers_count: 7,
                bio: Some("Building   distributed systems in Rust".into()),
            },
            repos: vec![
                Repository {
                    full_name: "dev/api".into(),
                    language: Some("Rust".into()),
                    topics: vec!["docker".into(), "backend".into()],
                    description: Some("Express proxy".into()),
                    size: 900,
                    stargazers_count: 50,
                    forks_count: 3,
                    updated_at: Some(now() - Duration::days(3)),
                    ..Default::default()
                },
                Repository {
                    full_name: "dev/fork".into(),
                    language: Some("TypeScript".into()),
                    topics: vec!["react".into(), "docker".into()],
                    fork: true,
                    size: 200,
                    open_issues_count: 2,
                    updated_at: Some(now() - Duration::days(31)),
                    ..Default::default()
                },
            ],
            starred: (0..25)
                .map(|i| StarredRepository {
                    full_name: format!("org/repo{i}"),
                })
                .collect(),
        };

        let fp = derive_fingerprint(&data, now());

        assert_eq!(fp.primary_languages, vec!["Rust", "TypeScript"]);
        assert_eq!(fp.frameworks, vec!["Backend", "Frontend"]);
        assert_eq!(fp.tools, vec!["DevOps"]);
        assert_eq!(fp.activity_metrics.commit_frequency, CommitFrequency::High);
        assert_eq!(fp.activity_metrics.repo_count, 2);
        assert_eq!(fp.activity_metrics.star_count, 7);
        assert_eq!(fp.activity_metrics.follower_count, 42);
        assert_eq!(fp.activity_metrics.account_age_years, 9);
        assert_eq!(fp.project_patterns.personal_count, 1);
        assert_eq!(fp.project_patterns.collaborative_count, 1);
        assert_eq!(fp.project_patterns.fork_ratio, 0.5);
        assert!(fp.project_patterns.recent_activity);
        assert_eq!(fp.interests.starred_repos.len(), 20);
        assert_eq!(fp.interests.repository_topics, vec!["docker", "backend", "react"]);
        assert_eq!(
            fp.interests.bio_keywords,
            vec!["building", "distributed", "systems", "rust"]
        );
        assert_eq!(fp.open_source.contributions, 3);
        assert_eq!(fp.open_source.popular_repo_count, 1);
        assert!(fp.open_source.issue_participation);
        assert!(fp.open_source.maintainer);
    }

    #[test]
    fn test_topics_capped_at_ten() {
        let repos: Vec<Repository> = (0..4)
            .map(|i| Repository {
                topics: (0..4).map(|j| format!("t{}", i * 2 + j)).collect(),
                ..Default::default()
            })
            .collect();
        let topics = repository_topics(&repos);
        assert_eq!(topics.len(), 10);
        assert_eq!(topics[0], "t0");
        assert_eq!(topics[4], "t4");
    }
}
