//! Per-factor sub-scores.
//!
//! Profile factors: location 12, age 8, goals 7, interests 8.
//! Technical factors: tech synergy 25, activity 15, project alignment 15,
//! open source 10.

use chrono::NaiveDate;

use crate::models::{CommitFrequency, TechFingerprint, UserProfile};

use super::keywords::{BACKEND, FRONTEND};
use super::utils::{common_items, overlap_ratio};

const COUNTRIES: [&str; 7] = [
    "usa",
    "united states",
    "india",
    "canada",
    "uk",
    "germany",
    "france",
];

const COMPATIBLE_GOALS: [(&str, &str); 3] = [
    ("friendship", "casual"),
    ("casual", "long-term"),
    ("mentorship", "learning"),
];

/// The profile fields the engine scores, resolved once per profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFacts {
    pub location: Option<String>,
    pub age: Option<u32>,
    pub goal: Option<String>,
    pub interests: Vec<String>,
}

impl ProfileFacts {
    pub fn resolve(profile: &UserProfile, today: NaiveDate) -> Self {
        Self {
            location: profile.effective_location(),
            age: profile.effective_age(today),
            goal: profile.effective_goal().map(str::to_string),
            interests: profile.interest_list(),
        }
    }
}

pub fn location_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 3.0;
    };
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        12.0
    } else if a.contains(&b) || b.contains(&a) {
        9.0
    } else if same_country(&a, &b) {
        6.0
    } else {
        3.0
    }
}

fn same_country(a: &str, b: &str) -> bool {
    COUNTRIES.iter().any(|c| a.contains(c) && b.contains(c))
}

pub fn age_gap(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    Some(a?.abs_diff(b?))
}

pub fn age_score(a: Option<u32>, b: Option<u32>) -> f64 {
    match age_gap(a, b) {
        None => 4.0,
        Some(0..=2) => 8.0,
        Some(3..=5) => 6.0,
        Some(6..=10) => 4.0,
        Some(_) => 2.0,
    }
}

/// Lower-cased goal with spaces and underscores folded to hyphens.
pub fn normalize_goal(goal: &str) -> String {
    goal.trim().to_lowercase().replace([' ', '_'], "-")
}

pub fn goal_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 3.5;
    };
    let a = normalize_goal(a);
    let b = normalize_goal(b);

    if a == b {
        return 7.0;
    }
    let compatible = COMPATIBLE_GOALS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x));
    if compatible {
        5.0
    } else {
        1.0
    }
}

pub fn normalize_interests(interests: &[String]) -> Vec<String> {
    interests.iter().map(|i| i.trim().to_lowercase()).collect()
}

pub fn interest_score(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 2.0;
    }
    let ratio = overlap_ratio(&normalize_interests(a), &normalize_interests(b));

    if ratio > 0.6 {
        8.0
    } else if ratio > 0.3 {
        6.0
    } else if ratio > 0.1 {
        4.0
    } else {
        1.0
    }
}

/// Frontend on one side and Backend on the other, either direction.
pub fn is_full_stack_pair(a: &TechFingerprint, b: &TechFingerprint) -> bool {
    (a.has_framework(FRONTEND) && b.has_framework(BACKEND))
        || (a.has_framework(BACKEND) && b.has_framework(FRONTEND))
}

pub fn shared_languages<'a>(a: &'a TechFingerprint, b: &TechFingerprint) -> Vec<&'a String> {
    common_items(&a.primary_languages, &b.primary_languages)
}

pub fn tech_synergy_score(a: &TechFingerprint, b: &TechFingerprint) -> f64 {
    if is_full_stack_pair(a, b) {
        return 25.0;
    }
    match shared_languages(a, b).len() {
        0 => 5.0,
        1 => 12.0,
        _ => 18.0,
    }
}

pub fn activity_score(a: &TechFingerprint, b: &TechFingerprint) -> f64 {
    use CommitFrequency::*;

    match (
        a.activity_metrics.commit_frequency,
        b.activity_metrics.commit_frequency,
    ) {
        (x, y) if x == y => 15.0,
        (High, Medium) | (Medium, High) => 12.0,
        (Medium, Low) | (Low, Medium) => 8.0,
        _ => 4.0,
    }
}

pub fn shared_topics<'a>(a: &'a TechFingerprint, b: &TechFingerprint) -> Vec<&'a String> {
    common_items(&a.interests.repository_topics, &b.interests.repository_topics)
}

pub fn project_alignment_score(a: &TechFingerprint, b: &TechFingerprint) -> f64 {
    let starred = common_items(&a.interests.starred_repos, &b.interests.starred_repos);
    match shared_topics(a, b).len() + starred.len() {
        0 => 3.0,
        1..=2 => 8.0,
        3..=4 => 12.0,
        _ => 15.0,
    }
}

pub fn open_source_score(a: &TechFingerprint, b: &TechFingerprint) -> f64 {
    let active_a = a.open_source.contributions > 0;
    let active_b = b.open_source.contributions > 0;
    let both_popular = a.open_source.popular_repo_count > 0 && b.open_source.popular_repo_count > 0;

    match (active_a, active_b) {
        (true, true) if both_popular => 10.0,
        (true, true) => 8.0,
        (true, false) | (false, true) => 5.0,
        (false, false) => 2.0,
    }
}
