//! Narrative texts attached to factor scores and match results.

use crate::models::{MatchInsights, TechFingerprint};

use super::keywords::{BACKEND, DEVOPS, FRONTEND, MOBILE};
use super::scoring::{
    age_gap, is_full_stack_pair, normalize_goal, normalize_interests, shared_languages,
    shared_topics, ProfileFacts,
};
use super::utils::{common_items, join_items};

const LISTED_ITEMS: usize = 3;

const EXCELLENT_SCORE: f64 = 80.0;
const COLLABORATION_SCORE: f64 = 70.0;
const SIGNIFICANT_AGE_GAP: u32 = 10;

pub fn location_insight(a: Option<&str>, b: Option<&str>) -> String {
    match (a, b) {
        (Some(a), Some(b)) if a.to_lowercase() == b.to_lowercase() => {
            "Perfect location match!".to_string()
        }
        (Some(a), Some(b)) => format!("Different locations: {a} & {b}"),
        _ => "Location data not available".to_string(),
    }
}

pub fn age_insight(a: Option<u32>, b: Option<u32>) -> String {
    match age_gap(a, b) {
        None => "Age information not available".to_string(),
        Some(0..=2) => "Very close in age".to_string(),
        Some(3..=5) => "Similar age range".to_string(),
        Some(gap) => format!("Age difference: {gap} years"),
    }
}

pub fn goals_insight(a: Option<&str>, b: Option<&str>) -> String {
    match (a, b) {
        (Some(a), Some(b)) if normalize_goal(a) == normalize_goal(b) => {
            format!("Both looking for {a}")
        }
        (Some(a), Some(b)) => format!("Different goals: {a} & {b}"),
        _ => "Goals not specified".to_string(),
    }
}

pub fn interests_insight(a: &[String], b: &[String]) -> String {
    if a.is_empty() || b.is_empty() {
        return "Interests not specified".to_string();
    }
    let a = normalize_interests(a);
    let b = normalize_interests(b);
    let common = common_items(&a, &b);
    if common.is_empty() {
        "No shared interests".to_string()
    } else {
        format!("Shared interests: {}", join_items(&common, LISTED_ITEMS))
    }
}

pub fn tech_synergy_insight(a: &TechFingerprint, b: &TechFingerprint) -> String {
    if is_full_stack_pair(a, b) {
        return "Perfect full-stack combination!".to_string();
    }
    let languages = shared_languages(a, b);
    if languages.is_empty() {
        "Different technical backgrounds".to_string()
    } else {
        format!("Shared languages: {}", join_items(&languages, languages.len()))
    }
}

pub fn activity_insight(a: &TechFingerprint, b: &TechFingerprint) -> String {
    let freq_a = a.activity_metrics.commit_frequency;
    let freq_b = b.activity_metrics.commit_frequency;
    if freq_a == freq_b {
        format!("Both have {freq_a} activity levels")
    } else {
        format!("Different activity patterns: {freq_a} vs {freq_b}")
    }
}

pub fn project_insight(a: &TechFingerprint, b: &TechFingerprint) -> String {
    let topics = shared_topics(a, b);
    if topics.is_empty() {
        "Different project focus areas".to_string()
    } else {
        format!(
            "Shared project interests: {}",
            join_items(&topics, LISTED_ITEMS)
        )
    }
}

pub fn open_source_insight(a: &TechFingerprint, b: &TechFingerprint) -> String {
    match (a.open_source.contributions > 0, b.open_source.contributions > 0) {
        (true, true) => "Both are active in open source!".to_string(),
        (true, false) | (false, true) => "One is active in open source".to_string(),
        (false, false) => "Limited open source involvement".to_string(),
    }
}

/// Threshold-driven strengths, considerations and recommendations.
/// `overall` is the unrounded total.
pub fn build_insights(
    profile_a: &ProfileFacts,
    profile_b: &ProfileFacts,
    fp_a: &TechFingerprint,
    fp_b: &TechFingerprint,
    overall: f64,
) -> MatchInsights {
    let mut insights = MatchInsights::default();

    if overall >= EXCELLENT_SCORE {
        insights
            .strengths
            .push("Excellent overall compatibility!".to_string());
    }
    if is_full_stack_pair(fp_a, fp_b) {
        insights
            .strengths
            .push("Perfect full-stack partnership potential".to_string());
    }
    if let (Some(a), Some(b)) = (&profile_a.location, &profile_b.location) {
        if a.to_lowercase() == b.to_lowercase() {
            insights
                .strengths
                .push("Same location - easy to meet up!".to_string());
        }
    }

    if age_gap(profile_a.age, profile_b.age).is_some_and(|gap| gap > SIGNIFICANT_AGE_GAP) {
        insights
            .considerations
            .push("Significant age difference".to_string());
    }
    if fp_a.activity_metrics.commit_frequency != fp_b.activity_metrics.commit_frequency {
        insights
            .considerations
            .push("Different coding activity levels".to_string());
    }

    if overall >= COLLABORATION_SCORE {
        insights
            .recommendations
            .push("Great match for collaborative projects".to_string());
    }
    if fp_a.open_source.contributions > 0 && fp_b.open_source.contributions > 0 {
        insights
            .recommendations
            .push("Consider contributing to open source together".to_string());
    }

    insights
}

fn one_way_complements(a: &TechFingerprint, b: &TechFingerprint) -> Vec<&'static str> {
    let mut found = Vec::new();
    if a.has_framework(FRONTEND) && b.has_framework(BACKEND) {
        found.push("Frontend + Backend development");
    }
    if a.has_domain(MOBILE) && b.has_framework(BACKEND) {
        found.push("Mobile app with backend API");
    }
    if a.has_tool(DEVOPS) && (b.has_framework(FRONTEND) || b.has_framework(BACKEND)) {
        found.push("Development + DevOps deployment");
    }
    found
}

/// Complementary pairings found in either direction, without duplicates.
pub fn complementary_tech(a: &TechFingerprint, b: &TechFingerprint) -> Vec<String> {
    let mut combined: Vec<String> = Vec::new();
    for item in one_way_complements(a, b)
        .into_iter()
        .chain(one_way_complements(b, a))
    {
        if !combined.iter().any(|existing| existing == item) {
            combined.push(item.to_string());
        }
    }
    combined
}

pub fn shared_interests(a: &TechFingerprint, b: &TechFingerprint) -> Vec<String> {
    let mut shared = Vec::new();

    let topics = shared_topics(a, b);
    if !topics.is_empty() {
        shared.push(format!(
            "Both interested in: {}",
            join_items(&topics, LISTED_ITEMS)
        ));
    }

    let languages = shared_languages(a, b);
    if !languages.is_empty() {
        shared.push(format!(
            "Shared programming languages: {}",
            join_items(&languages, languages.len())
        ));
    }

    shared
}
