use crate::models::{
    Compatibility, CompatibilityBreakdown, FactorScore, MatchResult, TechAnalysis,
    TechFingerprint,
};

use super::insights;
use super::scoring::{self, ProfileFacts};

/// Scores two resolved profiles and their fingerprints.
///
/// The overall score is the plain sum of both axes. Reported numbers are
/// rounded half away from zero.
pub fn compute_match(
    profile_a: &ProfileFacts,
    profile_b: &ProfileFacts,
    fp_a: TechFingerprint,
    fp_b: TechFingerprint,
) -> MatchResult {
    let breakdown = score_breakdown(profile_a, profile_b, &fp_a, &fp_b);
    let profile = breakdown.profile_score();
    let technical = breakdown.technical_score();
    let overall = profile + technical;

    let insights = insights::build_insights(profile_a, profile_b, &fp_a, &fp_b, overall);
    let complementary_tech = insights::complementary_tech(&fp_a, &fp_b);
    let shared_interests = insights::shared_interests(&fp_a, &fp_b);

    MatchResult {
        match_score: round_score(overall),
        compatibility: Compatibility {
            overall: round_score(overall),
            profile: round_score(profile),
            technical: round_score(technical),
        },
        breakdown,
        insights,
        tech_analysis: TechAnalysis {
            user_a: fp_a,
            user_b: fp_b,
            complementary_tech,
            shared_interests,
        },
    }
}

pub fn score_breakdown(
    a: &ProfileFacts,
    b: &ProfileFacts,
    fp_a: &TechFingerprint,
    fp_b: &TechFingerprint,
) -> CompatibilityBreakdown {
    let (loc_a, loc_b) = (a.location.as_deref(), b.location.as_deref());
    let (goal_a, goal_b) = (a.goal.as_deref(), b.goal.as_deref());

    CompatibilityBreakdown {
        location: FactorScore::new(
            scoring::location_score(loc_a, loc_b),
            insights::location_insight(loc_a, loc_b),
        ),
        age_life_stage: FactorScore::new(
            scoring::age_score(a.age, b.age),
            insights::age_insight(a.age, b.age),
        ),
        goals: FactorScore::new(
            scoring::goal_score(goal_a, goal_b),
            insights::goals_insight(goal_a, goal_b),
        ),
        interests: FactorScore::new(
            scoring::interest_score(&a.interests, &b.interests),
            insights::interests_insight(&a.interests, &b.interests),
        ),
        tech_synergy: FactorScore::new(
            scoring::tech_synergy_score(fp_a, fp_b),
            insights::tech_synergy_insight(fp_a, fp_b),
        ),
        activity_patterns: FactorScore::new(
            scoring::activity_score(fp_a, fp_b),
            insights::activity_insight(fp_a, fp_b),
        ),
        project_alignment: FactorScore::new(
            scoring::project_alignment_score(fp_a, fp_b),
            insights::project_insight(fp_a, fp_b),
        ),
        open_source: FactorScore::new(
            scoring::open_source_score(fp_a, fp_b),
            insights::open_source_insight(fp_a, fp_b),
        ),
    }
}

fn round_score(score: f64) -> u32 {
    score.round().max(0.0) as u32
}
