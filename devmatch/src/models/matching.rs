use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TechFingerprint;

/// Score and narrative for one factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FactorScore {
    pub score: f64,
    pub insight: String,
}

impl FactorScore {
    pub fn new(score: f64, insight: impl Into<String>) -> Self {
        Self {
            score,
            insight: insight.into(),
        }
    }
}

/// Per-factor scores. Profile factors sum to at most 35, technical to 65.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityBreakdown {
    pub location: FactorScore,
    pub age_life_stage: FactorScore,
    pub goals: FactorScore,
    pub interests: FactorScore,
    pub tech_synergy: FactorScore,
    pub activity_patterns: FactorScore,
    pub project_alignment: FactorScore,
    pub open_source: FactorScore,
}

impl CompatibilityBreakdown {
    pub fn profile_score(&self) -> f64 {
        self.location.score + self.age_life_stage.score + self.goals.score + self.interests.score
    }

    pub fn technical_score(&self) -> f64 {
        self.tech_synergy.score
            + self.activity_patterns.score
            + self.project_alignment.score
            + self.open_source.score
    }
}

/// Rounded axis totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Compatibility {
    pub overall: u32,
    pub profile: u32,
    pub technical: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchInsights {
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechAnalysis {
    pub user_a: TechFingerprint,
    pub user_b: TechFingerprint,
    pub complementary_tech: Vec<String>,
    pub shared_interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: u32,
    pub compatibility: Compatibility,
    pub breakdown: CompatibilityBreakdown,
    pub insights: MatchInsights,
    pub tech_analysis: TechAnalysis,
}

/// Public projection of a candidate. Contact fields are never included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub uid: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchSuggestion {
    pub user: CandidateSummary,
    pub match_score: u32,
    pub compatibility: Compatibility,
}
