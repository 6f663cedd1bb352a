//! Declarative keyword table used to tag repositories with coarse
//! framework, tool and domain labels.

use std::collections::BTreeSet;

use crate::github::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Framework,
    Tool,
    Domain,
}

/// One row of the table. A topic or description matches when it contains
/// any listed keyword as a substring.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub label: &'static str,
    pub topic_keywords: &'static [&'static str],
    pub description_keywords: &'static [&'static str],
}

pub const FRONTEND: &str = "Frontend";
pub const BACKEND: &str = "Backend";
pub const MOBILE: &str = "Mobile";
pub const AI_ML: &str = "AI/ML";
pub const DEVOPS: &str = "DevOps";

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Framework,
        label: FRONTEND,
        topic_keywords: &["react", "vue", "angular"],
        description_keywords: &["react", "vue", "angular"],
    },
    KeywordRule {
        category: Category::Framework,
        label: BACKEND,
        topic_keywords: &["node", "express", "django"],
        description_keywords: &["node", "express", "django", "spring"],
    },
    KeywordRule {
        category: Category::Domain,
        label: MOBILE,
        topic_keywords: &["mobile", "ios", "android"],
        description_keywords: &["mobile", "ios", "android", "flutter", "react-native"],
    },
    KeywordRule {
        category: Category::Domain,
        label: AI_ML,
        topic_keywords: &["ai", "ml", "data"],
        description_keywords: &["ai", "ml", "data", "tensorflow", "machine learning"],
    },
    KeywordRule {
        category: Category::Tool,
        label: DEVOPS,
        topic_keywords: &["devops", "docker", "kubernetes"],
        description_keywords: &["devops", "docker", "kubernetes", "aws"],
    },
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Labels accumulated over a set of repositories.
#[derive(Debug, Default)]
pub struct Classification {
    pub frameworks: BTreeSet<&'static str>,
    pub tools: BTreeSet<&'static str>,
    pub domains: BTreeSet<&'static str>,
}

impl Classification {
    pub fn from_repositories(repos: &[Repository]) -> Self {
        let mut classification = Self::default();
        for repo in repos {
            classification.observe(repo);
        }
        classification
    }

    pub fn observe(&mut self, repo: &Repository) {
        let topics: Vec<String> = repo.topics.iter().map(|t| t.to_lowercase()).collect();
        let description = repo.description.as_deref().unwrap_or_default().to_lowercase();

        for rule in KEYWORD_RULES {
            let topic_hit = topics.iter().any(|t| contains_any(t, rule.topic_keywords));
            if topic_hit || contains_any(&description, rule.description_keywords) {
                self.labels_mut(rule.category).insert(rule.label);
            }
        }
    }

    fn labels_mut(&mut self, category: Category) -> &mut BTreeSet<&'static str> {
        match category {
            Category::Framework => &mut self.frameworks,
            Category::Tool => &mut self.tools,
            Category::Domain => &mut self.domains,
        }
    }
}

pub(crate) fn to_strings(labels: &BTreeSet<&'static str>) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}
