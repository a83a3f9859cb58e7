//! Keyword-based classification of candidates.
//!
//! Rules run in the fixed order of [`RULES`]. A matching rule overwrites the
//! category and priority set by earlier rules, while tags accumulate. The last
//! matching rule therefore decides the category, regardless of which rule
//! assigns the highest priority.

use std::collections::BTreeSet;

use super::data::{Candidate, Category, ClassifiedCandidate, SourceTag};

/// Lowest priority, given to candidates no rule matched.
pub const BASE_PRIORITY: u8 = 1;

/// Highest priority a candidate can reach.
pub const MAX_PRIORITY: u8 = 5;

/// How a rule changes the running priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityChange {
    /// Replace the priority.
    Set(u8),
    /// Raise the priority by one, capped at [`MAX_PRIORITY`].
    Bump,
}

/// One classification rule.
pub struct Rule {
    /// Receives the lower-cased name and the scanner that found it.
    pub applies: fn(&str, SourceTag) -> bool,
    pub category: Option<Category>,
    pub priority: PriorityChange,
    pub tag: &'static str,
}

const AUTH_KEYWORDS: &[&str] = &["token", "auth", "key", "secret", "password", "session"];
const PAGINATION_KEYWORDS: &[&str] = &["page", "size", "limit", "offset"];
const TIME_KEYWORDS: &[&str] = &["time", "date", "timestamp"];
const STATUS_KEYWORDS: &[&str] = &["status", "state"];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(*keyword))
}

fn is_route(_: &str, source: SourceTag) -> bool {
    source == SourceTag::RouteParam
}

fn is_identifier(name: &str, _: SourceTag) -> bool {
    name.contains("id")
}

fn is_auth(name: &str, _: SourceTag) -> bool {
    contains_any(name, AUTH_KEYWORDS)
}

fn is_pagination(name: &str, _: SourceTag) -> bool {
    contains_any(name, PAGINATION_KEYWORDS)
}

fn is_time(name: &str, _: SourceTag) -> bool {
    contains_any(name, TIME_KEYWORDS)
}

fn is_status(name: &str, _: SourceTag) -> bool {
    contains_any(name, STATUS_KEYWORDS)
}

fn is_api_source(_: &str, source: SourceTag) -> bool {
    let source = source.as_str();
    source.contains("url") || source.contains("api")
}

/// Classification rules in evaluation order. Do not reorder.
pub const RULES: &[Rule] = &[
    Rule {
        applies: is_route,
        category: None,
        priority: PriorityChange::Set(4),
        tag: "route",
    },
    Rule {
        applies: is_identifier,
        category: Some(Category::Identifier),
        priority: PriorityChange::Set(4),
        tag: "id",
    },
    Rule {
        applies: is_auth,
        category: Some(Category::Authentication),
        priority: PriorityChange::Set(5),
        tag: "auth",
    },
    Rule {
        applies: is_pagination,
        category: Some(Category::Pagination),
        priority: PriorityChange::Set(2),
        tag: "pagination",
    },
    Rule {
        applies: is_time,
        category: Some(Category::Timestamp),
        priority: PriorityChange::Set(3),
        tag: "time",
    },
    Rule {
        applies: is_status,
        category: Some(Category::Status),
        priority: PriorityChange::Set(3),
        tag: "status",
    },
    Rule {
        applies: is_api_source,
        category: None,
        priority: PriorityChange::Bump,
        tag: "api",
    },
];

/// Classify a single candidate.
pub fn classify_candidate(candidate: Candidate) -> ClassifiedCandidate {
    let name = candidate.value.to_lowercase();
    let mut category = Category::General;
    let mut priority = BASE_PRIORITY;
    let mut tags = BTreeSet::new();

    for rule in RULES {
        if !(rule.applies)(&name, candidate.source) {
            continue;
        }
        if let Some(c) = rule.category {
            category = c;
        }
        priority = match rule.priority {
            PriorityChange::Set(p) => p,
            PriorityChange::Bump => (priority + 1).min(MAX_PRIORITY),
        };
        tags.insert(rule.tag.to_string());
    }

    ClassifiedCandidate {
        value: candidate.value,
        source: candidate.source,
        category,
        priority,
        tags,
    }
}

/// Classify every candidate and order the result by priority, highest first.
///
/// The sort is stable: candidates with equal priority keep scanner order,
/// which decides which duplicate survives deduplication.
pub fn classify(candidates: Vec<Candidate>) -> Vec<ClassifiedCandidate> {
    let mut classified: Vec<ClassifiedCandidate> =
        candidates.into_iter().map(classify_candidate).collect();
    classified.sort_by(|a, b| b.priority.cmp(&a.priority));
    classified
}
