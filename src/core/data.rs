//! Data types flowing through the extraction pipeline.
//!
//! A [`Candidate`] is created by a scanner; the classifier turns it into a
//! [`ClassifiedCandidate`]. Neither is mutated after creation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ============================================================
// Source Tag
// ============================================================

/// Identifies which scanner produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    ObjectProperty,
    Destructuring,
    NestedDestructuring,
    FunctionParam,
    VariableAssignment,
    ApiRequest,
    UrlParam,
    ConfigObject,
    RouteParam,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::ObjectProperty => "object_property",
            SourceTag::Destructuring => "destructuring",
            SourceTag::NestedDestructuring => "nested_destructuring",
            SourceTag::FunctionParam => "function_param",
            SourceTag::VariableAssignment => "variable_assignment",
            SourceTag::ApiRequest => "api_request",
            SourceTag::UrlParam => "url_param",
            SourceTag::ConfigObject => "config_object",
            SourceTag::RouteParam => "route_param",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================
// Category
// ============================================================

/// Coarse semantic bucket assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Identifier,
    Authentication,
    Pagination,
    Timestamp,
    Status,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Identifier => "identifier",
            Category::Authentication => "authentication",
            Category::Pagination => "pagination",
            Category::Timestamp => "timestamp",
            Category::Status => "status",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================
// Candidates
// ============================================================

/// A provisional name proposed by one scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub value: String,
    pub source: SourceTag,
}

impl Candidate {
    pub fn new(value: impl Into<String>, source: SourceTag) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }
}

/// A candidate after classification. This is the output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCandidate {
    pub value: String,
    pub source: SourceTag,
    pub category: Category,
    /// Relevance score in `1..=5`.
    pub priority: u8,
    pub tags: BTreeSet<String>,
}
