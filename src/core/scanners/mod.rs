//! Pattern-based scanners that propose candidate names.
//!
//! Each scanner is a pure function over the whole source text. Scanners never
//! see each other's output; a name found by several scanners is reported once
//! per scanner and collapsed later by the deduplication pass.
//!
//! ## Module Structure
//!
//! - `object_property`: keys of object literals
//! - `destructuring`: flat `const { a, b: c } = ...` bindings
//! - `nested_destructuring`: bindings inside a nested `{ ... }` pattern
//! - `function_param`: named function and arrow function parameters
//! - `assignment`: `const x =` and bare `x = ...` assignments
//! - `request_argument`: object arguments of HTTP-call-like expressions
//! - `url_param`: query string keys and `URLSearchParams` calls
//! - `config_object`: keys of config/options/headers/body objects
//! - `route_param`: `/:id`, `/{id}` and `/[id]` path templates

pub mod assignment;
pub mod config_object;
pub mod destructuring;
pub mod function_param;
pub mod nested_destructuring;
pub mod object_property;
pub mod request_argument;
pub mod route_param;
pub mod url_param;

use std::sync::LazyLock;

use regex::Regex;

use super::data::{Candidate, SourceTag};
use super::validate::is_valid_name;

/// Signature shared by all scanners.
pub type ScanFn = fn(&str) -> Vec<Candidate>;

/// All scanners in the order the pipeline runs them.
pub const SCANNERS: &[(SourceTag, ScanFn)] = &[
    (SourceTag::ObjectProperty, object_property::scan),
    (SourceTag::Destructuring, destructuring::scan),
    (SourceTag::NestedDestructuring, nested_destructuring::scan),
    (SourceTag::FunctionParam, function_param::scan),
    (SourceTag::VariableAssignment, assignment::scan),
    (SourceTag::ApiRequest, request_argument::scan),
    (SourceTag::UrlParam, url_param::scan),
    (SourceTag::ConfigObject, config_object::scan),
    (SourceTag::RouteParam, route_param::scan),
];

/// Run every scanner over `code` and concatenate their output in scanner order.
pub fn scan_all(code: &str) -> Vec<Candidate> {
    SCANNERS.iter().flat_map(|(_, scan)| scan(code)).collect()
}

// Matches `key:`, `"key":` and `'key':` inside an object body.
static PROPERTY_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""([a-zA-Z_$][a-zA-Z0-9_$]*)"\s*:|'([a-zA-Z_$][a-zA-Z0-9_$]*)'\s*:|([a-zA-Z_$][a-zA-Z0-9_$]*)\s*:"#,
    )
    .unwrap()
});

/// Compile a fixed table of patterns.
pub(crate) fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Collect capture `group` of every match of `regex` that passes validation.
pub(crate) fn capture_names(
    code: &str,
    regex: &Regex,
    group: usize,
    source: SourceTag,
) -> Vec<Candidate> {
    regex
        .captures_iter(code)
        .filter_map(|cap| cap.get(group))
        .map(|m| m.as_str())
        .filter(|name| is_valid_name(name))
        .map(|name| Candidate::new(name, source))
        .collect()
}

/// Collect property keys (bare or quoted) declared inside an object body.
pub(crate) fn property_keys(body: &str, source: SourceTag) -> Vec<Candidate> {
    PROPERTY_KEY_REGEX
        .captures_iter(body)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3)))
        .map(|m| m.as_str())
        .filter(|name| is_valid_name(name))
        .map(|name| Candidate::new(name, source))
        .collect()
}

/// Split a comma separated list, trimming entries and keeping valid names.
pub(crate) fn split_names(list: &str, source: SourceTag) -> Vec<Candidate> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && is_valid_name(name))
        .map(|name| Candidate::new(name, source))
        .collect()
}

#[cfg(test)]
pub(crate) fn values(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.value.as_str()).collect()
}
