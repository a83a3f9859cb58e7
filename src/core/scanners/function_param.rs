//! Parameters of named functions and arrow functions.

use std::sync::LazyLock;

use regex::Regex;

use super::compile_all;
use crate::core::data::{Candidate, SourceTag};
use crate::core::validate::is_valid_name;

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"function\s+[^(]*\(\s*([^)]+)\s*\)",
        r"\(\s*([^)]+)\s*\)\s*=>",
        // Destructured parameter objects
        r"function\s+[^(]*\(\s*\{([^}]+)\}\s*\)",
        r"\(\s*\{([^}]+)\}\s*\)\s*=>",
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for regex in PATTERNS.iter() {
        for cap in regex.captures_iter(code) {
            let Some(list) = cap.get(1) else {
                continue;
            };
            found.extend(
                parameter_names(list.as_str())
                    .into_iter()
                    .filter(|name| is_valid_name(name))
                    .map(|name| Candidate::new(name, SourceTag::FunctionParam)),
            );
        }
    }

    found
}

/// Split a parameter list, dropping default values.
///
/// Braces are only removed from entries that open one, so a trailing
/// `name }` stays as is and fails validation.
fn parameter_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "{" && *p != "}")
        .filter_map(|p| {
            let p = if p.contains('{') {
                p.replace(['{', '}'], "")
            } else {
                p.to_string()
            };
            let name = match p.split_once('=') {
                Some((name, _)) => name.trim(),
                None => p.trim(),
            };
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
