//! Flat destructuring bindings: `const { userId, authToken: token } = ...`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{Candidate, SourceTag};
use crate::core::validate::is_valid_name;

static DESTRUCTURING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:const|let|var)\s*\{([^}]+)\}\s*=").unwrap());

// `name` or `original: renamed`
static BINDING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z_$][a-zA-Z0-9_$]*)(?:\s*:\s*([a-zA-Z_$][a-zA-Z0-9_$]*))?").unwrap()
});

/// Binding names of every flat destructuring pattern; a renamed binding
/// reports the local name, not the property it was read from.
pub fn scan(code: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for cap in DESTRUCTURING_REGEX.captures_iter(code) {
        let Some(inner) = cap.get(1) else {
            continue;
        };

        for binding in BINDING_REGEX.captures_iter(inner.as_str()) {
            let Some(name) = binding.get(2).or_else(|| binding.get(1)) else {
                continue;
            };
            if is_valid_name(name.as_str()) {
                found.push(Candidate::new(name.as_str(), SourceTag::Destructuring));
            }
        }
    }

    found
}
