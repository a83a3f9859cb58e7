//! Bindings inside nested destructuring: `const { user: { id, name } } = ...`.

use std::sync::LazyLock;

use regex::Regex;

use super::{compile_all, split_names};
use crate::core::data::{Candidate, SourceTag};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // One nested object
        r"(?:const|let|var)\s*\{[^}]*:\s*\{([^}]+)\}[^}]*\}",
        // Two nested objects side by side
        r"(?:const|let|var)\s*\{[^}]*:\s*\{([^}]+)\}[^}]*,[^}]*:\s*\{([^}]+)\}[^}]*\}",
    ])
});

// The user settings shape seen in dashboard bundles.
static USER_CONFIG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"const\s*\{\s*settings:\s*\{([^}]+)\}\s*,\s*preferences:\s*\{([^}]+)\}\s*\}\s*=\s*userConfig",
    )
    .unwrap()
});

/// Names listed inside nested `{ ... }` groups. Entries are split on commas
/// only, so renamed or defaulted inner bindings do not survive validation.
pub fn scan(code: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for regex in PATTERNS.iter() {
        for cap in regex.captures_iter(code) {
            for group in cap.iter().skip(1).flatten() {
                found.extend(split_names(group.as_str(), SourceTag::NestedDestructuring));
            }
        }
    }

    if let Some(cap) = USER_CONFIG_REGEX.captures(code) {
        for group in cap.iter().skip(1).flatten() {
            found.extend(split_names(group.as_str(), SourceTag::NestedDestructuring));
        }
    }

    found
}
