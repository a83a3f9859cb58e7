//! Variable assignments: `const retryCount = 3`, `sessionKey = read()`.

use std::sync::LazyLock;

use regex::Regex;

use super::compile_all;
use crate::core::data::{Candidate, SourceTag};
use crate::core::validate::{is_common_variable, is_valid_name};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=",
        // Bare assignment of anything but an object literal
        r"([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*[^{]",
    ])
});

/// Assigned names, with minified single-letter variables filtered out on top
/// of the regular name validation.
pub fn scan(code: &str) -> Vec<Candidate> {
    PATTERNS
        .iter()
        .flat_map(|regex| regex.captures_iter(code))
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|name| is_valid_name(name) && !is_common_variable(name))
        .map(|name| Candidate::new(name, SourceTag::VariableAssignment))
        .collect()
}
