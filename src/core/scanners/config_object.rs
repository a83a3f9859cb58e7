//! Keys of configuration-like objects.

use std::sync::LazyLock;

use regex::Regex;

use super::{compile_all, property_keys};
use crate::core::data::{Candidate, SourceTag};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?:config|options|params|settings)\s*=\s*\{([^}]*)\}",
        r"(?:headers|data|body|query)\s*:\s*\{([^}]*)\}",
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    PATTERNS
        .iter()
        .flat_map(|regex| regex.captures_iter(code))
        .filter_map(|cap| cap.get(1))
        .flat_map(|body| property_keys(body.as_str(), SourceTag::ConfigObject))
        .collect()
}
