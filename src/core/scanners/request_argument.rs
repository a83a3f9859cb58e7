//! Keys of object arguments passed to HTTP-call-like expressions.

use std::sync::LazyLock;

use regex::Regex;

use super::{compile_all, property_keys};
use crate::core::data::{Candidate, SourceTag};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // fetch(url, { ... }), axios(url, { ... }), client.post(url, { ... })
        r"(?:fetch|axios|\.(?:get|post|put|delete|patch))\([^,]+,\s*\{([^}]*)\}",
        // promise.then(({ ... }) => ...)
        r"\.(?:then|catch)\([^,]*\{([^}]*)\}",
        // Any call with an inline object literal
        r"\([^)]*\{([^}]*)\}[^)]*\)",
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    PATTERNS
        .iter()
        .flat_map(|regex| regex.captures_iter(code))
        .filter_map(|cap| cap.get(1))
        .flat_map(|body| property_keys(body.as_str(), SourceTag::ApiRequest))
        .collect()
}
