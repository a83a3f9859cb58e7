//! Path template parameters: `/:id`, `/{id}` and `/[id]`.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_names, compile_all};
use crate::core::data::{Candidate, SourceTag};

static ROUTE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // /:id, tolerating a doubled colon
        r"/:(?::)?([a-zA-Z_$][a-zA-Z0-9_$]*)",
        // path: '/users/:id' in route tables
        r"path:.*?/:(?::)?([a-zA-Z_$][a-zA-Z0-9_$]*)",
        r"/\{([a-zA-Z_$][a-zA-Z0-9_$]*)\}",
        r"/\[([a-zA-Z_$][a-zA-Z0-9_$]*)\]",
    ])
});

// String literals shaped like API paths with a parameterized segment.
static API_PATH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r#"["'`](/api/[^"'`]*?/(?::|\{|\[)([a-zA-Z_$][a-zA-Z0-9_$]*)(?::|\}|\]))[^"'`]*?["'`]"#,
        r#"["'`](/v\d+/[\w/]*?/(?::|\{|\[)([a-zA-Z_$][a-zA-Z0-9_$]*)(?::|\}|\]))[^"'`]*?["'`]"#,
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    let mut found: Vec<Candidate> = ROUTE_PATTERNS
        .iter()
        .flat_map(|regex| capture_names(code, regex, 1, SourceTag::RouteParam))
        .collect();

    found.extend(scan_api_paths(code));

    found
}

/// Parameters inside `/api/...` and `/v<N>/...` string literals.
fn scan_api_paths(code: &str) -> Vec<Candidate> {
    API_PATH_PATTERNS
        .iter()
        .flat_map(|regex| capture_names(code, regex, 2, SourceTag::RouteParam))
        .collect()
}
