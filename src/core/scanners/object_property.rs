//! Object literal keys: `{ userName: ..., "apiKey": ... }`.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_names, compile_all};
use crate::core::data::{Candidate, SourceTag};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // Bare key at the start of the text, of a line, or after a comma
        r"(?:^|,|\n|\r\n)\s*([a-zA-Z_$][a-zA-Z0-9_$]*)\s*:",
        // First key of an object, either quote style
        r#"\{\s*["']([a-zA-Z_$][a-zA-Z0-9_$]*)["']\s*:"#,
        // First key of an object, single quotes
        r"\{\s*'([a-zA-Z_$][a-zA-Z0-9_$]*)'\s*:",
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    PATTERNS
        .iter()
        .flat_map(|regex| capture_names(code, regex, 1, SourceTag::ObjectProperty))
        .collect()
}
