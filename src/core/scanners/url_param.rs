//! Query string parameters.

use std::sync::LazyLock;

use regex::Regex;

use super::{capture_names, compile_all};
use crate::core::data::{Candidate, SourceTag};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        // ?key= and &key=
        r"[?&]([a-zA-Z_$][a-zA-Z0-9_$]*)=",
        // searchParams.set("key", ...) and .append("key", ...)
        r#"\.(?:set|append)\(["']([^"']+)["']"#,
        // Interpolated keys: ?${key} and &${key}
        r"[?&]\$\{([^}]+)\}",
    ])
});

pub fn scan(code: &str) -> Vec<Candidate> {
    PATTERNS
        .iter()
        .flat_map(|regex| capture_names(code, regex, 1, SourceTag::UrlParam))
        .collect()
}
