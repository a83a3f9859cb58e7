//! Name validation for extracted candidates.
//!
//! Every scanner gates insertion on [`is_valid_name`]. The assignment scanner
//! additionally applies [`is_common_variable`] to suppress minified-code noise.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest accepted name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 50;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap());

/// Reserved words and literals that are never parameters.
const RESERVED_WORDS: &[&str] = &[
    "var",
    "let",
    "const",
    "function",
    "if",
    "else",
    "for",
    "while",
    "return",
    "class",
    "import",
    "export",
    "default",
    "extends",
    "super",
    "this",
    "new",
    "typeof",
    "instanceof",
    "void",
    "delete",
    "in",
    "of",
    "try",
    "catch",
    "finally",
    "throw",
    "debugger",
    "with",
    "yield",
    "await",
    "async",
    "static",
    "set",
    "true",
    "false",
    "null",
    "undefined",
];

/// Common identifiers that show up in request plumbing but are not parameters.
const EXCLUDED_NAMES: &[&str] = &[
    "headers", "response", "request", "error", "success", "then", "catch", "finally", "resolve",
    "reject", "promise", "fn", "func", "obj", "arr", "str", "bool", "date", "reg", "regex", "i",
    "j", "k", "x", "y", "z", "n", "m", "a", "b", "c", "d", "e", "f", "g", "h", "props", "state",
    "ref", "children", "style",
];

/// Single-letter names typical of minified bundles.
const MINIFIED_NAMES: &[&str] = &[
    "e", "t", "a", "n", "l", "r", "i", "o", "c", "u", "s", "d", "m", "v", "p", "h", "f", "g", "b",
    "y", "N", "I", "w", "E", "k", "O", "x", "j", "S", "C", "A", "_",
];

/// Checks whether a candidate is a plausible parameter name.
///
/// Rejects names outside `2..=50` characters, anything that is not an
/// identifier, any name containing `_` (snake_case is dropped on purpose),
/// reserved words, and common non-parameter identifiers.
///
/// # Examples
///
/// ```
/// use parascan::core::is_valid_name;
///
/// assert!(is_valid_name("userId"));
/// assert!(is_valid_name("$ref"));
/// assert!(!is_valid_name("user_id"));
/// assert!(!is_valid_name("response"));
/// assert!(!is_valid_name("x"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return false;
    }

    if !IDENTIFIER_REGEX.is_match(name) || name.contains('_') {
        return false;
    }

    !RESERVED_WORDS.contains(&name) && !EXCLUDED_NAMES.contains(&name)
}

/// Checks whether a name looks like a throwaway variable from minified code.
pub fn is_common_variable(name: &str) -> bool {
    MINIFIED_NAMES.contains(&name) || name.chars().count() == 1
}
