//! Reference namer: derives display names and anchor ids.
//!
//! The three anchor rules (definitions, operations, guides) are
//! deliberately not unified; previously generated documents depend on each
//! rule staying exactly as it is.

use crate::parse::operation::HttpMethod;

/// Final slash-delimited segment of a reference path, used as the
/// human-readable name (`#/definitions/Pet` → `Pet`).
pub fn display_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

/// URL-safe fragment id for a definition name: strips `-` and `_`.
///
/// Applied identically when building a link target and when emitting the
/// definition's own anchor, so the two always match for the same name.
pub fn anchor_id(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '-' | '_')).collect()
}

/// Anchor id for an operation: `method-path` with `/`, `{`, `}`, `_`
/// stripped (`GET /pets/{petId}` → `get-petspetId`).
pub fn operation_anchor(method: HttpMethod, path: &str) -> String {
    let joined = format!("{}-{}", method.as_str(), path);
    strip_path_chars(&joined)
}

/// Anchor id for a guide section title: lowercased, first space removed,
/// then `/`, `{`, `}`, `_` stripped (`Getting Started` → `gettingstarted`).
pub fn guide_anchor(title: &str) -> String {
    let lowered = title.to_lowercase().replacen(' ', "", 1);
    strip_path_chars(&lowered)
}

fn strip_path_chars(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '/' | '{' | '}' | '_'))
        .collect()
}

/// Render a boolean table cell as the literal `yes` or an empty string.
pub fn yes(flag: bool) -> &'static str {
    if flag { "yes" } else { "" }
}
