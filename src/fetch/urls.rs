// src/fetch/urls.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that would break a URL path segment, except for `-`.
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9-]").expect("sanitizer regex should parse"));

/// Strip every character outside `[A-Za-z0-9-]`.
pub fn sanitize(raw: &str) -> String {
    UNSAFE_CHARS.replace_all(raw, "").into_owned()
}

/// Exact-match lookup endpoint for a single CAS RN.
///
/// An identifier that sanitizes to nothing is passed through as an empty
/// segment; the registry rejects it and the lookup degrades to no result.
pub fn build_url(base: &str, raw: &str) -> String {
    format!(
        "{}/{}?qualifier=exact",
        base.trim_end_matches('/'),
        sanitize(raw)
    )
}
