//! Typed path parameter helpers.

/// Parses an integer id from a path segment. Anything else is `None`.
pub fn parse_id(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
