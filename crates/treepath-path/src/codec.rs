use crate::types::{Path, Segment};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Parse a dotted path into segments.
///
/// Never fails: empty tokens are kept as empty segments, so `""` is a single
/// empty segment and `"a..b"` has three segments.
///
/// # Example
///
/// ```
/// use treepath_path::{parse_path, Segment};
///
/// assert_eq!(
///     parse_path("b.d.2.e"),
///     vec![Segment::from("b"), Segment::from("d"), Segment::from("2"), Segment::from("e")]
/// );
/// assert_eq!(parse_path(""), vec![Segment::from("")]);
/// ```
pub fn parse_path(path: &str) -> Path {
    path.split(SEPARATOR).map(Segment::from).collect()
}

/// Format segments back into a dotted path.
///
/// ```
/// use treepath_path::{format_path, parse_path};
///
/// assert_eq!(format_path(&parse_path("a.0.b")), "a.0.b");
/// ```
pub fn format_path(path: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment.as_str());
    }
    out
}

/// Append `token` to `prefix`; an empty prefix yields the bare token.
pub fn join_path(prefix: &str, token: &str) -> String {
    if prefix.is_empty() {
        return token.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + 1 + token.len());
    out.push_str(prefix);
    out.push(SEPARATOR);
    out.push_str(token);
    out
}

/// Check if `parent` is a strict prefix of `child`.
pub fn is_child(parent: &[Segment], child: &[Segment]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}
