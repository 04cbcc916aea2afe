//! Type definitions for dotted paths.

use std::fmt;

use treepath_node::classify::to_number;

/// One `.`-separated token of a dotted path.
///
/// A segment is carried as its raw text. Whether it addresses a record key or
/// a sequence index is decided by the accessor against the live container at
/// each depth, not by the token's shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment(String);

/// A parsed dotted path.
pub type Path = Vec<Segment>;

impl Segment {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token as a sequence index.
    ///
    /// Only canonical non-negative integers qualify: `"0"` and `"12"` do,
    /// `"01"`, `"-1"`, `"1.5"` and `""` do not.
    pub fn as_index(&self) -> Option<usize> {
        if !is_valid_index(&self.0) {
            return None;
        }
        self.0.parse().ok()
    }

    /// The token coerced to a number, see [`to_number`].
    pub fn numeric_value(&self) -> f64 {
        to_number(&self.0)
    }

    /// Whether a missing container addressed *by* this segment's predecessor
    /// should be created as a sequence.
    ///
    /// The rule is: the literal `"0"`, or any token whose numeric value is
    /// non-zero and not NaN. So `"0"`, `"3"`, `"-1"`, `"0.5"` and `"1e3"`
    /// create sequences while `"00"`, `"-0"`, `""` and `"name"` create records.
    /// Callers rely on this exact table; do not normalize it.
    pub fn vivifies_sequence(&self) -> bool {
        if self.0 == "0" {
            return true;
        }
        let n = self.numeric_value();
        n != 0.0 && !n.is_nan()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Segment {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Segment {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

/// Check if a string represents a valid non-negative integer sequence index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_index() {
        assert_eq!(Segment::from("0").as_index(), Some(0));
        assert_eq!(Segment::from("123").as_index(), Some(123));
        assert_eq!(Segment::from("01").as_index(), None);
        assert_eq!(Segment::from("-1").as_index(), None);
        assert_eq!(Segment::from("1.5").as_index(), None);
        assert_eq!(Segment::from("").as_index(), None);
        assert_eq!(Segment::from("abc").as_index(), None);
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(Segment::from("").numeric_value(), 0.0);
        assert_eq!(Segment::from("  12 ").numeric_value(), 12.0);
        assert_eq!(Segment::from("0x1A").numeric_value(), 26.0);
        assert_eq!(Segment::from("0b101").numeric_value(), 5.0);
        assert_eq!(Segment::from("1e3").numeric_value(), 1000.0);
        assert_eq!(Segment::from("-0.5").numeric_value(), -0.5);
        assert_eq!(Segment::from("Infinity").numeric_value(), f64::INFINITY);
        assert!(Segment::from("inf").numeric_value().is_nan());
        assert!(Segment::from("NaN").numeric_value().is_nan());
        assert!(Segment::from("0x").numeric_value().is_nan());
        assert!(Segment::from("0x+1").numeric_value().is_nan());
        assert!(Segment::from("a1").numeric_value().is_nan());
    }

    #[test]
    fn test_vivify_rule_table() {
        for token in ["0", "1", "42", "-1", "0.5", "1e3", "0x10", " 7 ", "Infinity"] {
            assert!(Segment::from(token).vivifies_sequence(), "{token:?}");
        }
        for token in ["00", "-0", "", "0.0", "name", "NaN", "0x0", "1a"] {
            assert!(!Segment::from(token).vivifies_sequence(), "{token:?}");
        }
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index("abc"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
    }
}
