//! Immutable leaf values: regular expressions, errors and functions.
//!
//! All three are reference counted so that cloning a tree shares them by
//! identity instead of copying them.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::Node;

/// A compiled regular expression leaf.
#[derive(Clone)]
pub struct Pattern(Arc<Regex>);

impl Pattern {
    /// Compile `source` into a pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::from)
    }

    /// The source text the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    /// Whether both handles point at the same compiled expression.
    pub fn ptr_eq(&self, other: &Pattern) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(Arc::new(regex))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

/// An error object carried as a leaf value.
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorValue(Arc<str>);

impl ErrorValue {
    pub fn new(message: impl AsRef<str>) -> Self {
        Self(Arc::from(message.as_ref()))
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    pub fn ptr_eq(&self, other: &ErrorValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error({:?})", self.message())
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

type NodeFn = dyn Fn(&[Node]) -> Node + Send + Sync;

/// A function leaf.
///
/// Two callables are equal only when they share the same allocation.
#[derive(Clone)]
pub struct Callable(Arc<NodeFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Node]) -> Node + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &[Node]) -> Node {
        (self.0)(args)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}
