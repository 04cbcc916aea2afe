//! The [`Node`] sum type.

use chrono::{DateTime, Utc};

use crate::collections::{NodeMap, NodeSet, Record, Sequence};
use crate::kind::Kind;
use crate::leaf::{Callable, ErrorValue, Pattern};

/// Any value in a tree.
///
/// There is one variant per [`Kind`]. Containers own their children, so a
/// mutation made through `&mut` to a nested container is seen by everyone
/// who later reads the tree through its root.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Absent value. Also fills holes in sequences.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Record(Record),
    Sequence(Sequence),
    Map(NodeMap),
    Set(NodeSet),
    Pattern(Pattern),
    Error(ErrorValue),
    Function(Callable),
}

impl Node {
    /// An empty record.
    pub fn record() -> Self {
        Node::Record(Record::new())
    }

    /// An empty sequence.
    pub fn sequence() -> Self {
        Node::Sequence(Sequence::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Node::Undefined => Kind::Undefined,
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Boolean,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::Date(_) => Kind::Date,
            Node::Record(_) => Kind::Record,
            Node::Sequence(_) => Kind::Sequence,
            Node::Map(_) => Kind::Map,
            Node::Set(_) => Kind::Set,
            Node::Pattern(_) => Kind::RegExp,
            Node::Error(_) => Kind::Error,
            Node::Function(_) => Kind::Function,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Node::Undefined)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Node::Record(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Node::Set(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Node::Date(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Node::Function(_))
    }

    /// Null, boolean, number or string.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_)
        )
    }

    /// Undefined, null, or a NaN number.
    pub fn is_nullish(&self) -> bool {
        match self {
            Node::Undefined | Node::Null => true,
            Node::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Loose truthiness, as used when walking paths.
    ///
    /// Undefined, null, `false`, `0`, NaN and the empty string are falsy;
    /// every container and object leaf is truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Node::Undefined | Node::Null => false,
            Node::Bool(b) => *b,
            Node::Number(n) => *n != 0.0 && !n.is_nan(),
            Node::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Nullish values, `0`, and empty strings/containers.
    pub fn is_empty(&self) -> bool {
        if self.is_nullish() {
            return true;
        }
        match self {
            Node::String(s) => s.is_empty(),
            Node::Number(n) => *n == 0.0,
            Node::Record(record) => record.is_empty(),
            Node::Sequence(items) => items.is_empty(),
            Node::Map(map) => map.is_empty(),
            Node::Set(set) => set.is_empty(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Node::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Node::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut NodeMap> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&NodeSet> {
        match self {
            Node::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Move the value out, leaving `Undefined` behind.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n as f64)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(f64::from(n))
    }
}

impl From<usize> for Node {
    fn from(n: usize) -> Self {
        Node::Number(n as f64)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<DateTime<Utc>> for Node {
    fn from(d: DateTime<Utc>) -> Self {
        Node::Date(d)
    }
}

impl From<Record> for Node {
    fn from(record: Record) -> Self {
        Node::Record(record)
    }
}

impl From<Sequence> for Node {
    fn from(items: Sequence) -> Self {
        Node::Sequence(items)
    }
}

impl From<NodeMap> for Node {
    fn from(map: NodeMap) -> Self {
        Node::Map(map)
    }
}

impl From<NodeSet> for Node {
    fn from(set: NodeSet) -> Self {
        Node::Set(set)
    }
}

impl From<Pattern> for Node {
    fn from(pattern: Pattern) -> Self {
        Node::Pattern(pattern)
    }
}

impl From<ErrorValue> for Node {
    fn from(error: ErrorValue) -> Self {
        Node::Error(error)
    }
}

impl From<Callable> for Node {
    fn from(f: Callable) -> Self {
        Node::Function(f)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_kind_is_total() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let cases = [
            (Node::Undefined, Kind::Undefined),
            (Node::Null, Kind::Null),
            (Node::from(true), Kind::Boolean),
            (Node::from(1.5), Kind::Number),
            (Node::from("s"), Kind::String),
            (Node::from(date), Kind::Date),
            (Node::record(), Kind::Record),
            (Node::sequence(), Kind::Sequence),
            (Node::from(NodeMap::new()), Kind::Map),
            (Node::from(NodeSet::new()), Kind::Set),
            (Node::from(Pattern::new("a").unwrap()), Kind::RegExp),
            (Node::from(ErrorValue::new("e")), Kind::Error),
            (Node::from(Callable::new(|_| Node::Null)), Kind::Function),
        ];
        for (node, kind) in cases {
            assert_eq!(node.kind(), kind, "{node:?}");
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!Node::Undefined.is_truthy());
        assert!(!Node::Null.is_truthy());
        assert!(!Node::from(0).is_truthy());
        assert!(!Node::from(f64::NAN).is_truthy());
        assert!(!Node::from("").is_truthy());
        assert!(!Node::from(false).is_truthy());
        assert!(Node::from(-1).is_truthy());
        assert!(Node::from("0").is_truthy());
        assert!(Node::record().is_truthy());
        assert!(Node::sequence().is_truthy());
    }

    #[test]
    fn test_is_empty() {
        assert!(Node::Null.is_empty());
        assert!(Node::from(f64::NAN).is_empty());
        assert!(Node::from("").is_empty());
        assert!(Node::from(0).is_empty());
        assert!(Node::record().is_empty());
        assert!(Node::from(NodeSet::new()).is_empty());
        assert!(!Node::from(json!({"a": 1})).is_empty());
        assert!(!Node::from(json!([null])).is_empty());
        assert!(!Node::from(false).is_empty());
    }

    #[test]
    fn test_nullish() {
        assert!(Node::Undefined.is_nullish());
        assert!(Node::from(f64::NAN).is_nullish());
        assert!(!Node::from(0).is_nullish());
    }

    #[test]
    fn test_take_leaves_undefined() {
        let mut node = Node::from("x");
        assert_eq!(node.take(), Node::from("x"));
        assert!(node.is_undefined());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Node::from(None::<i32>), Node::Undefined);
        assert_eq!(Node::from(Some("a")), Node::from("a"));
    }
}
