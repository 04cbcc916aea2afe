//! Kind classification for tree nodes.

use std::fmt;

/// The kind of a [`Node`](crate::Node).
///
/// Exactly one kind is reported for every node. Record, sequence and map are
/// the kinds a path can be resolved against; date, set and the remaining
/// leaves terminate path traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Date,
    Record,
    Sequence,
    Map,
    Set,
    RegExp,
    Error,
    Function,
}

impl Kind {
    /// Generic type name, as reported by `typeOf`-style inspection.
    ///
    /// Records report `"object"` and sequences `"array"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Date => "date",
            Kind::Record => "object",
            Kind::Sequence => "array",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::RegExp => "regexp",
            Kind::Error => "error",
            Kind::Function => "function",
        }
    }

    /// Record or sequence: the kinds the merge family and the path enumerator recurse into.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Record | Kind::Sequence)
    }

    /// Kinds a dotted path segment can be resolved against.
    pub fn is_traversable(self) -> bool {
        matches!(self, Kind::Record | Kind::Sequence | Kind::Map)
    }

    /// Immutable leaves that are shared rather than copied by a deep clone.
    pub fn is_leaf(self) -> bool {
        !matches!(
            self,
            Kind::Record | Kind::Sequence | Kind::Map | Kind::Set | Kind::Date
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
