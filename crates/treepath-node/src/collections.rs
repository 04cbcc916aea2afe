//! Container types held by [`Node`].

use std::fmt;

use indexmap::IndexMap;

use crate::Node;

/// String-keyed container. Key order is insertion order.
pub type Record = IndexMap<String, Node>;

/// Ordered, integer-indexed container. Holes are `Node::Undefined`.
pub type Sequence = Vec<Node>;

/// Key of a [`NodeMap`] entry.
///
/// Map keys are scalars, so they are copied by value rather than deep cloned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapKey {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Null => f.write_str("null"),
            MapKey::Bool(b) => write!(f, "{b}"),
            MapKey::Int(n) => write!(f, "{n}"),
            MapKey::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::String(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::String(s)
    }
}

impl From<i64> for MapKey {
    fn from(n: i64) -> Self {
        MapKey::Int(n)
    }
}

impl From<bool> for MapKey {
    fn from(b: bool) -> Self {
        MapKey::Bool(b)
    }
}

/// Associative container keyed by [`MapKey`], in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMap {
    entries: IndexMap<MapKey, Node>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &MapKey) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &MapKey) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &MapKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite an entry, returning the previous value.
    ///
    /// Overwriting keeps the entry's original position.
    pub fn insert(&mut self, key: impl Into<MapKey>, value: Node) -> Option<Node> {
        self.entries.insert(key.into(), value)
    }

    /// Mutable access to an entry, appending an `Undefined` one if absent.
    pub fn get_or_insert_default(&mut self, key: MapKey) -> &mut Node {
        self.entries.entry(key).or_default()
    }

    /// Remove an entry; the relative order of the remaining entries is kept.
    pub fn remove(&mut self, key: &MapKey) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, MapKey, Node> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, MapKey, Node> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, MapKey, Node> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, MapKey, Node> {
        self.entries.values()
    }
}

impl FromIterator<(MapKey, Node)> for NodeMap {
    fn from_iter<I: IntoIterator<Item = (MapKey, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a MapKey, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, MapKey, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for NodeMap {
    type Item = (MapKey, Node);
    type IntoIter = indexmap::map::IntoIter<MapKey, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Collection of distinct nodes, in insertion order.
///
/// Nodes are not hashable (numbers are `f64`), so membership is a linear
/// structural-equality scan.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    items: Vec<Node>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &Node) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Add `value` unless an equal node is already present.
    ///
    /// Returns whether the value was inserted.
    pub fn insert(&mut self, value: Node) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn remove(&mut self, value: &Node) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }
}

impl PartialEq for NodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
    }
}

impl FromIterator<Node> for NodeSet {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut set = NodeSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for NodeSet {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
