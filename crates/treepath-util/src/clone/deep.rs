use treepath_node::{Node, NodeMap, NodeSet};

/// Creates a deep clone of any node.
///
/// Records, sequences, maps and sets are rebuilt recursively and dates are
/// copied by instant, so the result shares no container with `value`.
/// Every other kind is an immutable leaf and is returned as is; pattern,
/// error and function leaves keep pointing at the same allocation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_util::clone::clone;
///
/// let original = Node::from(json!({"foo": [1, 2, 3]}));
/// let mut cloned = clone(&original);
/// assert_eq!(original, cloned);
///
/// cloned.as_record_mut().unwrap().insert("bar".into(), Node::Null);
/// assert_ne!(original, cloned);
/// ```
pub fn clone(value: &Node) -> Node {
    match value {
        Node::Map(map) => Node::Map(clone_map(map)),
        Node::Set(set) => Node::Set(clone_set(set)),
        Node::Date(date) => Node::Date(*date),
        Node::Record(record) => Node::Record(
            record
                .iter()
                .map(|(key, val)| (key.clone(), clone(val)))
                .collect(),
        ),
        Node::Sequence(items) => Node::Sequence(items.iter().map(clone).collect()),
        Node::Undefined
        | Node::Null
        | Node::Bool(_)
        | Node::Number(_)
        | Node::String(_)
        | Node::Pattern(_)
        | Node::Error(_)
        | Node::Function(_) => value.clone(),
    }
}

/// Clone a map: keys are copied, values are deep cloned.
pub fn clone_map(source: &NodeMap) -> NodeMap {
    source
        .iter()
        .map(|(key, val)| (key.clone(), clone(val)))
        .collect()
}

/// Clone a set, deep cloning every element in iteration order.
pub fn clone_set(source: &NodeSet) -> NodeSet {
    source.iter().map(clone).collect()
}
