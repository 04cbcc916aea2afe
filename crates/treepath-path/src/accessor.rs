//! Read, write and remove values by dotted path.
//!
//! Each traversal step is resolved against the live container at that depth:
//!
//! | container | segment              | resolves to                              |
//! |-----------|----------------------|------------------------------------------|
//! | record    | any                  | the entry under that key                 |
//! | sequence  | canonical index      | the element (absent past the end)        |
//! | sequence  | anything else        | absent (`InvalidIndex` when writing)     |
//! | map       | any                  | string key, else the key displayed as it |
//! | other     | any                  | absent                                   |
//!
//! When writing or removing, an intermediate slot that does not hold a
//! record, sequence or map is replaced by a new container whose kind is
//! chosen by [`Segment::vivifies_sequence`] on the *next* segment.
//! Padding a sequence is limited to [`MAX_PADDING`] new holes per step.

use tracing::trace;
use treepath_node::{MapKey, Node, NodeMap};

use crate::codec::parse_path;
use crate::error::PathError;
use crate::types::Segment;

fn ensure_traversable(root: &Node) -> Result<(), PathError> {
    let kind = root.kind();
    if !kind.is_traversable() {
        return Err(PathError::NotTraversable { kind });
    }
    Ok(())
}

/// Most `Undefined` holes a single write may add when it addresses a
/// sequence index past the end.
pub const MAX_PADDING: usize = 1 << 20;

/// Key an existing map entry is stored under.
///
/// The string key wins; otherwise the first key whose display form equals
/// the segment, which is the form the enumerator emits. New entries use the
/// string key.
fn map_key(map: &NodeMap, segment: &Segment) -> MapKey {
    let key = MapKey::String(segment.to_string());
    if map.contains_key(&key) {
        return key;
    }
    map.keys()
        .find(|existing| existing.to_string() == segment.as_str())
        .cloned()
        .unwrap_or(key)
}

fn lookup<'a>(container: &'a Node, segment: &Segment) -> Option<&'a Node> {
    match container {
        Node::Record(record) => record.get(segment.as_str()),
        Node::Sequence(items) => segment.as_index().and_then(|i| items.get(i)),
        Node::Map(map) => map.get(&map_key(map, segment)),
        _ => None,
    }
}

fn lookup_mut<'a>(container: &'a mut Node, segment: &Segment) -> Option<&'a mut Node> {
    match container {
        Node::Record(record) => record.get_mut(segment.as_str()),
        Node::Sequence(items) => segment.as_index().and_then(move |i| items.get_mut(i)),
        Node::Map(map) => {
            let key = map_key(map, segment);
            map.get_mut(&key)
        }
        _ => None,
    }
}

/// Mutable slot for `segment` inside `container`, created as `Undefined` if
/// missing. Sequences are padded with `Undefined` up to the index.
fn slot_mut<'a>(container: &'a mut Node, segment: &Segment) -> Result<&'a mut Node, PathError> {
    match container {
        Node::Record(record) => Ok(record.entry(segment.to_string()).or_default()),
        Node::Sequence(items) => {
            let index = segment.as_index().ok_or_else(|| PathError::InvalidIndex {
                segment: segment.to_string(),
            })?;
            if index >= items.len() {
                if index - items.len() > MAX_PADDING {
                    return Err(PathError::PaddingLimit {
                        segment: segment.to_string(),
                        len: items.len(),
                    });
                }
                trace!(index, len = items.len(), "padding sequence");
                items.resize(index + 1, Node::Undefined);
            }
            Ok(&mut items[index])
        }
        Node::Map(map) => {
            let key = map_key(map, segment);
            Ok(map.get_or_insert_default(key))
        }
        other => Err(PathError::NotTraversable { kind: other.kind() }),
    }
}

fn vivify(next: &Segment) -> Node {
    if next.vivifies_sequence() {
        Node::sequence()
    } else {
        Node::record()
    }
}

/// Walk every segment but the last, creating missing containers, and return
/// the container the last segment applies to.
fn descend_vivifying<'a>(root: &'a mut Node, segments: &[Segment]) -> Result<&'a mut Node, PathError> {
    let mut current = root;
    for pair in segments.windows(2) {
        let slot = slot_mut(current, &pair[0])?;
        if !slot.kind().is_traversable() {
            let created = vivify(&pair[1]);
            trace!(
                segment = %pair[0],
                replaced = %slot.kind(),
                created = %created.kind(),
                "auto-vivified container"
            );
            *slot = created;
        }
        current = slot;
    }
    Ok(current)
}

/// Read the value at `path`.
///
/// An intermediate value that is missing or falsy ends the walk with `None`.
/// A final value that is missing, `Null` or `Undefined` is also `None`.
///
/// # Errors
///
/// [`PathError::NotTraversable`] if `root` is not a record, sequence or map.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_path::read;
///
/// let doc = Node::from(json!({"b": {"d": [3, 4, {"e": 5}]}}));
/// assert_eq!(read(&doc, "b.d.2.e").unwrap(), Some(&Node::from(5)));
/// assert_eq!(read(&doc, "b.x.y").unwrap(), None);
/// ```
pub fn read<'a>(root: &'a Node, path: &str) -> Result<Option<&'a Node>, PathError> {
    ensure_traversable(root)?;
    let segments = parse_path(path);
    let Some((last, init)) = segments.split_last() else {
        return Ok(None);
    };

    let mut current = root;
    for segment in init {
        match lookup(current, segment) {
            Some(next) if next.is_truthy() => current = next,
            _ => return Ok(None),
        }
    }

    Ok(lookup(current, last).filter(|value| !matches!(value, Node::Null | Node::Undefined)))
}

/// Read the value at `path`, or `fallback` when [`read`] finds nothing.
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_path::read_or;
///
/// let doc = Node::from(json!({"a": 1}));
/// assert_eq!(read_or(&doc, "x.y", Node::from("fallback")).unwrap(), Node::from("fallback"));
/// ```
pub fn read_or(root: &Node, path: &str, fallback: Node) -> Result<Node, PathError> {
    Ok(read(root, path)?.cloned().unwrap_or(fallback))
}

/// Mutable counterpart of [`read`], with the same resolution rules.
///
/// Nothing is created along the way.
pub fn read_mut<'a>(root: &'a mut Node, path: &str) -> Result<Option<&'a mut Node>, PathError> {
    ensure_traversable(root)?;
    let segments = parse_path(path);
    let Some((last, init)) = segments.split_last() else {
        return Ok(None);
    };

    let mut current = root;
    for segment in init {
        match lookup_mut(current, segment) {
            Some(next) if next.is_truthy() => current = next,
            _ => return Ok(None),
        }
    }

    Ok(lookup_mut(current, last).filter(|value| !matches!(value, Node::Null | Node::Undefined)))
}

/// Whether `path` addresses an existing entry, whatever its value.
///
/// Unlike [`read`], an explicit `Null` or `Undefined` at the end counts as
/// present. Non-traversable roots have no paths.
pub fn has(root: &Node, path: &str) -> bool {
    if !root.kind().is_traversable() {
        return false;
    }
    let segments = parse_path(path);
    let Some((last, init)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in init {
        match lookup(current, segment) {
            Some(next) if next.is_truthy() => current = next,
            _ => return false,
        }
    }
    lookup(current, last).is_some()
}

/// Write `value` at `path`, creating missing intermediate containers.
///
/// Each intermediate slot that does not already hold a record, sequence or
/// map is replaced: with a sequence when the following segment
/// [vivifies a sequence](Segment::vivifies_sequence), otherwise with a record.
/// Writing past the end of a sequence pads it with `Undefined`.
///
/// # Errors
///
/// - [`PathError::NotTraversable`] if `root` is not a record, sequence or map;
///   nothing is modified.
/// - [`PathError::InvalidIndex`] if a sequence is addressed with a token that
///   is not a canonical index. Containers created before that point remain.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_path::write;
///
/// let mut doc = Node::from(json!({}));
/// write(&mut doc, "a.0.b", Node::from(1)).unwrap();
/// assert_eq!(doc, Node::from(json!({"a": [{"b": 1}]})));
/// ```
pub fn write(root: &mut Node, path: &str, value: Node) -> Result<(), PathError> {
    ensure_traversable(root)?;
    let segments = parse_path(path);
    let Some(last) = segments.last() else {
        return Ok(());
    };

    let container = descend_vivifying(root, &segments)?;
    *slot_mut(container, last)? = value;
    Ok(())
}

/// Remove the value at `path` and return it.
///
/// Intermediate containers are created exactly as [`write`] creates them.
/// A sequence element is spliced out, so later elements shift down by one;
/// a record key or map entry is deleted, keeping the order of the rest.
/// Removing something that does not exist is a no-op returning `None`.
///
/// # Errors
///
/// [`PathError::NotTraversable`] if `root` is not a record, sequence or map;
/// nothing is modified.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_path::remove;
///
/// let mut doc = Node::from(json!({"b": {"d": [3, 4, {"e": 5}]}}));
/// assert_eq!(remove(&mut doc, "b.d.1").unwrap(), Some(Node::from(4)));
/// assert_eq!(doc, Node::from(json!({"b": {"d": [3, {"e": 5}]}})));
/// ```
pub fn remove(root: &mut Node, path: &str) -> Result<Option<Node>, PathError> {
    ensure_traversable(root)?;
    let segments = parse_path(path);
    let Some(last) = segments.last() else {
        return Ok(None);
    };

    let removed = match descend_vivifying(root, &segments)? {
        Node::Sequence(items) => match last.as_index() {
            Some(index) if index < items.len() => Some(items.remove(index)),
            _ => None,
        },
        Node::Record(record) => record.shift_remove(last.as_str()),
        Node::Map(map) => {
            let key = map_key(map, last);
            map.remove(&key)
        }
        _ => None,
    };
    Ok(removed)
}
