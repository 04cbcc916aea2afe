use std::collections::HashSet;

use tracing::{debug, trace};
use treepath_node::{Node, Record, Sequence};

use crate::error::MergeError;

/// Merge `source` into a slot that already holds a value.
fn merge_value(slot: &mut Node, value: Node, cleanup: bool) {
    match (slot, value) {
        (Node::Sequence(dst), Node::Sequence(src)) => merge_items(dst, src, cleanup),
        (Node::Record(dst), Node::Record(src)) => merge(dst, src, cleanup),
        (slot, value) => {
            if *slot != value {
                debug!(from = %slot.kind(), to = %value.kind(), "overwriting value");
                *slot = value;
            }
        }
    }
}

/// Deep-merge `source` into `target` in place.
///
/// For every source entry, in source order: two sequences merge item by item,
/// two records merge recursively, and anything else overwrites the target
/// value when the two differ. Keys missing from `target` are adopted, unless
/// the source value is `Undefined`.
///
/// With `cleanup`, target keys that `source` does not have are deleted
/// afterwards, at every depth the merge reaches.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_util::mutate::merge;
///
/// let mut target = Node::from(json!({"a": 1, "b": 2}));
/// let source = Node::from(json!({"b": 3, "c": 4}));
///
/// if let (Node::Record(dst), Node::Record(src)) = (&mut target, source) {
///     merge(dst, src, false);
/// }
/// assert_eq!(target, Node::from(json!({"a": 1, "b": 3, "c": 4})));
/// ```
pub fn merge(target: &mut Record, source: Record, cleanup: bool) {
    let retained: Option<HashSet<String>> = cleanup.then(|| source.keys().cloned().collect());

    for (key, value) in source {
        let Some(slot) = target.get_mut(&key) else {
            if value.is_undefined() {
                continue;
            }
            trace!(key = %key, "adopting key");
            target.insert(key, value);
            continue;
        };
        merge_value(slot, value, cleanup);
    }

    if let Some(retained) = retained {
        target.retain(|key, _| {
            let keep = retained.contains(key);
            if !keep {
                debug!(key = %key, "pruning key absent from source");
            }
            keep
        });
    }
}

/// Deep-merge `source` into `target` item by item.
///
/// `Undefined` source items are holes and leave the target untouched. An item
/// whose kind differs from the target's (a missing target item counts as
/// `Undefined`) replaces it, padding the sequence with `Undefined` when the
/// index is past the end. Same-kind sequences and records are merged
/// recursively and same-kind scalars and functions are overwritten. Same-kind
/// maps, sets, dates, patterns and errors keep the target item untouched.
///
/// With `cleanup`, a target longer than `source` is truncated to its length.
pub fn merge_items(target: &mut Sequence, source: Sequence, cleanup: bool) {
    let source_len = source.len();

    for (index, value) in source.into_iter().enumerate() {
        if value.is_undefined() {
            continue;
        }
        if index >= target.len() {
            if index > target.len() {
                trace!(from = target.len(), to = index, "padding sequence");
                target.resize(index, Node::Undefined);
            }
            target.push(value);
            continue;
        }

        let slot = &mut target[index];
        if slot.kind() != value.kind() {
            debug!(index, from = %slot.kind(), to = %value.kind(), "kind changed, overwriting");
            *slot = value;
            continue;
        }
        match (slot, value) {
            (Node::Sequence(dst), Node::Sequence(src)) => merge_items(dst, src, cleanup),
            (Node::Record(dst), Node::Record(src)) => merge(dst, src, cleanup),
            (
                Node::Map(_) | Node::Set(_) | Node::Date(_) | Node::Pattern(_) | Node::Error(_),
                _,
            ) => trace!(index, "keeping object item"),
            (slot, value) => *slot = value,
        }
    }

    if cleanup && target.len() > source_len {
        debug!(from = target.len(), to = source_len, "truncating sequence");
        target.truncate(source_len);
    }
}

/// Merge two sequence nodes.
///
/// Fails with [`MergeError::KindMismatch`] before touching `target` unless
/// both nodes are sequences.
pub fn merge_sequence(target: &mut Node, source: Node, cleanup: bool) -> Result<(), MergeError> {
    match (target, source) {
        (Node::Sequence(dst), Node::Sequence(src)) => {
            merge_items(dst, src, cleanup);
            Ok(())
        }
        (target, source) => Err(MergeError::KindMismatch {
            target: target.kind(),
            incoming: source.kind(),
        }),
    }
}
