//! Enumerate every addressable path in a tree.

use indexmap::IndexMap;
use treepath_node::Node;

use crate::codec::join_path;

fn visit_child<'a, F>(prefix: &str, token: &str, value: &'a Node, visit: &mut F)
where
    F: FnMut(&str, &'a Node),
{
    let path = join_path(prefix, token);
    visit(&path, value);
    if value.kind().is_traversable() {
        walk(value, &path, visit);
    }
}

/// Pre-order walk over records, sequences and maps. `visit` sees each
/// child's path before the walk descends into that child. Map entries are
/// addressed by the display form of their key.
fn walk<'a, F>(target: &'a Node, prefix: &str, visit: &mut F)
where
    F: FnMut(&str, &'a Node),
{
    match target {
        Node::Sequence(items) => {
            for (i, value) in items.iter().enumerate() {
                visit_child(prefix, &i.to_string(), value, visit);
            }
        }
        Node::Record(record) => {
            for (key, value) in record {
                visit_child(prefix, key, value, visit);
            }
        }
        Node::Map(map) => {
            for (key, value) in map.iter() {
                visit_child(prefix, &key.to_string(), value, visit);
            }
        }
        _ => {}
    }
}

/// All nested paths of `target`, parents before children.
///
/// Records, sequences and maps are descended into; any other root yields no
/// paths.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_path::nested_paths;
///
/// let doc = Node::from(json!({"a": 1, "b": {"c": 2, "d": [3, 4, {"e": 5}]}}));
/// assert_eq!(
///     nested_paths(&doc),
///     vec!["a", "b", "b.c", "b.d", "b.d.0", "b.d.1", "b.d.2", "b.d.2.e"]
/// );
/// ```
pub fn nested_paths(target: &Node) -> Vec<String> {
    nested_paths_under(target, "")
}

/// Like [`nested_paths`], with every path prefixed by `prefix.`.
pub fn nested_paths_under(target: &Node, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    walk(target, prefix, &mut |path: &str, _: &Node| paths.push(path.to_string()));
    paths
}

/// Map every nested path of `target` to the value stored there.
///
/// Values are borrowed from `target`, so container entries are the very
/// containers inside the tree.
pub fn nested_path_maps(target: &Node) -> IndexMap<String, &Node> {
    nested_path_maps_under(target, "", |_, value| value)
}

/// Map every nested path to `project(path, value)`.
///
/// `project` runs for a value before its children are visited, and the walk
/// always descends into the original value, never the projected one.
///
/// ```
/// use serde_json::json;
/// use treepath_node::{Kind, Node};
/// use treepath_path::nested_path_maps_with;
///
/// let doc = Node::from(json!({"a": {"b": [true]}}));
/// let kinds = nested_path_maps_with(&doc, |_, value| value.kind());
/// assert_eq!(kinds["a"], Kind::Record);
/// assert_eq!(kinds["a.b"], Kind::Sequence);
/// assert_eq!(kinds["a.b.0"], Kind::Boolean);
/// ```
pub fn nested_path_maps_with<'a, T, F>(target: &'a Node, project: F) -> IndexMap<String, T>
where
    F: FnMut(&str, &'a Node) -> T,
{
    nested_path_maps_under(target, "", project)
}

/// Like [`nested_path_maps_with`], with every path prefixed by `prefix.`.
pub fn nested_path_maps_under<'a, T, F>(
    target: &'a Node,
    prefix: &str,
    mut project: F,
) -> IndexMap<String, T>
where
    F: FnMut(&str, &'a Node) -> T,
{
    let mut maps = IndexMap::new();
    walk(target, prefix, &mut |path: &str, value: &'a Node| {
        maps.insert(path.to_string(), project(path, value));
    });
    maps
}
