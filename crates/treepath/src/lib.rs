//! treepath - dotted-path access and in-place merging for dynamic value trees.
//!
//! The member crates are re-exported both as modules and, for the common
//! operations, at the crate root:
//!
//! - [`node`]: the [`Node`] data model and string classifiers.
//! - [`path`]: path parsing, [`read`]/[`write`]/[`remove`] and path enumeration.
//! - [`util`]: deep [`clone`], [`merge`]/[`replace`] and value helpers.
//!
//! ```
//! use serde_json::json;
//! use treepath::{merge, nested_paths, read_or, write, Node};
//!
//! let mut settings = Node::from(json!({"theme": {"dark": false}}));
//! write(&mut settings, "panels.0.title", Node::from("Inbox")).unwrap();
//!
//! if let (Node::Record(dst), Node::Record(src)) =
//!     (&mut settings, Node::from(json!({"theme": {"dark": true}})))
//! {
//!     merge(dst, src, false);
//! }
//!
//! assert_eq!(read_or(&settings, "theme.dark", Node::Null).unwrap(), Node::from(true));
//! assert_eq!(
//!     nested_paths(&settings),
//!     vec!["theme", "theme.dark", "panels", "panels.0", "panels.0.title"]
//! );
//! ```

pub use treepath_node as node;
pub use treepath_path as path;
pub use treepath_util as util;

pub use treepath_node::{Kind, MapKey, Node, NodeMap, NodeSet, Record, Sequence};
pub use treepath_path::{
    has, nested_path_maps, nested_path_maps_with, nested_paths, parse_path, read, read_mut,
    read_or, remove, write, PathError,
};
pub use treepath_util::{
    clone, merge, merge_items, merge_sequence, merge_with, replace, replace_items, MergeError,
    MergeOptions,
};
