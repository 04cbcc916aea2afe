//! Dotted-path addressing for treepath nodes.
//!
//! A path such as `"b.d.2.e"` is split on `.` into [`Segment`]s. The accessor
//! functions resolve each segment against the container found at that depth,
//! so `"2"` indexes a sequence but names a key in a record.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use treepath_node::Node;
//! use treepath_path::{nested_paths, read, remove, write};
//!
//! let mut doc = Node::from(json!({"a": 1, "b": {"d": [3, 4]}}));
//!
//! write(&mut doc, "b.d.2.e", Node::from(5)).unwrap();
//! assert_eq!(read(&doc, "b.d.2.e").unwrap(), Some(&Node::from(5)));
//!
//! remove(&mut doc, "b.d.0").unwrap();
//! assert_eq!(
//!     nested_paths(&doc),
//!     vec!["a", "b", "b.d", "b.d.0", "b.d.1", "b.d.1.e"]
//! );
//! ```

pub mod accessor;
pub mod codec;
pub mod enumerate;
mod error;
pub mod types;

pub use accessor::{has, read, read_mut, read_or, remove, write, MAX_PADDING};
pub use codec::{format_path, is_child, join_path, parse_path, SEPARATOR};
pub use enumerate::{
    nested_path_maps, nested_path_maps_under, nested_path_maps_with, nested_paths,
    nested_paths_under,
};
pub use error::PathError;
pub use types::{is_valid_index, Path, Segment};
