//! Tree node model for treepath.
//!
//! A [`Node`] is any value in a tree: a scalar leaf, a date, or one of the
//! container kinds (record, sequence, map, set). Every higher-level operation
//! in the treepath crates dispatches on [`Node::kind`], so the classification
//! here is total and side-effect free.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use treepath_node::{Kind, Node};
//!
//! let node = Node::from(json!({"a": 1, "b": [true, null]}));
//! assert_eq!(node.kind(), Kind::Record);
//! assert_eq!(node.as_record().unwrap()["b"].kind(), Kind::Sequence);
//! assert_eq!(Kind::Sequence.as_str(), "array");
//! ```

pub mod classify;
pub mod collections;
mod convert;
pub mod kind;
pub mod leaf;
pub mod node;
mod stringify;

pub use classify::{
    is_boolean_string, is_date_string, is_number_string, is_unit_string, parse_date_string,
    to_number,
};
pub use collections::{MapKey, NodeMap, NodeSet, Record, Sequence};
pub use kind::Kind;
pub use leaf::{Callable, ErrorValue, Pattern};
pub use node::Node;
pub use stringify::stringify;
