//! treepath-util - Whole-tree utilities for treepath nodes
//!
//! Deep cloning, identity-preserving merge and replace, and a few helpers for
//! shaping loosely typed input.

pub mod clone;
mod error;
pub mod layout;
pub mod mutate;
pub mod typify;

// Re-exports for convenience
pub use clone::{clone, clone_map, clone_set};
pub use error::MergeError;
pub use layout::{split_cols, split_rows};
pub use mutate::{
    merge, merge_items, merge_items_with, merge_sequence, merge_with, replace, replace_items,
    MergeOptions,
};
pub use typify::{typify, typify_shallow};
