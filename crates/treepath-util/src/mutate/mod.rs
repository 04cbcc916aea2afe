//! In-place mutators that keep the destination container where it is.
//!
//! Sources are taken by value and moved into the destination, so adopted
//! nested containers are the caller's own values, not copies.

mod merge;
mod options;
mod replace;

pub use merge::{merge, merge_items, merge_sequence};
pub use options::{merge_items_with, merge_with, MergeOptions};
pub use replace::{replace, replace_items};
