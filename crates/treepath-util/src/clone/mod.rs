//! Deep cloning utilities.
//!
//! Provides deep cloning for node trees, including maps, sets and dates.

mod deep;

pub use deep::{clone, clone_map, clone_set};
