use thiserror::Error;
use treepath_node::Kind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// A sequence merge was handed something other than two sequences.
    #[error("can not merge {incoming} into {target}")]
    KindMismatch { target: Kind, incoming: Kind },
}
