use thiserror::Error;
use treepath_node::Kind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The root handed to an accessor is not a record, sequence or map.
    #[error("can not resolve a path against {kind}")]
    NotTraversable { kind: Kind },
    /// A sequence was addressed with a token that is not a canonical index.
    #[error("invalid sequence index {segment:?}")]
    InvalidIndex { segment: String },
    /// Writing at this index would pad the sequence with more than
    /// [`MAX_PADDING`](crate::accessor::MAX_PADDING) holes.
    #[error("index {segment} is too far past the end of a sequence of length {len}")]
    PaddingLimit { segment: String, len: usize },
}
