use serde::{Deserialize, Serialize};
use treepath_node::{Record, Sequence};

use super::merge::{merge, merge_items};

/// Options for [`merge_with`] and [`merge_items_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Delete target keys missing from the source and truncate target
    /// sequences longer than the source.
    pub cleanup: bool,
}

impl MergeOptions {
    pub fn cleanup() -> Self {
        Self { cleanup: true }
    }
}

/// [`merge`] driven by a [`MergeOptions`].
pub fn merge_with(target: &mut Record, source: Record, options: &MergeOptions) {
    merge(target, source, options.cleanup);
}

/// [`merge_items`] driven by a [`MergeOptions`].
pub fn merge_items_with(target: &mut Sequence, source: Sequence, options: &MergeOptions) {
    merge_items(target, source, options.cleanup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use treepath_node::Node;

    #[test]
    fn test_default_keeps_keys() {
        let options = MergeOptions::default();
        assert!(!options.cleanup);

        let mut target = Node::from(json!({"a": 1, "b": 2}));
        if let (Node::Record(dst), Node::Record(src)) = (&mut target, Node::from(json!({"b": 3}))) {
            merge_with(dst, src, &options);
        }
        assert_eq!(target, Node::from(json!({"a": 1, "b": 3})));
    }

    #[test]
    fn test_cleanup_option() {
        let mut target = Node::from(json!([1, 2, 3]));
        if let (Node::Sequence(dst), Node::Sequence(src)) = (&mut target, Node::from(json!([7]))) {
            merge_items_with(dst, src, &MergeOptions::cleanup());
        }
        assert_eq!(target, Node::from(json!([7])));
    }

    #[test]
    fn test_options_serde() {
        let options: MergeOptions = serde_json::from_value(json!({"cleanup": true})).unwrap();
        assert_eq!(options, MergeOptions::cleanup());

        let options: MergeOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, MergeOptions::default());

        assert_eq!(
            serde_json::to_value(MergeOptions::default()).unwrap(),
            json!({"cleanup": false})
        );
    }
}
