use treepath_node::{Record, Sequence};

/// Empty `target` and adopt every entry of `source`, in source order.
///
/// Shallow: nested containers are moved in as they are.
pub fn replace(target: &mut Record, source: Record) {
    target.clear();
    target.extend(source);
}

/// Truncate `target` to zero and append every item of `source`.
pub fn replace_items(target: &mut Sequence, source: Sequence) {
    target.clear();
    target.extend(source);
}
