//! End-to-end behaviour of the public API over JSON-built trees.

use std::sync::Once;

use serde_json::json;
use treepath::{
    clone, merge, merge_items, merge_sequence, nested_path_maps, nested_paths, read, read_or,
    remove, write, Kind, MergeError, Node, PathError, Record, Sequence,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .init();
    });
}

fn fixture() -> Node {
    Node::from(json!({
        "a": 1,
        "b": {
            "c": 2,
            "d": [3, 4, {"e": 5}]
        }
    }))
}

#[test]
fn clone_round_trip() {
    let doc = fixture();
    let mut copy = clone(&doc);
    assert_eq!(copy, doc);

    write(&mut copy, "b.d.2.e", Node::from(50)).unwrap();
    assert_eq!(read(&doc, "b.d.2.e").unwrap(), Some(&Node::from(5)));
    assert_eq!(read(&copy, "b.d.2.e").unwrap(), Some(&Node::from(50)));
}

#[test]
fn write_then_read() {
    init_tracing();
    let mut doc = fixture();
    let cases = [
        ("a", Node::from("one")),
        ("b.d.2.e", Node::from(true)),
        ("x.y.z", Node::from(json!({"deep": [1]}))),
        ("list.0.name", Node::from("first")),
        ("b.d.5", Node::from(6)),
    ];
    for (path, value) in cases {
        write(&mut doc, path, value.clone()).unwrap();
        assert_eq!(read(&doc, path).unwrap(), Some(&value), "{path}");
    }
    assert_eq!(
        read(&doc, "b.d").unwrap(),
        Some(&Node::Sequence(vec![
            Node::from(3),
            Node::from(4),
            Node::from(json!({"e": true})),
            Node::Undefined,
            Node::Undefined,
            Node::from(6),
        ]))
    );
    assert_eq!(read(&doc, "list").unwrap(), Some(&Node::from(json!([{"name": "first"}]))));
}

#[test]
fn remove_splices_sequences() {
    let mut doc = fixture();
    assert_eq!(remove(&mut doc, "b.d.1").unwrap(), Some(Node::from(4)));
    assert_eq!(
        read(&doc, "b.d").unwrap(),
        Some(&Node::from(json!([3, {"e": 5}])))
    );

    assert_eq!(remove(&mut doc, "b.c").unwrap(), Some(Node::from(2)));
    assert_eq!(remove(&mut doc, "b.c").unwrap(), None);
    assert_eq!(doc, Node::from(json!({"a": 1, "b": {"d": [3, {"e": 5}]}})));
}

#[test]
fn merge_preserves_identity() {
    init_tracing();
    let mut target = Node::from(json!({"a": 1, "b": 2}));
    let before = target.as_record().unwrap() as *const Record;

    if let (Node::Record(dst), Node::Record(src)) = (&mut target, Node::from(json!({"b": 3, "c": 4}))) {
        merge(dst, src, false);
    }

    assert!(std::ptr::eq(before, target.as_record().unwrap()));
    assert_eq!(target, Node::from(json!({"a": 1, "b": 3, "c": 4})));
}

#[test]
fn merge_with_cleanup() {
    let mut target = Node::from(json!({"a": 1, "b": 2}));
    if let (Node::Record(dst), Node::Record(src)) = (&mut target, Node::from(json!({"b": 3}))) {
        merge(dst, src, true);
    }
    assert_eq!(target, Node::from(json!({"b": 3})));
}

#[test]
fn sequence_kind_mismatch_overwrites() {
    let mut target = Node::from(json!([1, {"x": 1}]));
    merge_sequence(&mut target, Node::from(json!([2, "str"])), false).unwrap();
    assert_eq!(target, Node::from(json!([2, "str"])));
}

#[test]
fn sequence_merge_with_identical_copy() {
    let original = Node::from(json!([1, {"a": [2, 3]}, "s", null]));
    let mut target = clone(&original);
    let before = target.as_sequence().unwrap() as *const Sequence;

    if let (Node::Sequence(dst), Node::Sequence(src)) = (&mut target, clone(&original)) {
        merge_items(dst, src, false);
    }

    assert!(std::ptr::eq(before, target.as_sequence().unwrap()));
    assert_eq!(target, original);
}

#[test]
fn merge_sequence_requires_sequences() {
    let mut target = Node::from(json!({"a": 1}));
    assert_eq!(
        merge_sequence(&mut target, Node::from(json!([1])), false),
        Err(MergeError::KindMismatch {
            target: Kind::Record,
            incoming: Kind::Sequence
        })
    );
}

#[test]
fn enumeration_order() {
    assert_eq!(
        nested_paths(&fixture()),
        vec!["a", "b", "b.c", "b.d", "b.d.0", "b.d.1", "b.d.2", "b.d.2.e"]
    );
}

#[test]
fn enumerated_values_are_borrowed_from_tree() {
    let doc = fixture();
    let maps = nested_path_maps(&doc);
    for (path, value) in &maps {
        let resolved = read(&doc, path).unwrap().expect("enumerated path resolves");
        assert!(std::ptr::eq(*value, resolved), "{path}");
    }
}

#[test]
fn read_fallback() {
    let doc = Node::from(json!({"a": 1}));
    assert_eq!(
        read_or(&doc, "x.y", Node::from("fallback")).unwrap(),
        Node::from("fallback")
    );
}

#[test]
fn scalar_roots_are_rejected() {
    let mut doc = Node::from("text");
    assert_eq!(
        read(&doc, "a"),
        Err(PathError::NotTraversable { kind: Kind::String })
    );
    assert_eq!(
        write(&mut doc, "a", Node::from(1)),
        Err(PathError::NotTraversable { kind: Kind::String })
    );
    assert_eq!(doc, Node::from("text"));
}
