use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use treepath_node::{
    is_date_string, stringify, Callable, ErrorValue, Kind, MapKey, Node, NodeMap, NodeSet, Pattern,
};

fn sample_nodes() -> Vec<(Node, Kind)> {
    let mut map = NodeMap::new();
    map.insert(MapKey::Int(1), Node::from("one"));
    let set: NodeSet = vec![Node::from(1), Node::from(1), Node::from(2)].into_iter().collect();

    vec![
        (Node::Undefined, Kind::Undefined),
        (Node::Null, Kind::Null),
        (Node::from(false), Kind::Boolean),
        (Node::from(1.5), Kind::Number),
        (Node::from("s"), Kind::String),
        (
            Node::from(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            Kind::Date,
        ),
        (Node::from(json!({"a": 1})), Kind::Record),
        (Node::from(json!([1])), Kind::Sequence),
        (Node::from(map), Kind::Map),
        (Node::from(set), Kind::Set),
        (Node::from(Pattern::new("a+").unwrap()), Kind::RegExp),
        (Node::from(ErrorValue::new("boom")), Kind::Error),
        (Node::from(Callable::new(|_| Node::Null)), Kind::Function),
    ]
}

#[test]
fn kind_matrix() {
    for (node, kind) in sample_nodes() {
        assert_eq!(node.kind(), kind, "{node:?}");
    }
}

#[test]
fn traversable_kinds() {
    for (node, kind) in sample_nodes() {
        let expected = matches!(kind, Kind::Record | Kind::Sequence | Kind::Map);
        assert_eq!(kind.is_traversable(), expected, "{node:?}");
    }
}

#[test]
fn truthiness_matrix() {
    let cases = [
        (Node::Undefined, false),
        (Node::Null, false),
        (Node::from(false), false),
        (Node::from(0), false),
        (Node::Number(f64::NAN), false),
        (Node::from(""), false),
        (Node::from(true), true),
        (Node::from(-1), true),
        (Node::from("0"), true),
        (Node::record(), true),
        (Node::sequence(), true),
    ];
    for (node, truthy) in cases {
        assert_eq!(node.is_truthy(), truthy, "{node:?}");
    }
}

#[test]
fn emptiness_matrix() {
    let cases = [
        (json!(null), true),
        (json!(0), true),
        (json!(""), true),
        (json!({}), true),
        (json!([]), true),
        (json!(false), false),
        (json!(" "), false),
        (json!({"a": null}), false),
        (json!([null]), false),
    ];
    for (value, empty) in cases {
        assert_eq!(Node::from(value.clone()).is_empty(), empty, "{value}");
    }
    assert!(Node::Undefined.is_empty());
    assert!(NodeMap::new().is_empty());
}

#[test]
fn json_round_trip() {
    let values = [
        json!(null),
        json!(true),
        json!(42),
        json!(-3.25),
        json!("text"),
        json!({"z": 1, "a": [1, {"b": null}], "m": {}}),
        json!([[], {}, [[1]]]),
    ];
    for value in values {
        let node = Node::from(value.clone());
        assert_eq!(Value::from(&node), value);
    }
}

#[test]
fn json_export_is_lossy_for_rich_kinds() {
    let date = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    let mut map = NodeMap::new();
    map.insert("k", Node::from(1));
    map.insert(MapKey::Int(2), Node::from(date));

    let node = Node::Sequence(vec![
        Node::from(map),
        Node::from(Pattern::new("x").unwrap()),
        Node::Undefined,
    ]);
    assert_eq!(
        Value::from(node),
        json!([{"k": 1, "2": "2024-05-06T07:08:09.000Z"}, null, null])
    );
}

#[test]
fn stringify_matrix() {
    let cases = [
        (json!(null), "null"),
        (json!(1), "1"),
        (json!(-2.5), "-2.5"),
        (json!("q\"uote"), r#""q\"uote""#),
        (json!([]), "[]"),
        (json!({}), "{}"),
        (json!({"a": [1, {"b": true}]}), "{a:[1,{b:true,},],}"),
    ];
    for (value, expected) in cases {
        assert_eq!(stringify(&Node::from(value.clone())), expected, "{value}");
    }
}

#[test]
fn date_strings() {
    assert!(is_date_string("2022-12-12"));
    assert!(is_date_string("2022-12-12T10:00:00Z"));
    assert!(is_date_string("2022-12-12T10:00:00.250"));
    assert!(!is_date_string("1970-01-01"));
    assert!(!is_date_string("12/12/2022"));
    assert!(!is_date_string("soon"));
}

#[test]
fn set_deduplicates_structurally() {
    let mut set = NodeSet::new();
    assert!(set.insert(Node::from(json!({"a": [1]}))));
    assert!(!set.insert(Node::from(json!({"a": [1]}))));
    assert!(set.insert(Node::from(json!({"a": [2]}))));
    assert_eq!(set.len(), 2);
}
