//! Interop with `serde_json::Value`.
//!
//! JSON has no dates, maps, sets or functions, so the conversion back to JSON
//! is lossy for those kinds: dates become RFC 3339 strings, maps become
//! objects keyed by the key's display form, sets become arrays and the
//! remaining leaves become `null`.

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

use crate::collections::{Record, Sequence};
use crate::Node;

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Node::Null, Node::Number),
            Value::String(s) => Node::String(s),
            Value::Array(arr) => Node::Sequence(arr.into_iter().map(Node::from).collect::<Sequence>()),
            Value::Object(obj) => Node::Record(
                obj.into_iter()
                    .map(|(key, val)| (key, Node::from(val)))
                    .collect::<Record>(),
            ),
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        Node::from(value.clone())
    }
}

/// Integral numbers inside the `i64` range are emitted as JSON integers so
/// that `json!(1)` and `Node::Number(1.0)` compare equal after conversion.
fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Undefined | Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => number_to_json(*n),
            Node::String(s) => Value::String(s.clone()),
            Node::Date(d) => Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Node::Record(record) => Value::Object(
                record
                    .iter()
                    .map(|(key, val)| (key.clone(), Value::from(val)))
                    .collect::<Map<String, Value>>(),
            ),
            Node::Sequence(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, val)| (key.to_string(), Value::from(val)))
                    .collect::<Map<String, Value>>(),
            ),
            Node::Set(set) => Value::Array(set.iter().map(Value::from).collect()),
            Node::Pattern(_) | Node::Error(_) | Node::Function(_) => Value::Null,
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}
