//! Turn loosely typed strings, such as form fields or query values, into nodes.

use serde_json::Value;
use tracing::trace;
use treepath_node::{is_date_string, parse_date_string, to_number, Node};

/// Convert `value` to the node it most plausibly denotes.
///
/// In order: `"true"`/`"false"` become booleans, anything that coerces to a
/// number (including `""`, which is `0`) becomes a number, date strings
/// become dates, and everything else is parsed as JSON. String members of a
/// parsed record or sequence are typified in turn. Input that is none of
/// these stays a string.
///
/// ```
/// use serde_json::json;
/// use treepath_node::Node;
/// use treepath_util::typify;
///
/// assert_eq!(typify("true"), Node::from(true));
/// assert_eq!(typify("-0.5"), Node::from(-0.5));
/// assert_eq!(typify(r#"{"a": "2"}"#), Node::from(json!({"a": 2})));
/// assert_eq!(typify("hello"), Node::from("hello"));
/// ```
pub fn typify(value: &str) -> Node {
    typify_inner(value, true)
}

/// Like [`typify`], but members of parsed JSON are left as they are.
pub fn typify_shallow(value: &str) -> Node {
    typify_inner(value, false)
}

fn typify_inner(value: &str, recursive: bool) -> Node {
    match value {
        "true" => return Node::Bool(true),
        "false" => return Node::Bool(false),
        _ => {}
    }

    let number = to_number(value);
    if !number.is_nan() {
        return Node::Number(number);
    }

    if is_date_string(value) {
        if let Some(date) = parse_date_string(value) {
            return Node::Date(date);
        }
    }

    let parsed = match serde_json::from_str::<Value>(value) {
        Ok(parsed) => Node::from(parsed),
        Err(err) => {
            trace!(error = %err, "not json, keeping string");
            return Node::String(value.to_string());
        }
    };
    if !recursive {
        return parsed;
    }

    match parsed {
        Node::Record(mut record) => {
            for member in record.values_mut() {
                typify_member(member);
            }
            Node::Record(record)
        }
        Node::Sequence(mut items) => {
            items.iter_mut().for_each(typify_member);
            Node::Sequence(items)
        }
        other => other,
    }
}

fn typify_member(member: &mut Node) {
    if let Node::String(text) = member {
        *member = typify(text);
    }
}
