use chrono::SecondsFormat;
use serde_json::Value;

use crate::Node;

/// Render a node as a raw, unquoted-key literal string.
///
/// Records render as `{key:value,}` and sequences as `[item,]`, both with a
/// trailing comma after every entry; other values render as JSON, with
/// non-finite numbers as `null`. This is a debugging aid, not a serialization
/// format: the output is not meant to be parsed back.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use treepath_node::{stringify, Node};
///
/// let node = Node::from(json!({"a": 1, "b": ["x", null]}));
/// assert_eq!(stringify(&node), r#"{a:1,b:["x",null,],}"#);
/// ```
pub fn stringify(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Record(record) => {
            out.push('{');
            for (key, value) in record {
                out.push_str(key);
                out.push(':');
                write_node(out, value);
                out.push(',');
            }
            out.push('}');
        }
        Node::Sequence(items) => {
            out.push('[');
            for item in items {
                write_node(out, item);
                out.push(',');
            }
            out.push(']');
        }
        Node::Function(_) => out.push_str("[Function]"),
        // nothing to render
        Node::Undefined => {}
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Number(n) => out.push_str(&format_number(*n)),
        Node::String(s) => out.push_str(&Value::String(s.clone()).to_string()),
        Node::Date(d) => {
            out.push('"');
            out.push_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true));
            out.push('"');
        }
        // No enumerable own properties
        Node::Map(_) | Node::Set(_) | Node::Pattern(_) | Node::Error(_) => out.push_str("{}"),
    }
}

fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}
