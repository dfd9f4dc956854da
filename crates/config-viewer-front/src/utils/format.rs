use std::io;

use serde::Serialize;
use serde_json::{
    ser::{Formatter, PrettyFormatter},
    Map, Serializer, Value,
};

const INDENT: &[u8] = b"    ";

/// Renders `value` the way `JSON.stringify(value, null, 4)` does: four-space
/// indent, ECMAScript number text, integer-like keys first in ascending order
/// and every other key in document order.
pub fn pretty_json(value: &Value) -> String {
    let ordered = with_js_key_order(value);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, JsFormatter::new());
    match ordered.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => ordered.to_string(),
    }
}

/// `PrettyFormatter` with floats written as ECMAScript `Number::toString`.
struct JsFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl JsFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for JsFormatter<'_> {
    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, f64::from(value))
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut buffer = ryu_js::Buffer::new();
        writer.write_all(buffer.format(value).as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}

/// Canonical array index: `0` or a digit string without leading zero below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    if key != "0" && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

fn with_js_key_order(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut indexed: Vec<(u32, &String, &Value)> = Vec::new();
            let mut named: Vec<(&String, &Value)> = Vec::new();
            for (key, child) in map {
                match array_index(key) {
                    Some(index) => indexed.push((index, key, child)),
                    None => named.push((key, child)),
                }
            }
            indexed.sort_by_key(|(index, _, _)| *index);

            let mut ordered = Map::with_capacity(map.len());
            for (_, key, child) in indexed {
                ordered.insert(key.clone(), with_js_key_order(child));
            }
            for (key, child) in named {
                ordered.insert(key.clone(), with_js_key_order(child));
            }
            Value::Object(ordered)
        }
        Value::Array(items) => Value::Array(items.iter().map(with_js_key_order).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn indents_with_four_spaces() {
        assert_eq!(pretty_json(&json!({"a": 1})), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn nested_values_indent_per_level() {
        let text = pretty_json(&json!({"pool": {"members": [1, 2]}}));
        assert_eq!(
            text,
            "{\n    \"pool\": {\n        \"members\": [\n            1,\n            2\n        ]\n    }\n}"
        );
    }

    #[test]
    fn keeps_document_key_order() {
        assert_eq!(
            pretty_json(&parsed(r#"{"zeta":1,"alpha":2}"#)),
            "{\n    \"zeta\": 1,\n    \"alpha\": 2\n}"
        );
    }

    #[test]
    fn whole_floats_print_like_javascript() {
        assert_eq!(
            pretty_json(&parsed(r#"{"ratio":1.0,"big":1e2}"#)),
            "{\n    \"ratio\": 1,\n    \"big\": 100\n}"
        );
    }

    #[test]
    fn fractional_and_extreme_floats_print_like_javascript() {
        assert_eq!(
            pretty_json(&parsed("[0.5, -2.25, 1e21, 1e-7]")),
            "[\n    0.5,\n    -2.25,\n    1e+21,\n    1e-7\n]"
        );
    }

    #[test]
    fn integer_keys_come_first_ascending() {
        assert_eq!(
            pretty_json(&parsed(r#"{"b":1,"10":2,"a":3,"2":4}"#)),
            "{\n    \"2\": 4,\n    \"10\": 2,\n    \"b\": 1,\n    \"a\": 3\n}"
        );
    }

    #[test]
    fn non_canonical_numeric_keys_keep_document_order() {
        assert_eq!(
            pretty_json(&parsed(r#"{"b":1,"01":2,"-1":3,"4294967295":4,"0":5}"#)),
            "{\n    \"0\": 5,\n    \"b\": 1,\n    \"01\": 2,\n    \"-1\": 3,\n    \"4294967295\": 4\n}"
        );
    }

    #[test]
    fn key_order_applies_inside_arrays_and_nested_objects() {
        assert_eq!(
            pretty_json(&parsed(r#"[{"x":{"z":1,"3":2}}]"#)),
            "[\n    {\n        \"x\": {\n            \"3\": 2,\n            \"z\": 1\n        }\n    }\n]"
        );
    }

    #[test]
    fn scalars_and_empty_containers() {
        assert_eq!(pretty_json(&json!("text")), "\"text\"");
        assert_eq!(pretty_json(&json!(null)), "null");
        assert_eq!(pretty_json(&json!({})), "{}");
        assert_eq!(pretty_json(&json!([])), "[]");
    }
}
