//! PHP literal encoding of runtime values.
//!
//! Used for constant values, field defaults and parameter defaults. Encoding
//! never fails: values without a literal form become [`UNKNOWN_VALUE_MARKER`].

use std::fmt::Write;

use indexmap::IndexMap;
use stubble_ir::{ArrayKey, Value, is_list};

use crate::builder::Indent;

/// Literal emitted for values that have no PHP literal form.
pub const UNKNOWN_VALUE_MARKER: &str = "\"ERROR! --- UNKNOWN VALUE TYPE ---\"";

/// Encodes [`Value`]s as PHP literals.
///
/// In compact mode every array is written inline. In pretty mode flat lists
/// of scalars stay inline while keyed or nested arrays get one entry per
/// line, indented one unit deeper than the line they start on.
#[derive(Debug, Clone)]
pub struct ValueEncoder<'a> {
    pretty: bool,
    indent: &'a Indent,
}

impl<'a> ValueEncoder<'a> {
    pub fn new(pretty: bool, indent: &'a Indent) -> Self {
        Self { pretty, indent }
    }

    /// Encode `value` for a line indented `level` units deep.
    pub fn encode(&self, value: &Value, level: usize) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, level);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, level: usize) {
        match value {
            Value::Null => out.push_str("NULL"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Value::Float(f) => out.push_str(&encode_float(*f)),
            Value::String(s) => out.push_str(&encode_string(s)),
            Value::Array(entries) => self.write_array(out, entries, level),
            Value::Opaque(kind) => {
                tracing::warn!(kind = %kind, "value has no literal form, writing error marker");
                out.push_str(UNKNOWN_VALUE_MARKER);
            }
        }
    }

    fn write_array(&self, out: &mut String, entries: &IndexMap<ArrayKey, Value>, level: usize) {
        if entries.is_empty() {
            out.push_str("[]");
            return;
        }

        let list = is_list(entries);
        let multiline = self.pretty && !(list && entries.values().all(is_scalar));

        out.push('[');
        for (i, (key, value)) in entries.iter().enumerate() {
            if multiline {
                out.push_str(if i == 0 { "\n" } else { ",\n" });
                out.push_str(&self.indent.repeat(level + 1));
            } else if i > 0 {
                out.push_str(", ");
            }

            if !list {
                match key {
                    ArrayKey::Int(k) => {
                        let _ = write!(out, "{}", k);
                    }
                    ArrayKey::String(k) => out.push_str(&encode_string(k)),
                }
                out.push_str(" => ");
            }
            self.write_value(out, value, level + 1);
        }
        if multiline {
            out.push('\n');
            out.push_str(&self.indent.repeat(level));
        }
        out.push(']');
    }
}

/// Encode a string, preferring single quotes.
///
/// Double quotes are used when the string contains a `'`, a backslash or a
/// control character. Double-quoted output escapes `"`, `\` and `$` and
/// writes control characters as escape sequences.
pub fn encode_string(s: &str) -> String {
    let needs_double = s
        .chars()
        .any(|c| matches!(c, '\'' | '\\' | '\r' | '\n' | '\t' | '\0'));

    if !needs_double {
        return format!("'{}'", s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            // `\0` followed by an octal digit would be read as a longer escape
            '\0' => match chars.peek() {
                Some('0'..='7') => out.push_str("\\000"),
                _ => out.push_str("\\0"),
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Encode a float so it is read back as a float.
pub fn encode_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        let word = if f > 0.0 { "INF" } else { "-INF" };
        word.to_string()
    } else {
        // Debug formatting always keeps a fraction or exponent.
        format!("{:?}", f)
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(value: &Value) -> String {
        ValueEncoder::new(false, &Indent::SPACES).encode(value, 0)
    }

    fn pretty(value: &Value, level: usize) -> String {
        ValueEncoder::new(true, &Indent::SPACES).encode(value, level)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&Value::Null), "NULL");
        assert_eq!(compact(&Value::Bool(true)), "true");
        assert_eq!(compact(&Value::Bool(false)), "false");
        assert_eq!(compact(&Value::Int(-42)), "-42");
        assert_eq!(compact(&Value::Float(1.0)), "1.0");
        assert_eq!(compact(&Value::Float(-0.25)), "-0.25");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(encode_float(f64::INFINITY), "INF");
        assert_eq!(encode_float(f64::NEG_INFINITY), "-INF");
        assert_eq!(encode_float(f64::NAN), "NAN");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(encode_string("plain"), "'plain'");
        assert_eq!(encode_string("say \"hi\""), "'say \"hi\"'");
        assert_eq!(encode_string("it's"), "\"it's\"");
        assert_eq!(encode_string("it's \"x\""), "\"it's \\\"x\\\"\"");
        assert_eq!(encode_string("a\tb\n"), "\"a\\tb\\n\"");
        assert_eq!(encode_string("C:\\dir"), "\"C:\\\\dir\"");
        assert_eq!(encode_string("it's $var"), "\"it's \\$var\"");
        assert_eq!(encode_string("$var"), "'$var'");
    }

    #[test]
    fn test_nul_before_digit() {
        assert_eq!(encode_string("\0"), "\"\\0\"");
        assert_eq!(encode_string("\x001"), "\"\\0001\"");
        assert_eq!(encode_string("\x009"), "\"\\09\"");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(compact(&Value::list([])), "[]");
        assert_eq!(pretty(&Value::list([]), 2), "[]");
    }

    #[test]
    fn test_flat_list_is_inline_in_both_modes() {
        let value = Value::list([Value::Int(1), Value::Int(2), Value::from("a")]);
        assert_eq!(compact(&value), "[1, 2, 'a']");
        assert_eq!(pretty(&value, 1), "[1, 2, 'a']");
    }

    #[test]
    fn test_keyed_array() {
        let value = Value::map([
            (ArrayKey::from("name"), Value::from("x")),
            (ArrayKey::from(7i64), Value::Bool(true)),
        ]);
        assert_eq!(compact(&value), "['name' => 'x', 7 => true]");
        assert_eq!(pretty(&value, 1), "[\n        'name' => 'x',\n        7 => true\n    ]");
    }

    #[test]
    fn test_gapped_keys_are_keyed() {
        let value = Value::map([(1i64, Value::Int(10)), (2i64, Value::Int(20))]);
        assert_eq!(compact(&value), "[1 => 10, 2 => 20]");
    }

    #[test]
    fn test_nested_list_pretty() {
        let value = Value::list([Value::list([Value::Int(1)]), Value::Int(2)]);
        assert_eq!(compact(&value), "[[1], 2]");
        assert_eq!(pretty(&value, 0), "[\n    [1],\n    2\n]");
    }

    #[test]
    fn test_opaque_marker() {
        assert_eq!(compact(&Value::opaque("resource")), UNKNOWN_VALUE_MARKER);
        let value = Value::list([Value::opaque("Closure")]);
        assert_eq!(compact(&value), format!("[{}]", UNKNOWN_VALUE_MARKER));
    }

    #[test]
    fn test_custom_indent_unit() {
        let unit = Indent::TAB;
        let value = Value::map([("k", Value::Int(1))]);
        assert_eq!(
            ValueEncoder::new(true, &unit).encode(&value, 1),
            "[\n\t\t'k' => 1\n\t]"
        );
    }
}
