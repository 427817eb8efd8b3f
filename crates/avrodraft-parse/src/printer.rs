use avrodraft_core::types::Value;

/// Print a structured value as canonical schema source text.
///
/// The output uses two-space indentation, keeps object members in
/// insertion order, and ends with a newline. Re-parsing the output
/// reproduces an equivalent value.
pub fn print(value: &Value) -> String {
    let mut out = String::new();
    print_value(value, &mut out, 0);
    out.push('\n');
    out
}

fn print_value(value: &Value, out: &mut String, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(x) => print_float(*x, out),
        Value::String(s) => print_string(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            let indent = "  ".repeat(depth + 1);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                print_value(item, out, depth + 1);
            }
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            let indent = "  ".repeat(depth + 1);
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                print_string(key, out);
                out.push_str(": ");
                print_value(member, out, depth + 1);
            }
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
            out.push('}');
        }
    }
}

fn print_float(x: f64, out: &mut String) {
    if !x.is_finite() {
        // JSON has no non-finite literals; parsed values are always
        // finite, so this only guards structurally built input.
        out.push_str("null");
    } else if x.fract() == 0.0 {
        out.push_str(&format!("{x:.1}"));
    } else {
        out.push_str(&x.to_string());
    }
}

fn print_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
