use avrodraft_core::types::{NodePath, SourceMap, SourcePos, Value};

use crate::error::ParseError;
use crate::parser::{parse, Parsed};

const PRIMITIVE_TYPES: &[&str] = &[
    "null", "boolean", "int", "long", "float", "double", "bytes", "string",
];

/// Parses schema source text and checks the Avro schema rules.
///
/// This is the full pipeline behind the schema editing pane; use
/// [`parse`](crate::parse) alone for generic structured-value text.
///
/// # Errors
///
/// Returns a syntax error from parsing, or an `InvalidSchema` error
/// positioned at the offending node when the document is well-formed
/// JSON but not a valid schema.
pub fn parse_schema(source: &str) -> Result<Parsed, ParseError> {
    let parsed = parse(source)?;
    validate_schema(&parsed.value, &parsed.source_map)?;
    tracing::debug!(nodes = parsed.source_map.len(), "parsed schema document");
    Ok(parsed)
}

/// Validates a parsed value as an Avro schema.
///
/// Accepted shapes: a primitive or named-reference string, a union
/// array, or a type object (`record`, `error`, `enum`, `array`, `map`,
/// `fixed`, or an annotated primitive). Bare identifier strings are
/// accepted as references without resolving them, which keeps documents
/// that mention not-yet-defined names editable.
pub fn validate_schema(value: &Value, map: &SourceMap) -> Result<(), ParseError> {
    validate_node(value, NodePath::root(), map)
}

fn validate_node(value: &Value, path: NodePath, map: &SourceMap) -> Result<(), ParseError> {
    match value {
        Value::String(s) => validate_type_name(s, &path, map),
        Value::Array(branches) => validate_union(branches, &path, map),
        Value::Object(_) => validate_type_object(value, &path, map),
        other => Err(invalid(
            format!("a schema must be a string, object, or array, not {}", other.kind()),
            &path,
            map,
        )),
    }
}

fn validate_type_name(name: &str, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    if PRIMITIVE_TYPES.contains(&name) || is_reference_name(name) {
        Ok(())
    } else {
        Err(invalid(
            format!("\"{name}\" is not a primitive type or a valid type name"),
            path,
            map,
        ))
    }
}

fn validate_union(branches: &[Value], path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    for (i, branch) in branches.iter().enumerate() {
        let branch_path = path.child_index(i);
        if matches!(branch, Value::Array(_)) {
            return Err(invalid(
                "unions may not immediately contain another union".to_string(),
                &branch_path,
                map,
            ));
        }
        validate_node(branch, branch_path, map)?;
    }
    Ok(())
}

fn validate_type_object(value: &Value, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    let type_name = match value.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(invalid(
                format!("\"type\" must be a string, not {}", other.kind()),
                &path.child_key("type"),
                map,
            ));
        }
        None => {
            return Err(invalid(
                "a type object requires a \"type\" attribute".to_string(),
                path,
                map,
            ));
        }
    };

    match type_name {
        "record" | "error" => validate_record(value, path, map),
        "enum" => validate_enum(value, path, map),
        "array" => validate_schema_attribute(value, "items", path, map),
        "map" => validate_schema_attribute(value, "values", path, map),
        "fixed" => validate_fixed(value, path, map),
        name => {
            // Annotated primitive (e.g. a logical type on "long") or a
            // named reference carried in object form.
            validate_type_name(name, &path.child_key("type"), map)
        }
    }
}

fn validate_record(value: &Value, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    validate_name_attribute(value, path, map)?;

    let fields_path = path.child_key("fields");
    let fields = match value.get("fields") {
        Some(Value::Array(fields)) => fields,
        Some(other) => {
            return Err(invalid(
                format!("\"fields\" must be an array, not {}", other.kind()),
                &fields_path,
                map,
            ));
        }
        None => {
            return Err(invalid(
                "a record requires a \"fields\" array".to_string(),
                path,
                map,
            ));
        }
    };

    let mut seen = std::collections::HashSet::new();
    for (i, field) in fields.iter().enumerate() {
        let field_path = fields_path.child_index(i);
        if !matches!(field, Value::Object(_)) {
            return Err(invalid(
                format!("a record field must be an object, not {}", field.kind()),
                &field_path,
                map,
            ));
        }

        let name = match field.get("name") {
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(invalid(
                    format!("a field \"name\" must be a string, not {}", other.kind()),
                    &field_path.child_key("name"),
                    map,
                ));
            }
            None => {
                return Err(invalid(
                    "a record field requires a \"name\"".to_string(),
                    &field_path,
                    map,
                ));
            }
        };
        if !seen.insert(name.to_string()) {
            return Err(invalid(
                format!("duplicate field name \"{name}\""),
                &field_path.child_key("name"),
                map,
            ));
        }

        match field.get("type") {
            Some(schema) => validate_node(schema, field_path.child_key("type"), map)?,
            None => {
                return Err(invalid(
                    format!("field \"{name}\" requires a \"type\""),
                    &field_path,
                    map,
                ));
            }
        }
    }

    Ok(())
}

fn validate_enum(value: &Value, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    validate_name_attribute(value, path, map)?;

    let symbols_path = path.child_key("symbols");
    let symbols = match value.get("symbols") {
        Some(Value::Array(symbols)) => symbols,
        Some(other) => {
            return Err(invalid(
                format!("\"symbols\" must be an array, not {}", other.kind()),
                &symbols_path,
                map,
            ));
        }
        None => {
            return Err(invalid(
                "an enum requires a \"symbols\" array".to_string(),
                path,
                map,
            ));
        }
    };

    let mut seen = std::collections::HashSet::new();
    for (i, symbol) in symbols.iter().enumerate() {
        let symbol_path = symbols_path.child_index(i);
        match symbol {
            Value::String(s) if is_identifier(s) => {
                if !seen.insert(s.clone()) {
                    return Err(invalid(
                        format!("duplicate enum symbol \"{s}\""),
                        &symbol_path,
                        map,
                    ));
                }
            }
            Value::String(s) => {
                return Err(invalid(
                    format!("\"{s}\" is not a valid enum symbol"),
                    &symbol_path,
                    map,
                ));
            }
            other => {
                return Err(invalid(
                    format!("an enum symbol must be a string, not {}", other.kind()),
                    &symbol_path,
                    map,
                ));
            }
        }
    }

    Ok(())
}

fn validate_fixed(value: &Value, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    validate_name_attribute(value, path, map)?;
    match value.get("size") {
        Some(Value::Integer(n)) if *n >= 0 => Ok(()),
        Some(other) => Err(invalid(
            format!("\"size\" must be a non-negative integer, found {other}"),
            &path.child_key("size"),
            map,
        )),
        None => Err(invalid(
            "a fixed type requires a \"size\"".to_string(),
            path,
            map,
        )),
    }
}

fn validate_schema_attribute(
    value: &Value,
    attribute: &str,
    path: &NodePath,
    map: &SourceMap,
) -> Result<(), ParseError> {
    match value.get(attribute) {
        Some(schema) => validate_node(schema, path.child_key(attribute), map),
        None => Err(invalid(
            format!(
                "an {} type requires a \"{attribute}\" schema",
                if attribute == "items" { "array" } else { "map" }
            ),
            path,
            map,
        )),
    }
}

fn validate_name_attribute(value: &Value, path: &NodePath, map: &SourceMap) -> Result<(), ParseError> {
    match value.get("name") {
        Some(Value::String(s)) if is_identifier(s) => Ok(()),
        Some(Value::String(s)) => Err(invalid(
            format!("\"{s}\" is not a valid name: must match [A-Za-z_][A-Za-z0-9_]*"),
            &path.child_key("name"),
            map,
        )),
        Some(other) => Err(invalid(
            format!("\"name\" must be a string, not {}", other.kind()),
            &path.child_key("name"),
            map,
        )),
        None => Err(invalid(
            "a named type requires a \"name\"".to_string(),
            path,
            map,
        )),
    }
}

/// An unqualified Avro name.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A possibly dot-qualified reference to a named type.
fn is_reference_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

fn invalid(message: String, path: &NodePath, map: &SourceMap) -> ParseError {
    ParseError::InvalidSchema {
        message,
        pos: position_of(path, map),
    }
}

fn position_of(path: &NodePath, map: &SourceMap) -> Option<SourcePos> {
    map.get(path).map(|entry| entry.value_range.start)
}
