//! # avrodraft-parse
//!
//! Parser and printer for Avro schema source text.
//!
//! This crate provides:
//! - A lexer that tokenizes JSON-syntax schema source
//! - A recursive descent parser that produces a `Value` together with a
//!   `SourceMap` tying every node back to the text that produced it
//! - A semantic validator for the Avro schema rules
//! - A printer that converts a `Value` back to canonical source text
//! - Round-trip fidelity: `parse(print(value))` reproduces the value
//!
//! # Example
//!
//! ```
//! use avrodraft_parse::{parse_schema, print};
//!
//! let source = r#"{"type": "record", "name": "Contact", "fields": []}"#;
//!
//! let parsed = parse_schema(source).expect("parse failed");
//! let fields = "/fields".parse().unwrap();
//! assert!(parsed.source_map.get(&fields).is_some());
//!
//! let canonical = print(&parsed.value);
//! assert!(canonical.contains("\"type\": \"record\""));
//! ```

pub mod error;
mod lexer;
mod line_index;
pub mod parser;
pub mod printer;
pub mod schema;
pub mod token;

pub use error::ParseError;
pub use parser::{parse, Parsed};
pub use printer::print;
pub use schema::{parse_schema, validate_schema};
