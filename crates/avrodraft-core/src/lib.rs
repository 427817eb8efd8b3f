//! # avrodraft-core
//!
//! Data model shared by the avrodraft editor engine.
//!
//! This crate provides:
//! - `Value`, the JSON-like structured tree produced by parsing schema text
//! - `NodePath`, a JSON-Pointer-style address of a node inside a `Value`
//! - `SourcePos` / `SourceRange`, positions and spans in the original text
//! - `SourceMap`, the index from node paths to the text that produced them
//!
//! # Example
//!
//! ```
//! use avrodraft_core::types::{NodePath, Value};
//!
//! let value = Value::Object(
//!     [("name".to_string(), Value::String("Contact".into()))]
//!         .into_iter()
//!         .collect(),
//! );
//!
//! let path: NodePath = "/name".parse().unwrap();
//! assert_eq!(value.at(&path), Some(&Value::String("Contact".into())));
//! ```

pub mod error;
pub mod types;

pub use error::PathError;
pub use types::{NodePath, PathSegment, SourceMap, SourceMapEntry, SourcePos, SourceRange, Value};
