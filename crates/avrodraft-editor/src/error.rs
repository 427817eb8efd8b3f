use std::fmt;

use avrodraft_core::types::NodePath;

/// Errors returned by cross-representation queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum QueryError {
    /// The snapshot has no successfully parsed value to query.
    NoParsedValue,

    /// The requested path is not in the source map.
    PathNotFound { path: NodePath },

    /// No node's range contains the requested position (e.g. the cursor
    /// sits in whitespace outside the document value).
    NoNodeAtPosition { line: u32, column: u32 },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParsedValue => {
                write!(f, "no successfully parsed value to query")
            }
            Self::PathNotFound { path } => {
                write!(f, "path '{path}' not found in the source map")
            }
            Self::NoNodeAtPosition { line, column } => {
                write!(f, "no node at position {line}:{column}")
            }
        }
    }
}

impl std::error::Error for QueryError {}
