use std::path::PathBuf;

use avrodraft_core::error::PathError;
use avrodraft_editor::QueryError;
use avrodraft_parse::ParseError;

/// Exit codes for the CLI process.
///
/// Each variant maps to a numeric exit code following standard conventions:
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments / usage error
/// - 3: parse error (schema validation failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The schema document failed to parse or validate.
    #[error("parse error in {file}: {source}")]
    Parse { source: ParseError, file: PathBuf },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A node path argument that is not valid JSON Pointer syntax.
    #[error("invalid node path: {0}")]
    Path(#[from] PathError),

    /// Position or path queries that found nothing.
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Schema file or directory not found.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// One or more files are not canonically formatted (format --check).
    #[error("{count} file(s) are not canonically formatted")]
    NotCanonical { count: usize },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Path(_) | Self::NoSchemaFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Query(_) | Self::NotCanonical { .. } | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { source, file } => {
                let position = source
                    .position()
                    .map(|pos| serde_json::json!({ "line": pos.line, "column": pos.column }));
                serde_json::json!({
                    "error": "parse_error",
                    "file": file.display().to_string(),
                    "message": source.to_string(),
                    "position": position,
                })
            }
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Query(e) => serde_json::json!({
                "error": "query_error",
                "message": e.to_string(),
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> CliError {
        CliError::Parse {
            source: avrodraft_parse::parse("{").unwrap_err(),
            file: PathBuf::from("contact.avsc"),
        }
    }

    #[test]
    fn parse_error_exit_code() {
        assert_eq!(parse_error().exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn path_error_exit_code() {
        let err = CliError::Path("fields".parse::<avrodraft_core::types::NodePath>().unwrap_err());
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn no_schema_files_exit_code() {
        let err = CliError::NoSchemaFiles {
            path: PathBuf::from("schemas/"),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn query_error_exit_code() {
        let err = CliError::Query(QueryError::NoParsedValue);
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn display_parse_error_names_the_file() {
        assert!(parse_error().to_string().contains("contact.avsc"));
    }

    #[test]
    fn to_json_parse_error() {
        let json = parse_error().to_json();
        assert_eq!(json["error"], "parse_error");
        assert_eq!(json["file"], "contact.avsc");
        assert!(json["position"]["line"].is_number());
    }

    #[test]
    fn to_json_io_error() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "io_error");
        assert_eq!(json["path"], "/tmp/file");
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::ParseError as i32, 3);
    }
}
