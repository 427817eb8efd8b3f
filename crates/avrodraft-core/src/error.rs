use std::fmt;

/// Errors that occur when parsing a JSON Pointer into a `NodePath`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// A non-empty pointer did not start with '/'.
    MissingLeadingSlash(String),
    /// A '~' escape was not followed by '0' or '1'.
    InvalidEscape { segment: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLeadingSlash(p) => {
                write!(f, "invalid pointer '{p}': must be empty or start with '/'")
            }
            Self::InvalidEscape { segment } => {
                write!(
                    f,
                    "invalid escape in pointer segment '{segment}': '~' must be followed by '0' or '1'"
                )
            }
        }
    }
}

impl std::error::Error for PathError {}
