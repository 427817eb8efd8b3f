use std::fmt;

use avrodraft_core::types::SourcePos;

/// Errors that occur while parsing or validating schema source text.
///
/// Every variant that can be tied to a point in the source carries a
/// `SourcePos`; `Display` embeds it as `line:column` so the rendered
/// message alone is enough to jump to the failure.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The lexer encountered bytes that match no token rule.
    InvalidToken { pos: SourcePos },

    /// The parser encountered a token it did not expect.
    UnexpectedToken {
        expected: String,
        found: String,
        pos: SourcePos,
    },

    /// Input ended while more tokens were expected. The position is the
    /// end of the source text.
    UnexpectedEndOfInput { expected: String, pos: SourcePos },

    /// An object repeated a member key.
    DuplicateKey { key: String, pos: SourcePos },

    /// A number literal could not be represented.
    InvalidNumber { text: String, pos: SourcePos },

    /// A string literal contained an invalid escape sequence.
    InvalidEscape { text: String, pos: SourcePos },

    /// Well-formed tokens remained after the end of the document.
    TrailingInput { found: String, pos: SourcePos },

    /// Containers nested past the parser's depth limit.
    NestingTooDeep { pos: SourcePos },

    /// The document is valid JSON but not a valid Avro schema. The
    /// position is absent when the failure is not attributable to one
    /// node.
    InvalidSchema {
        message: String,
        pos: Option<SourcePos>,
    },
}

impl ParseError {
    /// The source position of the failure, when it is localizable.
    pub fn position(&self) -> Option<SourcePos> {
        match self {
            Self::InvalidToken { pos }
            | Self::UnexpectedToken { pos, .. }
            | Self::UnexpectedEndOfInput { pos, .. }
            | Self::DuplicateKey { pos, .. }
            | Self::InvalidNumber { pos, .. }
            | Self::InvalidEscape { pos, .. }
            | Self::TrailingInput { pos, .. }
            | Self::NestingTooDeep { pos } => Some(*pos),
            Self::InvalidSchema { pos, .. } => *pos,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { pos } => {
                write!(f, "invalid token at {pos}")
            }
            Self::UnexpectedToken {
                expected,
                found,
                pos,
            } => {
                write!(
                    f,
                    "unexpected token at {pos}: expected {expected}, found {found}"
                )
            }
            Self::UnexpectedEndOfInput { expected, pos } => {
                write!(f, "unexpected end of input at {pos}: expected {expected}")
            }
            Self::DuplicateKey { key, pos } => {
                write!(f, "duplicate object key \"{key}\" at {pos}")
            }
            Self::InvalidNumber { text, pos } => {
                write!(f, "invalid number literal '{text}' at {pos}")
            }
            Self::InvalidEscape { text, pos } => {
                write!(f, "invalid string escape in {text} at {pos}")
            }
            Self::TrailingInput { found, pos } => {
                write!(
                    f,
                    "unexpected {found} at {pos}: expected end of input after the document"
                )
            }
            Self::NestingTooDeep { pos } => {
                write!(f, "document nesting is too deep at {pos}")
            }
            Self::InvalidSchema { message, pos } => match pos {
                Some(pos) => write!(f, "invalid schema at {pos}: {message}"),
                None => write!(f, "invalid schema: {message}"),
            },
        }
    }
}

impl std::error::Error for ParseError {}
