use logos::Logos;

use crate::error::ParseError;
use crate::line_index::LineIndex;
use crate::token::Token;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A token paired with its source span and text.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: ByteSpan,
    pub text: String,
}

/// Tokenizes schema source text into a sequence of spanned tokens.
///
/// # Errors
///
/// Returns `ParseError::InvalidToken` at the first byte sequence the
/// lexer cannot match to a token rule.
pub fn tokenize(source: &str, index: &LineIndex) -> Result<Vec<SpannedToken>, ParseError> {
    let mut tokens = Vec::new();

    let lexer = Token::lexer(source);
    for (result, range) in lexer.spanned() {
        match result {
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    span: ByteSpan::new(range.start, range.end),
                    text: source[range].to_string(),
                });
            }
            Err(()) => {
                return Err(ParseError::InvalidToken {
                    pos: index.pos_at(range.start),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Result<Vec<SpannedToken>, ParseError> {
        tokenize(source, &LineIndex::new(source))
    }

    #[test]
    fn tokenize_object() {
        let tokens = lex(r#"{"a": 1}"#).unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].token, Token::LBrace);
        assert_eq!(tokens[1].token, Token::StringLiteral);
        assert_eq!(tokens[1].text, r#""a""#);
        assert_eq!(tokens[3].token, Token::NumberLiteral);
        assert_eq!(tokens[3].text, "1");
    }

    #[test]
    fn tokenize_preserves_spans() {
        let tokens = lex(r#"{"a": 1}"#).unwrap();
        assert_eq!(tokens[0].span, ByteSpan::new(0, 1));
        assert_eq!(tokens[1].span, ByteSpan::new(1, 4));
        assert_eq!(tokens[3].span, ByteSpan::new(6, 7));
    }

    #[test]
    fn tokenize_invalid_character() {
        let err = lex("{#}").unwrap_err();
        match err {
            ParseError::InvalidToken { pos } => {
                assert_eq!(pos.line, 1);
                assert_eq!(pos.column, 2);
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_reports_first_error_position_across_lines() {
        let err = lex("{\n  @\n}").unwrap_err();
        match err {
            ParseError::InvalidToken { pos } => {
                assert_eq!(pos.line, 2);
                assert_eq!(pos.column, 3);
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(lex("").unwrap().is_empty());
    }

    #[test]
    fn tokenize_whitespace_only() {
        assert!(lex("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn tokenize_comments_only() {
        assert!(lex("// nothing here\n/* at all */").unwrap().is_empty());
    }
}
