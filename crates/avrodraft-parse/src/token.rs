use logos::Logos;

/// Tokens produced by the schema source lexer.
///
/// The source syntax is JSON; whitespace is skipped automatically, and so
/// are `//` and `/* */` comments as an editing tolerance (the printer
/// never emits them).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token {
    // -- Keywords --
    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    // -- Punctuation --
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    // -- Literals --
    /// A double-quoted string literal, e.g. `"record"`.
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    /// A JSON number literal, e.g. `42`, `-1.5`, or `2e10`.
    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    NumberLiteral,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Null => "'null'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::StringLiteral => "string literal",
            Self::NumberLiteral => "number literal",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Token::lexer(input).map(|r| r.expect("lex error")).collect()
    }

    #[test]
    fn punctuation() {
        let tokens = lex("{ } [ ] : ,");
        assert_eq!(
            tokens,
            vec![
                Token::LBrace,
                Token::RBrace,
                Token::LBracket,
                Token::RBracket,
                Token::Colon,
                Token::Comma,
            ]
        );
    }

    #[test]
    fn keywords() {
        let tokens = lex("true false null");
        assert_eq!(tokens, vec![Token::True, Token::False, Token::Null]);
    }

    #[test]
    fn string_literal() {
        let tokens = lex(r#""record" "with \"escapes\"" """#);
        assert_eq!(tokens.len(), 3);
        for t in &tokens {
            assert_eq!(*t, Token::StringLiteral);
        }
    }

    #[test]
    fn number_literals() {
        let tokens = lex("0 42 -10 3.14 -0.5 2e10 1.5E-3");
        assert_eq!(tokens.len(), 7);
        for t in &tokens {
            assert_eq!(*t, Token::NumberLiteral);
        }
    }

    #[test]
    fn leading_zero_is_not_one_number() {
        // JSON forbids leading zeros; "01" lexes as two numbers and the
        // parser rejects the second as trailing input.
        let tokens = lex("01");
        assert_eq!(tokens, vec![Token::NumberLiteral, Token::NumberLiteral]);
    }

    #[test]
    fn line_comments_skipped() {
        let tokens = lex("{ // a comment\n}");
        assert_eq!(tokens, vec![Token::LBrace, Token::RBrace]);
    }

    #[test]
    fn block_comments_skipped() {
        let tokens = lex("[ /* multi\nline */ ]");
        assert_eq!(tokens, vec![Token::LBracket, Token::RBracket]);
    }

    #[test]
    fn schema_document() {
        let tokens = lex(r#"{"type": "record", "fields": []}"#);
        assert_eq!(
            tokens,
            vec![
                Token::LBrace,
                Token::StringLiteral,
                Token::Colon,
                Token::StringLiteral,
                Token::Comma,
                Token::StringLiteral,
                Token::Colon,
                Token::LBracket,
                Token::RBracket,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn description_is_human_readable() {
        assert_eq!(Token::Colon.description(), "':'");
        assert_eq!(Token::StringLiteral.description(), "string literal");
        assert_eq!(Token::NumberLiteral.description(), "number literal");
    }
}
