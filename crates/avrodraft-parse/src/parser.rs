use indexmap::IndexMap;

use avrodraft_core::types::{NodePath, SourceMap, SourceMapEntry, SourceRange, Value};

use crate::error::ParseError;
use crate::lexer::{tokenize, ByteSpan, SpannedToken};
use crate::line_index::LineIndex;
use crate::token::Token;

/// The result of a successful parse: the structured value and the map
/// tying every node of it back to the source text.
///
/// Both halves are produced by one traversal; the map's domain is
/// exactly the set of paths reachable in `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub source_map: SourceMap,
}

/// Parses schema source text into a `Value` plus its `SourceMap`.
///
/// Parsing is pure and total: any input string yields either a `Parsed`
/// or a `ParseError`, never a panic or a hang.
///
/// # Errors
///
/// Returns the first lexical or structural error encountered, with its
/// source position.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    let index = LineIndex::new(source);
    let tokens = tokenize(source, &index)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        index: &index,
        map: SourceMap::new(),
        depth: 0,
    };

    let value = parser.parse_value(NodePath::root(), None)?;
    if let Some(st) = parser.peek() {
        return Err(ParseError::TrailingInput {
            found: format!("{} ('{}')", st.token.description(), st.text),
            pos: index.pos_at(st.span.start),
        });
    }

    Ok(Parsed {
        value,
        source_map: parser.map,
    })
}

/// Containers deeper than this are rejected so pathological input
/// cannot exhaust the call stack.
const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent parser over the token list.
///
/// Builds the value and the source map in one pass: each node records
/// its own value span, and object members additionally record the span
/// of the key that introduced them.
struct Parser<'a> {
    tokens: Vec<SpannedToken>,
    pos: usize,
    index: &'a LineIndex,
    map: SourceMap,
    depth: usize,
}

impl Parser<'_> {
    // -- Cursor helpers --

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|st| &st.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        if self.pos < self.tokens.len() {
            let tok = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(tok)
        } else {
            None
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<SpannedToken, ParseError> {
        match self.advance() {
            Some(st) if st.token == *expected => Ok(st),
            Some(st) => Err(ParseError::UnexpectedToken {
                expected: expected.description().to_string(),
                found: format!("{} ('{}')", st.token.description(), st.text),
                pos: self.index.pos_at(st.span.start),
            }),
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: expected.description().to_string(),
                pos: self.index.end_of_input(),
            }),
        }
    }

    fn range_of(&self, span: ByteSpan) -> SourceRange {
        SourceRange::new(self.index.pos_at(span.start), self.index.pos_at(span.end))
    }

    // -- Grammar productions --

    /// value = object | array | string | number | "true" | "false" | "null"
    ///
    /// `key_range` is the span of the object key that introduced this
    /// node, recorded in the same source-map entry.
    fn parse_value(
        &mut self,
        path: NodePath,
        key_range: Option<SourceRange>,
    ) -> Result<Value, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEndOfInput {
                expected: "a value".to_string(),
                pos: self.index.end_of_input(),
            })?;

        match tok.token {
            Token::LBrace => {
                self.descend(&tok)?;
                let value = self.parse_object(path, key_range, &tok)?;
                self.depth -= 1;
                Ok(value)
            }
            Token::LBracket => {
                self.descend(&tok)?;
                let value = self.parse_array(path, key_range, &tok)?;
                self.depth -= 1;
                Ok(value)
            }
            Token::StringLiteral => {
                let s = unquote_string(&tok.text, self.index.pos_at(tok.span.start))?;
                self.record(path, key_range, self.range_of(tok.span));
                Ok(Value::String(s))
            }
            Token::NumberLiteral => {
                let value = parse_number(&tok.text, self.index.pos_at(tok.span.start))?;
                self.record(path, key_range, self.range_of(tok.span));
                Ok(value)
            }
            Token::True => {
                self.record(path, key_range, self.range_of(tok.span));
                Ok(Value::Boolean(true))
            }
            Token::False => {
                self.record(path, key_range, self.range_of(tok.span));
                Ok(Value::Boolean(false))
            }
            Token::Null => {
                self.record(path, key_range, self.range_of(tok.span));
                Ok(Value::Null)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: "a value".to_string(),
                found: format!("{} ('{}')", tok.token.description(), tok.text),
                pos: self.index.pos_at(tok.span.start),
            }),
        }
    }

    /// object = "{" (member ("," member)*)? "}", member = string ":" value
    fn parse_object(
        &mut self,
        path: NodePath,
        key_range: Option<SourceRange>,
        lbrace: &SpannedToken,
    ) -> Result<Value, ParseError> {
        let mut members: IndexMap<String, Value> = IndexMap::new();

        let rbrace = if self.peek_token() == Some(&Token::RBrace) {
            self.advance().expect("peeked")
        } else {
            loop {
                let key_tok = self.expect(&Token::StringLiteral)?;
                let key = unquote_string(&key_tok.text, self.index.pos_at(key_tok.span.start))?;
                if members.contains_key(&key) {
                    return Err(ParseError::DuplicateKey {
                        key,
                        pos: self.index.pos_at(key_tok.span.start),
                    });
                }

                self.expect(&Token::Colon)?;

                let child_path = path.child_key(key.clone());
                let child = self.parse_value(child_path, Some(self.range_of(key_tok.span)))?;
                members.insert(key, child);

                match self.peek_token() {
                    Some(Token::Comma) => {
                        self.advance();
                    }
                    Some(Token::RBrace) => break self.advance().expect("peeked"),
                    Some(_) => {
                        let st = self.advance().expect("peeked");
                        return Err(ParseError::UnexpectedToken {
                            expected: "',' or '}'".to_string(),
                            found: format!("{} ('{}')", st.token.description(), st.text),
                            pos: self.index.pos_at(st.span.start),
                        });
                    }
                    None => {
                        return Err(ParseError::UnexpectedEndOfInput {
                            expected: "',' or '}'".to_string(),
                            pos: self.index.end_of_input(),
                        });
                    }
                }
            }
        };

        let value_range = SourceRange::new(
            self.index.pos_at(lbrace.span.start),
            self.index.pos_at(rbrace.span.end),
        );
        self.record(path, key_range, value_range);
        Ok(Value::Object(members))
    }

    /// array = "[" (value ("," value)*)? "]"
    fn parse_array(
        &mut self,
        path: NodePath,
        key_range: Option<SourceRange>,
        lbracket: &SpannedToken,
    ) -> Result<Value, ParseError> {
        let mut items = Vec::new();

        let rbracket = if self.peek_token() == Some(&Token::RBracket) {
            self.advance().expect("peeked")
        } else {
            loop {
                let child_path = path.child_index(items.len());
                items.push(self.parse_value(child_path, None)?);

                match self.peek_token() {
                    Some(Token::Comma) => {
                        self.advance();
                    }
                    Some(Token::RBracket) => break self.advance().expect("peeked"),
                    Some(_) => {
                        let st = self.advance().expect("peeked");
                        return Err(ParseError::UnexpectedToken {
                            expected: "',' or ']'".to_string(),
                            found: format!("{} ('{}')", st.token.description(), st.text),
                            pos: self.index.pos_at(st.span.start),
                        });
                    }
                    None => {
                        return Err(ParseError::UnexpectedEndOfInput {
                            expected: "',' or ']'".to_string(),
                            pos: self.index.end_of_input(),
                        });
                    }
                }
            }
        };

        let value_range = SourceRange::new(
            self.index.pos_at(lbracket.span.start),
            self.index.pos_at(rbracket.span.end),
        );
        self.record(path, key_range, value_range);
        Ok(Value::Array(items))
    }

    fn descend(&mut self, opener: &SpannedToken) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                pos: self.index.pos_at(opener.span.start),
            });
        }
        Ok(())
    }

    fn record(&mut self, path: NodePath, key_range: Option<SourceRange>, value_range: SourceRange) {
        self.map
            .insert(path, SourceMapEntry::new(key_range, value_range));
    }
}

/// Remove surrounding quotes and resolve escape sequences.
fn unquote_string(text: &str, pos: avrodraft_core::types::SourcePos) -> Result<String, ParseError> {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let unit = read_hex4(&mut chars, text, pos)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: a low surrogate escape must follow.
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(invalid_escape(text, pos));
                    }
                    let low = read_hex4(&mut chars, text, pos)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(invalid_escape(text, pos));
                    }
                    let code =
                        0x10000 + ((unit - 0xD800) as u32) * 0x400 + (low - 0xDC00) as u32;
                    match char::from_u32(code) {
                        Some(c) => out.push(c),
                        None => return Err(invalid_escape(text, pos)),
                    }
                } else {
                    match char::from_u32(unit as u32) {
                        Some(c) => out.push(c),
                        None => return Err(invalid_escape(text, pos)),
                    }
                }
            }
            _ => return Err(invalid_escape(text, pos)),
        }
    }

    Ok(out)
}

fn read_hex4(
    chars: &mut std::str::Chars<'_>,
    text: &str,
    pos: avrodraft_core::types::SourcePos,
) -> Result<u16, ParseError> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| invalid_escape(text, pos))?;
        unit = unit * 16 + digit as u16;
    }
    Ok(unit)
}

fn invalid_escape(text: &str, pos: avrodraft_core::types::SourcePos) -> ParseError {
    ParseError::InvalidEscape {
        text: text.to_string(),
        pos,
    }
}

/// Parse a number literal: integral texts become `Integer`, everything
/// else (including integers too large for i64) becomes `Float`.
fn parse_number(text: &str, pos: avrodraft_core::types::SourcePos) -> Result<Value, ParseError> {
    let looks_float = text.contains(['.', 'e', 'E']);
    if !looks_float {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Integer(n));
        }
    }
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(Value::Float(x)),
        _ => Err(ParseError::InvalidNumber {
            text: text.to_string(),
            pos,
        }),
    }
}
