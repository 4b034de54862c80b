//! Tag expression parser.
//!
//! Converts the textual tag DSL into [`TagExpr`] trees. Tokens are
//! whitespace-delimited; `&&`, `||`, and `!` are operators and any other
//! token is an opaque tag literal (by convention tags start with `@`, but
//! nothing enforces that). Precedence, lowest to highest: OR < AND < NOT <
//! TAG, with AND/OR left-associative and NOT right-associative. There is no
//! grouping syntax.
//!
//! This parser is purely syntactic: it never interprets tag values.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::ast::{and, not, or, tag, TagExpr};
use crate::errors::{self, SiftError, SourceContext};

// ============================================================================
// TOKENS
// ============================================================================

/// Byte range of a token in the original expression text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    And,
    Or,
    Not,
    Tag(String),
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::And => "operator `&&`".into(),
            TokenKind::Or => "operator `||`".into(),
            TokenKind::Not => "operator `!`".into(),
            TokenKind::Tag(value) => format!("tag `{}`", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    span: Span,
}

type TokenStream = Peekable<IntoIter<Token>>;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a tag expression from its textual DSL form.
///
/// Fails on empty input, on an operator where a tag is required, and on
/// unconsumed tokens after the top-level expression. Failure is terminal:
/// there is no recovery or defaulting.
pub fn parse(input: &str) -> Result<TagExpr, SiftError> {
    let source = SourceContext::from_expression(input);

    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(errors::empty_expression(&source));
    }

    let mut stream = tokens.into_iter().peekable();
    let expr = parse_or(&mut stream, &source)?;

    if let Some(extra) = stream.next() {
        return Err(errors::trailing_tokens(
            &source,
            &extra.kind.describe(),
            extra.span,
        ));
    }
    Ok(expr)
}

// ============================================================================
// TOKENIZER
// ============================================================================

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (offset, word) in split_words(input) {
        let span = Span {
            start: offset,
            end: offset + word.len(),
        };
        match word {
            "&&" => tokens.push(Token {
                kind: TokenKind::And,
                span,
            }),
            "||" => tokens.push(Token {
                kind: TokenKind::Or,
                span,
            }),
            "!" => tokens.push(Token {
                kind: TokenKind::Not,
                span,
            }),
            _ => match word.strip_prefix('!') {
                // `!@tag` shorthand: one negation, the remainder is the tag
                // verbatim (a second `!` stays part of the tag text).
                Some(rest) => {
                    tokens.push(Token {
                        kind: TokenKind::Not,
                        span: Span {
                            start: offset,
                            end: offset + 1,
                        },
                    });
                    tokens.push(Token {
                        kind: TokenKind::Tag(rest.to_string()),
                        span: Span {
                            start: offset + 1,
                            end: offset + word.len(),
                        },
                    });
                }
                None => tokens.push(Token {
                    kind: TokenKind::Tag(word.to_string()),
                    span,
                }),
            },
        }
    }
    tokens
}

/// Splits the input on runs of whitespace, keeping each word's byte offset.
fn split_words(input: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &input[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, &input[s..]));
    }
    words
}

// ============================================================================
// RECURSIVE DESCENT
// ============================================================================

fn parse_or(stream: &mut TokenStream, source: &SourceContext) -> Result<TagExpr, SiftError> {
    let mut left = parse_and(stream, source)?;
    while next_is(stream, &TokenKind::Or) {
        stream.next();
        let right = parse_and(stream, source)?;
        left = or(left, right);
    }
    Ok(left)
}

fn parse_and(stream: &mut TokenStream, source: &SourceContext) -> Result<TagExpr, SiftError> {
    let mut left = parse_not(stream, source)?;
    while next_is(stream, &TokenKind::And) {
        stream.next();
        let right = parse_not(stream, source)?;
        left = and(left, right);
    }
    Ok(left)
}

fn parse_not(stream: &mut TokenStream, source: &SourceContext) -> Result<TagExpr, SiftError> {
    if next_is(stream, &TokenKind::Not) {
        stream.next();
        let child = parse_not(stream, source)?;
        return Ok(not(child));
    }
    parse_tag(stream, source)
}

fn parse_tag(stream: &mut TokenStream, source: &SourceContext) -> Result<TagExpr, SiftError> {
    match stream.next() {
        Some(Token {
            kind: TokenKind::Tag(value),
            ..
        }) => Ok(tag(value)),
        Some(token) => Err(errors::expected_tag(
            source,
            &token.kind.describe(),
            token.span,
        )),
        None => {
            let end = source.content.len();
            Err(errors::expected_tag(
                source,
                "end of expression",
                Span { start: end, end },
            ))
        }
    }
}

fn next_is(stream: &mut TokenStream, kind: &TokenKind) -> bool {
    stream.peek().map_or(false, |token| token.kind == *kind)
}
