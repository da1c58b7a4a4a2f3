//! Token Definitions and Lexer
//!
//! Case input is a flat stream of whitespace-separated tokens. A token is
//! either a single character or an integer literal; which characters are
//! meaningful is decided by the reader, not the lexer.

use std::ops::Range;

use logos::Logos;

use crate::error::ReadError;

/// Lexer-level failure, converted to a [`ReadError`] with its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    Unrecognized,
    IntegerOverflow,
}

/// A single input token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[\x00-\x20\p{White_Space}]+")]
pub enum Token {
    /// A signed integer literal. A `-` directly followed by digits is part
    /// of the literal.
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexError::IntegerOverflow))]
    Int(i64),

    /// Any other character. Control characters, space and Unicode
    /// whitespace are separators.
    #[regex(r"[^\x00-\x20\p{White_Space}0-9]", |lex| lex.slice().chars().next())]
    Char(char),
}

/// A token together with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Iterator over the tokens of a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        Some(match result {
            Ok(token) => Ok(Spanned { token, span }),
            Err(LexError::IntegerOverflow) => Err(ReadError::IntegerOverflow { span }),
            Err(LexError::Unrecognized) => Err(ReadError::Unrecognized { span }),
        })
    }
}
