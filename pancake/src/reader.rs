//! Case reader.
//!
//! Turns the token stream into cases. A case is a run of marker characters
//! terminated by an integer literal, the flipper width:
//!
//! ```text
//! ---+-++- 3
//! ```

use std::iter::Peekable;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ReadError, SolveError};
use crate::lexer::{Lexer, Spanned, Token};
use crate::solver::{solve, Outcome};

/// Characters used to encode pancake orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Encoding {
    /// Marker for a face-up pancake.
    pub face_up: char,
    /// Marker for a face-down pancake.
    pub face_down: char,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            face_up: '+',
            face_down: '-',
        }
    }
}

impl Encoding {
    /// The same encoding with the two markers exchanged.
    pub fn swapped(self) -> Self {
        Self {
            face_up: self.face_down,
            face_down: self.face_up,
        }
    }

    fn decode(&self, c: char) -> Option<bool> {
        if c == self.face_up {
            Some(true)
        } else if c == self.face_down {
            Some(false)
        } else {
            None
        }
    }
}

/// One problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Orientation of each pancake, `true` when face-up.
    pub pancakes: Vec<bool>,
    /// Flipper width, always at least 1 when produced by the reader.
    pub width: usize,
}

impl Case {
    /// Solves the case, consuming its pancakes.
    pub fn solve(mut self) -> Result<Outcome, SolveError> {
        solve(&mut self.pancakes, self.width)
    }
}

/// Reads cases one after another from a source string.
pub struct CaseReader<'src> {
    tokens: Peekable<Lexer<'src>>,
    encoding: Encoding,
    /// End offset of the last token consumed.
    last_end: usize,
}

impl<'src> CaseReader<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Lexer::new(source).peekable(),
            encoding: Encoding::default(),
            last_end: 0,
        }
    }

    /// Use a different marker encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    fn next_token(&mut self, expected: &'static str) -> Result<Spanned, ReadError> {
        match self.tokens.next() {
            Some(Ok(spanned)) => {
                self.last_end = spanned.span.end;
                Ok(spanned)
            }
            Some(Err(err)) => Err(err),
            None => Err(ReadError::UnexpectedEof {
                expected,
                span: self.eof_span(),
            }),
        }
    }

    /// Points at the last character read, or nothing for empty input.
    fn eof_span(&self) -> Range<usize> {
        self.last_end.saturating_sub(1)..self.last_end
    }

    /// Reads the leading case count.
    pub fn read_case_count(&mut self) -> Result<u64, ReadError> {
        let Spanned { token, span } = self.next_token("case count")?;
        match token {
            Token::Int(count) => {
                u64::try_from(count).map_err(|_| ReadError::NegativeCaseCount { count, span })
            }
            Token::Char(found) => Err(ReadError::ExpectedCaseCount { found, span }),
        }
    }

    /// Reads one case: marker characters up to the terminating width.
    pub fn read_case(&mut self) -> Result<Case, ReadError> {
        let mut pancakes = Vec::new();
        loop {
            let Spanned { token, span } = self.next_token("flipper width")?;
            match token {
                Token::Char(c) => match self.encoding.decode(c) {
                    Some(face_up) => pancakes.push(face_up),
                    None => return Err(ReadError::UnexpectedChar { found: c, span }),
                },
                Token::Int(width) => {
                    let width = usize::try_from(width)
                        .ok()
                        .filter(|&w| w > 0)
                        .ok_or(ReadError::InvalidWidth { width, span })?;
                    trace!(pancakes = pancakes.len(), width, "read case");
                    return Ok(Case { pancakes, width });
                }
            }
        }
    }

    /// Whether any tokens remain after the cases read so far.
    pub fn has_trailing_input(&mut self) -> bool {
        self.tokens.peek().is_some()
    }
}
