//! Error types for reading and solving cases.

use std::ops::Range;

use thiserror::Error;

/// Errors raised while reading case input.
///
/// Every variant carries the byte span of the offending input so that it
/// can be rendered as a source diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("malformed case input: unexpected character '{found}'")]
    UnexpectedChar { found: char, span: Range<usize> },

    #[error("malformed case input: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: &'static str,
        span: Range<usize>,
    },

    #[error("malformed case input: integer literal does not fit in 64 bits")]
    IntegerOverflow { span: Range<usize> },

    #[error("malformed case input: unrecognized input")]
    Unrecognized { span: Range<usize> },

    #[error("malformed case input: flipper width must be positive, found {width}")]
    InvalidWidth { width: i64, span: Range<usize> },

    #[error("malformed case input: expected case count, found '{found}'")]
    ExpectedCaseCount { found: char, span: Range<usize> },

    #[error("malformed case input: case count must not be negative, found {count}")]
    NegativeCaseCount { count: i64, span: Range<usize> },
}

impl ReadError {
    /// Byte range of the input this error points at.
    pub fn span(&self) -> Range<usize> {
        match self {
            ReadError::UnexpectedChar { span, .. }
            | ReadError::UnexpectedEof { span, .. }
            | ReadError::IntegerOverflow { span }
            | ReadError::Unrecognized { span }
            | ReadError::InvalidWidth { span, .. }
            | ReadError::ExpectedCaseCount { span, .. }
            | ReadError::NegativeCaseCount { span, .. } => span.clone(),
        }
    }

    /// Short label placed under the offending span.
    pub fn label(&self) -> String {
        match self {
            ReadError::UnexpectedChar { .. } => "not a pancake marker".to_string(),
            ReadError::UnexpectedEof { expected, .. } => format!("{expected} expected after this"),
            ReadError::IntegerOverflow { .. } => "integer too large".to_string(),
            ReadError::Unrecognized { .. } => "unrecognized input".to_string(),
            ReadError::InvalidWidth { .. } => "flipper width".to_string(),
            ReadError::ExpectedCaseCount { .. } => "expected an integer".to_string(),
            ReadError::NegativeCaseCount { .. } => "case count".to_string(),
        }
    }
}

/// Errors raised by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("flipper width must be at least 1")]
    ZeroWidth,
}

/// Any failure while processing a single case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
