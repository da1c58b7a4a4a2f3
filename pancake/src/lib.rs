//! Pancake Flipper
//!
//! Minimum number of fixed-width flips that turn a row of pancakes
//! face-up, solved with a single greedy left-to-right scan.
//!
//! # Example
//!
//! ```
//! use pancake::{CaseReader, Outcome};
//!
//! let mut reader = CaseReader::new("---+-++- 3");
//! let case = reader.read_case().unwrap();
//! assert_eq!(case.solve().unwrap(), Outcome::Flips(3));
//! ```

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod reader;
pub mod solver;

pub use error::{CaseError, ReadError, SolveError};
pub use lexer::{Lexer, Token};
pub use reader::{Case, CaseReader, Encoding};
pub use solver::{flip, solve, Outcome, Solver};

/// Reads the next case from `reader` and solves it.
pub fn solve_next(reader: &mut CaseReader<'_>) -> Result<Outcome, CaseError> {
    let case = reader.read_case()?;
    Ok(case.solve()?)
}
