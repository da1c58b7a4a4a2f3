//! Pancake Judge
//!
//! Runs the pancake flipper over a Code Jam style input: a case count
//! followed by that many cases, one result line per case.
//!
//! # Example
//!
//! ```rust
//! use pancake_judge::{Config, Judge};
//!
//! let mut out = Vec::new();
//! let summary = Judge::new(Config::default())
//!     .run("2\n--- 1\n-+ 2\n", &mut out)
//!     .unwrap();
//! assert_eq!(summary.cases, 2);
//! assert_eq!(String::from_utf8(out).unwrap(), "Case #1: 3\nCase #2: IMPOSSIBLE\n");
//! ```

pub mod config;

pub use config::Config;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use pancake::{CaseError, CaseReader, Outcome, ReadError, SolveError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a judge run.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("case #{case}: {source}")]
    Solve { case: u64, source: SolveError },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for judge operations.
pub type JudgeResult<T> = Result<T, JudgeError>;

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of cases solved.
    pub cases: u64,
    /// How many of them were impossible.
    pub impossible: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Reads cases, solves them and writes one line per case.
#[derive(Debug, Clone, Default)]
pub struct Judge {
    config: Config,
}

impl Judge {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Processes all cases in `source`, writing results to `out`.
    ///
    /// Lines for cases solved before an error are still flushed to `out`.
    pub fn run<W: Write>(&self, source: &str, mut out: W) -> JudgeResult<RunSummary> {
        let start = Instant::now();
        let mut reader = CaseReader::new(source).with_encoding(self.config.encoding);

        let result = self.solve_all(&mut reader, &mut out);
        out.flush()?;
        let mut summary = result?;

        if reader.has_trailing_input() {
            warn!("Ignoring input after case #{}", summary.cases);
        }

        summary.elapsed = start.elapsed();
        info!("Done in {} milliseconds", summary.elapsed.as_millis());
        Ok(summary)
    }

    fn solve_all<W: Write>(&self, reader: &mut CaseReader<'_>, out: &mut W) -> JudgeResult<RunSummary> {
        let count = reader.read_case_count()?;
        debug!(count, "read case count");

        let mut summary = RunSummary::default();
        for case in 1..=count {
            debug!("Solving case {}", case);
            let outcome = pancake::solve_next(reader).map_err(|err| match err {
                CaseError::Read(err) => JudgeError::Read(err),
                CaseError::Solve(source) => JudgeError::Solve { case, source },
            })?;

            let line = self.config.format_line(case, &outcome.to_string());
            writeln!(out, "{line}")?;
            if self.config.echo {
                info!("{line}");
            }

            summary.cases += 1;
            if outcome == Outcome::Impossible {
                summary.impossible += 1;
            }
        }
        Ok(summary)
    }
}
