//! Greedy flip solver.
//!
//! Scans left to right. The leftmost face-down pancake can only be fixed by
//! a flip starting exactly at its position, so the solver flips there and
//! re-examines the same position, which is now face-up. If fewer than
//! `width` pancakes remain from a face-down position, no flip can reach it
//! and the case is impossible.

use std::fmt;

use tracing::{debug, trace};

use crate::error::SolveError;

/// Result of solving a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// All pancakes face-up after this many flips.
    Flips(u64),
    /// No sequence of flips makes every pancake face-up.
    Impossible,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Flips(n) => write!(f, "{n}"),
            Outcome::Impossible => f.write_str("IMPOSSIBLE"),
        }
    }
}

/// Inverts the `width` pancakes starting at `start`.
///
/// Panics if the range runs past the end of `pancakes`.
pub fn flip(pancakes: &mut [bool], start: usize, width: usize) {
    for pancake in &mut pancakes[start..start + width] {
        *pancake = !*pancake;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning { index: usize, flips: u64 },
    Done(Outcome),
}

/// Step-by-step greedy solver over a mutable pancake row.
#[derive(Debug)]
pub struct Solver<'a> {
    pancakes: &'a mut [bool],
    width: usize,
    state: State,
}

impl<'a> Solver<'a> {
    /// Creates a solver positioned at the first pancake.
    pub fn new(pancakes: &'a mut [bool], width: usize) -> Result<Self, SolveError> {
        if width == 0 {
            return Err(SolveError::ZeroWidth);
        }
        Ok(Self {
            pancakes,
            width,
            state: State::Scanning { index: 0, flips: 0 },
        })
    }

    /// Current scan position, or `None` once finished.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            State::Scanning { index, .. } => Some(index),
            State::Done(_) => None,
        }
    }

    /// Flips performed so far.
    pub fn flips(&self) -> Option<u64> {
        match self.state {
            State::Scanning { flips, .. } => Some(flips),
            State::Done(Outcome::Flips(flips)) => Some(flips),
            State::Done(Outcome::Impossible) => None,
        }
    }

    pub fn pancakes(&self) -> &[bool] {
        &self.pancakes[..]
    }

    /// The final outcome, if the scan has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::Done(outcome) => Some(outcome),
            State::Scanning { .. } => None,
        }
    }

    /// Advances the scan by one transition and returns the outcome once
    /// the scan is done. Calling it after completion is a no-op.
    pub fn step(&mut self) -> Option<Outcome> {
        if let State::Scanning { index, flips } = self.state {
            let len = self.pancakes.len();
            self.state = if index >= len {
                State::Done(Outcome::Flips(flips))
            } else if self.pancakes[index] {
                State::Scanning {
                    index: index + 1,
                    flips,
                }
            } else if len - index < self.width {
                trace!(index, width = self.width, "flip would run past the end");
                State::Done(Outcome::Impossible)
            } else {
                flip(self.pancakes, index, self.width);
                trace!(index, flips = flips + 1, "flip");
                State::Scanning {
                    index,
                    flips: flips + 1,
                }
            };
        }
        self.outcome()
    }

    /// Runs the scan to completion.
    pub fn run(mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }
}

/// Minimum number of width-`width` flips that turn every pancake face-up.
///
/// The row is modified in place.
pub fn solve(pancakes: &mut [bool], width: usize) -> Result<Outcome, SolveError> {
    let len = pancakes.len();
    let outcome = Solver::new(pancakes, width)?.run();
    debug!(len, width, %outcome, "solved");
    Ok(outcome)
}
