//! Per-run attempt log and the aggregation of a finished run into one outcome.

use super::classify::Disposition;
use super::error::PollError;

/// One probe call and what came of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt<P> {
    /// 1-based attempt number.
    pub number: u32,
    pub disposition: Disposition,
    pub payload: Option<P>,
}

/// How the driver ended the run, with the data the final attempt stopped on.
#[derive(Debug, Clone, PartialEq)]
pub enum End<S, E> {
    Failed(E),
    Succeeded(S),
    Exhausted,
}

/// Successful result of a poll run.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome<S, P> {
    /// Number of probe calls made (never counts waits).
    pub attempts_made: u32,
    /// Status of the stopping attempt; `None` when the run exhausted its attempts.
    pub status: Option<S>,
    pub result: Option<P>,
}

/// Ordered, append-only record of the attempts of one run.
#[derive(Debug)]
pub struct AttemptLog<P> {
    max_attempts: u32,
    attempts: Vec<Attempt<P>>,
}

impl<P> AttemptLog<P> {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            attempts: Vec::with_capacity(max_attempts.min(64) as usize),
        }
    }

    /// Append the next attempt; returns its 1-based number.
    pub fn record(&mut self, disposition: Disposition, payload: Option<P>) -> u32 {
        let number = self.attempts.len() as u32 + 1;
        self.attempts.push(Attempt {
            number,
            disposition,
            payload,
        });
        number
    }

    pub fn len(&self) -> u32 {
        self.attempts.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn attempts(&self) -> &[Attempt<P>] {
        &self.attempts
    }

    /// Turn the log into the run's single outcome.
    ///
    /// - `Failed`: the error, with no result even if a payload came with it.
    /// - `Succeeded`: the last attempt's payload and the given status.
    /// - `Exhausted`: the first payload recorded in attempt order, with no
    ///   status; if no attempt carried one, `PollError::Exhausted`.
    pub fn finish<S, E>(self, end: End<S, E>) -> Result<PollOutcome<S, P>, PollError<E>> {
        let attempts_made = self.len();
        match end {
            End::Failed(error) => Err(PollError::Probe {
                error,
                attempts_made,
            }),
            End::Succeeded(status) => {
                let result = self.attempts.into_iter().last().and_then(|a| a.payload);
                Ok(PollOutcome {
                    attempts_made,
                    status: Some(status),
                    result,
                })
            }
            End::Exhausted => match self.attempts.into_iter().find_map(|a| a.payload) {
                Some(result) => Ok(PollOutcome {
                    attempts_made,
                    status: None,
                    result: Some(result),
                }),
                None => Err(PollError::Exhausted {
                    max_attempts: self.max_attempts,
                    attempts_made,
                }),
            },
        }
    }
}
