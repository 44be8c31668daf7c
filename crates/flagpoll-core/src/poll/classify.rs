//! Classify a probe report into the disposition that drives the poll loop.

use super::report::Report;
use std::fmt;

/// What the driver should make of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Keep polling (or stop as exhausted on the last attempt).
    Continue,
    /// Stop and propagate the probe's error.
    Error,
    /// Stop and report success.
    Success,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Disposition::Continue => "continue",
            Disposition::Error => "error",
            Disposition::Success => "success",
        };
        f.write_str(s)
    }
}

/// Classify a report. Payload presence never affects the result.
pub fn classify<S, P, E>(report: &Report<S, P, E>) -> Disposition {
    match report {
        Report::Continue(_) => Disposition::Continue,
        Report::Fail(_) => Disposition::Error,
        Report::Succeed { .. } => Disposition::Success,
    }
}
