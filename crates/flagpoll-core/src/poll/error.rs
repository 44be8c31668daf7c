//! Errors surfaced by a poll run.

/// Error returned when a poll run does not produce an outcome.
///
/// Both variants carry the number of probe calls actually made.
#[derive(Debug, thiserror::Error)]
pub enum PollError<E> {
    /// The probe reported a fatal error. The error is passed through untouched.
    #[error("probe failed on attempt {attempts_made}: {error}")]
    Probe { error: E, attempts_made: u32 },
    /// All attempts continued and none of them carried a payload.
    #[error("max retries of {max_attempts} reached")]
    Exhausted { max_attempts: u32, attempts_made: u32 },
}

impl<E> PollError<E> {
    /// Number of probe calls made before the run stopped.
    pub fn attempts_made(&self) -> u32 {
        match self {
            PollError::Probe { attempts_made, .. } | PollError::Exhausted { attempts_made, .. } => {
                *attempts_made
            }
        }
    }

    /// The probe's own error, if that is what stopped the run.
    pub fn into_probe_error(self) -> Option<E> {
        match self {
            PollError::Probe { error, .. } => Some(error),
            PollError::Exhausted { .. } => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, PollError::Exhausted { .. })
    }
}
