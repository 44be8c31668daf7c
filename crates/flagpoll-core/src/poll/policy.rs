use super::classify::Disposition;
use crate::config::PollConfig;
use std::time::Duration;

/// Why a poll run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The probe reported a fatal error.
    Failed,
    /// The probe reported success.
    Succeeded,
    /// Every attempt continued and `max_attempts` was reached.
    Exhausted,
}

/// Decision returned by the poll policy after each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// Stop polling now.
    Stop(Termination),
    /// Poll again after the given delay.
    RetryAfter(Duration),
}

/// Fixed-interval policy with an attempt cap.
///
/// The delay is the same between every pair of attempts. There is no
/// backoff and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy::from(&PollConfig::default())
    }
}

impl PollPolicy {
    /// `max_attempts` of 0 is treated as 1: at least one probe call is always made.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Maximum number of probe calls (including the first).
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Decide what happens after `attempt` (1-based) was classified as `disposition`.
    ///
    /// Only a continuing attempt that is not the last one waits; stopping
    /// attempts and the final attempt never schedule a delay.
    pub fn decide(&self, attempt: u32, disposition: Disposition) -> PollDecision {
        match disposition {
            Disposition::Error => PollDecision::Stop(Termination::Failed),
            Disposition::Success => PollDecision::Stop(Termination::Succeeded),
            Disposition::Continue if attempt >= self.max_attempts => {
                PollDecision::Stop(Termination::Exhausted)
            }
            Disposition::Continue => PollDecision::RetryAfter(self.interval),
        }
    }
}

impl From<&PollConfig> for PollPolicy {
    fn from(cfg: &PollConfig) -> Self {
        PollPolicy::new(Duration::from_millis(cfg.interval_ms), cfg.max_attempts)
    }
}
