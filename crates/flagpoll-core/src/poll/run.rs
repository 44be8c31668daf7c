//! Poll loop: call the probe until it succeeds, fails, or attempts run out.

use super::classify::classify;
use super::error::PollError;
use super::log::{AttemptLog, End, PollOutcome};
use super::policy::{PollDecision, PollPolicy};
use super::report::Report;
use std::future::Future;

/// Runs `probe` until it stops the run or `policy.max_attempts()` calls have been made.
///
/// Attempts are strictly sequential: the next probe call (or the return) only
/// happens after the previous call's future resolved and was classified. The
/// policy's interval is slept only between a continuing attempt and the next
/// one. A probe future that never resolves stalls the run; wrap the probe in
/// a timeout if an attempt needs a deadline.
pub async fn start<S, P, E, F, Fut>(
    policy: &PollPolicy,
    mut probe: F,
) -> Result<PollOutcome<S, P>, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Report<S, P, E>>,
{
    let max_attempts = policy.max_attempts();
    let mut log = AttemptLog::new(max_attempts);
    loop {
        let report = probe().await;
        let disposition = classify(&report);
        let (stop, payload) = match report {
            Report::Continue(payload) => (None, payload),
            Report::Succeed { status, payload } => (Some(End::Succeeded(status)), payload),
            Report::Fail(error) => (Some(End::Failed(error)), None),
        };
        let attempt = log.record(disposition, payload);
        tracing::debug!(attempt, max_attempts, %disposition, "probe attempt finished");

        match policy.decide(attempt, disposition) {
            PollDecision::RetryAfter(delay) => tokio::time::sleep(delay).await,
            PollDecision::Stop(termination) => {
                tracing::info!(attempts_made = attempt, ?termination, "poll run stopped");
                return log.finish(stop.unwrap_or(End::Exhausted));
            }
        }
    }
}

/// Callback form of [`start`]: runs the poll loop on a spawned task and hands
/// the result to `on_done` exactly once.
///
/// Nothing is returned, so a started run cannot be cancelled. Must be called
/// from within a Tokio runtime.
pub fn spawn_start<S, P, E, F, Fut, D>(policy: PollPolicy, probe: F, on_done: D)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Report<S, P, E>> + Send + 'static,
    S: Send + 'static,
    P: Send + 'static,
    E: Send + 'static,
    D: FnOnce(Result<PollOutcome<S, P>, PollError<E>>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = start(&policy, probe).await;
        on_done(result);
    });
}
