//! Bounded-interval poll scheduler.
//!
//! A probe is called repeatedly at a fixed interval until it reports success,
//! reports a fatal error, or `max_attempts` calls have been made. Each call's
//! report is classified (continue / error / success), recorded in a per-run
//! attempt log, and the log is folded into a single outcome when the run ends.
//!
//! A run that exhausts its attempts still succeeds if any attempt attached a
//! payload while continuing; the first such payload becomes the result.

mod callback;
mod classify;
mod error;
mod log;
mod policy;
mod report;
mod run;

pub use callback::{callback_probe, Completion, PendingReport};
pub use classify::{classify, Disposition};
pub use error::PollError;
pub use log::{Attempt, AttemptLog, End, PollOutcome};
pub use policy::{PollDecision, PollPolicy, Termination};
pub use report::{Report, Scalar, Signal};
pub use run::{spawn_start, start};
