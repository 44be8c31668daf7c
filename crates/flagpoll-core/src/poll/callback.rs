//! Adapter for probes written in completion-callback style.
//!
//! The probe receives a [`Completion`] handle and reports through it, from the
//! same task or from anywhere else (a thread, another task, an I/O callback).
//! The handle is consumed on use, so a probe can report at most once per call.

use super::report::{Report, Scalar, Signal};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// One-shot handle a callback probe uses to report an attempt.
#[derive(Debug)]
pub struct Completion<S, P, E> {
    tx: oneshot::Sender<Report<S, P, E>>,
}

impl<S, P, E> Completion<S, P, E> {
    pub fn complete(self, report: Report<S, P, E>) {
        // The receiver only goes away with the poll run itself.
        let _ = self.tx.send(report);
    }
}

impl<P, E> Completion<Scalar, P, E> {
    /// Report a loose `(signal, payload)` pair; see [`Report::from_signal`].
    pub fn signal(self, signal: Signal<E>, payload: Option<P>) {
        self.complete(Report::from_signal(signal, payload));
    }
}

/// Future for one callback-probe attempt; resolves when the probe completes.
///
/// If the probe drops its [`Completion`] without reporting, a warning is
/// logged and the future never resolves, same as a probe that forgets to call back.
#[derive(Debug)]
pub struct PendingReport<S, P, E> {
    rx: Option<oneshot::Receiver<Report<S, P, E>>>,
}

impl<S, P, E> Future for PendingReport<S, P, E> {
    type Output = Report<S, P, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let Some(rx) = this.rx.as_mut() else {
            return Poll::Pending;
        };
        match Pin::new(rx).poll(cx) {
            Poll::Ready(Ok(report)) => Poll::Ready(report),
            Poll::Ready(Err(_)) => {
                tracing::warn!("probe dropped its completion without reporting; poll run is stalled");
                this.rx = None;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Wrap a completion-callback probe so it can be passed to [`super::start`].
pub fn callback_probe<S, P, E, F>(mut f: F) -> impl FnMut() -> PendingReport<S, P, E>
where
    F: FnMut(Completion<S, P, E>),
{
    move || {
        let (tx, rx) = oneshot::channel();
        f(Completion { tx });
        PendingReport { rx: Some(rx) }
    }
}
