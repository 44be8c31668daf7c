//! End-to-end poll runs: callback-style probes, loose signals, and concurrent runs.
//!
//! Each probe owns its own attempt counter; nothing is shared between runs.

use flagpoll_core::poll::{
    callback_probe, spawn_start, start, Completion, PollError, PollOutcome, PollPolicy, Report,
    Scalar, Signal,
};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

const INTERVAL: Duration = Duration::from_millis(10);
const MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
struct Count {
    count: u32,
    other_stuff: &'static str,
}

#[derive(Debug, PartialEq)]
struct Bombed(&'static str);

impl fmt::Display for Bombed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Bombed {}

fn policy() -> PollPolicy {
    PollPolicy::new(INTERVAL, MAX_ATTEMPTS)
}

#[tokio::test(start_paused = true)]
async fn successful_after_max_attempts() {
    let probe = callback_probe(|done: Completion<Scalar, &str, Bombed>| {
        done.signal(Signal::Absent, Some("hello"));
    });
    let out = start(&policy(), probe).await.unwrap();
    assert_eq!(out.status, None);
    assert_eq!(out.result, Some("hello"));
    assert_eq!(out.attempts_made, MAX_ATTEMPTS);
}

#[tokio::test(start_paused = true)]
async fn fails_after_max_attempts() {
    let probe = callback_probe(|done: Completion<Scalar, (), Bombed>| {
        done.signal(Signal::Absent, None);
    });
    let err = start(&policy(), probe).await.unwrap_err();
    assert_eq!(err.to_string(), "max retries of 10 reached");
    assert_eq!(err.attempts_made(), MAX_ATTEMPTS);
}

#[tokio::test(start_paused = true)]
async fn succeeds_after_five_attempts() {
    let mut tries = 0u32;
    let probe = callback_probe(move |done: Completion<Scalar, Count, Bombed>| {
        tries += 1;
        if tries == 5 {
            done.signal(
                Signal::scalar("Success"),
                Some(Count {
                    count: tries,
                    other_stuff: "otherStuff",
                }),
            );
        } else {
            done.signal(Signal::Absent, None);
        }
    });
    let out = start(&policy(), probe).await.unwrap();
    assert_eq!(out.status, Some(Scalar::from("Success")));
    assert_eq!(out.attempts_made, 5);
    let result = out.result.unwrap();
    assert_eq!(result.count, 5);
    assert_eq!(result.other_stuff, "otherStuff");
}

#[tokio::test(start_paused = true)]
async fn fails_after_seven_attempts_on_error() {
    let mut tries = 0u32;
    let probe = callback_probe(move |done: Completion<Scalar, (), Bombed>| {
        tries += 1;
        if tries == 7 {
            done.signal(Signal::Error(Bombed("Polling Bombed!")), None);
        } else {
            done.signal(Signal::Absent, None);
        }
    });
    let err = start(&policy(), probe).await.unwrap_err();
    assert_eq!(err.attempts_made(), 7);
    match err {
        PollError::Probe { error, .. } => assert_eq!(error.to_string(), "Polling Bombed!"),
        other => panic!("expected probe error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn probe_never_called_after_stopping_attempt() {
    let calls = Arc::new(AtomicU32::new(0));
    let probe_calls = Arc::clone(&calls);
    let out = start(&policy(), move || {
        let n = probe_calls.fetch_add(1, Ordering::SeqCst) + 1;
        std::future::ready(if n == 3 {
            Report::<_, _, Bombed>::succeed("up", n)
        } else {
            Report::pending()
        })
    })
    .await
    .unwrap();
    // Give any stray work a chance to run before counting.
    tokio::time::sleep(INTERVAL * 20).await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(out.attempts_made, 3);
}

#[tokio::test(start_paused = true)]
async fn every_max_attempts_is_honored() {
    for n in 1..=6 {
        let p = PollPolicy::new(INTERVAL, n);
        let err = start(&p, || std::future::ready(Report::<(), (), Bombed>::pending()))
            .await
            .unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(err.attempts_made(), n);

        let out = start(&p, || std::future::ready(Report::<(), _, Bombed>::continue_with("P")))
            .await
            .unwrap();
        assert_eq!(out.attempts_made, n);
        assert_eq!(out.result, Some("P"));
    }
}

type Done = Result<PollOutcome<&'static str, u32>, PollError<Bombed>>;

fn counting_run(stop_at: u32, calls: Arc<AtomicU32>) -> oneshot::Receiver<Done> {
    let (tx, rx) = oneshot::channel();
    spawn_start(
        policy(),
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == stop_at {
                    Report::<_, _, Bombed>::succeed("done", n)
                } else {
                    Report::pending()
                }
            }
        },
        move |result| {
            let _ = tx.send(result);
        },
    );
    rx
}

#[tokio::test(start_paused = true)]
async fn concurrent_runs_are_independent() {
    let a_calls = Arc::new(AtomicU32::new(0));
    let b_calls = Arc::new(AtomicU32::new(0));
    let a = counting_run(2, Arc::clone(&a_calls));
    let b = counting_run(8, Arc::clone(&b_calls));

    let (a, b) = tokio::join!(a, b);
    let a = a.unwrap().unwrap();
    let b = b.unwrap().unwrap();

    assert_eq!(a.attempts_made, 2);
    assert_eq!(a.result, Some(2));
    assert_eq!(b.attempts_made, 8);
    assert_eq!(b.result, Some(8));
    assert_eq!(a_calls.load(Ordering::SeqCst), 2);
    assert_eq!(b_calls.load(Ordering::SeqCst), 8);
}
