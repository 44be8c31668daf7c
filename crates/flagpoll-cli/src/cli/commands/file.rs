//! `flagpoll file` – wait until a path exists.

use anyhow::{Context, Result};
use flagpoll_core::poll::{self, PollPolicy, Report};
use std::io;
use std::path::Path;

/// One attempt: present paths succeed with their size, missing paths continue,
/// and any other metadata error (e.g. permission denied) stops the run.
pub async fn check_path(path: &Path) -> Report<&'static str, u64, io::Error> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Report::succeed("present", meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Report::pending(),
        Err(e) => Report::fail(e),
    }
}

pub async fn run_file(path: &Path, policy: &PollPolicy) -> Result<()> {
    tracing::info!(
        path = %path.display(),
        interval_ms = policy.interval().as_millis() as u64,
        max_attempts = policy.max_attempts(),
        "waiting for path"
    );
    let out = poll::start(policy, || check_path(path))
        .await
        .with_context(|| format!("waiting for {}", path.display()))?;
    println!(
        "{} present ({} bytes) after {} attempt(s)",
        path.display(),
        out.result.unwrap_or(0),
        out.attempts_made
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagpoll_core::poll::PollError;
    use std::time::Duration;
    use tempfile::tempdir;

    #[tokio::test]
    async fn existing_file_succeeds_with_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ready.flag");
        std::fs::write(&path, b"12345").unwrap();
        match check_path(&path).await {
            Report::Succeed { status, payload } => {
                assert_eq!(status, "present");
                assert_eq!(payload, Some(5));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_file_continues() {
        let dir = tempdir().unwrap();
        let report = check_path(&dir.path().join("nope")).await;
        assert!(matches!(report, Report::Continue(None)));
    }

    #[tokio::test]
    async fn file_created_mid_run_is_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("late.flag");
        let writer_path = path.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            tokio::fs::write(&writer_path, b"ok").await.unwrap();
        });
        let policy = PollPolicy::new(Duration::from_millis(10), 200);
        let out = poll::start(&policy, || check_path(&path)).await.unwrap();
        assert_eq!(out.result, Some(2));
        assert!(out.attempts_made > 1);
    }

    #[tokio::test]
    async fn never_created_exhausts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never");
        let policy = PollPolicy::new(Duration::from_millis(1), 3);
        let err = poll::start(&policy, || check_path(&path)).await.unwrap_err();
        assert!(matches!(err, PollError::Exhausted { max_attempts: 3, attempts_made: 3 }));
    }
}
