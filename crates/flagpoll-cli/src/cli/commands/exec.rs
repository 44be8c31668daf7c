//! `flagpoll exec` – rerun a command until it exits 0.

use anyhow::{bail, Context, Result};
use flagpoll_core::poll::{self, PollPolicy, Report};
use std::io;
use std::process::Stdio;
use tokio::process::Command;

/// One attempt: run the command to completion.
///
/// Exit 0 succeeds with status `exit 0` and trimmed stdout. A non-zero exit
/// continues, still attaching stdout when there was any. Failing to spawn
/// the program stops the run.
pub async fn run_command(argv: &[String]) -> Report<String, String, io::Error> {
    let Some((program, args)) = argv.split_first() else {
        return Report::fail(io::Error::new(io::ErrorKind::InvalidInput, "empty command"));
    };
    let output = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => return Report::fail(e),
    };

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let payload = (!stdout.is_empty()).then_some(stdout);
    if output.status.success() {
        Report::Succeed {
            status: "exit 0".to_string(),
            payload,
        }
    } else {
        tracing::debug!(status = %output.status, "command not ready yet");
        Report::Continue(payload)
    }
}

pub async fn run_exec(argv: &[String], policy: &PollPolicy) -> Result<()> {
    if argv.is_empty() {
        bail!("no command given");
    }
    let shown = argv.join(" ");
    tracing::info!(
        command = %shown,
        interval_ms = policy.interval().as_millis() as u64,
        max_attempts = policy.max_attempts(),
        "polling command"
    );
    let out = poll::start(policy, || run_command(argv))
        .await
        .with_context(|| format!("running `{}`", shown))?;

    if let Some(stdout) = &out.result {
        println!("{}", stdout);
    }
    match &out.status {
        Some(status) => eprintln!("`{}` {} after {} attempt(s)", shown, status, out.attempts_made),
        None => eprintln!(
            "`{}` never exited 0 in {} attempt(s); showing first output",
            shown, out.attempts_made
        ),
    }
    Ok(())
}
