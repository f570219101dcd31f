//! The single invocation primitive every facade operation goes through.
//!
//! One child process, one bounded wait, no retries. Failures never escape
//! as errors: a timeout, a missing binary, and a spawn failure all come
//! back as `success == false` with the reason in `stderr`.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use log::debug;
use serde::Serialize;
use tokio::process::Command;
use tokio::time;

pub(crate) const ADB_INSTALL_HINT: &str =
    "adb not found. Please install Android SDK platform-tools and make sure `adb` is on your PATH";

/// Outcome of one child-process invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    /// True when the child exited with code zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub(crate) fn failure(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub(crate) fn note(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Run `program` with `args` to completion, waiting at most `timeout`.
///
/// Stdout and stderr are captured, lossily decoded, and trimmed. On
/// timeout the child is killed rather than left running.
pub async fn run_tool(program: &str, args: &[String], timeout: Duration) -> CommandOutput {
    debug!("exec: {} {:?} (timeout {:?})", program, args, timeout);

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // When the timeout drops the output future, the child goes down
        // with it instead of lingering.
        .kill_on_drop(true);

    let child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let hint = if Path::new(program).file_stem().is_some_and(|s| s == "adb") {
                ADB_INSTALL_HINT.to_string()
            } else {
                format!("{program} not found on PATH")
            };
            return CommandOutput::failure(hint);
        }
        Err(e) => return CommandOutput::failure(e.to_string()),
    };

    match time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        },
        Ok(Err(e)) => CommandOutput::failure(e.to_string()),
        Err(_) => CommandOutput::failure(format!(
            "`{} {}` timed out after {}s",
            program,
            args.join(" "),
            timeout.as_secs()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let out = run_tool("sh", &sh("echo hello"), Duration::from_secs(5)).await;
        assert!(out.success);
        assert_eq!(out.stdout, "hello");
        assert_eq!(out.stderr, "");
    }

    #[tokio::test]
    async fn nonzero_exit_surfaces_stderr() {
        let out = run_tool("sh", &sh("echo oops >&2; exit 3"), Duration::from_secs(5)).await;
        assert!(!out.success);
        assert_eq!(out.stderr, "oops");
    }

    #[tokio::test]
    async fn timeout_is_a_failure_with_a_diagnostic_not_a_fault() {
        let out = run_tool("sh", &sh("sleep 5"), Duration::from_millis(200)).await;
        assert!(!out.success);
        assert!(out.stdout.is_empty());
        assert!(out.stderr.contains("timed out"));
    }

    #[tokio::test]
    async fn missing_binary_reports_not_found() {
        let out = run_tool(
            "definitely-not-a-real-binary-adbx",
            &[],
            Duration::from_secs(5),
        )
        .await;
        assert!(!out.success);
        assert!(out.stderr.contains("not found"));
    }

    #[tokio::test]
    async fn missing_adb_gets_installation_guidance() {
        let out = run_tool("/nonexistent/platform-tools/adb", &[], Duration::from_secs(5)).await;
        assert!(!out.success);
        assert_eq!(out.stderr, ADB_INSTALL_HINT);
    }
}
