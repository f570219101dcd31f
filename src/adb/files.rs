//! File transfer and remote directory listings.

use std::path::Path;

use super::{default_timeout, device_args, run_adb, TRANSFER_TIMEOUT};
use crate::error::{AdbError, Result};
use crate::exec::CommandOutput;
use crate::types::FileEntry;

pub async fn push(local: &Path, remote: &str, serial: Option<&str>) -> CommandOutput {
    let local = local.to_string_lossy();
    run_adb(
        &device_args(serial, ["push", local.as_ref(), remote]),
        TRANSFER_TIMEOUT,
    )
    .await
}

pub async fn pull(remote: &str, local: &Path, serial: Option<&str>) -> CommandOutput {
    let local = local.to_string_lossy();
    run_adb(
        &device_args(serial, ["pull", remote, local.as_ref()]),
        TRANSFER_TIMEOUT,
    )
    .await
}

/// List a remote directory via `ls -la`.
pub async fn list_files(remote_path: &str, serial: Option<&str>) -> Result<Vec<FileEntry>> {
    let args = device_args(serial, ["shell", "ls", "-la", remote_path]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_listing(&output.stdout))
}

/// Parse `ls -la` rows.
///
/// Toybox prints ISO dates (`2024-01-01 00:00`, two tokens); GNU ls prints
/// month names (`Jan 1 00:00`, three). The date width is keyed on whether
/// the first date token contains `-`. The `total` header, blank lines, and
/// rows that are too short to carry a name are dropped.
pub(crate) fn parse_listing(stdout: &str) -> Vec<FileEntry> {
    let mut entries = Vec::new();
    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("total") {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 8 {
            continue;
        }
        let date_width = if parts[5].contains('-') { 2 } else { 3 };
        let name_start = 5 + date_width;
        if parts.len() <= name_start {
            continue;
        }
        entries.push(FileEntry {
            permissions: parts[0].to_string(),
            links: parts[1].to_string(),
            owner: parts[2].to_string(),
            group: parts[3].to_string(),
            size: parts[4].to_string(),
            date: parts[5..name_start].join(" "),
            name: parts[name_start..].join(" "),
        });
    }
    entries
}
