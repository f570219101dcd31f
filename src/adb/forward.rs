//! Port forwarding in both directions.
//!
//! Forwarding state lives in the adb server session, not here; adding the
//! same forward twice is adb's business.

use super::{default_timeout, device_args, run_adb};
use crate::error::{AdbError, Result};
use crate::exec::CommandOutput;
use crate::types::ForwardEntry;

/// Forward a host port to a device port.
pub async fn forward(local_port: u16, remote_port: u16, serial: Option<&str>) -> CommandOutput {
    let local = format!("tcp:{local_port}");
    let remote = format!("tcp:{remote_port}");
    run_adb(
        &device_args(serial, ["forward", local.as_str(), remote.as_str()]),
        default_timeout(),
    )
    .await
}

pub async fn forward_remove(local_port: u16, serial: Option<&str>) -> CommandOutput {
    let local = format!("tcp:{local_port}");
    run_adb(
        &device_args(serial, ["forward", "--remove", local.as_str()]),
        default_timeout(),
    )
    .await
}

pub async fn forward_list(serial: Option<&str>) -> Result<Vec<ForwardEntry>> {
    let output = run_adb(&device_args(serial, ["forward", "--list"]), default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_forward_list(&output.stdout))
}

/// Forward a device port back to a host port.
pub async fn reverse(remote_port: u16, local_port: u16, serial: Option<&str>) -> CommandOutput {
    let remote = format!("tcp:{remote_port}");
    let local = format!("tcp:{local_port}");
    run_adb(
        &device_args(serial, ["reverse", remote.as_str(), local.as_str()]),
        default_timeout(),
    )
    .await
}

pub async fn reverse_remove(remote_port: u16, serial: Option<&str>) -> CommandOutput {
    let remote = format!("tcp:{remote_port}");
    run_adb(
        &device_args(serial, ["reverse", "--remove", remote.as_str()]),
        default_timeout(),
    )
    .await
}

pub async fn reverse_list(serial: Option<&str>) -> Result<Vec<ForwardEntry>> {
    let output = run_adb(&device_args(serial, ["reverse", "--list"]), default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_forward_list(&output.stdout))
}

/// Rows are `<serial> <local> <remote>`; anything shorter is dropped.
pub(crate) fn parse_forward_list(stdout: &str) -> Vec<ForwardEntry> {
    stdout
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                return None;
            }
            Some(ForwardEntry {
                serial: parts[0].to_string(),
                local: parts[1].to_string(),
                remote: parts[2].to_string(),
            })
        })
        .collect()
}
