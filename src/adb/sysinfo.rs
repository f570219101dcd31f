//! Battery, memory, and storage tables.

use std::collections::HashMap;

use super::{default_timeout, device_args, run_adb};
use crate::error::{AdbError, Result};
use crate::types::StorageEntry;

/// Battery status from `dumpsys battery` as a key/value map.
pub async fn battery_info(serial: Option<&str>) -> Result<HashMap<String, String>> {
    let args = device_args(serial, ["shell", "dumpsys", "battery"]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_battery(&output.stdout))
}

/// `key: value` per line, split on the first colon. The
/// `Current Battery Service state` banner is not a pair and is skipped.
pub(crate) fn parse_battery(stdout: &str) -> HashMap<String, String> {
    let mut info = HashMap::new();
    for line in stdout.lines() {
        let line = line.trim();
        if line.starts_with("Current Battery Service state") {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            info.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    info
}

/// `/proc/meminfo` as a key/value map (values keep their `kB` suffix).
pub async fn memory_info(serial: Option<&str>) -> Result<HashMap<String, String>> {
    let args = device_args(serial, ["shell", "cat", "/proc/meminfo"]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_meminfo(&output.stdout))
}

pub(crate) fn parse_meminfo(stdout: &str) -> HashMap<String, String> {
    let mut info = HashMap::new();
    for line in stdout.lines() {
        if let Some((key, value)) = line.split_once(':') {
            info.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    info
}

/// Filesystem usage from `df -h`.
pub async fn storage_info(serial: Option<&str>) -> Result<Vec<StorageEntry>> {
    let args = device_args(serial, ["shell", "df", "-h"]);
    let output = run_adb(&args, default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_storage(&output.stdout))
}

/// Skip the header line; rows need at least six tokens, and mount points
/// with spaces are joined back together.
pub(crate) fn parse_storage(stdout: &str) -> Vec<StorageEntry> {
    let mut entries = Vec::new();
    for line in stdout.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 6 {
            continue;
        }
        entries.push(StorageEntry {
            filesystem: parts[0].to_string(),
            size: parts[1].to_string(),
            used: parts[2].to_string(),
            available: parts[3].to_string(),
            use_percent: parts[4].to_string(),
            mounted_on: parts[5..].join(" "),
        });
    }
    entries
}
