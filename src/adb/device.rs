//! Device discovery and device-level lookups.

use std::collections::HashMap;

use log::debug;

use super::{default_timeout, device_args, run_adb};
use crate::error::{AdbError, Result};
use crate::exec::CommandOutput;
use crate::types::{DeviceEntry, DeviceState};

/// List connected devices via `adb devices -l`.
pub async fn list_devices() -> Result<Vec<DeviceEntry>> {
    let output = run_adb(&device_args(None, ["devices", "-l"]), default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_devices(&output.stdout))
}

/// Parse `adb devices -l` output.
///
/// Rows look like `<serial> <state> key:value ...`. The `List of devices`
/// header, `*` daemon chatter, blank lines, and rows with fewer than two
/// tokens are skipped.
pub(crate) fn parse_devices(stdout: &str) -> Vec<DeviceEntry> {
    let mut devices = Vec::new();
    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('*') || line.starts_with("List of devices") {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }
        let mut tags = HashMap::new();
        for part in &parts[2..] {
            if let Some((key, value)) = part.split_once(':') {
                tags.insert(key.to_string(), value.to_string());
            }
        }
        devices.push(DeviceEntry {
            serial: parts[0].to_string(),
            state: DeviceState::parse(parts[1]),
            tags,
        });
    }
    debug!("parsed {} device rows", devices.len());
    devices
}

/// Dump `getprop` into a map. Last-seen key wins on duplicates.
pub async fn get_properties(serial: Option<&str>) -> Result<HashMap<String, String>> {
    let output = run_adb(&device_args(serial, ["shell", "getprop"]), default_timeout()).await;
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    Ok(parse_properties(&output.stdout))
}

/// Parse `[key]: [value]` lines, stripping the bracket decoration.
/// Lines that do not match the shape are skipped.
pub(crate) fn parse_properties(stdout: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in stdout.lines() {
        let line = line.trim();
        if !line.starts_with('[') {
            continue;
        }
        let Some((key, value)) = line.split_once("]:") else {
            continue;
        };
        let key = key.trim_start_matches('[');
        let value = value.trim();
        let value = value
            .strip_prefix('[')
            .and_then(|v| v.strip_suffix(']'))
            .unwrap_or(value);
        props.insert(key.to_string(), value.to_string());
    }
    props
}

/// The `android_id` secure setting.
pub async fn android_id(serial: Option<&str>) -> Result<String> {
    let args = device_args(serial, ["shell", "settings", "get", "secure", "android_id"]);
    single_value(
        run_adb(&args, default_timeout()).await,
        "android_id",
        "settings get secure android_id",
    )
}

/// Physical screen size from `wm size`, e.g. `1080x2400`.
pub async fn screen_size(serial: Option<&str>) -> Result<String> {
    let output = run_adb(&device_args(serial, ["shell", "wm", "size"]), default_timeout()).await;
    marker_value(output, "size:", "wm size")
}

/// Screen density from `wm density`, e.g. `440`.
pub async fn screen_density(serial: Option<&str>) -> Result<String> {
    let output = run_adb(&device_args(serial, ["shell", "wm", "density"]), default_timeout()).await;
    marker_value(output, "density:", "wm density")
}

/// The first `inet` line for wlan0.
///
/// `ifconfig` is tried first; devices without it fall back to
/// `ip addr show`.
pub async fn ip_address(serial: Option<&str>) -> Result<String> {
    let mut output = run_adb(
        &device_args(serial, ["shell", "ifconfig", "wlan0"]),
        default_timeout(),
    )
    .await;
    if !output.success {
        output = run_adb(
            &device_args(serial, ["shell", "ip", "addr", "show", "wlan0"]),
            default_timeout(),
        )
        .await;
    }
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    output
        .stdout
        .lines()
        .find(|l| l.contains("inet "))
        .map(|l| l.trim().to_string())
        .ok_or_else(|| AdbError::MarkerNotFound {
            marker: "inet".to_string(),
            command: "ifconfig wlan0".to_string(),
        })
}

/// The wlan0 MAC address.
pub async fn mac_address(serial: Option<&str>) -> Result<String> {
    let args = device_args(serial, ["shell", "cat", "/sys/class/net/wlan0/address"]);
    single_value(
        run_adb(&args, default_timeout()).await,
        "mac address",
        "cat /sys/class/net/wlan0/address",
    )
}

/// Whole trimmed stdout as the value; empty output is a miss.
fn single_value(output: CommandOutput, what: &str, command: &str) -> Result<String> {
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    let value = output.stdout.trim();
    if value.is_empty() {
        return Err(AdbError::MarkerNotFound {
            marker: what.to_string(),
            command: command.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Value after the first `:` of the first line containing `marker`.
fn marker_value(output: CommandOutput, marker: &str, command: &str) -> Result<String> {
    if !output.success {
        return Err(AdbError::CommandFailed(output.stderr));
    }
    extract_after_colon(&output.stdout, marker).ok_or_else(|| AdbError::MarkerNotFound {
        marker: marker.to_string(),
        command: command.to_string(),
    })
}

pub(crate) fn extract_after_colon(stdout: &str, marker: &str) -> Option<String> {
    stdout
        .lines()
        .find(|l| l.contains(marker))
        .and_then(|l| l.split_once(':'))
        .map(|(_, v)| v.trim().to_string())
}
