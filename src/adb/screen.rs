//! Screen capture: write to a fixed remote path, then pull it back.

use std::path::Path;
use std::time::Duration;

use super::{default_timeout, device_args, files, run_adb};
use crate::exec::CommandOutput;

const REMOTE_SCREENSHOT: &str = "/sdcard/screenshot.png";
const REMOTE_RECORDING: &str = "/sdcard/screenrecord.mp4";

/// Capture the screen to `save_path` on the host.
///
/// A non-empty save path is required; the capture lands at a fixed path
/// on the device and is pulled from there.
pub async fn screenshot(save_path: &Path, serial: Option<&str>) -> CommandOutput {
    if save_path.as_os_str().is_empty() {
        return CommandOutput::failure("a local save path is required");
    }
    let args = device_args(serial, ["shell", "screencap", "-p", REMOTE_SCREENSHOT]);
    let capture = run_adb(&args, default_timeout()).await;
    if !capture.success {
        return capture;
    }
    files::pull(REMOTE_SCREENSHOT, save_path, serial).await
}

/// Record the screen for `duration` seconds.
///
/// With a save path the recording is pulled back to the host; without
/// one, the call succeeds and reports the path left on the device.
pub async fn record_screen(
    duration: u32,
    save_path: Option<&Path>,
    serial: Option<&str>,
) -> CommandOutput {
    let limit = duration.to_string();
    let args = device_args(
        serial,
        [
            "shell",
            "screenrecord",
            "--time-limit",
            limit.as_str(),
            REMOTE_RECORDING,
        ],
    );
    // The recording itself takes `duration` seconds; leave headroom for
    // encoder startup and flush.
    let record = run_adb(&args, Duration::from_secs(u64::from(duration) + 30)).await;
    if !record.success {
        return record;
    }
    match save_path {
        Some(path) => files::pull(REMOTE_RECORDING, path, serial).await,
        None => CommandOutput::note(format!(
            "Screen recording saved on device at {REMOTE_RECORDING}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn screenshot_requires_a_save_path() {
        let out = screenshot(Path::new(""), None).await;
        assert!(!out.success);
        assert!(out.stderr.contains("save path"));
    }
}
