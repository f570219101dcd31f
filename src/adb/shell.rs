//! Raw shell passthrough.

use std::time::Duration;

use super::{device_args, run_adb};
use crate::exec::CommandOutput;

/// Run a shell command string on the device.
///
/// The string goes through as a single argument; the device-side shell
/// does its own word splitting.
pub async fn shell(command: &str, serial: Option<&str>, timeout: Duration) -> CommandOutput {
    run_adb(&device_args(serial, ["shell", command]), timeout).await
}

/// Run a shell command through `su -c`.
pub async fn shell_root(
    command: &str,
    su_binary: &str,
    serial: Option<&str>,
    timeout: Duration,
) -> CommandOutput {
    let wrapped = format!("{su_binary} -c \"{command}\"");
    run_adb(&device_args(serial, ["shell", wrapped.as_str()]), timeout).await
}
